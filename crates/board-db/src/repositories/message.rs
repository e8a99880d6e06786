//! PostgreSQL implementation of the MessageStore port

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use board_core::{Message, MessageDraft, MessageStore, NewReaction, Reaction, RepoResult};

use crate::models::{MessageModel, ReactionModel};

use super::error::{map_db_error, map_fk_violation, message_not_found};

/// PostgreSQL implementation of the MessageStore port
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    /// Create a new PgMessageStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    #[instrument(skip(self))]
    async fn list_messages(&self, offset: i64, limit: i64) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, message_text, user_id, reaction_score, list_of_reactions, created_at
            FROM messages
            ORDER BY created_at DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset.max(0))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Message::try_from).collect()
    }

    #[instrument(skip(self, draft), fields(user_id = %draft.user_id))]
    async fn insert_message(&self, draft: &MessageDraft) -> RepoResult<Message> {
        let model = sqlx::query_as::<_, MessageModel>(
            r#"
            INSERT INTO messages (message_text, user_id, reaction_score, list_of_reactions)
            VALUES ($1, $2, 0, '{}')
            RETURNING id, message_text, user_id, reaction_score, list_of_reactions, created_at
            "#,
        )
        .bind(&draft.text)
        .bind(&draft.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Message::try_from(model)
    }

    /// Persist the reaction and fold it into the message aggregate in one
    /// transaction.
    ///
    /// The message row is read `FOR UPDATE` so concurrent reactions to the
    /// same message serialize on the row lock; each committed transaction
    /// sees the previous one's list and score. Any failure rolls the whole
    /// transaction back (the sqlx transaction rolls back on drop), so no
    /// orphan reaction row or stale score is ever observable.
    #[instrument(skip(self, draft), fields(message_id = %draft.message_id))]
    async fn insert_reaction_and_update_message(
        &self,
        draft: &NewReaction,
    ) -> RepoResult<Reaction> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let reaction = sqlx::query_as::<_, ReactionModel>(
            r#"
            INSERT INTO reactions (message_id, user_id, reaction_type, reaction_score)
            VALUES ($1, $2, $3, $4)
            RETURNING id, message_id, user_id, reaction_type, reaction_score, created_at
            "#,
        )
        .bind(draft.message_id)
        .bind(&draft.user_id)
        .bind(draft.reaction_type.as_str())
        .bind(draft.reaction_score)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, || message_not_found(draft.message_id)))?;

        let message = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, message_text, user_id, reaction_score, list_of_reactions, created_at
            FROM messages
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(draft.message_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| message_not_found(draft.message_id))?;

        // The aggregate always moves by exactly 1 per accepted reaction,
        // independent of the requested score persisted on the reaction row.
        let mut list_of_reactions = message.list_of_reactions;
        list_of_reactions.push(draft.reaction_type.as_str().to_string());
        let reaction_score = message.reaction_score + 1;

        sqlx::query(
            r#"
            UPDATE messages
            SET list_of_reactions = $2, reaction_score = $3
            WHERE id = $1
            "#,
        )
        .bind(message.id)
        .bind(&list_of_reactions)
        .bind(reaction_score)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Reaction::try_from(reaction)
    }

    #[instrument(skip(self))]
    async fn find_message(&self, id: Uuid) -> RepoResult<()> {
        let found = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM messages WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        found.map(|_| ()).ok_or_else(|| message_not_found(id))
    }
}
