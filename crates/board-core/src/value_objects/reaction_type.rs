//! Reaction type - the closed set of reactions a message can receive

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The set of reaction kinds accepted by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactionType {
    Like,
    Love,
    Wow,
    Angry,
}

impl ReactionType {
    /// All known reaction types, in display order
    pub const ALL: [Self; 4] = [Self::Like, Self::Love, Self::Wow, Self::Angry];

    /// Canonical string form, as persisted in the store
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Love => "Love",
            Self::Wow => "Wow",
            Self::Angry => "Angry",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = ReactionTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Like" => Ok(Self::Like),
            "Love" => Ok(Self::Love),
            "Wow" => Ok(Self::Wow),
            "Angry" => Ok(Self::Angry),
            other => Err(ReactionTypeParseError::Unknown(other.to_string())),
        }
    }
}

/// Error when parsing a ReactionType from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReactionTypeParseError {
    #[error("unknown reaction type: {0}")]
    Unknown(String),
}
