//! Store and cache ports

mod stores;

pub use stores::{MessageCache, MessageStore, RepoResult};
