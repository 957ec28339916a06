//! Plain-text Journal
//!
//! Dated, tagged journal entries kept in a single JSON file, with a draft
//! editor and a searchable feed.

pub mod domain;
pub use domain::{Config, Draft, Field, IdScheme, Invalid, Post, PostId};

/// The journal application state.
pub mod journal;
pub use journal::{Confirm, Journal, Submission};

/// Persistence backends for posts.
pub mod storage;
pub use storage::{FileStore, MemoryStore, Persistence, SaveError};
