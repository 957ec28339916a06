//! Domain models for the journal.
//!
//! This module contains the post and draft types, the derived feed, the seed
//! set, and configuration. Nothing here touches the filesystem except
//! [`Config`] loading.

mod config;
pub use config::Config;

/// Drafts: in-progress posts and their validation.
pub mod draft;
pub use draft::{Draft, Field, Invalid, today};

mod feed;
pub use feed::feed;

/// Posts and their identifiers.
pub mod post;
pub use post::{IdScheme, Post, PostId, parse_tags};

mod seed;
pub use seed::seed_posts;
