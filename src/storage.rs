//! Persistence for the post collection.
//!
//! The [`Persistence`] trait is the seam between the in-memory journal and
//! wherever posts are kept. [`FileStore`] keeps them in a single JSON file;
//! [`MemoryStore`] keeps them in memory.

use std::io;

use crate::domain::Post;

mod file;
pub use file::FileStore;

mod memory;
pub use memory::MemoryStore;

/// Loads and saves the complete post collection.
pub trait Persistence {
    /// Load every stored post.
    ///
    /// This never fails. Missing or malformed state is replaced by the
    /// [seed set](crate::domain::seed_posts).
    fn load(&self) -> Vec<Post>;

    /// Overwrite the stored collection with `posts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or written.
    fn save(&mut self, posts: &[Post]) -> Result<(), SaveError>;
}

/// The post collection could not be written.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The posts could not be encoded.
    #[error("failed to encode posts: {0}")]
    Encode(#[from] serde_json::Error),

    /// The storage slot could not be written.
    #[error("failed to write posts: {0}")]
    Io(#[from] io::Error),
}
