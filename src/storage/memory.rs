use super::{Persistence, SaveError};
use crate::domain::{Post, seed_posts};

/// Keeps the post collection in memory.
///
/// Useful for tests and for embedding the journal without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    posts: Option<Vec<Post>>,
    saves: usize,
}

impl MemoryStore {
    /// A store holding `posts`, as if they had been saved earlier.
    #[must_use]
    pub const fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Some(posts),
            saves: 0,
        }
    }

    /// The most recently saved collection, if any.
    #[must_use]
    pub fn stored(&self) -> Option<&[Post]> {
        self.posts.as_deref()
    }

    /// How many times [`Persistence::save`] has been called.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> Vec<Post> {
        self.posts.clone().unwrap_or_else(seed_posts)
    }

    fn save(&mut self, posts: &[Post]) -> Result<(), SaveError> {
        self.posts = Some(posts.to_vec());
        self.saves += 1;
        Ok(())
    }
}
