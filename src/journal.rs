//! The application state: the post collection plus the draft being composed.

use std::path::Path;

use crate::{
    domain::{Config, Draft, Field, IdScheme, Invalid, Post, PostId, feed, seed_posts, today},
    storage::{FileStore, Persistence, SaveError},
};

/// The question asked before [`Journal::reset`] discards every post.
pub const RESET_PROMPT: &str = "Replace every post with the example posts? This cannot be undone.";

/// A blocking yes/no question put to the user.
pub trait Confirm {
    /// Ask `prompt`, returning `true` only if the user agrees.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// The outcome of [`Journal::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A post was created with this id.
    Created(PostId),
    /// Nothing was created.
    Rejected(Invalid),
}

/// A journal: posts kept in sync with a [`Persistence`] backend, plus one
/// draft.
///
/// Every operation that changes the collection saves it before returning.
#[derive(Debug)]
pub struct Journal<P> {
    posts: Vec<Post>,
    draft: Draft,
    store: P,
    id_scheme: IdScheme,
}

impl Journal<FileStore> {
    /// Open the journal stored in `root`, as described by `config`.
    #[must_use]
    pub fn open_dir(root: &Path, config: &Config) -> Self {
        Self::open(FileStore::new(root, config.storage_key()), config.id_scheme)
    }
}

impl<P: Persistence> Journal<P> {
    /// Load the collection from `store` and start with an empty draft.
    #[must_use]
    pub fn open(store: P, id_scheme: IdScheme) -> Self {
        let posts = store.load();
        tracing::debug!("Opened journal with {} posts", posts.len());
        Self {
            posts,
            draft: Draft::cleared(),
            store,
            id_scheme,
        }
    }

    /// Every post, in collection order (newest additions first).
    ///
    /// Use [`Journal::feed`] for display order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id.
    #[must_use]
    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    /// The posts to display for `query`, newest first.
    #[must_use]
    pub fn feed(&self, query: &str) -> Vec<&Post> {
        feed(&self.posts, query)
    }

    /// The draft being composed.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The persistence backend.
    #[must_use]
    pub const fn store(&self) -> &P {
        &self.store
    }

    /// Put `post` at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved. The post is still
    /// added in memory.
    pub fn add(&mut self, post: Post) -> Result<(), SaveError> {
        tracing::debug!("Adding post {}", post.id);
        self.posts.insert(0, post);
        self.save()
    }

    /// Delete the post with `id`.
    ///
    /// Returns `false` without saving if there is no such post.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved.
    pub fn remove(&mut self, id: &PostId) -> Result<bool, SaveError> {
        let before = self.posts.len();
        self.posts.retain(|post| &post.id != id);
        if self.posts.len() == before {
            tracing::debug!("No post {id} to remove");
            return Ok(false);
        }
        tracing::debug!("Removed post {id}");
        self.save()?;
        Ok(true)
    }

    /// Replace the whole collection with the seed posts.
    ///
    /// `confirm` is asked [`RESET_PROMPT`] first. If it declines, nothing
    /// changes and nothing is saved. Returns whether the reset happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved.
    pub fn reset(&mut self, confirm: &mut impl Confirm) -> Result<bool, SaveError> {
        if !confirm.confirm(RESET_PROMPT) {
            tracing::info!("Reset declined");
            return Ok(false);
        }
        tracing::info!("Resetting journal to seed posts");
        self.posts = seed_posts();
        self.save()?;
        Ok(true)
    }

    /// Update one field of the draft.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Turn the draft into a post.
    ///
    /// If the draft is missing a title or content, nothing changes and the
    /// reason is returned. Otherwise the new post is [added](Journal::add)
    /// and the draft is emptied, keeping the date just used.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved.
    pub fn submit(&mut self) -> Result<Submission, SaveError> {
        let post = match self
            .draft
            .to_post(PostId::generate(self.id_scheme), &today())
        {
            Ok(post) => post,
            Err(reason) => {
                tracing::debug!("Draft rejected: {reason}");
                return Ok(Submission::Rejected(reason));
            }
        };

        let id = post.id.clone();
        self.draft = Draft::with_date(post.date.clone());
        self.add(post)?;
        Ok(Submission::Created(id))
    }

    /// Discard the draft, leaving an empty one dated today.
    pub fn clear(&mut self) {
        self.draft = Draft::cleared();
    }

    fn save(&mut self) -> Result<(), SaveError> {
        self.store.save(&self.posts)
    }
}
