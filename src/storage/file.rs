use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::{Persistence, SaveError};
use crate::domain::{Post, seed_posts};

/// A single JSON file holding every post.
///
/// The file lives at `<root>/<key>.json`. It contains a versioned envelope:
///
/// ```json
/// { "_version": "1", "posts": [ ... ] }
/// ```
///
/// A bare array of posts (the unversioned layout) is also accepted on load.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed posts in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    #[serde(rename = "_version")]
    version: &'static str,
    posts: &'a [Post],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 { posts: Vec<Post> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Stored {
    Versioned(Versions),
    Bare(Vec<Post>),
}

impl From<Stored> for Vec<Post> {
    fn from(stored: Stored) -> Self {
        match stored {
            Stored::Versioned(Versions::V1 { posts }) | Stored::Bare(posts) => posts,
        }
    }
}

impl FileStore {
    /// A store using the slot `key` within the directory `root`.
    #[must_use]
    pub fn new(root: &Path, key: &str) -> Self {
        Self {
            path: root.join(format!("{key}.json")),
        }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored posts, distinguishing "absent" from "malformed".
    fn try_load(&self) -> Result<Option<Vec<Post>>, LoadError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(LoadError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let stored: Stored = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(stored.into()))
    }
}

impl Persistence for FileStore {
    fn load(&self) -> Vec<Post> {
        match self.try_load() {
            Ok(Some(posts)) => {
                tracing::debug!("Loaded {} posts from {}", posts.len(), self.path.display());
                posts
            }
            Ok(None) => {
                tracing::debug!("No posts at {}, using seed posts", self.path.display());
                seed_posts()
            }
            Err(e) => {
                tracing::warn!("{e}; using seed posts");
                seed_posts()
            }
        }
    }

    fn save(&mut self, posts: &[Post]) -> Result<(), SaveError> {
        let envelope = Envelope {
            version: "1",
            posts,
        };
        let content = serde_json::to_string_pretty(&envelope)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;

        tracing::debug!("Saved {} posts to {}", posts.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use non_empty_string::NonEmptyString;

    use super::*;
    use crate::domain::PostId;

    fn store() -> (tempfile::TempDir, FileStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path(), "journal.posts.v1");
        (tmp, store)
    }

    fn post(id: &str) -> Post {
        Post {
            id: PostId::from(id),
            title: NonEmptyString::new("Title".to_string()).unwrap(),
            date: "2026-03-01".to_string(),
            tags: vec!["a".to_string()],
            summary: String::new(),
            content: NonEmptyString::new("Body".to_string()).unwrap(),
        }
    }

    #[test]
    fn path_uses_key() {
        let (tmp, store) = store();
        assert_eq!(store.path(), tmp.path().join("journal.posts.v1.json"));
    }

    #[test]
    fn absent_slot_loads_seed() {
        let (_tmp, store) = store();
        assert_eq!(store.load(), seed_posts());
    }

    #[test]
    fn unparsable_slot_loads_seed() {
        let (_tmp, store) = store();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), seed_posts());
    }

    #[test]
    fn non_array_slot_loads_seed() {
        let (_tmp, store) = store();
        fs::write(store.path(), r#"{"title": "lonely"}"#).unwrap();
        assert_eq!(store.load(), seed_posts());

        fs::write(store.path(), "42").unwrap();
        assert_eq!(store.load(), seed_posts());
    }

    #[test]
    fn post_with_empty_title_is_malformed() {
        let (_tmp, store) = store();
        fs::write(
            store.path(),
            r#"[{"id":"a","title":"","date":"2026-01-01","tags":[],"summary":"","content":"c"}]"#,
        )
        .unwrap();
        assert_eq!(store.load(), seed_posts());
    }

    #[test]
    fn saved_posts_load_back() {
        let (_tmp, mut store) = store();
        let posts = vec![post("a"), post("b")];
        store.save(&posts).unwrap();
        assert_eq!(store.load(), posts);
    }

    #[test]
    fn saved_empty_collection_stays_empty() {
        let (_tmp, mut store) = store();
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_writes_versioned_envelope() {
        let (_tmp, mut store) = store();
        store.save(&[post("a")]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["_version"], "1");
        assert_eq!(raw["posts"][0]["id"], "a");
    }

    #[test]
    fn bare_array_is_accepted() {
        let (_tmp, store) = store();
        let raw = serde_json::to_string(&vec![post("legacy")]).unwrap();
        fs::write(store.path(), raw).unwrap();
        assert_eq!(store.load(), vec![post("legacy")]);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (_tmp, mut store) = store();
        store.save(&[post("a"), post("b")]).unwrap();
        store.save(&[post("c")]).unwrap();
        assert_eq!(store.load(), vec![post("c")]);
    }

    #[test]
    fn save_creates_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(&tmp.path().join("nested"), "k");
        store.save(&[post("a")]).unwrap();
        assert_eq!(store.load(), vec![post("a")]);
    }
}
