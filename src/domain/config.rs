use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::IdScheme;

/// Configuration for a journal.
///
/// Controls where posts are stored and how new posts are identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The name of the storage slot holding the posts.
    ///
    /// Posts are stored in `<root>/<storage_key>.json`. The key carries a
    /// version suffix, so an incompatible layout can move to a new key
    /// without clobbering old data.
    storage_key: String,

    /// How identifiers for new posts are generated.
    pub id_scheme: IdScheme,

    /// Whether to colour terminal output (when the terminal supports it).
    pub colour: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            id_scheme: IdScheme::default(),
            colour: true,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration from `<root>/config.toml`, falling back to the
    /// defaults if it is missing or invalid.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join(Self::FILE_NAME);
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The file name of the configuration within a journal root.
    pub const FILE_NAME: &'static str = "config.toml";

    /// Returns the storage slot name.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Sets the storage slot name.
    ///
    /// Returns `false` (and leaves the key unchanged) if the key is blank or
    /// contains a path separator.
    pub fn set_storage_key(&mut self, key: &str) -> bool {
        let key = key.trim();
        if key.is_empty() || key.contains(['/', '\\']) {
            return false;
        }
        key.clone_into(&mut self.storage_key);
        true
    }
}

fn default_storage_key() -> String {
    "journal.posts.v1".to_string()
}

const fn default_colour() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_storage_key")]
        storage_key: String,

        #[serde(default)]
        id_scheme: IdScheme,

        #[serde(default = "default_colour")]
        colour: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                storage_key,
                id_scheme,
                colour,
            } => Self {
                storage_key,
                id_scheme,
                colour,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            storage_key: config.storage_key,
            id_scheme: config.id_scheme,
            colour: config.colour,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nstorage_key = \"diary.v2\"\nid_scheme = \"timestamp\"\ncolour = false\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.storage_key(), "diary.v2");
        assert_eq!(config.id_scheme, IdScheme::Timestamp);
        assert!(!config.colour);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nid_scheme = \"sequential\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_or_default(tmp.path()), Config::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(Config::FILE_NAME);

        let mut config = Config::default();
        config.id_scheme = IdScheme::Timestamp;
        assert!(config.set_storage_key("notes.v3"));
        config.save(&path).unwrap();

        assert_eq!(Config::load_or_default(tmp.path()), config);
    }

    #[test]
    fn storage_key_rejects_paths_and_blanks() {
        let mut config = Config::default();
        assert!(!config.set_storage_key("  "));
        assert!(!config.set_storage_key("../escape"));
        assert_eq!(config.storage_key(), "journal.posts.v1");
    }
}
