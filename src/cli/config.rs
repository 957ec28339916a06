use std::path::Path;

use journal::{Config, IdScheme};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or modify journal configuration
///
/// Configuration is stored in config.toml in the journal directory.
///
/// Available configuration keys:
///   `storage_key`  Name of the file entries are stored in (default:
/// journal.posts.v1)
///   `id_scheme`    How new entry ids are generated: uuid or timestamp
///   colour         Colour terminal output (default: true)
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key to retrieve
        key: String,
    },

    /// Set a configuration value
    ///
    /// Examples:
    ///   jlog config set `id_scheme` timestamp
    ///   jlog config set colour false
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(Config::FILE_NAME);
        let config = if config_path.exists() {
            Config::load(&config_path).map_err(|e| anyhow::anyhow!("{e}"))?
        } else {
            Config::default()
        };

        match self.command {
            ConfigCommand::Show => {
                show_config(&config);
                Ok(())
            }
            ConfigCommand::Get { key } => {
                println!("{}", get(&config, &key)?);
                Ok(())
            }
            ConfigCommand::Set { key, value } => {
                let mut config = config;
                set(&mut config, &key, &value)?;
                config
                    .save(&config_path)
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                println!("{}", format!("✅ Set {key} = {value}").success());
                Ok(())
            }
        }
    }
}

fn show_config(config: &Config) {
    println!("Configuration:");
    println!(
        "  storage_key: {} ({})",
        config.storage_key(),
        format!("{}.json", config.storage_key()).dim()
    );
    println!("  id_scheme: {}", id_scheme_name(config.id_scheme));
    println!("  colour: {}", config.colour);
}

const fn id_scheme_name(scheme: IdScheme) -> &'static str {
    match scheme {
        IdScheme::Uuid => "uuid",
        IdScheme::Timestamp => "timestamp",
    }
}

fn get(config: &Config, key: &str) -> anyhow::Result<String> {
    Ok(match key {
        "storage_key" => config.storage_key().to_string(),
        "id_scheme" => id_scheme_name(config.id_scheme).to_string(),
        "colour" => config.colour.to_string(),
        _ => anyhow::bail!("Unknown configuration key: {key}"),
    })
}

fn set(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "storage_key" => {
            if !config.set_storage_key(value) {
                anyhow::bail!("Invalid storage key '{value}': must be non-empty with no path separators");
            }
        }
        "id_scheme" => {
            config.id_scheme = match value.to_ascii_lowercase().as_str() {
                "uuid" => IdScheme::Uuid,
                "timestamp" => IdScheme::Timestamp,
                _ => anyhow::bail!("Invalid id scheme '{value}': expected uuid or timestamp"),
            };
        }
        "colour" => {
            config.colour = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid value '{value}': expected true or false"))?;
        }
        _ => anyhow::bail!("Unknown configuration key: {key}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_each_key() {
        let mut config = Config::default();

        set(&mut config, "storage_key", "diary.v2").unwrap();
        set(&mut config, "id_scheme", "Timestamp").unwrap();
        set(&mut config, "colour", "false").unwrap();

        assert_eq!(get(&config, "storage_key").unwrap(), "diary.v2");
        assert_eq!(get(&config, "id_scheme").unwrap(), "timestamp");
        assert_eq!(get(&config, "colour").unwrap(), "false");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = Config::default();

        assert!(set(&mut config, "storage_key", "a/b").is_err());
        assert!(set(&mut config, "id_scheme", "sequential").is_err());
        assert!(set(&mut config, "colour", "maybe").is_err());
        assert!(set(&mut config, "digits", "3").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(get(&Config::default(), "nope").is_err());
    }
}
