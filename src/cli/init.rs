use std::{fs, path::Path};

use journal::{Config, FileStore, Persistence, domain::seed_posts};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Start with an empty journal instead of the example entries
    #[arg(long)]
    empty: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(Config::FILE_NAME);
        if config_path.exists() {
            anyhow::bail!(
                "Journal already initialized (found existing {})",
                Config::FILE_NAME
            );
        }

        fs::create_dir_all(root)
            .map_err(|e| anyhow::anyhow!("Failed to create journal directory: {e}"))?;

        let config = Config::default();
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", Config::FILE_NAME))?;

        println!("Initialized journal in {}", root.display());
        println!("  Created: {}", Config::FILE_NAME);

        let mut store = FileStore::new(root, config.storage_key());
        if store.path().exists() {
            println!(
                "  {}",
                format!("Kept existing entries in {}", store.path().display()).dim()
            );
        } else {
            let posts = if self.empty { Vec::new() } else { seed_posts() };
            store.save(&posts)?;
            println!("  Created: {}.json", config.storage_key());
        }

        println!();
        println!("{}", "Next steps:".info());
        println!("  jlog add --title \"First entry\" --content \"...\"");

        Ok(())
    }
}
