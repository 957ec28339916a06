use std::path::Path;

use journal::PostId;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The id of the entry to delete
    id: PostId,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut journal = super::open(root);

        let Some(post) = journal.get(&self.id) else {
            anyhow::bail!("Entry {} not found", self.id);
        };

        if !self.yes {
            println!("Will delete {} ({})", post.title, post.date);
            if !super::confirm("Proceed?") {
                println!("Cancelled");
                return Ok(());
            }
        }

        journal.remove(&self.id)?;

        println!("{}", format!("✅ Deleted entry {}", self.id).success());
        Ok(())
    }
}
