use std::path::Path;

use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut journal = super::open(root);
        let discarded = journal.posts().len();

        let yes = self.yes;
        let reset = journal.reset(&mut |prompt: &str| yes || super::confirm(prompt))?;

        if reset {
            println!(
                "{}",
                format!("✅ Discarded {discarded} entries and restored the examples").success()
            );
        } else {
            println!("Cancelled");
        }
        Ok(())
    }
}
