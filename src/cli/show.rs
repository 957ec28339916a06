use std::path::Path;

use anyhow::Context;
use clap::Parser;
use journal::{Post, PostId};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display a single entry in full")]
pub struct Command {
    /// The id of the entry to display
    id: PostId,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let journal = super::open(root);

        let Some(post) = journal.get(&self.id) else {
            anyhow::bail!("Entry {} not found", self.id);
        };

        match self.output {
            OutputFormat::Pretty => output_pretty(post),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(std::io::stdout(), post)
                    .context("failed to render json output")?;
                println!();
            }
        }

        Ok(())
    }
}

fn output_pretty(post: &Post) {
    println!("# {}", post.title);
    println!("{}", format!("{}  ({})", post.date, post.id).dim());

    if !post.summary.is_empty() {
        println!("\n{}", post.summary.info());
    }

    println!("\n{}", post.content);

    if !post.tags.is_empty() {
        println!("\n{}", "Tags".dim());
        for tag in &post.tags {
            println!("  • {tag}");
        }
    }
}
