use std::path::{Path, PathBuf};

mod add;
mod compose;
mod config;
mod delete;
mod init;
mod list;
mod reset;
mod show;
mod terminal;

use clap::ArgAction;
use journal::{Config, FileStore, Journal, Submission};
use terminal::Colorize;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The path to the journal directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.unwrap_or_default().run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List entries, newest first (default)
    List(list::Command),

    /// Initialize a new journal
    Init(init::Command),

    /// Add an entry from command-line fields
    Add(add::Command),

    /// Compose an entry interactively, one field at a time
    Compose(compose::Command),

    /// Show a single entry in full
    Show(show::Command),

    /// Delete an entry
    Delete(delete::Command),

    /// Replace every entry with the example entries
    Reset(reset::Command),

    /// Show or modify configuration settings
    Config(config::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::List(list::Command::default())
    }
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(root)?,
            Self::Init(command) => command.run(root)?,
            Self::Add(command) => command.run(root)?,
            Self::Compose(command) => command.run(root)?,
            Self::Show(command) => command.run(root)?,
            Self::Delete(command) => command.run(root)?,
            Self::Reset(command) => command.run(root)?,
            Self::Config(command) => command.run(root)?,
        }
        Ok(())
    }
}

/// Load the configuration and open the journal in `root`.
fn open(root: &Path) -> Journal<FileStore> {
    let config = Config::load_or_default(root);
    terminal::set_colour(config.colour);
    Journal::open_dir(root, &config)
}

/// Ask a yes/no question on the terminal.
///
/// Anything but an explicit "yes" counts as "no", including a prompt that
/// cannot be shown because stdin is not a terminal.
fn confirm(prompt: &str) -> bool {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or_else(|e| {
            tracing::debug!("Confirmation prompt failed: {e}");
            false
        })
}

/// Submit the journal's draft and report the outcome.
fn submit(journal: &mut Journal<FileStore>) -> anyhow::Result<()> {
    match journal.submit()? {
        Submission::Created(id) => {
            println!("{}", format!("✅ Added entry {id}").success());
        }
        Submission::Rejected(reason) => {
            eprintln!("{}", format!("⚠️  Nothing added: {reason}").warning());
        }
    }
    Ok(())
}
