use std::path::Path;

use dialoguer::Input;
use journal::Field;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, Default, clap::Parser)]
pub struct Command {}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut journal = super::open(root);

        println!(
            "{}",
            "Title and content are required. Leave the date blank for today.".dim()
        );

        for field in Field::ALL {
            let value: String = Input::new()
                .with_prompt(field.name())
                .with_initial_text(journal.draft().field(field))
                .allow_empty(true)
                .interact_text()?;
            journal.set_field(field, value);
        }

        super::submit(&mut journal)
    }
}
