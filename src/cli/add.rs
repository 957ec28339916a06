use std::path::Path;

use journal::Field;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The title of the entry
    #[arg(long, short)]
    title: Option<String>,

    /// The body of the entry
    #[arg(long, short)]
    content: Option<String>,

    /// The date of the entry (YYYY-MM-DD, defaults to today)
    #[arg(long, short)]
    date: Option<String>,

    /// Comma-separated tags (e.g. "planning, practice")
    #[arg(long)]
    tags: Option<String>,

    /// A one-line summary
    #[arg(long, short)]
    summary: Option<String>,
}

impl Command {
    fn fields(self) -> impl Iterator<Item = (Field, String)> {
        [
            (Field::Title, self.title),
            (Field::Date, self.date),
            (Field::Tags, self.tags),
            (Field::Summary, self.summary),
            (Field::Content, self.content),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
    }

    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut journal = super::open(root);

        for (field, value) in self.fields() {
            journal.set_field(field, value);
        }

        super::submit(&mut journal)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn only_given_fields_are_set() {
        let command =
            Command::try_parse_from(["add", "--title", "T", "--tags", "a,b", "-c", "Body"])
                .unwrap();
        let fields: Vec<_> = command.fields().collect();
        assert_eq!(
            fields,
            [
                (Field::Title, "T".to_string()),
                (Field::Tags, "a,b".to_string()),
                (Field::Content, "Body".to_string()),
            ]
        );
    }
}
