use std::path::Path;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use journal::Post;
use serde::Serialize;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// Command arguments for `jlog list`.
#[derive(Debug, Default, Parser)]
#[command(about = "List entries, newest first, optionally filtered by a search query")]
pub struct Command {
    /// Case-insensitive text to search for in titles, summaries, content and
    /// tags.
    ///
    /// Multiple words are searched for as a single phrase.
    query: Vec<String>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Limit number of rows returned.
    #[arg(long)]
    limit: Option<usize>,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let journal = super::open(root);
        let query = self.query.join(" ");

        let mut posts = journal.feed(&query);
        if let Some(max) = self.limit {
            posts.truncate(max);
        }

        match self.output {
            OutputFormat::Table => {
                if posts.is_empty() {
                    println!("{}", "No entries found".dim());
                } else {
                    render_table(&posts, !is_narrow());
                }
            }
            OutputFormat::Json => render_json(&posts)?,
        }

        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Column {
    Date,
    Id,
    Title,
    Tags,
}

impl Column {
    const fn header(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Id => "ID",
            Self::Title => "TITLE",
            Self::Tags => "TAGS",
        }
    }

    fn value(self, post: &Post) -> String {
        match self {
            Self::Date => post.date.clone(),
            Self::Id => post.id.to_string(),
            Self::Title => post.title.to_string(),
            Self::Tags => post.tags.join(", "),
        }
    }
}

fn columns(wide: bool) -> Vec<Column> {
    if wide {
        vec![Column::Date, Column::Id, Column::Title, Column::Tags]
    } else {
        vec![Column::Date, Column::Id, Column::Title]
    }
}

fn table_lines(posts: &[&Post], wide: bool) -> Vec<String> {
    let columns = columns(wide);

    let data: Vec<Vec<String>> = posts
        .iter()
        .map(|post| columns.iter().map(|column| column.value(post)).collect())
        .collect();

    // Determine column widths for alignment.
    let widths = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            data.iter()
                .map(|row| row[idx].chars().count())
                .max()
                .unwrap_or(0)
                .max(column.header().len())
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(data.len() + 2);
    lines.push(format_row(columns.iter().map(|c| c.header()), &widths));
    lines.push(format_row(widths.iter().map(|w| "-".repeat(*w)), &widths));
    for row in &data {
        lines.push(format_row(row, &widths));
    }
    lines
}

fn format_row<S: AsRef<str>>(cells: impl IntoIterator<Item = S>, widths: &[usize]) -> String {
    cells
        .into_iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn render_table(posts: &[&Post], wide: bool) {
    let mut lines = table_lines(posts, wide).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.dim());
    }
    for line in lines {
        println!("{line}");
    }
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    id: &'a str,
    date: &'a str,
    title: &'a str,
    summary: &'a str,
    tags: &'a [String],
}

fn render_json(posts: &[&Post]) -> anyhow::Result<()> {
    let rows: Vec<JsonRow<'_>> = posts
        .iter()
        .map(|post| JsonRow {
            id: post.id.as_str(),
            date: &post.date,
            title: post.title.as_str(),
            summary: &post.summary,
            tags: &post.tags,
        })
        .collect();

    serde_json::to_writer_pretty(std::io::stdout(), &rows)
        .context("failed to render json output")?;
    println!();
    Ok(())
}
