// src/cli/handlers/tags.rs

use crate::{
    cli::handlers::commons,
    core::{config, tag_parser},
    models::{TagSet, TagValue},
};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    about = "Dumps the tags parsed from a comment block."
)]
struct TagsArgs {
    /// File holding the comment block.
    file: PathBuf,

    /// Comma-separated tag names to drop. Defaults to the configured ignore set.
    #[arg(long, value_delimiter = ',')]
    ignore: Option<Vec<String>>,

    /// Help config file to read the default ignore set from.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the tags as a JSON object.
    #[arg(long)]
    json: bool,
}

/// The main handler for the `tags` command.
pub fn handle(args: Vec<String>) -> Result<()> {
    let tags_args = TagsArgs::try_parse_from(&args)?;
    let comment = commons::read_comment(&tags_args.file)?;

    let ignored = match tags_args.ignore {
        Some(list) => list,
        None => config::load_help_config(tags_args.config.as_deref())?.ignored_tags,
    };
    let tags = tag_parser::parse_with_ignored(&comment, ignored.as_slice());

    if tags_args.json {
        let json = serde_json::to_string_pretty(&tags).context("Failed to serialize tags.")?;
        println!("{}", json);
    } else {
        print_tags(&tags);
    }
    Ok(())
}

fn print_tags(tags: &TagSet) {
    println!("\n--- {} ({}) ---", t!("tags.header"), tags.len());
    for (name, value) in tags.iter() {
        match value {
            TagValue::Single(text) => print_value(name, text),
            TagValue::Multi(list) => {
                for (i, text) in list.iter().enumerate() {
                    print_value(&format!("{}[{}]", name, i), text);
                }
            }
        }
    }
}

fn print_value(label: &str, text: &str) {
    if text.is_empty() {
        println!("  {:<15} {}", label.cyan(), t!("tags.empty").dimmed());
        return;
    }
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        println!("  {:<15} {}", label.cyan(), first);
    }
    for line in lines {
        println!("  {:<15} {}", "", line);
    }
}
