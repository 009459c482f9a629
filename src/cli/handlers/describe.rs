// src/cli/handlers/describe.rs

use crate::{cli::handlers::commons, core::tag_parser};
use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    about = "Prints the description of a comment block."
)]
struct DescribeArgs {
    /// File holding the comment block.
    file: PathBuf,

    /// Print only the line right after the opening `/**`.
    #[arg(long)]
    first_line: bool,
}

/// The main handler for the `describe` command.
pub fn handle(args: Vec<String>) -> Result<()> {
    let describe_args = DescribeArgs::try_parse_from(&args)?;
    let comment = commons::read_comment(&describe_args.file)?;

    let text = if describe_args.first_line {
        tag_parser::first_line(&comment)
    } else {
        tag_parser::description(&comment)
    };

    if text.is_empty() {
        println!("{}", t!("describe.empty").yellow());
    } else {
        println!("{}", text);
    }
    Ok(())
}
