// src/cli/handlers/help.rs

use crate::{
    cli::handlers::commons::{self, DocCommand},
    core::{
        command::{CommandHost, CommandInput},
        config,
    },
    system::{comment_provider::FileCommentProvider, sink::ConsoleSink},
};
use anyhow::{Result, bail};
use colored::*;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    about = "Renders the allow-listed tags of a comment block as help text."
)]
struct HelpArgs {
    /// File holding the comment block.
    file: PathBuf,

    /// Help config file (allow-list and ignore set).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command name used for `{$name}`. Defaults to the file stem.
    #[arg(long)]
    name: Option<String>,

    /// Invoked command path used for `{$command}`. Defaults to the name.
    #[arg(long)]
    command: Option<String>,

    /// Extra placeholder value, e.g. `--var workDir=/srv/app`. Repeatable.
    #[arg(long = "var", value_parser = commons::parse_key_value)]
    vars: Vec<(String, String)>,
}

/// The main handler for the `help` command.
pub fn handle(args: Vec<String>) -> Result<()> {
    let help_args = HelpArgs::try_parse_from(&args)?;
    if !help_args.file.is_file() {
        bail!(
            "Comment file '{}' not found.",
            help_args.file.display().to_string().cyan()
        );
    }
    let help_config = config::load_help_config(help_args.config.as_deref())?;

    let name = help_args
        .name
        .unwrap_or_else(|| commons::name_from_path(&help_args.file));
    let invoked = help_args.command.unwrap_or_else(|| name.clone());
    let input = CommandInput::new(invoked, HashMap::new(), HashMap::new());

    let mut host = CommandHost::new(DocCommand::new(name), input, None)?;
    host.set_ignored_tags(help_config.ignored_tags);
    for (key, value) in help_args.vars {
        host.set_annotation_var(key, value);
    }

    let handler_id = help_args.file.to_string_lossy();
    let mut sink = ConsoleSink::new();
    host.show_help(
        &FileCommentProvider::new(),
        &handler_id,
        &help_config.allow_tags,
        &mut sink,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_handle_rejects_missing_comment_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = handle(vec![missing.to_string_lossy().into_owned()]).unwrap_err();

        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_handle_rejects_directory() {
        let dir = tempdir().unwrap();
        let result = handle(vec![dir.path().to_string_lossy().into_owned()]);
        assert!(result.is_err());
    }
}
