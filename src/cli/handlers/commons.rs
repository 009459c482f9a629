// src/cli/handlers/commons.rs

use crate::{
    core::command::{Command, CommandInput},
    system::{
        comment_provider::{CommentProvider, FileCommentProvider},
        sink::OutputSink,
    },
};
use anyhow::{Context, Result, anyhow};
use colored::*;
use std::path::Path;

/// Reads the comment block stored in `path`.
pub fn read_comment(path: &Path) -> Result<String> {
    let handler_id = path.to_string_lossy();
    FileCommentProvider::new()
        .comment_for(&handler_id)
        .with_context(|| format!("Failed to read comment file '{}'.", path.display()))?
        .ok_or_else(|| anyhow!("Comment file '{}' not found.", path.display().to_string().cyan()))
}

/// Command name derived from a file path: its stem, e.g. `pack` for `docs/pack.txt`.
pub fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "command".to_string())
}

/// Parses a `key=value` pair given on the command line.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// A command described only by files on disk: a comment block for its help
/// and a TOML definition for its arguments. Running it reports what was bound.
#[derive(Debug, Clone)]
pub struct DocCommand {
    name: String,
}

impl DocCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Command for DocCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, input: &CommandInput, sink: &mut dyn OutputSink) -> Result<i32> {
        sink.success(t!("validate.ok"))?;

        let mut args: Vec<_> = input.args().iter().collect();
        args.sort();
        if !args.is_empty() {
            sink.write(&format!("{}:", t!("validate.label.arguments")))?;
            for (name, value) in args {
                sink.write(&format!("  {:<15} {}", name, value))?;
            }
        }

        let mut options: Vec<_> = input.options().iter().collect();
        options.sort();
        if !options.is_empty() {
            sink.write(&format!("{}:", t!("validate.label.options")))?;
            for (name, value) in options {
                sink.write(&format!(
                    "  --{:<13} {}",
                    name,
                    value.as_deref().unwrap_or("")
                ))?;
            }
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("workDir=/tmp/app").unwrap(),
            ("workDir".to_string(), "/tmp/app".to_string())
        );
        assert_eq!(
            parse_key_value("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_name_from_path() {
        assert_eq!(name_from_path(Path::new("docs/pack.txt")), "pack");
        assert_eq!(name_from_path(Path::new("build")), "build");
    }
}
