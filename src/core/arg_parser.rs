// src/core/arg_parser.rs

use crate::core::{command::CommandInput, definition::Definition};
use std::collections::HashMap;

/// Raw command-line tokens split into positional values and named flags.
///
/// # Logic:
/// - `--name value`, `--name=value` and `-n value` are named arguments.
/// - A flag takes the next token as its value when the definition says the
///   option expects one, or, for undeclared flags, when the next token does
///   not itself start with `-`.
/// - Everything after a bare `--` is positional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    positional: Vec<String>,
    named: Vec<(String, Option<String>)>,
}

impl ParsedArgs {
    pub fn parse(raw: &[String], definition: &Definition) -> Self {
        let mut positional = Vec::new();
        let mut named: Vec<(String, Option<String>)> = Vec::new();
        let mut params_iter = raw.iter().peekable();
        let mut only_positional = false;

        while let Some(param) = params_iter.next() {
            if only_positional {
                positional.push(param.clone());
                continue;
            }
            if param == "--" {
                only_positional = true;
                continue;
            }

            let name_opt = match param.strip_prefix("--") {
                Some(name) => Some(name),
                None => param.strip_prefix('-').filter(|n| !n.is_empty()),
            };
            let Some(name) = name_opt else {
                positional.push(param.clone());
                continue;
            };

            if let Some((key, value)) = name.split_once('=') {
                named.push((key.to_string(), Some(value.to_string())));
                continue;
            }

            let takes_value = match definition.option(name) {
                Some(spec) => spec.expects_value,
                None => params_iter
                    .peek()
                    .is_some_and(|next| !next.starts_with('-')),
            };
            let value = if takes_value {
                params_iter.next().cloned()
            } else {
                None
            };
            named.push((name.to_string(), value));
        }

        log::debug!(
            "Parsed {} positional and {} named argument(s).",
            positional.len(),
            named.len()
        );
        Self { positional, named }
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Binds positional values to the declared argument names, in order.
    /// Values beyond the declared arguments are keyed by their index.
    pub fn arguments(&self, definition: &Definition) -> HashMap<String, String> {
        let mut declared = definition.arguments().iter();
        self.positional
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let key = declared
                    .next()
                    .map_or_else(|| index.to_string(), |spec| spec.name.clone());
                (key, value.clone())
            })
            .collect()
    }

    /// Named flags keyed by their canonical option name (aliases resolved).
    /// A flag given more than once keeps its last value.
    pub fn options(&self, definition: &Definition) -> HashMap<String, Option<String>> {
        self.named
            .iter()
            .map(|(key, value)| {
                let canonical = definition
                    .option(key)
                    .map_or_else(|| key.clone(), |spec| spec.name.clone());
                (canonical, value.clone())
            })
            .collect()
    }

    /// Builds the input a command host validates and runs against.
    pub fn into_input(self, command: impl Into<String>, definition: &Definition) -> CommandInput {
        CommandInput::new(
            command,
            self.arguments(definition),
            self.options(definition),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::definition::{ArgumentSpec, OptionSpec};

    fn raw(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn pack_definition() -> Definition {
        Definition::new()
            .with_argument(ArgumentSpec::required("dir", "Directory"))
            .unwrap()
            .with_option(OptionSpec::with_value("output", "Output file").alias("o"))
            .unwrap()
            .with_option(OptionSpec::flag("refresh", "Rebuild").alias("r"))
            .unwrap()
    }

    #[test]
    fn test_binds_positional_to_declared_names() {
        let def = pack_definition();
        let parsed = ParsedArgs::parse(&raw(&["src", "extra"]), &def);
        let args = parsed.arguments(&def);

        assert_eq!(args.get("dir").map(String::as_str), Some("src"));
        assert_eq!(args.get("1").map(String::as_str), Some("extra"));
    }

    #[test]
    fn test_declared_flag_does_not_swallow_positional() {
        let def = pack_definition();
        let parsed = ParsedArgs::parse(&raw(&["-r", "src", "-o", "app.phar"]), &def);

        let options = parsed.options(&def);
        assert_eq!(options.get("refresh"), Some(&None));
        assert_eq!(options.get("output"), Some(&Some("app.phar".to_string())));
        assert_eq!(parsed.positional(), &["src".to_string()]);
    }

    #[test]
    fn test_undeclared_flags_use_lookahead() {
        let def = Definition::new();
        let parsed = ParsedArgs::parse(&raw(&["--level", "3", "--quiet", "--x=y"]), &def);
        let options = parsed.options(&def);

        assert_eq!(options.get("level"), Some(&Some("3".to_string())));
        assert_eq!(options.get("quiet"), Some(&None));
        assert_eq!(options.get("x"), Some(&Some("y".to_string())));
    }

    #[test]
    fn test_double_dash_ends_options() {
        let def = pack_definition();
        let parsed = ParsedArgs::parse(&raw(&["--", "-not-a-flag"]), &def);
        assert_eq!(parsed.positional(), &["-not-a-flag".to_string()]);
        assert!(parsed.options(&def).is_empty());
    }

    #[test]
    fn test_into_input_carries_command_path() {
        let def = pack_definition();
        let input = ParsedArgs::parse(&raw(&["src"]), &def).into_input("phar:pack", &def);
        assert_eq!(input.command(), "phar:pack");
        assert_eq!(input.arg("dir"), Some("src"));
    }
}
