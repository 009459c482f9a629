// src/cli/handlers/validate.rs

use crate::{
    cli::handlers::commons::{self, DocCommand},
    core::{
        arg_parser::ParsedArgs, command::CommandHost, config, definition::Definition,
    },
    system::sink::ConsoleSink,
};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    about = "Checks that the required arguments of a definition are present."
)]
struct ValidateArgs {
    /// TOML file with `[[arguments]]` and `[[options]]` tables.
    definition: PathBuf,

    /// The command-line arguments to check.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// The main handler for the `validate` command.
pub fn handle(args: Vec<String>) -> Result<()> {
    let validate_args = ValidateArgs::try_parse_from(&args)?;
    let path = &validate_args.definition;

    let definition = Definition::from_config(config::load_definition_config(path)?)
        .with_context(|| format!("Invalid definition in '{}'.", path.display()))?;
    print_definition(&definition);

    let name = commons::name_from_path(path);
    let input = ParsedArgs::parse(&validate_args.args, &definition).into_input(&name, &definition);

    let mut host = CommandHost::new(DocCommand::new(name), input, Some(definition))?;
    host.execute(&mut ConsoleSink::new())?;
    Ok(())
}

fn print_definition(definition: &Definition) {
    if definition.is_empty() {
        return;
    }
    log::debug!("Checking against definition: {:?}", definition);

    for arg in definition.arguments() {
        let marker = if arg.required {
            format!("({})", t!("validate.label.required")).yellow().to_string()
        } else {
            String::new()
        };
        println!("  {:<15} {} {}", arg.name.cyan(), arg.description, marker);
    }
    for opt in definition.options() {
        let aliases = opt
            .aliases
            .iter()
            .map(|a| format!("-{}", a))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {:<15} {} {}",
            format!("--{}", opt.name).cyan(),
            opt.description,
            aliases.dimmed()
        );
    }
    println!();
}
