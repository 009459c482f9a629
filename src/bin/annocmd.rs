// src/bin/annocmd.rs

use annocmd::{
    cli::{Cli, handlers},
    t,
};
use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::*;

// --- Command Definition and Registry ---

/// An action, its aliases, and the handler that receives the remaining arguments.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>) -> Result<()>,
}

/// Every action the binary understands. To add one, add an entry here.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "describe",
        aliases: &["desc"],
        handler: handlers::describe::handle,
    },
    CommandDefinition {
        name: "help",
        aliases: &["show"],
        handler: handlers::help::handle,
    },
    CommandDefinition {
        name: "tags",
        aliases: &["parse"],
        handler: handlers::tags::handle,
    },
    CommandDefinition {
        name: "validate",
        aliases: &["check"],
        handler: handlers::validate::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Sets up logging, dispatches to the handler and turns any error into an exit code.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // clap errors (including `--help` on an action) print themselves.
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }
        log::debug!("Exiting with error: {:?}", e);

        eprintln!("\n{}: {}", t!("cli.error").red().bold(), e);
        std::process::exit(1);
    }
}

/// Routes `annocmd <action> [args...]` to the registered handler.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let Some(action) = cli.action else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match find_command(&action) {
        Some(command) => (command.handler)(cli.args),
        None => Err(anyhow::anyhow!(
            "Unknown action '{}'. Available: {}.",
            action.cyan(),
            COMMAND_REGISTRY
                .iter()
                .map(|c| c.name)
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}
