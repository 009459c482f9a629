// src/core/command.rs

//! # Command Host
//!
//! Wraps a concrete [`Command`] with everything the metadata engine needs to
//! run it safely:
//!
//! - **Definition:** the declared arguments/options the input is validated
//!   against. A definition passed at construction is validated right away;
//!   replacing it later with [`CommandHost::set_definition`] does not
//!   re-validate, so hosts that need the guarantee call
//!   [`CommandHost::validate`] again.
//! - **Help:** [`CommandHost::show_help`] pulls the handler's comment from a
//!   [`CommentProvider`], parses it and renders the allow-listed tags, with the
//!   command's annotation variables substituted into the text.
//! - **Lifecycle:** [`CommandHost::execute`] runs `before_run`, `run` and
//!   `after_run` in that order.

use crate::{
    constants::DEFAULT_IGNORED_TAGS,
    core::{
        definition::{self, Definition, DefinitionError, ValidationError},
        help_formatter::HelpFormatter,
        substitutor::AnnotationVars,
        tag_parser,
    },
    models::{AllowList, DefinitionConfig},
    system::{comment_provider::CommentProvider, sink::OutputSink},
};
use std::collections::HashMap;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error("Could not read the comment for '{handler}': {source}")]
    Comment {
        handler: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not write command output: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}

/// The already-tokenized input of one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInput {
    command: String,
    args: HashMap<String, String>,
    options: HashMap<String, Option<String>>,
}

impl CommandInput {
    pub fn new(
        command: impl Into<String>,
        args: HashMap<String, String>,
        options: HashMap<String, Option<String>>,
    ) -> Self {
        Self {
            command: command.into(),
            args,
            options,
        }
    }

    /// The command path as it was invoked, e.g. `phar:pack`.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &HashMap<String, String> {
        &self.args
    }

    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    pub fn options(&self) -> &HashMap<String, Option<String>> {
        &self.options
    }

    /// The value of an option, or `None` if it was not given or has no value.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(|v| v.as_deref())
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }
}

/// A command whose help and argument contract come from its metadata.
pub trait Command {
    /// Static name of the command, e.g. `phar`.
    fn name(&self) -> &str;

    /// Declared arguments and options. Empty unless the command overrides it.
    fn configure(&self) -> DefinitionConfig {
        DefinitionConfig::default()
    }

    fn before_run(&mut self, _input: &CommandInput) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs the command body and returns its exit code.
    fn run(&mut self, input: &CommandInput, sink: &mut dyn OutputSink) -> anyhow::Result<i32>;

    fn after_run(&mut self, _input: &CommandInput) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A command bound to its input and definition.
#[derive(Debug)]
pub struct CommandHost<C> {
    command: C,
    input: CommandInput,
    definition: Definition,
    ignored_tags: Vec<String>,
    extra_vars: AnnotationVars,
}

impl<C: Command> CommandHost<C> {
    /// Binds `command` to `input`.
    ///
    /// Without a definition an empty one is used and nothing is checked. A
    /// supplied definition is validated immediately.
    pub fn new(
        command: C,
        input: CommandInput,
        definition: Option<Definition>,
    ) -> Result<Self, CommandError> {
        let validate_now = definition.is_some();
        let host = Self {
            command,
            input,
            definition: definition.unwrap_or_default(),
            ignored_tags: DEFAULT_IGNORED_TAGS.iter().map(|s| s.to_string()).collect(),
            extra_vars: AnnotationVars::new(),
        };
        if validate_now {
            host.validate()?;
        }
        Ok(host)
    }

    /// Builds the definition from [`Command::configure`] and validates the input against it.
    pub fn configured(command: C, input: CommandInput) -> Result<Self, CommandError> {
        let definition = Definition::from_config(command.configure())?;
        Self::new(command, input, Some(definition))
    }

    /// Checks the input against the current definition.
    pub fn validate(&self) -> Result<(), ValidationError> {
        definition::validate(&self.definition, self.input.args())
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Replaces the definition. The input is not re-validated.
    pub fn set_definition(&mut self, definition: Definition) {
        self.definition = definition;
    }

    /// Replaces the tag names dropped when parsing help comments.
    pub fn set_ignored_tags<S: Into<String>>(&mut self, ignored: impl IntoIterator<Item = S>) {
        self.ignored_tags = ignored.into_iter().map(Into::into).collect();
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut C {
        &mut self.command
    }

    pub fn input(&self) -> &CommandInput {
        &self.input
    }

    /// Adds a host-supplied placeholder value. It wins over the built-in ones.
    pub fn set_annotation_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.extra_vars.insert(name.into(), value.into());
    }

    /// Values that help text can reference: `{$command}`, `{$name}`, plus any
    /// set with [`set_annotation_var`](Self::set_annotation_var).
    pub fn annotation_vars(&self) -> AnnotationVars {
        let mut vars = AnnotationVars::new();
        vars.insert("command".to_string(), self.input.command().to_string());
        vars.insert("name".to_string(), self.command.name().to_string());
        vars.extend(self.extra_vars.clone());
        vars
    }

    /// Renders the help for `handler_id` from its comment block.
    ///
    /// An unknown handler is reported through the sink and still returns `0`.
    pub fn show_help(
        &self,
        provider: &dyn CommentProvider,
        handler_id: &str,
        allow_list: &AllowList,
        sink: &mut dyn OutputSink,
    ) -> Result<i32, CommandError> {
        let comment =
            provider
                .comment_for(handler_id)
                .map_err(|source| CommandError::Comment {
                    handler: handler_id.to_string(),
                    source,
                })?;

        let Some(comment) = comment else {
            let name = self.command.name();
            let label = if handler_id.is_empty() || handler_id == name {
                name.to_string()
            } else {
                format!("{}/{}", name, handler_id)
            };
            sink.error(&format!(
                "Command [{}] does not exist or is not accessible.",
                label
            ))?;
            return Ok(0);
        };

        let tags = tag_parser::parse_with_ignored(&comment, self.ignored_tags.as_slice());
        let vars = self.annotation_vars();
        HelpFormatter::new(allow_list).show(&tags, Some(&vars), sink)?;
        Ok(0)
    }

    /// Runs the command through its lifecycle hooks and returns its exit code.
    pub fn execute(&mut self, sink: &mut dyn OutputSink) -> Result<i32, CommandError> {
        log::debug!("Executing command '{}'.", self.input.command());
        self.command.before_run(&self.input)?;
        let code = self.command.run(&self.input, sink)?;
        self.command.after_run(&self.input)?;
        Ok(code)
    }
}
