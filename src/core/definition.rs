// src/core/definition.rs

//! The arguments and options a command declares, and the check that every
//! required argument was supplied before the command runs.
//!
//! Only the presence of required names is checked. What the values contain is
//! left to the command itself.

use crate::models::{ArgumentConfig, DefinitionConfig, OptionConfig};
use std::collections::HashMap;
use thiserror::Error;

/// Raised when required arguments are missing. All missing names are
/// reported at once, in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not enough arguments (missing: \"{}\").", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
}

/// Raised while building a [`Definition`] from declarations that clash.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("An argument named '{0}' is already defined.")]
    DuplicateArgument(String),
    #[error("An option named '{0}' is already defined.")]
    DuplicateOption(String),
    #[error("Alias '{alias}' of option '{option}' is already in use.")]
    DuplicateAlias { option: String, alias: String },
    #[error("Argument and option names must not be empty.")]
    EmptyName,
}

/// A declared positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: String,
    pub required: bool,
    pub description: String,
}

impl ArgumentSpec {
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: description.into(),
        }
    }

    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            description: description.into(),
        }
    }
}

impl From<ArgumentConfig> for ArgumentSpec {
    fn from(config: ArgumentConfig) -> Self {
        Self {
            name: config.name,
            required: config.required,
            description: config.description,
        }
    }
}

/// A declared option (`--name`, with optional short aliases).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub aliases: Vec<String>,
    pub expects_value: bool,
    pub description: String,
}

impl OptionSpec {
    pub fn flag(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            expects_value: false,
            description: description.into(),
        }
    }

    pub fn with_value(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            expects_value: true,
            ..Self::flag(name, description)
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// True if `key` is this option's name or one of its aliases.
    pub fn answers_to(&self, key: &str) -> bool {
        self.name == key || self.aliases.iter().any(|a| a == key)
    }
}

impl From<OptionConfig> for OptionSpec {
    fn from(config: OptionConfig) -> Self {
        Self {
            name: config.name,
            aliases: config.aliases,
            expects_value: config.expects_value,
            description: config.description,
        }
    }
}

/// The arguments and options of one command. Names are unique within it and
/// arguments keep their declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    arguments: Vec<ArgumentSpec>,
    options: Vec<OptionSpec>,
}

impl Definition {
    /// An empty definition; every input is valid against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a definition from a command's declarative configuration.
    pub fn from_config(config: DefinitionConfig) -> Result<Self, DefinitionError> {
        let mut definition = Self::new();
        for argument in config.arguments {
            definition.add_argument(argument.into())?;
        }
        for option in config.options {
            definition.add_option(option.into())?;
        }
        log::debug!(
            "Built definition with {} argument(s) and {} option(s).",
            definition.arguments.len(),
            definition.options.len()
        );
        Ok(definition)
    }

    pub fn add_argument(&mut self, spec: ArgumentSpec) -> Result<(), DefinitionError> {
        if spec.name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if self.has_argument(&spec.name) {
            return Err(DefinitionError::DuplicateArgument(spec.name));
        }
        self.arguments.push(spec);
        Ok(())
    }

    pub fn add_option(&mut self, spec: OptionSpec) -> Result<(), DefinitionError> {
        if spec.name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if self.option(&spec.name).is_some() {
            return Err(DefinitionError::DuplicateOption(spec.name));
        }
        for (i, alias) in spec.aliases.iter().enumerate() {
            let repeated_in_spec = spec.aliases.iter().take(i).any(|a| a == alias);
            if alias == &spec.name || repeated_in_spec || self.option(alias).is_some() {
                return Err(DefinitionError::DuplicateAlias {
                    option: spec.name.clone(),
                    alias: alias.clone(),
                });
            }
        }
        self.options.push(spec);
        Ok(())
    }

    /// Chained form of [`add_argument`](Self::add_argument).
    pub fn with_argument(mut self, spec: ArgumentSpec) -> Result<Self, DefinitionError> {
        self.add_argument(spec)?;
        Ok(self)
    }

    /// Chained form of [`add_option`](Self::add_option).
    pub fn with_option(mut self, spec: OptionSpec) -> Result<Self, DefinitionError> {
        self.add_option(spec)?;
        Ok(self)
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.iter().find(|a| a.name == name)
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.argument(name).is_some()
    }

    pub fn argument_is_required(&self, name: &str) -> bool {
        self.argument(name).is_some_and(|a| a.required)
    }

    /// Finds an option by its name or any of its aliases.
    pub fn option(&self, key: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.answers_to(key))
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.options.is_empty()
    }
}

/// Checks that every required argument of `definition` is a key of `given`.
pub fn validate<V>(
    definition: &Definition,
    given: &HashMap<String, V>,
) -> Result<(), ValidationError> {
    let missing: Vec<String> = definition
        .arguments()
        .iter()
        .filter(|arg| arg.required && !given.contains_key(&arg.name))
        .map(|arg| arg.name.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        log::debug!("Validation failed, missing: {:?}", missing);
        Err(ValidationError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn given(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn def_with_required(name: &str) -> Definition {
        Definition::new()
            .with_argument(ArgumentSpec::required(name, ""))
            .unwrap()
    }

    #[test]
    fn test_validate_reports_missing_required() {
        let err = validate(&def_with_required("path"), &given(&[])).unwrap_err();
        assert_eq!(err.missing, vec!["path".to_string()]);
    }

    #[test]
    fn test_validate_passes_when_present() {
        let result = validate(&def_with_required("path"), &given(&[("path", "/tmp")]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_lists_all_missing_in_declaration_order() {
        let def = Definition::new()
            .with_argument(ArgumentSpec::required("src", "Source"))
            .unwrap()
            .with_argument(ArgumentSpec::optional("mode", "Mode"))
            .unwrap()
            .with_argument(ArgumentSpec::required("dest", "Destination"))
            .unwrap();

        let err = validate(&def, &given(&[("mode", "fast")])).unwrap_err();

        assert_eq!(err.missing, vec!["src".to_string(), "dest".to_string()]);
        assert_eq!(
            err.to_string(),
            "Not enough arguments (missing: \"src, dest\")."
        );
    }

    #[test]
    fn test_validate_ignores_values_and_extra_keys() {
        let def = def_with_required("path");
        let result = validate(&def, &given(&[("path", ""), ("unknown", "x")]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_definition_is_always_valid() {
        assert!(validate(&Definition::new(), &given(&[])).is_ok());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = def_with_required("path").with_argument(ArgumentSpec::optional("path", ""));
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateArgument("path".to_string())
        );

        let result = Definition::new()
            .with_option(OptionSpec::with_value("output", "").alias("o"))
            .unwrap()
            .with_option(OptionSpec::flag("overwrite", "").alias("o"));
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateAlias {
                option: "overwrite".to_string(),
                alias: "o".to_string()
            }
        );
    }

    #[test]
    fn test_from_config_keeps_declaration_order() {
        let config: DefinitionConfig = toml::from_str(
            r#"
            [[arguments]]
            name = "dir"
            required = true
            description = "Directory to pack"

            [[arguments]]
            name = "output"

            [[options]]
            name = "refresh"
            aliases = ["r"]
            "#,
        )
        .unwrap();

        let def = Definition::from_config(config).unwrap();

        let names: Vec<_> = def.arguments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["dir", "output"]);
        assert!(def.argument_is_required("dir"));
        assert!(!def.argument_is_required("output"));
        assert!(!def.argument_is_required("missing"));
        assert_eq!(def.option("r").map(|o| o.name.as_str()), Some("refresh"));
        assert!(!def.option("refresh").unwrap().expects_value);
    }
}
