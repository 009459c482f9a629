// src/constants.rs

/// Tag names dropped by the parser unless the caller supplies its own ignore set.
pub const DEFAULT_IGNORED_TAGS: &[&str] = &["param", "return"];

/// Name of the implicit tag holding the text before the first `@tag` line.
pub const DESCRIPTION_TAG: &str = "description";

/// Opening and closing halves of an annotation placeholder, `{$name}`.
pub const PLACEHOLDER_OPEN: &str = "{$";
pub const PLACEHOLDER_CLOSE: &str = "}";

/// Indentation put in front of every rendered help line.
pub const HELP_INDENT: &str = "  ";

/// Project-local configuration file, looked up in the working directory.
pub const LOCAL_CONFIG_FILENAME: &str = "annocmd.toml";

/// Name of the directory under the user config dir (`~/.config/annocmd`).
pub const CONFIG_DIR_NAME: &str = "annocmd";

/// Name of the configuration file inside the user config dir.
pub const USER_CONFIG_FILENAME: &str = "config.toml";
