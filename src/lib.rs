//! Annotation-driven command metadata.
//!
//! Parses `@tag` segments out of doc-comment blocks, renders the allow-listed
//! ones as help text with `{$name}` placeholders filled in, and checks that a
//! command's required arguments were supplied before it runs.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
