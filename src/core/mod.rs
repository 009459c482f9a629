// src/core/mod.rs

pub mod arg_parser;
pub mod command;
pub mod config;
pub mod definition;
pub mod help_formatter;
pub mod substitutor;
pub mod tag_parser;
