// src/cli/handlers/mod.rs

// One module per CLI action.

pub mod commons;
pub mod describe;
pub mod help;
pub mod tags;
pub mod validate;
