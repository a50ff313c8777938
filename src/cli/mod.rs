//! CLI layer: argument parsing, commands and display

pub mod commands;
pub mod display;
pub mod template;

pub use commands::CliArgs;
