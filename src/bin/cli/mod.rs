//! CLI module for the codesight binary.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{
    analyze_command, bug_command, explain_command, history_command, list_languages,
    load_configuration, print_default_config,
};
