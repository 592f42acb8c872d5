//! Child process execution and exit status handling.

pub mod command;

pub use command::{
    build_command, display_command, execute, execute_quiet, exit_code, spawn_exit_code,
    CommandOptions, CommandResult,
};
