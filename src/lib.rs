pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path_utils;
pub mod scanner;

pub use error::{Result, ShelfGuardError};

pub const EXIT_SUCCESS: i32 = 0;
/// Argument, configuration or scan error.
pub const EXIT_FAILURE: i32 = -1;
/// Invalid files were found and `--fail-on-invalid` was given.
pub const EXIT_INVALID_FILES: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
