pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod splitter;

pub use error::{CypherModuleError, Result};
pub use splitter::{SplitOptions, SplitOutput, Statement, StatementSplitter, segment};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FILE_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
