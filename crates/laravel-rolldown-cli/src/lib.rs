//! Library surface of the CLI, exposed for integration tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
