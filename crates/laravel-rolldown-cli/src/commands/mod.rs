//! Command implementations.

mod config;
mod dev;

pub use config::execute as config_execute;
pub use dev::execute as dev_execute;
