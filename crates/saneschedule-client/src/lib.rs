//! CLI, configuration, preference file store, commands
//!
//! This crate provides the `saneschedule` command-line interface.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;

pub use cli::Cli;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use store::FileStore;
