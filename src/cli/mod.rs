//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the core engine.

pub mod analyze;
pub mod config;
pub mod serve;

pub use analyze::{handle_analyze_command, AnalyzeArgs};
pub use config::handle_config_command;
pub use serve::{handle_serve_command, ServeArgs};
