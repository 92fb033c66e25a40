//! The `serve` command
//!
//! Starts the web dashboard.

use clap::Args;

use crate::config::Settings;
use crate::error::BreakevenResult;
use crate::web;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Hostname to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,
}

/// Handle the serve command
pub fn handle_serve_command(args: ServeArgs, settings: &Settings) -> BreakevenResult<()> {
    web::serve(&args.host, args.port, settings.clone())
}
