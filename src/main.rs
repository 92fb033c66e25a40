use anyhow::Result;
use clap::{Parser, Subcommand};

use breakeven_cli::cli::{
    handle_analyze_command, handle_config_command, handle_serve_command, AnalyzeArgs, ServeArgs,
};
use breakeven_cli::config::{BreakevenPaths, Settings};

#[derive(Parser)]
#[command(
    name = "breakeven",
    version,
    about = "Vendor pricing extraction and break-even analysis",
    long_about = "breakeven extracts pricing lines from vendor documents, combines \
                  them with manually entered and JSON-described costs, and derives \
                  break-even volumes, required prices, and profitability projections."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze costs and print the break-even report
    Analyze(AnalyzeArgs),

    /// Run the web dashboard
    Serve(ServeArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BreakevenPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Analyze(args) => handle_analyze_command(args, &settings)?,
        Commands::Serve(args) => handle_serve_command(args, &settings)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}
