mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "defectscope", about = "Edge view and dark-region defect reports for images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and color type
    Info(commands::info::InfoArgs),
    /// Write the edge-detected view of an image
    Edges(commands::edges::EdgesArgs),
    /// Print defect reports for one or more images
    Report(commands::report::ReportArgs),
    /// Print or save the default analysis config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Edges(args) => commands::edges::run(args),
        Commands::Report(args) => commands::report::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
