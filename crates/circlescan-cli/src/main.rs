mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circlescan", about = "Circle detection and extraction tool")]
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
    /// Detect circles and print radius statistics
    Detect(commands::detect::DetectArgs),
    /// Draw detected circles onto a copy of the image
    Annotate(commands::annotate::AnnotateArgs),
    /// Save every detected circle as its own masked image
    Extract(commands::extract::ExtractArgs),
    /// Detect, summarize, annotate and optionally extract in one go
    Run(commands::run::RunArgs),
    /// Print or save the default pipeline config
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
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Annotate(args) => commands::annotate::run(args),
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
