//! Command-line interface for Medley
//!
//! This module provides the main CLI structure and command handling. It
//! uses clap for argument parsing and dispatches to one module per
//! subcommand.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::Path;

use crate::config::MedleyConfig;

pub mod commands;
mod output;

pub use output::Output;

/// Medley - classic algorithm walkthroughs with a thread-safe counter workbench
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full walkthrough
    Run(commands::run::RunArgs),
    /// Exercise the concurrent counter
    Counter(commands::counter::CounterArgs),
    /// Classify numbers by divisibility and describe a weekday
    Classify(commands::classify::ClassifyArgs),
    /// Tour the numeric helpers
    Math,
    /// Tour the string helpers
    Strings(commands::strings::StringsArgs),
    /// Generate a random matrix and checksum it
    Matrix(commands::matrix::MatrixArgs),
    /// Walk through the collection types
    Collections,
    /// Run the async demo tasks
    Tasks(commands::tasks::TasksArgs),
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config = MedleyConfig::load(self.config.as_deref().map(Path::new))?;

        match self.command {
            Some(Commands::Run(args)) => commands::run::execute(args, &config, &output).await,
            Some(Commands::Counter(args)) => {
                commands::counter::execute(args, &config, &output).await
            }
            Some(Commands::Classify(args)) => {
                commands::classify::execute(args, &config, &output).await
            }
            Some(Commands::Math) => commands::math::execute(&output).await,
            Some(Commands::Strings(args)) => commands::strings::execute(args, &output).await,
            Some(Commands::Matrix(args)) => commands::matrix::execute(args, &config, &output).await,
            Some(Commands::Collections) => commands::collections::execute(&config, &output).await,
            Some(Commands::Tasks(args)) => commands::tasks::execute(args, &config, &output).await,
            Some(Commands::Version) => commands::version::execute().await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

/// Set up logging based on verbosity
fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
