//! Moeru Devtools CLI - workspace maintenance for the Moeru monorepo.
//!
//! Hosts the two independent units behind one binary: the package identifier
//! renamer and the AG3D converter service stub, plus the configuration
//! management commands the toolbox itself needs.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Rename(args) => {
            cli::rename_command(args).await?;
        }
        Commands::Serve(args) => {
            cli::serve_command(args).await?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config().await?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args).await?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args).await?;
        }
    }

    Ok(())
}
