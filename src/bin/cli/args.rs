//! CLI Argument Structures
//!
//! All CLI argument definitions and command structures used by the
//! moeru-dev binary.

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Workspace maintenance for the Moeru monorepo
#[derive(Parser)]
#[command(name = "moeru-dev")]
#[command(version = VERSION)]
#[command(about = "🧰 Moeru Devtools - workspace maintenance for the Moeru monorepo")]
#[command(long_about = "
Maintenance tooling for the Moeru monorepo: rename package identifiers across
the workspace, or run the AG3D converter service in its placeholder state.

Common Usage:

  # Apply the identifier mapping to the current workspace
  moeru-dev rename

  # See what a rename would touch without writing anything
  moeru-dev rename --dry-run ./workspace

  # Run the AG3D converter service stub
  moeru-dev serve

  # Generate a configuration file to customize the mapping
  moeru-dev init-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the package identifier mapping across a workspace
    Rename(RenameArgs),

    /// Run the AG3D converter service (placeholder endpoints)
    Serve(ServeArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a devtools configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Arguments for the rename command
#[derive(Args)]
pub struct RenameArgs {
    /// Workspace root to process
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to a configuration file (YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress console output (warnings still go to the log)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the serve command
#[derive(Args)]
pub struct ServeArgs {
    /// Bind address for the service [default: 0.0.0.0:8000]
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Path to a configuration file (YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the init-config command
#[derive(Args)]
pub struct InitConfigArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "moeru-devtools.yml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the validate-config command
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    pub config: PathBuf,

    /// Show the replacement table after validation
    #[arg(long)]
    pub detailed: bool,
}
