//! Command Execution Logic
//!
//! Implementations of the devtools subcommands: the rename pass, the AG3D
//! converter service stub, and configuration management.

use std::path::Path;

use owo_colors::OwoColorize;

use moeru_devtools::core::config::DevtoolsConfig;
use moeru_devtools::rename::engine::RenameEngine;
use moeru_devtools::service::server::ConverterServer;

use crate::cli::args::*;
use crate::cli::output::*;

/// Main rename command implementation
pub async fn rename_command(args: RenameArgs) -> anyhow::Result<()> {
    if !args.quiet {
        print_header();
    }

    let config = load_configuration(args.config.as_deref()).await?;

    if !args.root.exists() {
        eprintln!(
            "{} {}",
            "❌ Workspace root does not exist:".red(),
            args.root.display()
        );
        std::process::exit(1);
    }

    if !args.quiet {
        println!(
            "{} {}",
            "📂 Workspace root:".bold(),
            args.root.display().to_string().cyan()
        );
        if args.dry_run {
            println!("{}", "🔍 Dry run - no files will be written".yellow());
        }
        println!();
    }

    let engine = RenameEngine::new(config.rename)?.dry_run(args.dry_run);
    let summary = engine.run(&args.root)?;

    if !args.quiet {
        display_rename_summary(&summary, args.dry_run);
    }

    Ok(())
}

/// Run the AG3D converter service stub
pub async fn serve_command(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_configuration(args.config.as_deref()).await?;
    if let Some(bind) = args.bind {
        config.service.bind_addr = bind;
    }

    let server = ConverterServer::bind(&config.service).await?;
    println!(
        "{} {}",
        "🚀 AG3D converter service listening on".bright_green().bold(),
        server.local_addr()?.to_string().cyan()
    );

    server.run().await?;
    Ok(())
}

/// Load configuration from an optional path, falling back to defaults
pub async fn load_configuration(path: Option<&Path>) -> anyhow::Result<DevtoolsConfig> {
    match path {
        Some(path) => {
            let config = DevtoolsConfig::from_yaml_file(path)?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(DevtoolsConfig::default()),
    }
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default moeru-devtools configuration".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!(
        "{}",
        "# Usage: moeru-dev rename --config moeru-devtools.yml".dimmed()
    );
    println!();

    let config = DevtoolsConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        eprintln!(
            "{} {}",
            "❌ Configuration file already exists:".red(),
            args.output.display()
        );
        eprintln!("   Use --force to overwrite or choose a different name with --output");
        std::process::exit(1);
    }

    let config = DevtoolsConfig::default();
    let yaml_content = serde_yaml::to_string(&config)?;
    tokio::fs::write(&args.output, yaml_content).await?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Edit the replacement table or service address as needed");
    println!(
        "   2. Run the renamer with: {}",
        format!("moeru-dev rename --config {} <root>", args.output.display()).cyan()
    );

    Ok(())
}

/// Validate a devtools configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(&args.config)).await {
        Ok(config) => {
            println!("{}", "✅ Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Replacement entries must be non-empty and old != new");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'moeru-dev print-default-config' to see valid format".dimmed()
            );
            std::process::exit(1);
        }
    };

    println!(
        "   Workspace manifest: {}",
        config.rename.workspace_manifest.cyan()
    );
    println!(
        "   Package manifest:   {}",
        config.rename.package_manifest.cyan()
    );
    println!(
        "   Replacements:       {}",
        config.rename.replacements.len().to_string().cyan()
    );
    println!(
        "   Service address:    {}",
        config.service.bind_addr.to_string().cyan()
    );

    if args.detailed {
        println!();
        println!("{}", "🔧 Replacement table".bright_blue().bold());
        for (old, new) in config.rename.replacements.iter() {
            println!("   {} -> {}", old.red(), new.green());
        }
    }

    Ok(())
}
