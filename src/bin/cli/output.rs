//! Console rendering for the devtools CLI.

use owo_colors::OwoColorize;

use moeru_devtools::rename::engine::RenameSummary;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the CLI header banner
pub fn print_header() {
    println!(
        "{}",
        format!("🧰 Moeru Devtools v{VERSION}").bright_blue().bold()
    );
    println!();
}

/// Render a rename run summary
pub fn display_rename_summary(summary: &RenameSummary, dry_run: bool) {
    let verb = if dry_run { "would change" } else { "changed" };

    match &summary.workspace_manifest {
        Some(path) if summary.workspace_manifest_changed => {
            println!(
                "  {} {}",
                format!("📝 Workspace manifest {verb}:").green(),
                path.display().to_string().cyan()
            );
        }
        Some(path) => {
            println!(
                "  {} {}",
                "✨ Workspace manifest already clean:".dimmed(),
                path.display().to_string().cyan()
            );
        }
        None => {
            println!("  {}", "⚠️  Workspace manifest not found, skipped".yellow());
        }
    }

    println!(
        "  {} {} discovered, {} {}, {} already clean",
        "📦 Package manifests:".bold(),
        summary.manifests_found.to_string().cyan(),
        summary.files_changed.len().to_string().green(),
        verb,
        summary.files_clean.to_string().dimmed()
    );

    for path in &summary.files_changed {
        println!("     {} {}", "•".green(), path.display());
    }

    if summary.has_failures() {
        println!();
        println!(
            "  {} {}",
            "❌ Failures:".red().bold(),
            summary.failures.len().to_string().red()
        );
        for failure in &summary.failures {
            println!(
                "     {} {}: {}",
                "•".red(),
                failure.path.display(),
                failure.message
            );
        }
    }

    println!();
    if dry_run {
        println!("{}", "🔍 Dry run complete - nothing was written".yellow().bold());
    } else {
        println!("{}", "✅ Renaming process completed".bright_green().bold());
    }
}
