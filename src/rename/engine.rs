//! The rename engine: applies the identifier mapping across a workspace.
//!
//! Two passes, mirroring the shape of the original migration: the workspace
//! manifest is rewritten as raw text (quote-preserving), then every
//! discovered package manifest is parsed as JSON, substituted across its
//! serialized form so keys and values are rewritten uniformly, re-parsed,
//! and pretty-printed back with two-space indentation. Per-file failures are
//! recorded and do not abort the walk.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::core::config::RenameConfig;
use crate::core::errors::{DevtoolsError, Result};
use crate::core::file_utils::{write_if_changed, FileReader};
use crate::rename::mapping::Substitution;
use crate::rename::walker::find_package_manifests;

/// A package manifest the engine could not process
#[derive(Debug)]
pub struct FileFailure {
    /// Path of the failed manifest
    pub path: PathBuf,
    /// Rendered error message
    pub message: String,
}

/// Per-run accounting for a rename pass
#[derive(Debug, Default)]
pub struct RenameSummary {
    /// Workspace manifest path, when one was found at the root
    pub workspace_manifest: Option<PathBuf>,
    /// Whether the workspace manifest was rewritten
    pub workspace_manifest_changed: bool,
    /// Number of package manifests discovered by the walk
    pub manifests_found: usize,
    /// Package manifests that were rewritten
    pub files_changed: Vec<PathBuf>,
    /// Package manifests that contained no old identifiers
    pub files_clean: usize,
    /// Per-file failures (malformed JSON, unreadable files)
    pub failures: Vec<FileFailure>,
}

impl RenameSummary {
    /// Total number of files rewritten, workspace manifest included
    pub fn changed_count(&self) -> usize {
        self.files_changed.len() + usize::from(self.workspace_manifest_changed)
    }

    /// Whether any per-file failure was recorded
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Applies the identifier mapping to a workspace tree
pub struct RenameEngine {
    config: RenameConfig,
    plain: Substitution,
    quoted: Substitution,
    dry_run: bool,
}

impl RenameEngine {
    /// Build an engine from a validated configuration
    pub fn new(config: RenameConfig) -> Result<Self> {
        config.validate()?;
        let plain = config.replacements.substitution()?;
        let quoted = config.replacements.quoted_substitution()?;
        Ok(Self {
            config,
            plain,
            quoted,
            dry_run: false,
        })
    }

    /// Compute and report changes without writing any file
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run both passes over the workspace rooted at `root`
    pub fn run(&self, root: &Path) -> Result<RenameSummary> {
        let mut summary = RenameSummary::default();
        self.rewrite_workspace_manifest(root, &mut summary)?;
        self.rewrite_package_manifests(root, &mut summary)?;
        Ok(summary)
    }

    /// Raw-text pass over the workspace manifest. A missing manifest is a
    /// warning, not an error.
    fn rewrite_workspace_manifest(&self, root: &Path, summary: &mut RenameSummary) -> Result<()> {
        let path = root.join(&self.config.workspace_manifest);
        if !path.exists() {
            warn!("workspace manifest not found: {}", path.display());
            return Ok(());
        }

        let content = FileReader::read_to_string(&path)?;
        let rewritten = self.quoted.apply(&content);
        summary.workspace_manifest = Some(path.clone());

        if rewritten == content {
            debug!("workspace manifest already clean: {}", path.display());
            return Ok(());
        }

        if !self.dry_run {
            write_if_changed(&path, &content, &rewritten)?;
        }
        summary.workspace_manifest_changed = true;
        info!("updated workspace manifest: {}", path.display());
        Ok(())
    }

    /// JSON pass over every discovered package manifest, continue-on-error.
    fn rewrite_package_manifests(&self, root: &Path, summary: &mut RenameSummary) -> Result<()> {
        let manifests = find_package_manifests(
            root,
            &self.config.package_manifest,
            &self.config.skip_dirs,
        )?;
        summary.manifests_found = manifests.len();

        for path in manifests {
            match self.rewrite_package_manifest(&path) {
                Ok(true) => {
                    info!("updated {}", path.display());
                    summary.files_changed.push(path);
                }
                Ok(false) => {
                    debug!("no occurrences in {}", path.display());
                    summary.files_clean += 1;
                }
                Err(err) => {
                    error!("failed to update {}: {}", path.display(), err);
                    summary.failures.push(FileFailure {
                        path,
                        message: err.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse, substitute across the serialized form (keys and values
    /// uniformly), re-parse, and pretty-print. Returns whether the file was
    /// rewritten. Files without occurrences are left byte-identical, which
    /// is what makes a second run report zero changes.
    fn rewrite_package_manifest(&self, path: &Path) -> Result<bool> {
        let original = FileReader::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&original)
            .map_err(|e| DevtoolsError::json_in_file(path, e))?;

        let serialized = serde_json::to_string(&value)?;
        if !self.plain.would_change(&serialized) {
            return Ok(false);
        }

        let substituted = self.plain.apply(&serialized);
        // The substitution runs over raw JSON text; if an entry ever broke
        // the encoding this re-parse is where it surfaces, as a per-file
        // failure.
        let value: serde_json::Value = serde_json::from_str(&substituted)
            .map_err(|e| DevtoolsError::json_in_file(path, e))?;
        let formatted = serde_json::to_string_pretty(&value)?;

        if !self.dry_run {
            write_if_changed(path, &original, &formatted)?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RenameConfig;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn engine() -> RenameEngine {
        RenameEngine::new(RenameConfig::default()).unwrap()
    }

    fn workspace_with(files: &[(&str, &str)]) -> TempDir {
        let dir = tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn renames_package_name_field() {
        let dir = workspace_with(&[("packages/std/package.json", r#"{"name": "@yoko/std"}"#)]);

        let summary = engine().run(dir.path()).unwrap();

        assert_eq!(summary.files_changed.len(), 1);
        let content = fs::read_to_string(dir.path().join("packages/std/package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"], "@moeru/std");
    }

    #[test]
    fn renames_dependency_keys() {
        let dir = workspace_with(&[(
            "package.json",
            r#"{"dependencies": {"yokoschema": "^1.0.0"}}"#,
        )]);

        engine().run(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["dependencies"]["xsschema"], "^1.0.0");
        assert!(value["dependencies"].get("yokoschema").is_none());
    }

    #[test]
    fn malformed_manifest_is_recorded_and_walk_continues() {
        let dir = workspace_with(&[
            ("broken/package.json", "{not json"),
            ("ok/package.json", r#"{"name": "@yoko/tool"}"#),
        ]);

        let summary = engine().run(dir.path()).unwrap();

        assert_eq!(summary.manifests_found, 2);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].path.ends_with("broken/package.json"));
        let content = fs::read_to_string(dir.path().join("ok/package.json")).unwrap();
        assert!(content.contains("@xsai/tool"));
    }

    #[test]
    fn missing_workspace_manifest_is_not_fatal() {
        let dir = workspace_with(&[("package.json", r#"{"name": "@yoko/embed"}"#)]);

        let summary = engine().run(dir.path()).unwrap();

        assert!(summary.workspace_manifest.is_none());
        assert_eq!(summary.files_changed.len(), 1);
    }

    #[test]
    fn workspace_manifest_rewritten_with_quotes_preserved() {
        let dir = workspace_with(&[
            (
                "pnpm-workspace.yaml",
                "packages:\n  - 'packages/*'\ncatalog:\n  '@yoko/std': ^1.2.0\n  yokoschema: ^0.3.0\n",
            ),
            ("package.json", "{}"),
        ]);

        let summary = engine().run(dir.path()).unwrap();

        assert!(summary.workspace_manifest_changed);
        let content = fs::read_to_string(dir.path().join("pnpm-workspace.yaml")).unwrap();
        assert!(content.contains("'@moeru/std': ^1.2.0"));
        assert!(content.contains("xsschema: ^0.3.0"));
        assert!(!content.contains("yoko"));
    }

    #[test]
    fn second_run_is_idempotent() {
        let dir = workspace_with(&[
            ("pnpm-workspace.yaml", "catalog:\n  '@yoko/model': ^2.0.0\n"),
            ("package.json", r#"{"dependencies": {"@yoko/model": "catalog:"}}"#),
        ]);

        let first = engine().run(dir.path()).unwrap();
        assert_eq!(first.changed_count(), 2);

        let second = engine().run(dir.path()).unwrap();
        assert_eq!(second.changed_count(), 0);
        assert_eq!(second.files_clean, 1);
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let original = r#"{"name": "@yoko/std"}"#;
        let dir = workspace_with(&[("package.json", original)]);

        let summary = engine().dry_run(true).run(dir.path()).unwrap();

        assert_eq!(summary.files_changed.len(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            original
        );
    }

    #[test]
    fn clean_manifest_keeps_its_formatting() {
        let original = "{\"name\":\"already-clean\",\n \"private\": true}";
        let dir = workspace_with(&[("package.json", original)]);

        let summary = engine().run(dir.path()).unwrap();

        assert_eq!(summary.files_clean, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            original
        );
    }

    #[test]
    fn rewritten_manifest_uses_two_space_indentation() {
        let dir = workspace_with(&[("package.json", r#"{"name":"@yoko/shared","private":true}"#)]);

        engine().run(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("package.json")).unwrap();
        assert!(content.contains("\n  \"name\": \"@xsai/shared\""));
    }
}
