//! Configuration types and management for moeru-devtools.
//!
//! The configuration file is YAML with one section per unit. Every field has
//! a default that reproduces the behavior of the original migration tooling,
//! so an empty file (or no file at all) is a valid configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{DevtoolsError, Result};
use crate::rename::mapping::IdentifierMapping;

/// Root configuration for the devtools binary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DevtoolsConfig {
    /// Renamer settings
    #[serde(default)]
    pub rename: RenameConfig,

    /// AG3D converter service settings
    #[serde(default)]
    pub service: ServiceConfig,
}

impl DevtoolsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            DevtoolsError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;
        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            DevtoolsError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })?;
        Ok(())
    }

    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.rename.validate()
    }
}

/// Renamer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameConfig {
    /// Workspace manifest filename expected at the root
    #[serde(default = "default_workspace_manifest")]
    pub workspace_manifest: String,

    /// Package manifest filename searched for recursively
    #[serde(default = "default_package_manifest")]
    pub package_manifest: String,

    /// Directory names excluded from the walk (hidden directories are
    /// always skipped)
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Identifier replacement table, most specific entry wins on overlap
    #[serde(default = "IdentifierMapping::moeru_migration")]
    pub replacements: IdentifierMapping,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            workspace_manifest: default_workspace_manifest(),
            package_manifest: default_package_manifest(),
            skip_dirs: default_skip_dirs(),
            replacements: IdentifierMapping::moeru_migration(),
        }
    }
}

impl RenameConfig {
    /// Validate renamer settings
    pub fn validate(&self) -> Result<()> {
        if self.workspace_manifest.is_empty() {
            return Err(DevtoolsError::config_field(
                "workspace manifest filename must not be empty",
                "rename.workspace_manifest",
            ));
        }
        if self.package_manifest.is_empty() {
            return Err(DevtoolsError::config_field(
                "package manifest filename must not be empty",
                "rename.package_manifest",
            ));
        }
        self.replacements.validate()
    }
}

/// AG3D converter service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Listen address for the HTTP service
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_workspace_manifest() -> String {
    "pnpm-workspace.yaml".to_string()
}

fn default_package_manifest() -> String {
    "package.json".to_string()
}

fn default_skip_dirs() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}

fn default_bind_addr() -> SocketAddr {
    "0.0.0.0:8000".parse().expect("static bind address")
}
