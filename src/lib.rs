//! # Moeru Devtools
//!
//! Maintenance tooling for the Moeru monorepo, shipped as a single binary
//! with two independent units:
//!
//! - **Renamer**: walks a workspace tree and rewrites the pnpm workspace
//!   manifest plus every `package.json`, applying the package identifier
//!   mapping from the `@yoko`/`@proj-yoko` era to the current `@moeru`,
//!   `@xsai`, and `@proj-airi` organizations.
//! - **AG3D converter service**: the converter HTTP service in its
//!   placeholder state, serving static responses until the real pipeline
//!   lands.
//!
//! The two units share no domain logic; they share only the ambient
//! infrastructure in [`core`] (errors, configuration, file utilities).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moeru_devtools::core::config::DevtoolsConfig;
//! use moeru_devtools::rename::engine::RenameEngine;
//!
//! fn main() -> moeru_devtools::Result<()> {
//!     let config = DevtoolsConfig::default();
//!     let engine = RenameEngine::new(config.rename)?;
//!     let summary = engine.run(std::path::Path::new("."))?;
//!     println!("{} files changed", summary.changed_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Shared infrastructure
pub mod core {
    //! Errors, configuration, and file utilities shared by both units.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
}

// Workspace package renaming
pub mod rename {
    //! Workspace package renaming: mapping, discovery, and the rewrite engine.

    pub mod engine;
    pub mod mapping;
    pub mod walker;
}

// AG3D converter service (placeholder endpoints)
pub mod service {
    //! The AG3D converter HTTP service in stub form.

    pub mod routes;
    pub mod server;
}

// Re-export primary types for convenience
pub use crate::core::config::DevtoolsConfig;
pub use crate::core::errors::{DevtoolsError, Result};
pub use crate::rename::engine::{RenameEngine, RenameSummary};
pub use crate::service::server::ConverterServer;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
