//! Configuration types for taxonomy compilation.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so a
//! configuration file only needs the settings it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining compiler and loader settings.
//! - [`CompilerConfig`] - Selects the [`OrderingStrategy`].
//! - [`LoaderSettings`] - File naming of definition directories.
//!
//! # Example
//!
//! ```
//! # use errtax::{config::AppConfig, OrderingStrategy};
//! let config = AppConfig::default();
//! assert_eq!(config.compiler().ordering(), OrderingStrategy::Queue);
//! assert_eq!(config.loader().errors_suffix(), ".errors.yaml");
//! ```

use serde::Deserialize;

use errtax_loader::LoaderConfig;

use crate::order::OrderingStrategy;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Compiler configuration section.
    #[serde(default)]
    compiler: CompilerConfig,

    /// Loader configuration section.
    #[serde(default)]
    loader: LoaderSettings,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(compiler: CompilerConfig, loader: LoaderSettings) -> Self {
        Self { compiler, loader }
    }

    /// Returns the compiler configuration.
    pub fn compiler(&self) -> &CompilerConfig {
        &self.compiler
    }

    /// Returns the loader configuration.
    pub fn loader(&self) -> &LoaderSettings {
        &self.loader
    }
}

/// Compiler behavior settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompilerConfig {
    /// Ordering algorithm, `queue` or `multi-pass`.
    #[serde(default)]
    ordering: OrderingStrategy,
}

impl CompilerConfig {
    pub fn new(ordering: OrderingStrategy) -> Self {
        Self { ordering }
    }

    pub fn ordering(&self) -> OrderingStrategy {
        self.ordering
    }
}

/// File naming of a definition directory.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderSettings {
    /// Suffix of errors files.
    #[serde(default = "default_errors_suffix")]
    errors_suffix: String,

    /// Suffix of the metadata file paired with each errors file.
    #[serde(default = "default_metadata_suffix")]
    metadata_suffix: String,
}

fn default_errors_suffix() -> String {
    LoaderConfig::default().errors_suffix
}

fn default_metadata_suffix() -> String {
    LoaderConfig::default().metadata_suffix
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            errors_suffix: default_errors_suffix(),
            metadata_suffix: default_metadata_suffix(),
        }
    }
}

impl LoaderSettings {
    pub fn errors_suffix(&self) -> &str {
        &self.errors_suffix
    }

    pub fn metadata_suffix(&self) -> &str {
        &self.metadata_suffix
    }

    /// Returns the loader configuration for these settings.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new(&self.errors_suffix, &self.metadata_suffix)
    }
}
