//! CLI logic for the errtax taxonomy compiler.
//!
//! This module contains the core CLI logic: configuration discovery,
//! compilation of the input directory and the atomic write of the emitted
//! model.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use config::ConfigError;

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use tempfile::NamedTempFile;
use thiserror::Error;

use errtax::{ErrtaxError, TaxonomyCompiler};

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Errtax(#[from] ErrtaxError),

    #[error("Failed to write `{}`: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Run the errtax CLI application
///
/// This function compiles the input directory through the errtax pipeline
/// and writes the resulting JSON model to the output file. With `--check`
/// nothing is written.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Definition loading errors
/// - Compilation errors
/// - Emission or output write errors
///
/// No output file is created or replaced when an error is returned.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_dir = args.input,
        output_path = args.output,
        check = args.check;
        "Processing taxonomy"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    debug!(config:? = app_config; "Configuration loaded");

    // Compile the definition directory
    let compiler = TaxonomyCompiler::new(app_config);
    let model = compiler.compile_dir(&args.input)?;

    if args.check {
        info!(errors = model.len(); "Taxonomy is valid, skipping output");
        return Ok(());
    }

    let json = compiler.render_json(&model)?;
    write_output(Path::new(&args.output), &json)?;

    info!(output_file = args.output, errors = model.len(); "Taxonomy exported successfully");

    Ok(())
}

/// Writes `content` to `path` through a temporary file in the same directory,
/// so `path` is either fully replaced or left untouched.
fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    let output_error = |source: io::Error| CliError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(output_error)?;
    file.write_all(content.as_bytes()).map_err(output_error)?;
    file.persist(path).map_err(|err| output_error(err.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_output_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("taxonomy.json");
        fs::write(&path, "old").unwrap();

        write_output(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_output_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("taxonomy.json");

        let err = write_output(&path, "{}").unwrap_err();

        assert!(matches!(err, CliError::Output { path: p, .. } if p == path));
    }
}
