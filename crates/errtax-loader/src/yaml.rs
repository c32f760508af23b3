//! YAML decoding of errors and metadata documents.
//!
//! Both documents are top-level sequences. An empty (or whitespace-only)
//! document decodes to an empty sequence.

use std::path::Path;

use log::trace;
use serde::de::DeserializeOwned;

use errtax_core::fragment::{ErrorDeclaration, MetadataDeclaration};

use crate::error::LoadError;

/// Decodes an errors document.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns [`LoadError::Yaml`] if the document is not a sequence of error
/// declarations.
pub fn parse_errors(source: &str, path: &Path) -> Result<Vec<ErrorDeclaration>, LoadError> {
    let errors: Vec<ErrorDeclaration> = parse_sequence(source, path)?;
    trace!(path = path.display().to_string(), count = errors.len(); "Decoded error declarations");
    Ok(errors)
}

/// Decodes a metadata document.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns [`LoadError::Yaml`] if the document is not a sequence of metadata
/// declarations.
pub fn parse_metadata(source: &str, path: &Path) -> Result<Vec<MetadataDeclaration>, LoadError> {
    let metadata: Vec<MetadataDeclaration> = parse_sequence(source, path)?;
    trace!(path = path.display().to_string(), count = metadata.len(); "Decoded metadata declarations");
    Ok(metadata)
}

fn parse_sequence<T: DeserializeOwned>(source: &str, path: &Path) -> Result<Vec<T>, LoadError> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(source).map_err(|err| LoadError::yaml(path, &err))
}
