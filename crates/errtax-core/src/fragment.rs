//! Raw definition fragments supplied by a fragment loader.
//!
//! A [`Fragment`] holds the declarations of one interface exactly as they were
//! read: error declarations with their `inherits` references, and metadata
//! declarations with unparsed level and type tokens. Nothing here has been
//! validated yet.
//!
//! The field names mirror the keys of the YAML definition files, so both
//! declaration types deserialize directly:
//!
//! ```yaml
//! # <Interface>.errors.yaml
//! - name: Timeout
//!   description: Operation timed out
//!   inherits:
//!     - xyz.openbmc_project.Common.Error.InternalFailure
//!
//! # <Interface>.metadata.yaml
//! - name: Timeout
//!   level: ERR
//!   meta:
//!     - str: "TIMEOUT_IN_MSEC=%llu"
//!       type: uint64
//! ```

use std::convert::Infallible;

use serde::Deserialize;

/// A declared error, as read from an errors file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDeclaration {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Fully qualified ancestor references; only the first is honored.
    #[serde(default)]
    pub inherits: Vec<String>,
}

impl ErrorDeclaration {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            inherits: Vec::new(),
        }
    }

    /// Adds an ancestor reference.
    pub fn inheriting(mut self, ancestor: impl Into<String>) -> Self {
        self.inherits.push(ancestor.into());
        self
    }
}

/// One metadata entry: a format string and an abstract type token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetaEntry {
    #[serde(rename = "str")]
    pub format: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl MetaEntry {
    pub fn new(format: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            type_name: type_name.into(),
        }
    }
}

/// Metadata declared for an error, as read from a metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetadataDeclaration {
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub meta: Vec<MetaEntry>,
}

impl MetadataDeclaration {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
            meta: Vec::new(),
        }
    }

    /// Appends a metadata entry.
    pub fn with_entry(mut self, format: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.meta.push(MetaEntry::new(format, type_name));
        self
    }
}

/// The raw declarations of a single interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Namespace of the interface, e.g. `xyz.openbmc_project.Common.Error`.
    pub interface: Option<String>,
    pub errors: Vec<ErrorDeclaration>,
    pub metadata: Vec<MetadataDeclaration>,
}

impl Fragment {
    pub fn new(errors: Vec<ErrorDeclaration>, metadata: Vec<MetadataDeclaration>) -> Self {
        Self {
            interface: None,
            errors,
            metadata,
        }
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }
}

/// A supplier of definition fragments.
///
/// The order of the returned fragments, and of the declarations within each,
/// is the encounter order the compiler uses to break ordering ties.
pub trait FragmentSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every fragment of the compilation unit.
    fn fragments(&self) -> Result<Vec<Fragment>, Self::Error>;
}

impl FragmentSource for Vec<Fragment> {
    type Error = Infallible;

    fn fragments(&self) -> Result<Vec<Fragment>, Self::Error> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_declaration_builder() {
        let decl = ErrorDeclaration::new("Timeout", "timed out")
            .inheriting("a.b.Base")
            .inheriting("a.b.Other");

        assert_eq!(decl.name, "Timeout");
        assert_eq!(decl.inherits, vec!["a.b.Base", "a.b.Other"]);
    }

    #[test]
    fn test_metadata_declaration_builder() {
        let decl = MetadataDeclaration::new("Timeout", "ERR")
            .with_entry("TIMEOUT=%llu", "uint64")
            .with_entry("PATH=%s", "string");

        assert_eq!(decl.meta.len(), 2);
        assert_eq!(decl.meta[0], MetaEntry::new("TIMEOUT=%llu", "uint64"));
    }

    #[test]
    fn test_vec_source_returns_fragments_in_order() {
        let source = vec![
            Fragment::default().with_interface("first"),
            Fragment::default().with_interface("second"),
        ];

        let fragments = source.fragments().unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].interface.as_deref(), Some("first"));
        assert_eq!(fragments[1].interface.as_deref(), Some("second"));
    }
}
