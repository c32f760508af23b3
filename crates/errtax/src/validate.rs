//! Referential validation of raw fragments.
//!
//! This pass pairs every error declaration with the metadata record of the
//! same name in its fragment and checks the invariants that do not need the
//! inheritance graph:
//!
//! - every error has a metadata record ([`CompileError::MissingMetadata`])
//! - error names are unique across all fragments ([`CompileError::DuplicateName`])
//! - field short names are unique per error ([`CompileError::DuplicateField`])
//! - levels belong to the severity set ([`CompileError::UnknownLevel`])
//!
//! The first violation, in encounter order, aborts validation.

use std::collections::{HashMap, HashSet};

use log::debug;

use errtax_core::{
    definition::field_short_name,
    fragment::{ErrorDeclaration, Fragment, MetadataDeclaration},
    level::Level,
};

use crate::error::CompileError;

/// A metadata field whose type token has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingField {
    pub(crate) short_name: String,
    pub(crate) format: String,
    pub(crate) type_token: String,
}

/// A validated error definition awaiting ordering and type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingError {
    pub(crate) name: String,
    pub(crate) interface: Option<String>,
    pub(crate) message: String,
    pub(crate) level: Level,
    pub(crate) parent: Option<String>,
    pub(crate) fields: Vec<PendingField>,
}

/// Derives the parent short name from an `inherits` list.
///
/// Only the first reference is honored; its last dotted component names the
/// parent (`xyz.openbmc_project.Common.Error.Timeout` gives `Timeout`).
pub(crate) fn parent_name(inherits: &[String]) -> Option<&str> {
    let first = inherits.first()?;
    first.rsplit('.').next()
}

/// Validates fragments and returns the pending errors in encounter order.
///
/// # Errors
///
/// Returns the first [`CompileError`] encountered.
pub(crate) fn validate(fragments: &[Fragment]) -> Result<Vec<PendingError>, CompileError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pending = Vec::new();

    for fragment in fragments {
        // First record wins when a metadata file repeats a name
        let mut metadata: HashMap<&str, &MetadataDeclaration> = HashMap::new();
        for record in &fragment.metadata {
            metadata.entry(record.name.as_str()).or_insert(record);
        }

        for decl in &fragment.errors {
            if !seen.insert(decl.name.as_str()) {
                return Err(CompileError::DuplicateName {
                    name: decl.name.clone(),
                });
            }

            let record = metadata.get(decl.name.as_str()).ok_or_else(|| {
                CompileError::MissingMetadata {
                    name: decl.name.clone(),
                }
            })?;

            pending.push(validate_error(decl, record, fragment.interface.as_deref())?);
        }
    }

    debug!(errors = pending.len(); "Fragments validated");
    Ok(pending)
}

fn validate_error(
    decl: &ErrorDeclaration,
    record: &MetadataDeclaration,
    interface: Option<&str>,
) -> Result<PendingError, CompileError> {
    let level = record
        .level
        .parse::<Level>()
        .map_err(|_| CompileError::UnknownLevel {
            error: decl.name.clone(),
            level: record.level.clone(),
        })?;

    let mut short_names: HashSet<&str> = HashSet::new();
    let mut fields = Vec::with_capacity(record.meta.len());
    for entry in &record.meta {
        let short_name = field_short_name(&entry.format);
        if !short_names.insert(short_name) {
            return Err(CompileError::DuplicateField {
                error: decl.name.clone(),
                field: short_name.to_string(),
            });
        }
        fields.push(PendingField {
            short_name: short_name.to_string(),
            format: entry.format.clone(),
            type_token: entry.type_name.clone(),
        });
    }

    if decl.inherits.len() > 1 {
        debug!(
            error = decl.name,
            ignored = decl.inherits.len() - 1;
            "Only the first inherited error is used"
        );
    }

    Ok(PendingError {
        name: decl.name.clone(),
        interface: interface.map(str::to_string),
        message: decl.description.clone(),
        level,
        parent: parent_name(&decl.inherits).map(str::to_string),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(errors: Vec<ErrorDeclaration>, metadata: Vec<MetadataDeclaration>) -> Fragment {
        Fragment::new(errors, metadata)
    }

    #[test]
    fn test_parent_name_takes_last_segment_of_first_reference() {
        let inherits = vec![
            "xyz.openbmc_project.Common.Error.InternalFailure".to_string(),
            "xyz.openbmc_project.Common.Error.Other".to_string(),
        ];
        assert_eq!(parent_name(&inherits), Some("InternalFailure"));
        assert_eq!(parent_name(&["Plain".to_string()]), Some("Plain"));
        assert_eq!(parent_name(&[]), None);
    }

    #[test]
    fn test_validate_pairs_metadata() {
        let fragments = vec![
            fragment(
                vec![
                    ErrorDeclaration::new("Open", "Failed to open"),
                    ErrorDeclaration::new("Read", "Failed to read").inheriting("a.b.Open"),
                ],
                vec![
                    MetadataDeclaration::new("Read", "INFO").with_entry("SIZE=%u", "uint32"),
                    MetadataDeclaration::new("Open", "ERR")
                        .with_entry("ERRNO=%d", "int32")
                        .with_entry("PATH=%s", "string"),
                ],
            )
            .with_interface("example.Io"),
        ];

        let pending = validate(&fragments).unwrap();

        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].name, "Open");
        assert_eq!(pending[0].level, Level::Error);
        assert_eq!(pending[0].interface.as_deref(), Some("example.Io"));
        assert_eq!(pending[0].parent, None);
        let names: Vec<&str> = pending[0]
            .fields
            .iter()
            .map(|f| f.short_name.as_str())
            .collect();
        assert_eq!(names, vec!["ERRNO", "PATH"]);

        assert_eq!(pending[1].name, "Read");
        assert_eq!(pending[1].message, "Failed to read");
        assert_eq!(pending[1].level, Level::Info);
        assert_eq!(pending[1].parent.as_deref(), Some("Open"));
        assert_eq!(pending[1].fields[0].type_token, "uint32");
    }

    #[test]
    fn test_missing_metadata() {
        let fragments = vec![fragment(
            vec![ErrorDeclaration::new("Orphan", "no metadata")],
            vec![MetadataDeclaration::new("Other", "ERR")],
        )];

        assert_eq!(
            validate(&fragments),
            Err(CompileError::MissingMetadata {
                name: "Orphan".to_string()
            })
        );
    }

    #[test]
    fn test_metadata_is_matched_within_its_fragment() {
        let fragments = vec![
            fragment(vec![], vec![MetadataDeclaration::new("Foo", "ERR")]),
            fragment(vec![ErrorDeclaration::new("Foo", "foo")], vec![]),
        ];

        assert!(matches!(
            validate(&fragments),
            Err(CompileError::MissingMetadata { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_across_fragments() {
        let fragments = vec![
            fragment(
                vec![ErrorDeclaration::new("Timeout", "first")],
                vec![MetadataDeclaration::new("Timeout", "ERR")],
            ),
            fragment(
                vec![ErrorDeclaration::new("Timeout", "second")],
                vec![MetadataDeclaration::new("Timeout", "ERR")],
            ),
        ];

        assert_eq!(
            validate(&fragments),
            Err(CompileError::DuplicateName {
                name: "Timeout".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_field() {
        let fragments = vec![fragment(
            vec![ErrorDeclaration::new("Open", "open")],
            vec![
                MetadataDeclaration::new("Open", "ERR")
                    .with_entry("ERRNO=%d", "int32")
                    .with_entry("ERRNO=%u", "uint32"),
            ],
        )];

        assert_eq!(
            validate(&fragments),
            Err(CompileError::DuplicateField {
                error: "Open".to_string(),
                field: "ERRNO".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_level() {
        let fragments = vec![fragment(
            vec![ErrorDeclaration::new("Open", "open")],
            vec![MetadataDeclaration::new("Open", "FATAL")],
        )];

        assert_eq!(
            validate(&fragments),
            Err(CompileError::UnknownLevel {
                error: "Open".to_string(),
                level: "FATAL".to_string(),
            })
        );
    }

    #[test]
    fn test_first_metadata_record_wins() {
        let fragments = vec![fragment(
            vec![ErrorDeclaration::new("Open", "open")],
            vec![
                MetadataDeclaration::new("Open", "ERR"),
                MetadataDeclaration::new("Open", "INFO"),
            ],
        )];

        let pending = validate(&fragments).unwrap();
        assert_eq!(pending[0].level, Level::Error);
    }

    #[test]
    fn test_type_tokens_are_not_checked_here() {
        let fragments = vec![fragment(
            vec![ErrorDeclaration::new("Open", "open")],
            vec![MetadataDeclaration::new("Open", "ERR").with_entry("X=%d", "int8")],
        )];

        let pending = validate(&fragments).unwrap();
        assert_eq!(pending[0].fields[0].type_token, "int8");
    }
}
