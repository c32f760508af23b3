//! The fatal conditions of a compilation.

use thiserror::Error;

use crate::error::ErrorCode;

/// A fatal compilation error.
///
/// Every variant aborts the compilation; no model is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("no metadata found for error `{name}`")]
    MissingMetadata { name: String },

    #[error("error `{name}` is defined multiple times")]
    DuplicateName { name: String },

    #[error("metadata field `{field}` is declared multiple times for error `{error}`")]
    DuplicateField { error: String, field: String },

    #[error("error `{error}` has unknown level `{level}`")]
    UnknownLevel { error: String, level: String },

    #[error("error `{child}` inherits from undefined error `{parent}`")]
    UnknownParent { child: String, parent: String },

    #[error("inheritance cycle detected: {}", .cycle.join(" -> "))]
    InheritanceCycle { cycle: Vec<String> },

    #[error("metadata field `{field}` of error `{error}` has unknown type `{abstract_type}`")]
    UnknownType {
        error: String,
        field: String,
        abstract_type: String,
    },
}

impl CompileError {
    /// Returns the error code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingMetadata { .. } => ErrorCode::E100,
            Self::DuplicateName { .. } => ErrorCode::E101,
            Self::DuplicateField { .. } => ErrorCode::E102,
            Self::UnknownLevel { .. } => ErrorCode::E103,
            Self::UnknownParent { .. } => ErrorCode::E200,
            Self::InheritanceCycle { .. } => ErrorCode::E201,
            Self::UnknownType { .. } => ErrorCode::E300,
        }
    }

    /// Returns a suggestion for fixing the input.
    pub fn help(&self) -> String {
        match self {
            Self::MissingMetadata { name } => {
                format!("add a metadata record named `{name}` to the interface's metadata file")
            }
            Self::DuplicateName { .. } => {
                "error names must be unique across all interfaces; rename or remove one".to_string()
            }
            Self::DuplicateField { .. } => {
                "the text before `=` in each `str` entry must be unique per error".to_string()
            }
            Self::UnknownLevel { .. } => {
                "valid levels are EMERG, ALERT, CRIT, ERR, WARNING, NOTICE, INFO and DEBUG"
                    .to_string()
            }
            Self::UnknownParent { parent, .. } => {
                format!("define `{parent}` or include its interface in the compilation")
            }
            Self::InheritanceCycle { .. } => {
                "remove one `inherits` entry so the hierarchy forms a tree".to_string()
            }
            Self::UnknownType { .. } => {
                "valid types are int16, int32, int64, uint16, uint32, uint64, double and string"
                    .to_string()
            }
        }
    }
}
