//! Error codes for the errtax compiler.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Referential validation errors
//! - `E2xx` - Inheritance graph errors
//! - `E3xx` - Type resolution errors

use std::fmt;

/// Error codes for categorizing compilation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Validation Errors (E1xx)
    // =========================================================================
    /// Missing metadata.
    ///
    /// An error is declared but no metadata record carries its name.
    E100,

    /// Duplicate error name.
    ///
    /// Two declarations share a name within one compilation unit.
    E101,

    /// Duplicate metadata field.
    ///
    /// Two metadata fields of one error share a short name.
    E102,

    /// Unknown severity level.
    ///
    /// The metadata record declares a level outside the severity set.
    E103,

    // =========================================================================
    // Inheritance Errors (E2xx)
    // =========================================================================
    /// Undefined parent.
    ///
    /// An error inherits from an error that is not part of the compilation.
    E200,

    /// Inheritance cycle.
    ///
    /// Following parent references leads back to the starting error.
    E201,

    // =========================================================================
    // Type Errors (E3xx)
    // =========================================================================
    /// Unknown metadata type.
    ///
    /// A metadata field declares a type outside the abstract type set.
    E300,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Validation errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Inheritance errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            // Type errors
            ErrorCode::E300 => "E300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Validation errors
            ErrorCode::E100 => "missing metadata",
            ErrorCode::E101 => "duplicate error name",
            ErrorCode::E102 => "duplicate metadata field",
            ErrorCode::E103 => "unknown level",
            // Inheritance errors
            ErrorCode::E200 => "undefined parent",
            ErrorCode::E201 => "inheritance cycle",
            // Type errors
            ErrorCode::E300 => "unknown metadata type",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
