//! Metadata field types and their resolution.
//!
//! Every metadata field declares an [`AbstractType`] token in its definition
//! file. The [`resolve`] function maps that abstract type onto the
//! [`ConcreteType`] spelled in emitted code, using a fixed table.
//!
//! # Example
//!
//! ```
//! use errtax_core::types::{self, AbstractType, ConcreteType};
//!
//! let abstract_type: AbstractType = "uint32".parse().unwrap();
//! assert_eq!(types::resolve(abstract_type), ConcreteType::Uint32);
//! assert_eq!(types::resolve(abstract_type).as_str(), "uint32_t");
//! ```

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error returned when a type token is not one of the abstract types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown type `{0}`, valid values: int16, int32, int64, uint16, uint32, uint64, double, string"
)]
pub struct UnknownTypeToken(pub String);

/// Abstract type of a metadata field, as written in definition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractType {
    Int16,
    Int32,
    Int64,
    Uint16,
    Uint32,
    Uint64,
    Double,
    String,
}

impl AbstractType {
    /// Returns the token used in definition files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Double => "double",
            Self::String => "string",
        }
    }
}

impl FromStr for AbstractType {
    type Err = UnknownTypeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int16" => Ok(Self::Int16),
            "int32" => Ok(Self::Int32),
            "int64" => Ok(Self::Int64),
            "uint16" => Ok(Self::Uint16),
            "uint32" => Ok(Self::Uint32),
            "uint64" => Ok(Self::Uint64),
            "double" => Ok(Self::Double),
            "string" => Ok(Self::String),
            _ => Err(UnknownTypeToken(s.to_string())),
        }
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AbstractType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Concrete type spelled in emitted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcreteType {
    Int16,
    Int32,
    Int64,
    Uint16,
    Uint32,
    Uint64,
    Double,
    String,
}

impl ConcreteType {
    /// Returns the emitted type name, e.g. `uint32_t` or `std::string`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Uint16 => "uint16_t",
            Self::Uint32 => "uint32_t",
            Self::Uint64 => "uint64_t",
            Self::Double => "double",
            Self::String => "std::string",
        }
    }
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConcreteType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Abstract-to-concrete mapping, indexed by the `AbstractType` discriminant.
static TYPE_TABLE: [(AbstractType, ConcreteType); 8] = [
    (AbstractType::Int16, ConcreteType::Int16),
    (AbstractType::Int32, ConcreteType::Int32),
    (AbstractType::Int64, ConcreteType::Int64),
    (AbstractType::Uint16, ConcreteType::Uint16),
    (AbstractType::Uint32, ConcreteType::Uint32),
    (AbstractType::Uint64, ConcreteType::Uint64),
    (AbstractType::Double, ConcreteType::Double),
    (AbstractType::String, ConcreteType::String),
];

/// Resolves an abstract type to its concrete emission type.
pub fn resolve(abstract_type: AbstractType) -> ConcreteType {
    let (entry, concrete) = TYPE_TABLE[abstract_type as usize];
    debug_assert_eq!(entry, abstract_type, "type table out of order");
    concrete
}

/// Parses a type token and resolves it in one step.
///
/// # Errors
///
/// Returns [`UnknownTypeToken`] if `token` is not one of the eight abstract
/// types.
pub fn resolve_token(token: &str) -> Result<(AbstractType, ConcreteType), UnknownTypeToken> {
    let abstract_type = token.parse::<AbstractType>()?;
    Ok((abstract_type, resolve(abstract_type)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for (idx, (abstract_type, _)) in TYPE_TABLE.iter().enumerate() {
            assert_eq!(*abstract_type as usize, idx);
        }
    }

    #[test]
    fn test_resolve_every_type() {
        let expected = [
            ("int16", "int16_t"),
            ("int32", "int32_t"),
            ("int64", "int64_t"),
            ("uint16", "uint16_t"),
            ("uint32", "uint32_t"),
            ("uint64", "uint64_t"),
            ("double", "double"),
            ("string", "std::string"),
        ];

        for (token, concrete) in expected {
            let (abstract_type, resolved) = resolve_token(token).unwrap();
            assert_eq!(abstract_type.as_str(), token);
            assert_eq!(resolved.as_str(), concrete);
        }
    }

    #[test]
    fn test_resolve_token_unknown() {
        assert_eq!(
            resolve_token("uint128"),
            Err(UnknownTypeToken("uint128".to_string()))
        );
        // Tokens are case sensitive
        assert!(resolve_token("UINT32").is_err());
        assert!(resolve_token("").is_err());
    }

    #[test]
    fn test_resolve_is_stable() {
        let first = resolve(AbstractType::Uint32);
        for _ in 0..10 {
            assert_eq!(resolve(AbstractType::Uint32), first);
        }
        assert_eq!(first, ConcreteType::Uint32);
    }
}
