//! Compiled error definitions.
//!
//! The types here are the building blocks of a compiled taxonomy. They are
//! constructed by the compiler once every reference has been validated and
//! every field type resolved, and expose read-only accessors only.

use serde::Serialize;

use crate::{
    level::Level,
    types::{AbstractType, ConcreteType},
};

/// Returns the short name of a metadata field from its format string.
///
/// The short name is everything before the first `=`: `ERRNO=%d` yields
/// `ERRNO`. A format string without `=` is its own short name.
///
/// # Examples
///
/// ```
/// use errtax_core::definition::field_short_name;
///
/// assert_eq!(field_short_name("FILE_PATH=%s"), "FILE_PATH");
/// assert_eq!(field_short_name("CALLOUT"), "CALLOUT");
/// ```
pub fn field_short_name(format: &str) -> &str {
    format.split('=').next().unwrap_or(format)
}

/// A typed metadata field attached to an error definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataField {
    short_name: String,
    format: String,
    abstract_type: AbstractType,
    resolved_type: ConcreteType,
}

impl MetadataField {
    /// Creates a resolved metadata field.
    ///
    /// # Arguments
    ///
    /// * `format` - The printf-style format string, e.g. `ERRNO=%d`.
    /// * `abstract_type` - The declared abstract type.
    /// * `resolved_type` - The concrete emission type for `abstract_type`.
    pub fn new(
        format: impl Into<String>,
        abstract_type: AbstractType,
        resolved_type: ConcreteType,
    ) -> Self {
        let format = format.into();
        Self {
            short_name: field_short_name(&format).to_string(),
            format,
            abstract_type,
            resolved_type,
        }
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn abstract_type(&self) -> AbstractType {
        self.abstract_type
    }

    pub fn resolved_type(&self) -> ConcreteType {
        self.resolved_type
    }
}

/// A single compiled error definition.
///
/// # Examples
///
/// ```
/// use errtax_core::{definition::ErrorDefinition, level::Level};
///
/// let error = ErrorDefinition::new("Timeout", "Operation timed out", Level::Error)
///     .with_parent("InternalFailure")
///     .with_interface("xyz.openbmc_project.Common.Error");
///
/// assert_eq!(error.name(), "Timeout");
/// assert_eq!(error.parent(), Some("InternalFailure"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDefinition {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    interface: Option<String>,
    message: String,
    level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    fields: Vec<MetadataField>,
}

impl ErrorDefinition {
    /// Creates an error definition without parent, interface or fields.
    pub fn new(name: impl Into<String>, message: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            interface: None,
            message: message.into(),
            level,
            parent: None,
            fields: Vec::new(),
        }
    }

    /// Sets the parent error's short name.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the interface namespace the definition was declared in.
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    /// Sets the metadata fields, in declaration order.
    pub fn with_fields(mut self, fields: Vec<MetadataField>) -> Self {
        self.fields = fields;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Returns the metadata fields in declaration order.
    pub fn fields(&self) -> &[MetadataField] {
        &self.fields
    }

    /// Returns the field with the given short name, if any.
    pub fn field(&self, short_name: &str) -> Option<&MetadataField> {
        self.fields
            .iter()
            .find(|field| field.short_name == short_name)
    }
}
