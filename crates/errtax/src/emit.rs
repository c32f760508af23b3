//! Rendering a compiled model into text.
//!
//! An [`Emitter`] turns a [`TaxonomyModel`] into its target representation.
//! The built-in [`JsonEmitter`] writes the model as JSON for consumption by
//! external template engines.

use log::debug;
use serde::Serialize;
use thiserror::Error;

use errtax_core::definition::ErrorDefinition;

use crate::model::TaxonomyModel;

/// Errors raised while emitting a model.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders a compiled model.
pub trait Emitter {
    /// Renders `model` into a string.
    ///
    /// # Errors
    ///
    /// Returns an [`EmitError`] if the model cannot be rendered.
    fn emit(&self, model: &TaxonomyModel) -> Result<String, EmitError>;
}

/// Emits the model as JSON.
///
/// The document holds an `errors` array in compiled order. Each entry carries
/// the definition's own fields, the numeric syslog `priority` of its level and
/// `metadata`, the short names of every field the error carries once
/// inheritance is applied.
#[derive(Debug, Clone, Copy)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emits compact single-line JSON instead of indented output.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct Document<'a> {
    errors: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Entry<'a> {
    #[serde(flatten)]
    definition: &'a ErrorDefinition,
    priority: u8,
    metadata: Vec<&'a str>,
}

impl Emitter for JsonEmitter {
    fn emit(&self, model: &TaxonomyModel) -> Result<String, EmitError> {
        let errors = model
            .iter()
            .map(|definition| Entry {
                definition,
                priority: definition.level().priority(),
                metadata: model
                    .inherited_fields(definition.name())
                    .into_iter()
                    .map(|field| field.short_name())
                    .collect(),
            })
            .collect();
        let document = Document { errors };

        let output = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        debug!(bytes = output.len(), pretty = self.pretty; "Model emitted as JSON");
        Ok(output)
    }
}
