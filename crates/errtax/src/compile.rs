//! The compilation pipeline.
//!
//! Fragments flow through validation, inheritance graph construction,
//! ordering and type resolution before being assembled into a
//! [`TaxonomyModel`]. Each stage either succeeds completely or aborts the run
//! with the first [`CompileError`] it finds.

use log::{debug, info, trace};

use errtax_core::{
    definition::{ErrorDefinition, MetadataField},
    fragment::Fragment,
    types::resolve_token,
};

use crate::{
    error::CompileError,
    graph::InheritanceGraph,
    model::TaxonomyModel,
    order::{self, OrderingStrategy},
    validate::{self, PendingError},
};

/// Compiles fragments into a model using the given ordering strategy.
///
/// # Errors
///
/// Returns the first [`CompileError`] of any stage.
pub(crate) fn compile(
    fragments: &[Fragment],
    strategy: OrderingStrategy,
) -> Result<TaxonomyModel, CompileError> {
    info!(fragments = fragments.len(); "Compiling taxonomy");

    let pending = validate::validate(fragments)?;

    let graph = InheritanceGraph::build(&pending)?;
    debug!(
        errors = graph.len(),
        roots = graph.roots().count();
        "Inheritance graph built"
    );

    let order = order::order(&graph, strategy)?;
    debug!(strategy:? = strategy; "Errors ordered");

    let definitions = order
        .into_iter()
        .map(|idx| resolve_error(&pending[idx]))
        .collect::<Result<Vec<_>, _>>()?;

    let model = TaxonomyModel::new(definitions);
    info!(errors = model.len(); "Taxonomy compiled");
    trace!(model:?; "Compiled model");

    Ok(model)
}

fn resolve_error(pending: &PendingError) -> Result<ErrorDefinition, CompileError> {
    let fields = pending
        .fields
        .iter()
        .map(|field| {
            let (abstract_type, resolved_type) =
                resolve_token(&field.type_token).map_err(|err| CompileError::UnknownType {
                    error: pending.name.clone(),
                    field: field.short_name.clone(),
                    abstract_type: err.0,
                })?;
            Ok::<_, CompileError>(MetadataField::new(
                &field.format,
                abstract_type,
                resolved_type,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut definition =
        ErrorDefinition::new(&pending.name, &pending.message, pending.level).with_fields(fields);
    if let Some(parent) = &pending.parent {
        definition = definition.with_parent(parent);
    }
    if let Some(interface) = &pending.interface {
        definition = definition.with_interface(interface);
    }

    Ok(definition)
}
