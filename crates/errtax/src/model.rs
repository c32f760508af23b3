//! The compiled taxonomy.
//!
//! [`TaxonomyModel`] is the immutable result of a compilation: every error in
//! parent-before-child order together with a name index. All queries hand out
//! shared references only.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use errtax_core::{
    definition::{ErrorDefinition, MetadataField},
    level::Level,
};

/// Compiled errors in dependency order, indexed by name.
///
/// # Examples
///
/// ```
/// use errtax::TaxonomyCompiler;
/// use errtax_core::fragment::{ErrorDeclaration, Fragment, MetadataDeclaration};
///
/// let fragment = Fragment::new(
///     vec![
///         ErrorDeclaration::new("Timeout", "Timed out").inheriting("Common.InternalFailure"),
///         ErrorDeclaration::new("InternalFailure", "Internal failure"),
///     ],
///     vec![
///         MetadataDeclaration::new("InternalFailure", "ERR"),
///         MetadataDeclaration::new("Timeout", "ERR").with_entry("TIMEOUT_IN_MSEC=%llu", "uint64"),
///     ],
/// );
///
/// let model = TaxonomyCompiler::default().compile(&[fragment]).unwrap();
///
/// let names: Vec<&str> = model.iter().map(|e| e.name()).collect();
/// assert_eq!(names, ["InternalFailure", "Timeout"]);
/// assert_eq!(model.parent("Timeout").map(|e| e.name()), Some("InternalFailure"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyModel {
    errors: IndexMap<String, ErrorDefinition>,
}

impl TaxonomyModel {
    /// Creates a model from definitions already in dependency order.
    pub(crate) fn new(errors: Vec<ErrorDefinition>) -> Self {
        let errors = errors
            .into_iter()
            .map(|error| (error.name().to_string(), error))
            .collect();
        Self { errors }
    }

    /// Iterates the errors in compiled order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ErrorDefinition> + '_ {
        self.errors.values()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ErrorDefinition> {
        self.errors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    /// Returns the position of an error in compiled order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.errors.get_index_of(name)
    }

    /// Returns the parent definition of an error.
    pub fn parent(&self, name: &str) -> Option<&ErrorDefinition> {
        self.get(name)?.parent().and_then(|parent| self.get(parent))
    }

    /// Iterates the ancestors of an error, nearest first.
    ///
    /// An unknown name yields an empty iterator.
    pub fn ancestors<'a>(&'a self, name: &str) -> Ancestors<'a> {
        Ancestors {
            model: self,
            current: self.parent(name),
        }
    }

    /// Returns the full metadata set an error carries: its own fields
    /// followed by those of each ancestor, nearest ancestor first.
    pub fn inherited_fields(&self, name: &str) -> Vec<&MetadataField> {
        let Some(error) = self.get(name) else {
            return Vec::new();
        };

        std::iter::once(error)
            .chain(self.ancestors(name))
            .flat_map(|def| def.fields())
            .collect()
    }

    /// Returns the direct children of an error in compiled order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ErrorDefinition> + 'a {
        self.iter().filter(move |error| error.parent() == Some(name))
    }

    /// Groups the errors by severity, most severe level first.
    ///
    /// Errors keep their compiled order within each group.
    pub fn by_level(&self) -> BTreeMap<Level, Vec<&ErrorDefinition>> {
        let mut groups: BTreeMap<Level, Vec<&ErrorDefinition>> = BTreeMap::new();
        for error in self.iter() {
            groups.entry(error.level()).or_default().push(error);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a TaxonomyModel {
    type Item = &'a ErrorDefinition;
    type IntoIter = indexmap::map::Values<'a, String, ErrorDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}

/// Iterator over the ancestor chain of an error.
///
/// Created by [`TaxonomyModel::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    model: &'a TaxonomyModel,
    current: Option<&'a ErrorDefinition>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ErrorDefinition;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.parent().and_then(|parent| self.model.get(parent));
        Some(current)
    }
}
