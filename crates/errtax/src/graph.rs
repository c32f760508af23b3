//! The inheritance graph of a compilation unit.
//!
//! Nodes are the validated errors, addressed by their index in encounter
//! order. Each node has at most one parent, so the graph is a forest once
//! parent references are resolved and checked for cycles.
//!
//! Capabilities:
//! - Name to index lookup
//! - Parent and child links per node
//! - Root detection (nodes without a parent)
//! - Cycle detection over parent chains

use indexmap::IndexMap;

use crate::{error::CompileError, validate::PendingError};

// =============================================================================
// Node visitation state
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

// =============================================================================
// Inheritance graph
// =============================================================================

/// Parent and child links between the errors of a compilation unit.
///
/// The lifetime ties the graph to the pending errors it indexes, whose names
/// it borrows.
#[derive(Debug)]
pub(crate) struct InheritanceGraph<'a> {
    names: IndexMap<&'a str, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
}

impl<'a> InheritanceGraph<'a> {
    /// Builds the graph of the given errors.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnknownParent`] if a parent name matches no
    /// error, or [`CompileError::InheritanceCycle`] if parent references loop.
    pub(crate) fn build(errors: &'a [PendingError]) -> Result<Self, CompileError> {
        let names: IndexMap<&str, usize> = errors
            .iter()
            .enumerate()
            .map(|(idx, error)| (error.name.as_str(), idx))
            .collect();

        let mut graph = Self {
            names,
            parents: vec![None; errors.len()],
            children: vec![Vec::new(); errors.len()],
        };
        graph.link_parents(errors)?;
        graph.check_acyclic()?;

        Ok(graph)
    }

    fn link_parents(&mut self, errors: &[PendingError]) -> Result<(), CompileError> {
        for (idx, error) in errors.iter().enumerate() {
            let Some(parent) = error.parent.as_deref() else {
                continue;
            };
            let parent_idx =
                *self
                    .names
                    .get(parent)
                    .ok_or_else(|| CompileError::UnknownParent {
                        child: error.name.clone(),
                        parent: parent.to_string(),
                    })?;
            self.parents[idx] = Some(parent_idx);
            self.children[parent_idx].push(idx);
        }
        Ok(())
    }

    /// Walks every parent chain once, failing on the first chain that
    /// revisits a node of its own path.
    fn check_acyclic(&self) -> Result<(), CompileError> {
        let mut marks = vec![Mark::Unvisited; self.len()];

        for start in 0..self.len() {
            let mut path = Vec::new();
            let mut current = Some(start);

            while let Some(idx) = current {
                match marks[idx] {
                    Mark::Done => break,
                    Mark::OnPath => {
                        let pos = path.iter().position(|&p| p == idx).unwrap_or_default();
                        let mut cycle: Vec<String> =
                            path[pos..].iter().map(|&p| self.name(p).to_string()).collect();
                        cycle.push(self.name(idx).to_string());
                        return Err(CompileError::InheritanceCycle { cycle });
                    }
                    Mark::Unvisited => {
                        marks[idx] = Mark::OnPath;
                        path.push(idx);
                        current = self.parents[idx];
                    }
                }
            }

            for idx in path {
                marks[idx] = Mark::Done;
            }
        }

        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.parents.len()
    }

    pub(crate) fn name(&self, idx: usize) -> &'a str {
        self.names
            .get_index(idx)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    /// Returns the children of a node in encounter order.
    pub(crate) fn children(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    /// Returns the nodes without a parent in encounter order.
    pub(crate) fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(idx, parent)| parent.is_none().then_some(idx))
    }

    /// Returns true if at least one node has a parent.
    pub(crate) fn has_inheritance(&self) -> bool {
        self.parents.iter().any(Option::is_some)
    }
}
