//! Parent-before-child ordering of the inheritance graph.
//!
//! The reference order is defined by a repeated scan: unplaced errors are
//! visited in encounter order and an error is placed once it has no parent or
//! its parent is already placed, including a parent placed earlier in the
//! same scan. Scans repeat until everything is placed.
//!
//! Two strategies produce that order:
//!
//! - [`OrderingStrategy::MultiPass`] runs the scan literally, which is
//!   quadratic for deep hierarchies declared child-first.
//! - [`OrderingStrategy::Queue`] walks the graph once from its roots and
//!   computes the scan number each error would be placed in. A child lands in
//!   its parent's scan when the parent comes first in encounter order, and in
//!   the following scan otherwise. Sorting by `(scan, encounter index)` yields
//!   the same order in `O(N log N)`.

use std::collections::VecDeque;

use log::debug;
use serde::Deserialize;

use crate::{error::CompileError, graph::InheritanceGraph};

/// Algorithm used to order the compiled errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingStrategy {
    /// Root-first traversal with computed scan numbers.
    #[default]
    Queue,
    /// Repeated encounter-order scans.
    MultiPass,
}

/// Orders the nodes of `graph`, returning node indices in compiled order.
///
/// A graph without any parent link is returned in encounter order.
///
/// # Errors
///
/// Returns [`CompileError::InheritanceCycle`] if some error can never be
/// placed.
pub(crate) fn order(
    graph: &InheritanceGraph<'_>,
    strategy: OrderingStrategy,
) -> Result<Vec<usize>, CompileError> {
    if !graph.has_inheritance() {
        debug!(errors = graph.len(); "No inheritance, keeping encounter order");
        return Ok((0..graph.len()).collect());
    }

    match strategy {
        OrderingStrategy::Queue => queue(graph),
        OrderingStrategy::MultiPass => multi_pass(graph),
    }
}

fn multi_pass(graph: &InheritanceGraph<'_>) -> Result<Vec<usize>, CompileError> {
    let mut placed = vec![false; graph.len()];
    let mut ordered = Vec::with_capacity(graph.len());
    let mut passes = 0usize;

    while ordered.len() < graph.len() {
        let before = ordered.len();
        for idx in 0..graph.len() {
            if placed[idx] {
                continue;
            }
            if graph.parent(idx).is_none_or(|parent| placed[parent]) {
                placed[idx] = true;
                ordered.push(idx);
            }
        }
        passes += 1;

        if ordered.len() == before {
            let stuck = placed.iter().position(|done| !done).unwrap_or_default();
            return Err(cycle_through(graph, stuck));
        }
    }

    debug!(passes = passes; "Multi-pass ordering finished");
    Ok(ordered)
}

fn queue(graph: &InheritanceGraph<'_>) -> Result<Vec<usize>, CompileError> {
    let mut pass: Vec<Option<usize>> = vec![None; graph.len()];
    let mut pending: VecDeque<usize> = VecDeque::new();

    for root in graph.roots() {
        pass[root] = Some(0);
        pending.push_back(root);
    }

    while let Some(parent) = pending.pop_front() {
        let parent_pass = pass[parent].unwrap_or_default();
        for &child in graph.children(parent) {
            pass[child] = Some(parent_pass + usize::from(parent > child));
            pending.push_back(child);
        }
    }

    let mut keyed = Vec::with_capacity(graph.len());
    for (idx, p) in pass.iter().enumerate() {
        match p {
            Some(p) => keyed.push((*p, idx)),
            None => return Err(cycle_through(graph, idx)),
        }
    }
    keyed.sort_unstable();

    debug!(
        passes = keyed.last().map_or(0, |(p, _)| p + 1);
        "Queue ordering finished"
    );
    Ok(keyed.into_iter().map(|(_, idx)| idx).collect())
}

/// Builds the cycle error for a node that can never be placed.
///
/// Every ancestor of such a node is unplaceable too, so its parent chain
/// ends in a loop.
fn cycle_through(graph: &InheritanceGraph<'_>, start: usize) -> CompileError {
    let mut path = Vec::new();
    let mut current = Some(start);

    while let Some(idx) = current {
        if let Some(pos) = path.iter().position(|&p| p == idx) {
            let mut cycle: Vec<String> = path[pos..]
                .iter()
                .map(|&p| graph.name(p).to_string())
                .collect();
            cycle.push(graph.name(idx).to_string());
            return CompileError::InheritanceCycle { cycle };
        }
        path.push(idx);
        current = graph.parent(idx);
    }

    CompileError::InheritanceCycle {
        cycle: path.iter().map(|&p| graph.name(p).to_string()).collect(),
    }
}
