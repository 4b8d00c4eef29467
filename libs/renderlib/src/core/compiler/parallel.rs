// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Parallelizability analysis.
//!
//! For each non-sentinel pass, find the later non-sentinel passes it shares
//! no dependency relation with, direct or transitive. The analysis runs on a
//! shadow graph: a structural copy of the render graph that preserves pass
//! ids, collapses duplicate edges per endpoint pair, and is then closed
//! transitively. After closure, absence of an edge in both directions proves
//! independence.
//!
//! The closure is O(V^2) path tests; render graphs are tens of passes, so
//! the quadratic cost is irrelevant next to the proof it buys.

use std::collections::{BTreeMap, HashMap};

use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::error::{CompilerError, CompilerResult};
use crate::core::graph::RenderGraph;
use crate::core::id::Id;

/// Phase-private copy of the pass adjacency, keyed by pass id. Never escapes
/// this module and never draws from the id sequence.
struct ShadowGraph {
    adjacency: DiGraph<Id, ()>,
    nodes: HashMap<Id, NodeIndex>,
}

impl ShadowGraph {
    /// Copy the graph structure preserving ids. Multiple resource-level
    /// edges between the same two passes collapse to one.
    fn from_graph(graph: &RenderGraph) -> Self {
        let mut adjacency = DiGraph::new();
        let mut nodes = HashMap::new();

        for pass in graph.vertices() {
            nodes.insert(pass.id, adjacency.add_node(pass.id));
        }
        for edge in graph.edges() {
            adjacency.update_edge(nodes[&edge.src_pass], nodes[&edge.dst_pass], ());
        }

        Self { adjacency, nodes }
    }

    /// Insert a direct edge for every ordered pass pair connected by a path.
    /// Duplicate inserts are no-ops, so edges stay keyed by endpoint pair.
    fn close_transitively(&mut self) {
        let indices: Vec<NodeIndex> = self.adjacency.node_indices().collect();
        for &src in &indices {
            for &dst in &indices {
                if src != dst && has_path_connecting(&self.adjacency, src, dst, None) {
                    self.adjacency.update_edge(src, dst, ());
                }
            }
        }
    }

    fn contains_any_edge(&self, a: Id, b: Id) -> bool {
        let (a, b) = (self.nodes[&a], self.nodes[&b]);
        self.adjacency.find_edge(a, b).is_some() || self.adjacency.find_edge(b, a).is_some()
    }
}

/// Map each non-sentinel pass to the later passes that may run concurrently
/// with it. Entries with no candidates are dropped.
pub(crate) fn parallelizable_passes(
    graph: &RenderGraph,
    serial_order: &[Id],
) -> CompilerResult<BTreeMap<Id, Vec<Id>>> {
    let mut shadow = ShadowGraph::from_graph(graph);
    shadow.close_transitively();

    let ordered_passes = serial_order
        .iter()
        .map(|&id| graph.get_pass_by_id(id).ok_or(CompilerError::NoNodeByGivenId))
        .collect::<CompilerResult<Vec<_>>>()?;

    let mut can_run_in_parallel = BTreeMap::new();
    for (position, pass) in ordered_passes.iter().enumerate() {
        if pass.flags.sentinel {
            continue;
        }

        let independent: Vec<Id> = ordered_passes
            .iter()
            .skip(position + 1)
            .filter(|other| !other.flags.sentinel)
            .filter(|other| !shadow.contains_any_edge(pass.id, other.id))
            .map(|other| other.id)
            .collect();

        if !independent.is_empty() {
            tracing::debug!(
                "[ANALYZE] '{}' can pair with {} later pass(es)",
                pass.name,
                independent.len()
            );
            can_run_in_parallel.insert(pass.id, independent);
        }
    }

    Ok(can_run_in_parallel)
}
