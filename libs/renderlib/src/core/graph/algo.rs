// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Graph primitives: reachability, path tests and topological ordering.
//!
//! All three operate on the owning [`RenderGraph`] without mutating it.

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::algo::has_path_connecting;
use petgraph::visit::{Bfs, EdgeRef};
use petgraph::Direction;
use thiserror::Error;

use super::graph::RenderGraph;
use crate::core::id::Id;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("graph is not acyclic")]
    GraphNotAcyclic,
    #[error("vertex id does not resolve to a pass")]
    UnknownVertex,
}

/// Breadth-first reachability from `root`, following outgoing edges.
/// The root itself is part of the returned set.
pub fn reachable_from(graph: &RenderGraph, root: Id) -> BTreeSet<Id> {
    let mut visited = BTreeSet::new();
    let Some(start) = graph.node_index(root) else {
        return visited;
    };

    let adjacency = graph.adjacency();
    let mut bfs = Bfs::new(adjacency, start);
    while let Some(index) = bfs.next(adjacency) {
        visited.insert(adjacency[index]);
    }
    visited
}

/// Does a directed path exist from `src` to `dst`? A vertex always reaches
/// itself.
pub fn has_path(graph: &RenderGraph, src: Id, dst: Id) -> bool {
    if src == dst {
        return true;
    }
    let (Some(src_index), Some(dst_index)) = (graph.node_index(src), graph.node_index(dst)) else {
        return false;
    };
    has_path_connecting(graph.adjacency(), src_index, dst_index, None)
}

/// Kahn's algorithm over the given vertex subset.
///
/// In-degrees count only edges internal to the subset, with multiplicity.
/// When several vertices are simultaneously available, the one earliest in
/// the input list is emitted first; downstream phases observe that order, so
/// it must stay stable.
pub fn topological_sort(graph: &RenderGraph, vertices: &[Id]) -> Result<Vec<Id>, SortError> {
    let subset: HashSet<Id> = vertices.iter().copied().collect();
    let positions: HashMap<Id, usize> = vertices
        .iter()
        .enumerate()
        .map(|(position, &id)| (id, position))
        .collect();
    let adjacency = graph.adjacency();

    let mut indices = Vec::with_capacity(vertices.len());
    let mut in_degrees = Vec::with_capacity(vertices.len());
    for &id in vertices {
        let index = graph.node_index(id).ok_or(SortError::UnknownVertex)?;
        let degree = adjacency
            .edges_directed(index, Direction::Incoming)
            .filter(|edge| subset.contains(&adjacency[edge.source()]))
            .count();
        indices.push(index);
        in_degrees.push(degree);
    }

    let mut ready: BTreeSet<usize> = in_degrees
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(position, _)| position)
        .collect();

    let mut order = Vec::with_capacity(vertices.len());
    while let Some(&position) = ready.iter().next() {
        ready.remove(&position);
        order.push(vertices[position]);

        for edge in adjacency.edges_directed(indices[position], Direction::Outgoing) {
            let Some(&successor) = positions.get(&adjacency[edge.target()]) else {
                continue;
            };
            in_degrees[successor] -= 1;
            if in_degrees[successor] == 0 {
                ready.insert(successor);
            }
        }
    }

    if order.len() != vertices.len() {
        return Err(SortError::GraphNotAcyclic);
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::pass::{AccessType, Pass, PassFlags, Resource};

    fn chain_pass(name: &str, input: Option<&str>, output: &str) -> Pass {
        let mut pass = Pass::new(name, PassFlags::default())
            .with_resource(Resource::image(output, AccessType::Write));
        if let Some(input) = input {
            pass = pass.with_resource(Resource::image(input, AccessType::Read));
        }
        pass
    }

    /// a -> b -> c, with d detached.
    fn diamond_free_graph() -> (RenderGraph, [Id; 4]) {
        let mut graph = RenderGraph::new();
        let a = graph.add_pass(chain_pass("a", None, "out_a"));
        let b = graph.add_pass(chain_pass("b", Some("out_a"), "out_b"));
        let c = graph.add_pass(chain_pass("c", Some("out_b"), "out_c"));
        let d = graph.add_pass(chain_pass("d", None, "out_d"));
        assert!(graph.insert_edge(a, "out_a", b, "out_a"));
        assert!(graph.insert_edge(b, "out_b", c, "out_b"));
        (graph, [a, b, c, d])
    }

    #[test]
    fn test_reachability_includes_root_and_skips_detached() {
        let (graph, [a, b, c, d]) = diamond_free_graph();
        let reached = reachable_from(&graph, a);
        assert!(reached.contains(&a));
        assert!(reached.contains(&b));
        assert!(reached.contains(&c));
        assert!(!reached.contains(&d));
    }

    #[test]
    fn test_has_path_is_reflexive_and_directed() {
        let (graph, [a, _, c, d]) = diamond_free_graph();
        assert!(has_path(&graph, a, a));
        assert!(has_path(&graph, a, c));
        assert!(!has_path(&graph, c, a));
        assert!(!has_path(&graph, a, d));
    }

    #[test]
    fn test_topological_sort_respects_edges() {
        let (graph, [a, b, c, d]) = diamond_free_graph();
        let order = topological_sort(&graph, &[a, b, c, d]).unwrap();
        let index = |id| order.iter().position(|&x| x == id).unwrap();
        assert!(index(a) < index(b));
        assert!(index(b) < index(c));
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_topological_sort_tie_break_follows_input_order() {
        let (graph, [a, b, c, d]) = diamond_free_graph();
        // a and d are both available immediately; input order decides.
        let order = topological_sort(&graph, &[d, a, b, c]).unwrap();
        assert_eq!(order[0], d);
        let order = topological_sort(&graph, &[a, b, c, d]).unwrap();
        assert_eq!(order[0], a);
    }

    #[test]
    fn test_topological_sort_detects_cycle() {
        let mut graph = RenderGraph::new();
        let a = graph.add_pass(
            Pass::new("a", PassFlags::default())
                .with_resource(Resource::image("x", AccessType::Write))
                .with_resource(Resource::image("y", AccessType::Read)),
        );
        let b = graph.add_pass(
            Pass::new("b", PassFlags::default())
                .with_resource(Resource::image("x", AccessType::Read))
                .with_resource(Resource::image("y", AccessType::Write)),
        );
        assert!(graph.insert_edge(a, "x", b, "x"));
        assert!(graph.insert_edge(b, "y", a, "y"));

        assert_eq!(
            topological_sort(&graph, &[a, b]),
            Err(SortError::GraphNotAcyclic)
        );
    }

    #[test]
    fn test_topological_sort_ignores_edges_from_outside_the_subset() {
        let (graph, [a, b, c, _]) = diamond_free_graph();
        // b's only incoming edge originates outside the subset, so it seeds
        // the queue.
        let order = topological_sort(&graph, &[b, c]).unwrap();
        assert_eq!(order, vec![b, c]);
        let _ = a;
    }

    #[test]
    fn test_topological_sort_rejects_unknown_ids() {
        let (graph, [a, ..]) = diamond_free_graph();
        assert_eq!(
            topological_sort(&graph, &[a, 123_456_789]),
            Err(SortError::UnknownVertex)
        );
    }
}
