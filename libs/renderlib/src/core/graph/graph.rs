// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Render graph container.
//!
//! The graph exclusively owns its passes and edges, and mirrors the pass
//! adjacency into a `petgraph` digraph so the scheduling algorithms can walk
//! it without re-deriving neighbor lists. Mutation failures (self-loops,
//! unknown passes or resource names) are reported as boolean returns; they
//! are construction mistakes, not compiler errors.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::edge::Edge;
use super::pass::Pass;
use crate::core::id::{next_id, Id};

#[derive(Debug, Default)]
pub struct RenderGraph {
    adjacency: DiGraph<Id, ()>,
    node_map: HashMap<Id, NodeIndex>,
    passes: Vec<Pass>,
    edges: Vec<Edge>,
}

impl RenderGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pass to the graph. Ownership transfers to the graph; the
    /// returned id is the caller's handle.
    pub fn add_pass(&mut self, pass: Pass) -> Id {
        let id = pass.id;
        let index = self.adjacency.add_node(id);
        self.node_map.insert(id, index);
        self.passes.push(pass);
        id
    }

    /// Remove a pass and every edge incident to it.
    pub fn delete_pass(&mut self, pass_id: Id) -> bool {
        let Some(&index) = self.node_map.get(&pass_id) else {
            return false;
        };

        self.edges
            .retain(|edge| edge.src_pass != pass_id && edge.dst_pass != pass_id);

        // petgraph swap-removes: the node that held the last index now holds
        // `index` and its map entry must be repaired.
        let _ = self.adjacency.remove_node(index);
        self.node_map.remove(&pass_id);
        if let Some(&moved) = self.adjacency.node_weight(index) {
            self.node_map.insert(moved, index);
        }

        self.passes.retain(|pass| pass.id != pass_id);
        true
    }

    /// Insert an edge between two pass resources.
    ///
    /// Both endpoints and both named resources must exist; self-loops are
    /// rejected.
    pub fn insert_edge(&mut self, src: Id, src_res: &str, dst: Id, dst_res: &str) -> bool {
        if src == dst {
            return false;
        }

        let (Some(src_pass), Some(dst_pass)) = (self.get_pass_by_id(src), self.get_pass_by_id(dst))
        else {
            return false;
        };

        let Some(src_resource) = src_pass.resource_by_name(src_res) else {
            tracing::warn!("pass '{}' has no resource '{}'", src_pass.name, src_res);
            return false;
        };
        let Some(dst_resource) = dst_pass.resource_by_name(dst_res) else {
            tracing::warn!("pass '{}' has no resource '{}'", dst_pass.name, dst_res);
            return false;
        };

        let edge = Edge {
            id: next_id(),
            src_pass: src,
            dst_pass: dst,
            src_resource: src_resource.id,
            dst_resource: dst_resource.id,
        };

        self.adjacency
            .add_edge(self.node_map[&src], self.node_map[&dst], ());
        self.edges.push(edge);
        true
    }

    /// Remove the edge matching both endpoints and both named resources.
    pub fn delete_edge(&mut self, src: Id, src_res: &str, dst: Id, dst_res: &str) -> bool {
        if src == dst {
            return false;
        }

        let (Some(src_pass), Some(dst_pass)) = (self.get_pass_by_id(src), self.get_pass_by_id(dst))
        else {
            return false;
        };
        let (Some(src_resource), Some(dst_resource)) = (
            src_pass.resource_by_name(src_res),
            dst_pass.resource_by_name(dst_res),
        ) else {
            return false;
        };
        let (src_resource, dst_resource) = (src_resource.id, dst_resource.id);

        let Some(position) = self.edges.iter().position(|edge| {
            edge.src_pass == src
                && edge.dst_pass == dst
                && edge.src_resource == src_resource
                && edge.dst_resource == dst_resource
        }) else {
            return false;
        };
        self.edges.remove(position);

        // Drop one mirror edge between the pair; parallel edges share the
        // same endpoints and are interchangeable there.
        let (src_index, dst_index) = (self.node_map[&src], self.node_map[&dst]);
        if let Some(edge_index) = self
            .adjacency
            .edges_connecting(src_index, dst_index)
            .map(|edge| edge.id())
            .next()
        {
            self.adjacency.remove_edge(edge_index);
        }

        true
    }

    pub fn contains_edge(&self, src: Id, dst: Id) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.src_pass == src && edge.dst_pass == dst)
    }

    /// Edge test that also matches the resource endpoints by name.
    pub fn contains_edge_between(&self, src: Id, src_res: &str, dst: Id, dst_res: &str) -> bool {
        let (Some(src_pass), Some(dst_pass)) = (self.get_pass_by_id(src), self.get_pass_by_id(dst))
        else {
            return false;
        };
        let (Some(src_resource), Some(dst_resource)) = (
            src_pass.resource_by_name(src_res),
            dst_pass.resource_by_name(dst_res),
        ) else {
            return false;
        };

        self.edges.iter().any(|edge| {
            edge.src_pass == src
                && edge.dst_pass == dst
                && edge.src_resource == src_resource.id
                && edge.dst_resource == dst_resource.id
        })
    }

    /// Undirected edge test between two passes.
    pub fn contains_any_edge(&self, a: Id, b: Id) -> bool {
        self.contains_edge(a, b) || self.contains_edge(b, a)
    }

    pub fn get_pass_by_id(&self, id: Id) -> Option<&Pass> {
        self.passes.iter().find(|pass| pass.id == id)
    }

    /// Passes in insertion order.
    pub fn vertices(&self) -> &[Pass] {
        &self.passes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.passes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn adjacency(&self) -> &DiGraph<Id, ()> {
        &self.adjacency
    }

    pub(crate) fn node_index(&self, id: Id) -> Option<NodeIndex> {
        self.node_map.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::pass::{AccessType, PassFlags, Resource};

    fn writer_reader_pair() -> (RenderGraph, Id, Id) {
        let mut graph = RenderGraph::new();
        let writer = graph.add_pass(
            Pass::new("Writer", PassFlags::default())
                .with_resource(Resource::image("color", AccessType::Write)),
        );
        let reader = graph.add_pass(
            Pass::new("Reader", PassFlags::default())
                .with_resource(Resource::image("color", AccessType::Read)),
        );
        (graph, writer, reader)
    }

    #[test]
    fn test_insert_edge_validates_endpoints() {
        let (mut graph, writer, reader) = writer_reader_pair();

        assert!(graph.insert_edge(writer, "color", reader, "color"));
        assert!(graph.contains_edge(writer, reader));
        assert!(graph.contains_any_edge(reader, writer));

        // Self-loop, unknown resource and unknown pass are all rejected.
        assert!(!graph.insert_edge(writer, "color", writer, "color"));
        assert!(!graph.insert_edge(writer, "depth", reader, "color"));
        assert!(!graph.insert_edge(writer, "color", 987_654, "color"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_delete_edge_is_symmetric_to_insert() {
        let (mut graph, writer, reader) = writer_reader_pair();
        assert!(graph.insert_edge(writer, "color", reader, "color"));

        assert!(!graph.delete_edge(reader, "color", writer, "color"));
        assert!(graph.delete_edge(writer, "color", reader, "color"));
        assert!(!graph.delete_edge(writer, "color", reader, "color"));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_edge(writer, reader));
    }

    #[test]
    fn test_delete_pass_removes_incident_edges() {
        let (mut graph, writer, reader) = writer_reader_pair();
        assert!(graph.insert_edge(writer, "color", reader, "color"));

        assert!(graph.delete_pass(writer));
        assert!(graph.get_pass_by_id(writer).is_none());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 1);

        // The surviving pass stays addressable through the repaired mirror.
        assert!(graph.get_pass_by_id(reader).is_some());
        assert!(graph.node_index(reader).is_some());
        assert!(!graph.delete_pass(writer));
    }

    #[test]
    fn test_contains_edge_between_matches_resources() {
        let mut graph = RenderGraph::new();
        let writer = graph.add_pass(
            Pass::new("Writer", PassFlags::default())
                .with_resource(Resource::image("color", AccessType::Write))
                .with_resource(Resource::image("depth", AccessType::Write)),
        );
        let reader = graph.add_pass(
            Pass::new("Reader", PassFlags::default())
                .with_resource(Resource::image("color", AccessType::Read))
                .with_resource(Resource::image("depth", AccessType::Read)),
        );

        assert!(graph.insert_edge(writer, "color", reader, "color"));
        assert!(graph.contains_edge_between(writer, "color", reader, "color"));
        assert!(!graph.contains_edge_between(writer, "depth", reader, "depth"));
    }
}
