// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Graphviz DOT export of the pass adjacency.

use crate::core::graph::RenderGraph;

pub fn graph_dot(graph: &RenderGraph) -> String {
    let mut lines = vec!["digraph {".to_string()];

    for pass in graph.vertices() {
        for edge in graph.edges() {
            if edge.src_pass != pass.id {
                continue;
            }
            if let Some(dst) = graph.get_pass_by_id(edge.dst_pass) {
                lines.push(format!("\"{}\" -> \"{}\"", pass.name, dst.name));
            }
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}
