// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! JSON export of a compiled graph.
//!
//! Pure serialization of already-computed output; callers decide where the
//! document goes.

use serde_json::{json, Value};

use crate::core::compiler::CompilerOutput;
use crate::core::graph::RenderGraph;
use crate::core::id::Id;

fn pass_name(graph: &RenderGraph, id: Id) -> String {
    graph
        .get_pass_by_id(id)
        .map(|pass| pass.name.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Build the export document for a compiled graph. Returns `None` when the
/// compile failed and there are no phase outputs to serialize.
pub fn compiler_output_json(output: &CompilerOutput, graph: &RenderGraph) -> Option<Value> {
    let phases = output.phases.as_ref()?;

    let nodes: Vec<Value> = graph
        .vertices()
        .iter()
        .map(|pass| {
            json!({
                "id": pass.id,
                "name": pass.name,
                "dependencies": pass
                    .dependencies
                    .iter()
                    .map(|resource| json!({
                        "id": resource.id,
                        "name": resource.name,
                        "type": resource.ty,
                        "access": resource.access,
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let edges: Vec<Value> = graph
        .edges()
        .iter()
        .map(|edge| {
            json!({
                "id": edge.id,
                "srcNodeId": edge.src_pass,
                "srcRes": edge.src_resource,
                "dstNodeId": edge.dst_pass,
                "dstRes": edge.dst_resource,
            })
        })
        .collect();

    let serial_order: Vec<Value> = phases
        .serial_order
        .iter()
        .map(|&id| json!({ "id": id, "name": pass_name(graph, id) }))
        .collect();

    let parallelizable: Vec<Value> = phases
        .parallelizable
        .iter()
        .map(|(&id, candidates)| {
            json!([
                pass_name(graph, id),
                candidates
                    .iter()
                    .map(|&candidate| pass_name(graph, candidate))
                    .collect::<Vec<_>>(),
            ])
        })
        .collect();

    let tasks: Vec<Value> = phases
        .tasks
        .iter()
        .map(|task| {
            json!({
                "pass": pass_name(graph, task.pass),
                "async": task
                    .async_pass
                    .map(|id| pass_name(graph, id))
                    .unwrap_or_else(|| "null".to_string()),
            })
        })
        .collect();

    let resources: Vec<Value> = phases
        .optimizer
        .generated_resources
        .iter()
        .map(|generated| {
            json!({
                "id": generated.id,
                "type": generated.ty,
                "usagePoints": generated.usage_points,
            })
        })
        .collect();

    Some(json!({
        "compilerOptions": {
            "allowParallelization": output.options.allow_parallelization,
        },
        "inputGraph": {
            "nodes": nodes,
            "edges": edges,
        },
        "serialExecutionOrder": serial_order,
        "parallelizableNodes": parallelizable,
        "generatedTasks": tasks,
        "resourceOptimizerResult": {
            "timelineLength": phases.optimizer.timeline_range.end,
            "preCount": phases.optimizer.pre_count,
            "postCount": phases.optimizer.post_count,
            "reduction": phases.optimizer.reduction,
            "resources": resources,
        },
    }))
}
