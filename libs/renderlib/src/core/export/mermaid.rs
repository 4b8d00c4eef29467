// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Mermaid export: a flowchart of the input graph and a gantt chart of the
//! compiled schedule.

use std::collections::BTreeMap;

use crate::core::compiler::CompilerOutput;
use crate::core::graph::{AccessType, RenderGraph, ResourceType};
use crate::core::id::Id;

fn pass_name(graph: &RenderGraph, id: Id) -> String {
    graph
        .get_pass_by_id(id)
        .map(|pass| pass.name.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Flowchart of passes and the resources flowing between them.
pub fn graph_flowchart(graph: &RenderGraph) -> String {
    let mut lines = vec![
        "flowchart TD".to_string(),
        "classDef resImage color:#4c4f69,fill:#cba6f7,stroke:#8839ef,stroke-width:1px;".to_string(),
        "classDef resOther color:#4c4f69,fill:#f38ba8,stroke:#d20f39,stroke-width:1px;".to_string(),
        "classDef pass color:#4c4f69,fill:#b4befe,stroke:#7287fd,stroke-width:1px;".to_string(),
    ];

    for pass in graph.vertices() {
        lines.push(format!("{}[{}]:::pass", pass.id, pass.name));
        for edge in graph.edges() {
            if edge.src_pass != pass.id {
                continue;
            }
            let Some(resource) = pass.resource_by_id(edge.src_resource) else {
                continue;
            };
            let class = if resource.ty == ResourceType::Image {
                "resImage"
            } else {
                "resOther"
            };
            let line = format!("{}({}):::{}", resource.name, resource.name, class);
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
    }

    for pass in graph.vertices() {
        for edge in graph.edges() {
            if edge.src_pass != pass.id {
                continue;
            }
            let Some(resource) = pass.resource_by_id(edge.src_resource) else {
                continue;
            };
            let producer_arrow = format!("{} --> {}", pass.id, resource.name);
            if !lines.contains(&producer_arrow) {
                lines.push(producer_arrow);
            }
            let consumer_arrow = format!("{} --> {}", resource.name, edge.dst_pass);
            if !lines.contains(&consumer_arrow) {
                lines.push(consumer_arrow);
            }
        }
    }

    lines.join("\n")
}

/// Gantt chart of the fused schedule: one row per task, async companions in
/// their own section, and the aliased lifetime spans of every physical
/// resource.
pub fn schedule_gantt(output: &CompilerOutput, graph: &RenderGraph) -> Option<String> {
    let phases = output.phases.as_ref()?;

    let mut lines = vec![
        "---".to_string(),
        "displayMode: compact".to_string(),
        "---".to_string(),
        "gantt".to_string(),
        "\tdateFormat X".to_string(),
        "\taxisFormat %s".to_string(),
        "\tsection Passes".to_string(),
    ];

    for (index, task) in phases.tasks.iter().enumerate() {
        lines.push(format!(
            "\t\t{} : {}, {}",
            pass_name(graph, task.pass),
            index,
            index + 1
        ));
    }

    lines.push("\tsection Async".to_string());
    for (index, task) in phases.tasks.iter().enumerate() {
        if let Some(async_pass) = task.async_pass {
            lines.push(format!(
                "\t\t{} :crit, {}, {}",
                pass_name(graph, async_pass),
                index,
                index + 1
            ));
        }
    }

    for (index, resource) in phases.optimizer.generated_resources.iter().enumerate() {
        lines.push(format!("\tsection Resource #{index}"));

        // A read keeps the label of the write it follows, so each aliased
        // lifetime shows up as one span under its producing name.
        let mut points: Vec<(i32, String, AccessType)> = resource
            .usage_points
            .iter()
            .map(|point| (point.point, point.resource_name.clone(), point.access))
            .collect();
        for j in 1..points.len() {
            if points[j - 1].2 == AccessType::Write {
                points[j].1 = points[j - 1].1.clone();
            }
        }

        let mut spans: BTreeMap<String, (i32, i32)> = BTreeMap::new();
        for (point, name, _) in &points {
            spans
                .entry(name.clone())
                .and_modify(|span| span.1 = *point)
                .or_insert((*point, *point));
        }

        for (name, (start, end)) in &spans {
            lines.push(format!("\t\t{} : {}, {}", name, start, end + 1));
        }
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compiler::{compile, CompilerOptions};
    use crate::core::graph::fixtures;

    #[test]
    fn test_flowchart_lists_passes_and_resources() {
        let graph = fixtures::deferred_shading_graph();
        let chart = graph_flowchart(&graph);

        assert!(chart.starts_with("flowchart TD"));
        for pass in graph.vertices() {
            assert!(chart.contains(&format!("{}[{}]:::pass", pass.id, pass.name)));
        }
        assert!(chart.contains("positionImage(positionImage):::resImage"));
        assert!(chart.contains("scene(scene):::resOther"));
    }

    #[test]
    fn test_flowchart_deduplicates_arrows() {
        let graph = fixtures::deferred_shading_graph();
        let chart = graph_flowchart(&graph);

        let gbuffer = graph
            .vertices()
            .iter()
            .find(|pass| pass.name == "G-Buffer Pass")
            .unwrap();
        // positionImage feeds both Lighting and AO but is produced once.
        let arrow = format!("{} --> positionImage", gbuffer.id);
        assert_eq!(chart.matches(&arrow).count(), 1);
    }

    #[test]
    fn test_gantt_places_async_pass_in_its_own_section() {
        let graph = fixtures::deferred_shading_graph();
        let output = compile(
            &graph,
            CompilerOptions {
                allow_parallelization: true,
            },
        );
        let chart = schedule_gantt(&output, &graph).unwrap();

        assert!(chart.contains("section Passes"));
        assert!(chart.contains("section Async"));
        assert!(chart.contains("Ambient Occlusion Pass :crit,"));
        assert!(chart.contains("section Resource #0"));
    }

    #[test]
    fn test_gantt_is_none_for_failed_compiles() {
        let graph = RenderGraph::new();
        let output = compile(&graph, CompilerOptions::default());
        assert!(schedule_gantt(&output, &graph).is_none());
    }
}
