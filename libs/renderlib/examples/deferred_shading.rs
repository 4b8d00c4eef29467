//! Deferred Shading Example
//!
//! Builds the demo deferred-shading graph, compiles it with parallelization
//! enabled and prints the schedule plus the exporter output.

use anyhow::Result;
use renderlib::core::export;
use renderlib::core::graph::fixtures;
use renderlib::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let graph = fixtures::deferred_shading_graph();
    let output = compile(
        &graph,
        CompilerOptions {
            allow_parallelization: true,
        },
    );

    if output.has_failed {
        anyhow::bail!("compile failed: {:?}", output.fail_reason);
    }

    let phases = output.phases.as_ref().expect("successful compile");

    println!("Tasks:");
    for (index, task) in phases.tasks.iter().enumerate() {
        let name = |id: Id| {
            graph
                .get_pass_by_id(id)
                .map(|pass| pass.name.clone())
                .unwrap_or_default()
        };
        match task.async_pass {
            Some(async_pass) => {
                println!("  #{index} {} | {} [async]", name(task.pass), name(async_pass))
            }
            None => println!("  #{index} {}", name(task.pass)),
        }
    }

    println!();
    println!(
        "Resources: {} logical -> {} physical (reduction {})",
        phases.optimizer.pre_count, phases.optimizer.post_count, phases.optimizer.reduction
    );

    println!();
    println!("--- graph.mermaid ---");
    println!("{}", export::graph_flowchart(&graph));

    if let Some(gantt) = export::schedule_gantt(&output, &graph) {
        println!();
        println!("--- schedule.mermaid ---");
        println!("{gantt}");
    }

    if let Some(document) = export::compiler_output_json(&output, &graph) {
        println!();
        println!("--- graphExport.json ---");
        println!("{}", serde_json::to_string_pretty(&document)?);
    }

    Ok(())
}
