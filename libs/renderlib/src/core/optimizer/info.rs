// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Gathering of producer/consumer information for the optimizer.
//!
//! Every written resource in the input graph is considered, retained or not;
//! its producer and each consumer are located in the final task sequence to
//! obtain the order indices the aliasing phase works on.

use crate::core::compiler::Task;
use crate::core::graph::{AccessType, RenderGraph, Resource};
use crate::core::id::Id;

use super::usage::{UsagePoint, UsagePointSet};

#[derive(Debug, Clone)]
pub(crate) struct ConsumerInfo {
    pub pass_id: Id,
    pub task_index: i32,
    pub pass_name: String,
    pub resource_id: Id,
    pub resource_name: String,
    pub access: AccessType,
}

#[derive(Debug, Clone)]
pub(crate) struct ResourceInfo {
    pub origin_pass_id: Id,
    pub origin_task_index: i32,
    pub origin_pass_name: String,
    pub origin_resource: Resource,
    pub optimizable: bool,
    pub consumers: Vec<ConsumerInfo>,
}

/// Position of a pass in the task sequence; async companions share their
/// parent task's position. A pass absent from the schedule (culled) indexes
/// one past the timeline end.
fn task_index_of(tasks: &[Task], pass_id: Id) -> i32 {
    tasks
        .iter()
        .position(|task| task.contains(pass_id))
        .unwrap_or(tasks.len()) as i32
}

pub(crate) fn is_optimizable(resource: &Resource) -> bool {
    resource.ty == crate::core::graph::ResourceType::Image
}

/// Collect one entry per written resource, with its consumers resolved
/// through the graph's edges.
pub(crate) fn evaluate_required_resources(
    graph: &RenderGraph,
    tasks: &[Task],
) -> Vec<ResourceInfo> {
    let mut infos = Vec::new();

    for pass in graph.vertices() {
        for resource in pass
            .dependencies
            .iter()
            .filter(|resource| resource.access == AccessType::Write)
        {
            infos.push(ResourceInfo {
                origin_pass_id: pass.id,
                origin_task_index: task_index_of(tasks, pass.id),
                origin_pass_name: pass.name.clone(),
                origin_resource: resource.clone(),
                optimizable: is_optimizable(resource),
                consumers: Vec::new(),
            });
        }
    }

    for info in &mut infos {
        for edge in graph.edges() {
            if info.origin_pass_id != edge.src_pass
                || info.origin_pass_id == edge.dst_pass
                || info.origin_resource.id != edge.src_resource
            {
                continue;
            }

            let Some(consumer) = graph.get_pass_by_id(edge.dst_pass) else {
                continue;
            };
            let Some(resource) = consumer.resource_by_id(edge.dst_resource) else {
                continue;
            };

            info.consumers.push(ConsumerInfo {
                pass_id: consumer.id,
                task_index: task_index_of(tasks, consumer.id),
                pass_name: consumer.name.clone(),
                resource_id: resource.id,
                resource_name: resource.name.clone(),
                access: resource.access,
            });
        }
    }

    infos
}

/// One point for the producer, one per consumer. Consumers landing on an
/// occupied position are dropped by the set.
pub(crate) fn usage_points_for(info: &ResourceInfo) -> UsagePointSet {
    let mut points = UsagePointSet::new();

    points.insert(UsagePoint {
        point: info.origin_task_index,
        resource_id: info.origin_resource.id,
        resource_name: info.origin_resource.name.clone(),
        pass_id: info.origin_pass_id,
        pass_name: info.origin_pass_name.clone(),
        access: info.origin_resource.access,
    });

    for consumer in &info.consumers {
        points.insert(UsagePoint {
            point: consumer.task_index,
            resource_id: consumer.resource_id,
            resource_name: consumer.resource_name.clone(),
            pass_id: consumer.pass_id,
            pass_name: consumer.pass_name.clone(),
            access: consumer.access,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compiler::compile;
    use crate::core::compiler::CompilerOptions;
    use crate::core::graph::fixtures;

    fn deferred_tasks() -> (RenderGraph, Vec<Task>) {
        let graph = fixtures::deferred_shading_graph();
        let output = compile(
            &graph,
            CompilerOptions {
                allow_parallelization: true,
            },
        );
        let tasks = output.phases.unwrap().tasks;
        (graph, tasks)
    }

    #[test]
    fn test_gather_covers_every_write() {
        let (graph, tasks) = deferred_tasks();
        let infos = evaluate_required_resources(&graph, &tasks);

        // position/normal/albedo/motionVectors + lightingResult +
        // ambientOcclusionImage + combined.
        assert_eq!(infos.len(), 7);
        assert!(infos
            .iter()
            .all(|info| info.origin_resource.access == AccessType::Write));
    }

    #[test]
    fn test_async_companion_shares_parent_task_index() {
        let (graph, tasks) = deferred_tasks();
        let infos = evaluate_required_resources(&graph, &tasks);

        let lighting = infos
            .iter()
            .find(|info| info.origin_resource.name == "lightingResult")
            .unwrap();
        let ao = infos
            .iter()
            .find(|info| info.origin_resource.name == "ambientOcclusionImage")
            .unwrap();
        assert_eq!(lighting.origin_task_index, ao.origin_task_index);
    }

    #[test]
    fn test_consumers_resolve_resource_on_their_own_pass() {
        let (graph, tasks) = deferred_tasks();
        let infos = evaluate_required_resources(&graph, &tasks);

        // lightingResult is read by Composition under the name imageA.
        let lighting = infos
            .iter()
            .find(|info| info.origin_resource.name == "lightingResult")
            .unwrap();
        assert_eq!(lighting.consumers.len(), 1);
        assert_eq!(lighting.consumers[0].resource_name, "imageA");
        assert_eq!(lighting.consumers[0].access, AccessType::Read);
    }

    #[test]
    fn test_culled_producer_indexes_past_the_schedule() {
        let (mut graph, _) = deferred_tasks();
        let orphan = graph.add_pass(
            crate::core::graph::Pass::new("Orphan", Default::default())
                .with_resource(Resource::image("orphanOut", AccessType::Write)),
        );

        let output = compile(
            &graph,
            CompilerOptions {
                allow_parallelization: false,
            },
        );
        let tasks = output.phases.unwrap().tasks;
        assert!(tasks.iter().all(|task| !task.contains(orphan)));

        let infos = evaluate_required_resources(&graph, &tasks);
        let info = infos
            .iter()
            .find(|info| info.origin_resource.name == "orphanOut")
            .unwrap();
        assert_eq!(info.origin_task_index, tasks.len() as i32);
    }
}
