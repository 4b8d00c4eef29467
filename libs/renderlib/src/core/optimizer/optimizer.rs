// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Resource lifetime aliasing.
//!
//! Logical image resources whose usage ranges do not overlap in the task
//! schedule can share one physical slot. This is interval-graph coloring
//! solved by first-fit: walk the logical resources in input order and drop
//! each into the first existing slot whose range is free, allocating a fresh
//! slot when none fits. Non-image resources and resources flagged
//! `dont_optimize` always occupy a slot of their own.

use serde::Serialize;

use crate::core::compiler::Task;
use crate::core::graph::{RenderGraph, Resource, ResourceType};
use crate::core::id::{next_id, Id};

use super::info::{evaluate_required_resources, usage_points_for};
use super::usage::{Range, UsagePoint, UsagePointSet};

/// A physical resource slot: one or more logical lifetimes coalesced into
/// shared storage.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedResource {
    pub id: Id,
    pub usage_points: UsagePointSet,
    /// The logical resource that first claimed this slot.
    pub original_resource: Resource,
    /// Producer of that logical resource.
    pub origin_pass: Id,
    #[serde(rename = "type")]
    pub ty: ResourceType,
}

impl OptimizedResource {
    pub fn usage_range(&self) -> Range {
        self.usage_points.range()
    }

    pub fn usage_point_at(&self, point: i32) -> Option<&UsagePoint> {
        self.usage_points.get(point)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizerOutput {
    /// Physical slots, in allocation order.
    pub generated_resources: Vec<OptimizedResource>,
    /// The logical resources that went in, for reporting.
    pub original_resources: Vec<Resource>,
    pub non_optimizables: i32,
    pub reduction: i32,
    pub pre_count: i32,
    pub post_count: i32,
    pub timeline_range: Range,
}

/// Run the aliasing phase. Never fails; pathological input simply reports
/// zero reduction.
pub(crate) fn optimize_resources(graph: &RenderGraph, tasks: &[Task]) -> OptimizerOutput {
    let infos = evaluate_required_resources(graph, tasks);
    let mut generated: Vec<OptimizedResource> = Vec::new();
    let mut non_optimizables = 0i32;

    for info in &infos {
        let usage_points = usage_points_for(info);
        let incoming_range = usage_points.range();
        let candidate = OptimizedResource {
            id: next_id(),
            usage_points,
            original_resource: info.origin_resource.clone(),
            origin_pass: info.origin_pass_id,
            ty: info.origin_resource.ty,
        };

        if !info.optimizable || info.origin_resource.flags.dont_optimize {
            generated.push(candidate);
            non_optimizables += 1;
            continue;
        }

        if generated.is_empty() {
            generated.push(candidate);
            continue;
        }

        let mut was_inserted = false;
        for slot in &mut generated {
            // Slots seeded by a non-aliasable resource stay private.
            if slot.ty != ResourceType::Image || slot.original_resource.flags.dont_optimize {
                continue;
            }
            if !slot.usage_range().overlaps(&incoming_range) {
                was_inserted = slot.usage_points.merge(&candidate.usage_points);
                if was_inserted {
                    break;
                }
            }
        }

        if !was_inserted {
            generated.push(candidate);
        }
    }

    let pre_count = infos.len() as i32;
    let post_count = generated.len() as i32;
    tracing::info!(
        "[OPTIMIZE] {} logical -> {} physical resources ({} non-optimizable)",
        pre_count,
        post_count,
        non_optimizables
    );

    OptimizerOutput {
        generated_resources: generated,
        original_resources: infos
            .iter()
            .map(|info| info.origin_resource.clone())
            .collect(),
        non_optimizables,
        reduction: pre_count - post_count,
        pre_count,
        post_count,
        timeline_range: Range::new(0, graph.vertex_count() as i32),
    }
}
