// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Resource template synthesis.
//!
//! Turns each physical resource into explicit producer/consumer links:
//! every usage point is paired with the slot's origin pass, giving the host
//! a flat description of who feeds whom through which physical slot.

use serde::Serialize;

use crate::core::error::{CompilerError, CompilerResult};
use crate::core::graph::{AccessType, RenderGraph, ResourceType};
use crate::core::id::Id;

use super::optimizer::OptimizerOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub src_pass: Id,
    pub dst_pass: Id,
    pub src_resource: Id,
    pub dst_resource: Id,
    pub access: AccessType,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceTemplate {
    pub id: Id,
    #[serde(rename = "type")]
    pub ty: ResourceType,
    pub links: Vec<ResourceLink>,
}

pub(crate) fn resource_templates(
    graph: &RenderGraph,
    optimizer_output: &OptimizerOutput,
) -> CompilerResult<Vec<ResourceTemplate>> {
    let mut templates = Vec::with_capacity(optimizer_output.generated_resources.len());

    for generated in &optimizer_output.generated_resources {
        let origin = graph
            .get_pass_by_id(generated.origin_pass)
            .ok_or(CompilerError::NoNodeByGivenId)?;

        let links = generated
            .usage_points
            .iter()
            .map(|point| ResourceLink {
                src_pass: origin.id,
                dst_pass: point.pass_id,
                src_resource: generated.original_resource.id,
                dst_resource: point.resource_id,
                access: point.access,
            })
            .collect();

        templates.push(ResourceTemplate {
            id: generated.id,
            ty: generated.ty,
            links,
        });
    }

    Ok(templates)
}
