// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Ready-made passes and demo graphs.
//!
//! These builders wire up a classic deferred-shading frame and a longer
//! variant with anti-aliasing and an extra async compute pass. They are used
//! by the examples, benchmarks and tests; production callers declare their
//! own passes.

use super::graph::RenderGraph;
use super::pass::{AccessType, Pass, PassFlags, Resource, PRESENT_PASS_NAME, ROOT_PASS_NAME};

pub fn sentinel_begin_pass() -> Pass {
    Pass::new(
        ROOT_PASS_NAME,
        PassFlags {
            never_cull: true,
            sentinel: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::external("scene"))
}

pub fn sentinel_present_pass() -> Pass {
    Pass::new(
        PRESENT_PASS_NAME,
        PassFlags {
            raster: true,
            never_cull: true,
            sentinel: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::image("presentImage", AccessType::Read))
}

pub fn graphics_gbuffer_pass() -> Pass {
    Pass::new(
        "G-Buffer Pass",
        PassFlags {
            raster: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::external("scene"))
    .with_resource(Resource::image("positionImage", AccessType::Write))
    .with_resource(Resource::image("normalImage", AccessType::Write))
    .with_resource(Resource::image("albedoImage", AccessType::Write))
    .with_resource(Resource::image("motionVectors", AccessType::Write))
}

pub fn graphics_lighting_pass() -> Pass {
    Pass::new(
        "Lighting Pass",
        PassFlags {
            raster: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::image("positionImage", AccessType::Read))
    .with_resource(Resource::image("normalImage", AccessType::Read))
    .with_resource(Resource::image("albedoImage", AccessType::Read))
    .with_resource(Resource::image("lightingResult", AccessType::Write))
}

pub fn compute_ambient_occlusion_pass() -> Pass {
    Pass::new(
        "Ambient Occlusion Pass",
        PassFlags {
            raster: true,
            compute: true,
            async_queue: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::image("positionImage", AccessType::Read))
    .with_resource(Resource::image("normalImage", AccessType::Read))
    .with_resource(Resource::image("ambientOcclusionImage", AccessType::Write))
}

pub fn compute_async_pass() -> Pass {
    Pass::new(
        "AsyncCompute Pass",
        PassFlags {
            compute: true,
            async_queue: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::external("scene"))
    .with_resource(Resource::image("someImage", AccessType::Write))
}

pub fn util_composition_pass() -> Pass {
    Pass::new(
        "Composition Pass",
        PassFlags {
            raster: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::image("imageA", AccessType::Read))
    .with_resource(Resource::image("imageB", AccessType::Read))
    .with_resource(Resource::image("combined", AccessType::Write))
}

pub fn graphics_anti_aliasing_pass() -> Pass {
    Pass::new(
        "Anti-Aliasing Pass",
        PassFlags {
            raster: true,
            ..Default::default()
        },
    )
    .with_resource(Resource::image("motionVectors", AccessType::Read))
    .with_resource(Resource::image("aaInput", AccessType::Read))
    .with_resource(Resource::image("aaOutput", AccessType::Write))
}

/// Root -> G-Buffer -> {Lighting, AO} -> Composition -> Present.
pub fn deferred_shading_graph() -> RenderGraph {
    let mut graph = RenderGraph::new();

    let begin = graph.add_pass(sentinel_begin_pass());
    let gbuffer = graph.add_pass(graphics_gbuffer_pass());
    let lighting = graph.add_pass(graphics_lighting_pass());
    let ao = graph.add_pass(compute_ambient_occlusion_pass());
    let composition = graph.add_pass(util_composition_pass());
    let present = graph.add_pass(sentinel_present_pass());

    let inserts = [
        graph.insert_edge(begin, "scene", gbuffer, "scene"),
        graph.insert_edge(gbuffer, "positionImage", lighting, "positionImage"),
        graph.insert_edge(gbuffer, "normalImage", lighting, "normalImage"),
        graph.insert_edge(gbuffer, "albedoImage", lighting, "albedoImage"),
        graph.insert_edge(gbuffer, "positionImage", ao, "positionImage"),
        graph.insert_edge(gbuffer, "normalImage", ao, "normalImage"),
        graph.insert_edge(lighting, "lightingResult", composition, "imageA"),
        graph.insert_edge(ao, "ambientOcclusionImage", composition, "imageB"),
        graph.insert_edge(composition, "combined", present, "presentImage"),
    ];
    assert!(inserts.iter().all(|&ok| ok), "fixture edge insertion failed");

    graph
}

/// The deferred frame extended with anti-aliasing, a second composition and
/// an independent async compute pass.
pub fn extended_deferred_graph() -> RenderGraph {
    let mut graph = RenderGraph::new();

    let begin = graph.add_pass(sentinel_begin_pass());
    let some_compute = graph.add_pass(compute_async_pass());
    let gbuffer = graph.add_pass(graphics_gbuffer_pass());
    let lighting = graph.add_pass(graphics_lighting_pass());
    let ao = graph.add_pass(compute_ambient_occlusion_pass());
    let composition = graph.add_pass(util_composition_pass());
    let aa = graph.add_pass(graphics_anti_aliasing_pass());
    let composition2 = graph.add_pass(util_composition_pass());
    let present = graph.add_pass(sentinel_present_pass());

    let inserts = [
        graph.insert_edge(begin, "scene", gbuffer, "scene"),
        graph.insert_edge(begin, "scene", some_compute, "scene"),
        graph.insert_edge(gbuffer, "positionImage", lighting, "positionImage"),
        graph.insert_edge(gbuffer, "normalImage", lighting, "normalImage"),
        graph.insert_edge(gbuffer, "albedoImage", lighting, "albedoImage"),
        graph.insert_edge(gbuffer, "positionImage", ao, "positionImage"),
        graph.insert_edge(gbuffer, "normalImage", ao, "normalImage"),
        graph.insert_edge(lighting, "lightingResult", composition, "imageA"),
        graph.insert_edge(ao, "ambientOcclusionImage", composition, "imageB"),
        graph.insert_edge(composition, "combined", aa, "aaInput"),
        graph.insert_edge(gbuffer, "motionVectors", aa, "motionVectors"),
        graph.insert_edge(aa, "aaOutput", composition2, "imageA"),
        graph.insert_edge(some_compute, "someImage", composition2, "imageB"),
        graph.insert_edge(composition2, "combined", present, "presentImage"),
    ];
    assert!(inserts.iter().all(|&ok| ok), "fixture edge insertion failed");

    graph
}
