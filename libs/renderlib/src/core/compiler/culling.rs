// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Reachability culling.
//!
//! Passes whose outputs nobody consumes are unreachable from the root
//! sentinel and dropped. `never_cull` passes are retained regardless, since
//! required terminal work such as presentation may not sit on the
//! reachability frontier in every topology.

use std::collections::BTreeSet;

use crate::core::error::{CompilerError, CompilerResult};
use crate::core::graph::{reachable_from, RenderGraph};
use crate::core::id::Id;

/// Compute the retained pass set: BFS from the root sentinel, unioned with
/// every `never_cull` pass. Returns ids in ascending order; the underlying
/// passes are not touched.
pub(crate) fn cull_nodes(graph: &RenderGraph) -> CompilerResult<Vec<Id>> {
    let root = graph
        .vertices()
        .iter()
        .find(|pass| pass.is_root())
        .ok_or(CompilerError::NoRootNode)?;

    let mut retained: BTreeSet<Id> = graph
        .vertices()
        .iter()
        .filter(|pass| pass.flags.never_cull)
        .map(|pass| pass.id)
        .collect();
    retained.extend(reachable_from(graph, root.id));

    tracing::debug!(
        "[CULL] retained {}/{} passes",
        retained.len(),
        graph.vertex_count()
    );

    Ok(retained.into_iter().collect())
}
