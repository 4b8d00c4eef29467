// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Serial execution ordering of the retained passes.

use crate::core::error::{CompilerError, CompilerResult};
use crate::core::graph::{topological_sort, RenderGraph, SortError};
use crate::core::id::Id;

/// Topologically sort the retained passes. The produced order is the
/// canonical execution sequence assumed by every later phase; its positions
/// define the order indices used by usage points.
pub(crate) fn serial_order(graph: &RenderGraph, retained: &[Id]) -> CompilerResult<Vec<Id>> {
    topological_sort(graph, retained).map_err(|error| match error {
        SortError::GraphNotAcyclic => CompilerError::CyclicDependency,
        SortError::UnknownVertex => CompilerError::NoNodeByGivenId,
    })
}
