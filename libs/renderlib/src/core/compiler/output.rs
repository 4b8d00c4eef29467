// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Compiler output structures.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::options::CompilerOptions;
use crate::core::error::CompilerError;
use crate::core::id::Id;
use crate::core::optimizer::{OptimizerOutput, ResourceTemplate};

/// A schedulable unit: one primary pass and, when fusion found an eligible
/// partner, an async companion that may run concurrently on a second queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Task {
    pub pass: Id,
    pub async_pass: Option<Id>,
}

impl Task {
    pub fn serial(pass: Id) -> Self {
        Self {
            pass,
            async_pass: None,
        }
    }

    /// Does the task schedule this pass, on either queue?
    pub fn contains(&self, pass_id: Id) -> bool {
        self.pass == pass_id || self.async_pass == Some(pass_id)
    }
}

/// Per-phase artifacts of a successful compile, kept for downstream
/// visualization and export.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseOutputs {
    /// Pass ids retained after culling, ascending.
    pub culled_nodes: Vec<Id>,
    /// Canonical serial execution order.
    pub serial_order: Vec<Id>,
    /// Pass id to the later passes it shares no dependency relation with.
    pub parallelizable: BTreeMap<Id, Vec<Id>>,
    /// Fused schedule.
    pub tasks: Vec<Task>,
    /// Resource aliasing result.
    pub optimizer: OptimizerOutput,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompilerOutput {
    pub has_failed: bool,
    pub fail_reason: Option<CompilerError>,
    pub options: CompilerOptions,
    pub phases: Option<PhaseOutputs>,
    pub resource_templates: Vec<ResourceTemplate>,
}

impl CompilerOutput {
    pub(crate) fn failure(reason: CompilerError, options: CompilerOptions) -> Self {
        Self {
            has_failed: true,
            fail_reason: Some(reason),
            options,
            phases: None,
            resource_templates: Vec::new(),
        }
    }
}

impl fmt::Display for CompilerOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.phases, self.fail_reason) {
            (Some(phases), _) => write!(
                f,
                "{} tasks, {} -> {} resources (reduction {})",
                phases.tasks.len(),
                phases.optimizer.pre_count,
                phases.optimizer.post_count,
                phases.optimizer.reduction,
            ),
            (None, Some(reason)) => write!(f, "failed: {reason}"),
            (None, None) => write!(f, "empty"),
        }
    }
}
