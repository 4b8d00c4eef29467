// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Task fusion.
//!
//! Walks the serial order and greedily pairs each unplaced pass with its
//! first async-capable independent candidate. A budget equal to the number
//! of passes with candidates throttles how early the walk gives up on a
//! pass: a pass with no options only degrades to a plain serial task once
//! that budget is spent, keeping later interleaving opportunities open.

use std::collections::{BTreeMap, HashSet};

use super::options::CompilerOptions;
use super::output::Task;
use crate::core::error::{CompilerError, CompilerResult};
use crate::core::graph::RenderGraph;
use crate::core::id::Id;

pub(crate) fn fuse_tasks(
    graph: &RenderGraph,
    serial_order: &[Id],
    parallelizable: &BTreeMap<Id, Vec<Id>>,
    options: &CompilerOptions,
) -> CompilerResult<Vec<Task>> {
    if !options.allow_parallelization {
        return Ok(serial_order.iter().copied().map(Task::serial).collect());
    }

    let chances = parallelizable.len();
    let mut used = 0usize;
    let mut placed: HashSet<Id> = HashSet::new();
    let mut tasks = Vec::with_capacity(serial_order.len());

    for &pass_id in serial_order {
        if placed.contains(&pass_id) {
            continue;
        }

        if !parallelizable.contains_key(&pass_id) && chances <= used {
            tasks.push(Task::serial(pass_id));
            placed.insert(pass_id);
            continue;
        }

        let candidates = parallelizable
            .get(&pass_id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        // First async-capable candidate not yet claimed by an earlier task.
        let mut async_pass = None;
        for &candidate in candidates {
            if placed.contains(&candidate) {
                continue;
            }
            let pass = graph
                .get_pass_by_id(candidate)
                .ok_or(CompilerError::NoNodeByGivenId)?;
            if pass.flags.async_queue {
                async_pass = Some(candidate);
                break;
            }
        }

        tasks.push(Task { pass: pass_id, async_pass });
        placed.insert(pass_id);
        if let Some(companion) = async_pass {
            placed.insert(companion);
            tracing::debug!("[FUSE] fused {} with async companion {}", pass_id, companion);
        }
        used += 1;
    }

    Ok(tasks)
}
