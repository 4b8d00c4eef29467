// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Compiler orchestration.
//!
//! Sequences the phases over an immutable render graph: cull, order,
//! analyze, fuse, optimize, synthesize. Each phase is a pure function whose
//! output feeds the next; the first failure short-circuits the pipeline and
//! is surfaced in the output instead of being retried.

use super::culling;
use super::fusion;
use super::options::CompilerOptions;
use super::ordering;
use super::output::{CompilerOutput, PhaseOutputs};
use super::parallel;
use super::phase::CompilePhase;
use crate::core::error::CompilerResult;
use crate::core::graph::RenderGraph;
use crate::core::optimizer;

/// Compiles a render graph into an executable schedule with memory-aliased
/// resource lifetimes. Holds a borrow of the graph for the duration of one
/// compile call and never mutates it.
pub struct Compiler<'graph> {
    graph: &'graph RenderGraph,
    options: CompilerOptions,
}

impl<'graph> Compiler<'graph> {
    pub fn new(graph: &'graph RenderGraph, options: CompilerOptions) -> Self {
        Self { graph, options }
    }

    /// Run the full pipeline. Failures are reported in the output, not
    /// returned: callers always get a `CompilerOutput`.
    pub fn compile(&self) -> CompilerOutput {
        match self.execute_phases() {
            Ok(output) => {
                tracing::info!("Compile complete: {}", output);
                output
            }
            Err(error) => {
                tracing::error!("Compile failed: {}", error);
                CompilerOutput::failure(error, self.options)
            }
        }
    }

    fn execute_phases(&self) -> CompilerResult<CompilerOutput> {
        let culled_nodes = self.run_phase(CompilePhase::Cull, || culling::cull_nodes(self.graph))?;

        let serial_order = self.run_phase(CompilePhase::Order, || {
            ordering::serial_order(self.graph, &culled_nodes)
        })?;

        let parallelizable = self.run_phase(CompilePhase::Analyze, || {
            parallel::parallelizable_passes(self.graph, &serial_order)
        })?;

        let tasks = self.run_phase(CompilePhase::Fuse, || {
            fusion::fuse_tasks(self.graph, &serial_order, &parallelizable, &self.options)
        })?;

        let optimizer_output = self.run_phase(CompilePhase::Optimize, || {
            Ok(optimizer::optimize_resources(self.graph, &tasks))
        })?;

        let resource_templates = self.run_phase(CompilePhase::Synthesize, || {
            optimizer::resource_templates(self.graph, &optimizer_output)
        })?;

        Ok(CompilerOutput {
            has_failed: false,
            fail_reason: None,
            options: self.options,
            phases: Some(PhaseOutputs {
                culled_nodes,
                serial_order,
                parallelizable,
                tasks,
                optimizer: optimizer_output,
            }),
            resource_templates,
        })
    }

    /// Run a phase with logging.
    fn run_phase<T>(
        &self,
        phase: CompilePhase,
        f: impl FnOnce() -> CompilerResult<T>,
    ) -> CompilerResult<T> {
        tracing::debug!("[{}] Starting", phase);
        let result = f();
        match &result {
            Ok(_) => tracing::debug!("[{}] Completed", phase),
            Err(error) => tracing::error!("[{}] Failed: {}", phase, error),
        }
        result
    }
}

/// Compile `graph` with `options`. Blocking and pure; the graph is processed
/// from scratch on every call.
pub fn compile(graph: &RenderGraph, options: CompilerOptions) -> CompilerOutput {
    Compiler::new(graph, options).compile()
}
