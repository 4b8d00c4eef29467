//! # renderlib - Render-Graph Compiler
//!
//! An offline planner that turns a declarative graph of rendering passes and
//! the resources they read or write into an executable schedule with
//! memory-aliased resource lifetimes.
//!
//! ## Pipeline
//!
//! ```text
//! RenderGraph
//!   ├─ cull        - drop passes unreachable from the "Root" sentinel
//!   ├─ order       - topologically sort the survivors
//!   ├─ analyze     - prove pass pairs independent via a closed shadow graph
//!   ├─ fuse        - pair passes with async companions into tasks
//!   ├─ optimize    - alias image lifetimes into physical slots (first-fit)
//!   └─ synthesize  - emit producer/consumer links per physical slot
//! ```
//!
//! The compiler never executes the graph, allocates GPU memory or emits
//! synchronization primitives; it plans, and a host renderer consumes the
//! plan.
//!
//! ## Example
//!
//! ```
//! use renderlib::prelude::*;
//!
//! let mut graph = RenderGraph::new();
//! let root = graph.add_pass(
//!     Pass::new("Root", PassFlags { sentinel: true, never_cull: true, ..Default::default() })
//!         .with_resource(Resource::external("scene")),
//! );
//! let gbuffer = graph.add_pass(
//!     Pass::new("G-Buffer", PassFlags { raster: true, ..Default::default() })
//!         .with_resource(Resource::external("scene"))
//!         .with_resource(Resource::image("albedo", AccessType::Write)),
//! );
//! graph.insert_edge(root, "scene", gbuffer, "scene");
//!
//! let output = compile(&graph, CompilerOptions { allow_parallelization: true });
//! assert!(!output.has_failed);
//! ```

// Core module (always included)
pub mod core;

// Re-export core types at crate root
pub use crate::core::prelude;
pub use crate::core::{
    compile, AccessType, CompilePhase, Compiler, CompilerError, CompilerOptions, CompilerOutput,
    CompilerResult, Edge, Id, OptimizedResource, OptimizerOutput, Pass, PassFlags, PhaseOutputs,
    Range, RenderGraph, Resource, ResourceFlags, ResourceLink, ResourceTemplate, ResourceType,
    Task, UsagePoint, UsagePointSet,
};
