//! renderlib core: render-graph model and compiler.
//!
//! The graph module owns the declarative pass/resource/edge model; the
//! compiler walks it through a fixed phase pipeline; the optimizer aliases
//! image lifetimes into physical slots; export serializes the result for
//! visualization.

pub mod compiler;
pub mod error;
pub mod export;
pub mod graph;
pub mod id;
pub mod optimizer;
pub mod prelude;

// Re-export core types
pub use compiler::{compile, CompilePhase, Compiler, CompilerOptions, CompilerOutput, PhaseOutputs, Task};
pub use error::{CompilerError, CompilerResult};
pub use graph::{
    has_path, reachable_from, topological_sort, AccessType, Edge, Pass, PassFlags, RenderGraph,
    Resource, ResourceFlags, ResourceType, SortError, PRESENT_PASS_NAME, ROOT_PASS_NAME,
};
pub use id::{next_id, Id, INVALID_ID};
pub use optimizer::{
    OptimizedResource, OptimizerOutput, Range, ResourceLink, ResourceTemplate, UsagePoint,
    UsagePointSet,
};
