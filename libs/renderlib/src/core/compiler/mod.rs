mod culling;
mod fusion;
mod options;
mod ordering;
mod output;
mod parallel;
mod phase;
mod pipeline;

pub use options::CompilerOptions;
pub use output::{CompilerOutput, PhaseOutputs, Task};
pub use phase::CompilePhase;
pub use pipeline::{compile, Compiler};
