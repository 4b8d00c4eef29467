//! Error types for the render-graph compiler.
//!
//! Every compiler phase reports one of these kinds; the first failure
//! short-circuits the pipeline. Graph construction mistakes (bad edge
//! inserts, unknown resource names) are boolean returns at the graph API
//! boundary, not compiler errors.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompilerError {
    #[error("no sentinel pass named \"Root\" exists in the graph")]
    NoRootNode,

    #[error("render graph contains a cyclic dependency")]
    CyclicDependency,

    #[error("no pass exists for the given id")]
    NoNodeByGivenId,
}

/// Result type for compiler phases.
pub type CompilerResult<T> = std::result::Result<T, CompilerError>;
