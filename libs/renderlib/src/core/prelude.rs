// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Commonly used types for `use renderlib::prelude::*`.

pub use crate::core::{
    // Errors
    error::{CompilerError, CompilerResult},

    // Graph
    graph::{AccessType, Pass, PassFlags, RenderGraph, Resource, ResourceType},

    // Compiler
    compiler::{compile, Compiler, CompilerOptions, CompilerOutput, Task},

    // Ids
    id::Id,
};
