// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

/// Options for a single compile call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Allow the fusion phase to pair passes with async companions. When
    /// false every task holds a single pass.
    #[serde(default)]
    pub allow_parallelization: bool,
}
