// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use crate::core::id::Id;

/// Directed edge of the render graph.
///
/// Asserts that `dst_pass` reads the resource produced by `src_pass`.
/// Resource endpoints are stored by id and resolve against the owning pass's
/// dependency list; the edge itself owns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: Id,
    pub src_pass: Id,
    pub dst_pass: Id,
    pub src_resource: Id,
    pub dst_resource: Id,
}
