// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Process-wide id sequence.
//!
//! Passes, resources, edges and optimized resources all draw from the same
//! monotonic sequence, so an id is unique across every entity kind and across
//! every graph built in the process.

use std::sync::atomic::{AtomicI32, Ordering};

/// Identifier for passes, resources and edges.
pub type Id = i32;

/// Marks an unassigned or unresolved id.
pub const INVALID_ID: Id = -1;

static ID_SEQUENCE: AtomicI32 = AtomicI32::new(0);

/// Draw the next id from the global sequence.
pub fn next_id() -> Id {
    ID_SEQUENCE.fetch_add(1, Ordering::SeqCst)
}
