// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Pass and resource declarations.
//!
//! A pass is a unit of rendering work declared as a graph vertex; its
//! `dependencies` list every resource the pass touches, each tagged with the
//! access the pass performs. The same named resource appears on the producing
//! pass as a write and on each consuming pass as a read.

use serde::{Deserialize, Serialize};

use crate::core::id::{next_id, Id};

/// Name of the mandatory root sentinel pass.
pub const ROOT_PASS_NAME: &str = "Root";

/// Name of the presentation sentinel pass used by the fixtures.
pub const PRESENT_PASS_NAME: &str = "Present";

/// How a pass touches one of its declared resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Read,
    Write,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Unknown,
    Image,
    Buffer,
    /// Opaque to the compiler: not scheduled, never aliased.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceFlags {
    /// Exclude this resource from the lifetime-aliasing phase.
    #[serde(default)]
    pub dont_optimize: bool,
}

/// A logical resource declaration attached to a pass.
///
/// Only `Image` resources are candidates for memory aliasing. The access is
/// meaningful per pass; external resources carry `AccessType::None` since the
/// graph does not manage their state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ResourceType,
    pub access: AccessType,
    #[serde(default)]
    pub flags: ResourceFlags,
}

impl Resource {
    pub fn new(name: impl Into<String>, ty: ResourceType, access: AccessType) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            ty,
            access,
            flags: ResourceFlags::default(),
        }
    }

    pub fn image(name: impl Into<String>, access: AccessType) -> Self {
        Self::new(name, ResourceType::Image, access)
    }

    pub fn buffer(name: impl Into<String>, access: AccessType) -> Self {
        Self::new(name, ResourceType::Buffer, access)
    }

    pub fn external(name: impl Into<String>) -> Self {
        Self::new(name, ResourceType::External, AccessType::None)
    }

    /// Keep this resource out of the aliasing phase.
    pub fn dont_optimize(mut self) -> Self {
        self.flags.dont_optimize = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PassFlags {
    /// Any pass that is not async or compute.
    #[serde(default)]
    pub raster: bool,
    #[serde(default)]
    pub compute: bool,
    /// The pass may be scheduled on a secondary queue.
    #[serde(default)]
    pub async_queue: bool,
    /// Retain the pass regardless of reachability from the root.
    #[serde(default)]
    pub never_cull: bool,
    /// Artificial begin/present endpoint, never emitting real work.
    #[serde(default)]
    pub sentinel: bool,
}

/// Vertex of the render graph.
///
/// Adjacency lives in the owning [`RenderGraph`](super::RenderGraph); a pass
/// only carries its identity, flags and resource declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub id: Id,
    pub name: String,
    pub flags: PassFlags,
    pub dependencies: Vec<Resource>,
}

impl Pass {
    pub fn new(name: impl Into<String>, flags: PassFlags) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            flags,
            dependencies: Vec::new(),
        }
    }

    /// Append a resource declaration.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.dependencies.push(resource);
        self
    }

    pub fn resource_by_name(&self, name: &str) -> Option<&Resource> {
        self.dependencies.iter().find(|res| res.name == name)
    }

    pub fn resource_by_id(&self, id: Id) -> Option<&Resource> {
        self.dependencies.iter().find(|res| res.id == id)
    }

    /// Is this the root sentinel the compiler culls from?
    pub fn is_root(&self) -> bool {
        self.flags.sentinel && self.name == ROOT_PASS_NAME
    }
}
