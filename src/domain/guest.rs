// Copyright (c) 2025 - Cowboy AI, Inc.
//! Guest Workload Snapshot
//!
//! Guests are owned by the remote manager; this crate only reads the
//! snapshot the caller hands in (usually decoded from `/cluster/resources`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PoolName;

/// Numeric guest identifier (the remote API's `vmid`)
pub type GuestId = u32;

/// Kind of guest workload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestKind {
    /// QEMU/KVM virtual machine
    Qemu,
    /// LXC container
    Lxc,
    #[default]
    Unknown,
}

impl GuestKind {
    /// Parse the wire `type` field
    pub fn from_wire(value: &str) -> Self {
        match value {
            "qemu" => GuestKind::Qemu,
            "lxc" => GuestKind::Lxc,
            _ => GuestKind::Unknown,
        }
    }
}

impl fmt::Display for GuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestKind::Qemu => write!(f, "qemu"),
            GuestKind::Lxc => write!(f, "lxc"),
            GuestKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// One guest as currently known to the remote manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestResource {
    pub id: GuestId,

    /// Pool the guest belongs to; `None` when unpooled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Cluster node hosting the guest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    #[serde(default)]
    pub kind: GuestKind,
}

impl GuestResource {
    /// Create a snapshot with only an id and a pool
    ///
    /// An empty pool name is treated as "unpooled".
    pub fn new(id: GuestId, pool: impl Into<String>) -> Self {
        let pool = pool.into();
        Self {
            id,
            pool: (!pool.is_empty()).then(|| PoolName::new_unchecked(pool)),
            ..Default::default()
        }
    }

    /// Current pool, ignoring empty names
    pub fn current_pool(&self) -> Option<&PoolName> {
        self.pool.as_ref().filter(|pool| !pool.is_empty())
    }
}
