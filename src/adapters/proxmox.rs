// Copyright (c) 2025 - Cowboy AI, Inc.

//! Proxmox VE Pool Wire Mapping
//!
//! Translates between the `/pools` and `/cluster/resources` wire documents
//! and the typed pool model.
//!
//! ```text
//! GET  /pools/{poolid}        → map_pool_from_api        → PoolConfig
//! GET  /pools                 → map_pool_list_from_api   → Vec<PoolSummary>
//! GET  /cluster/resources     → map_guest_resources_from_api → Vec<GuestResource>
//!
//! POST /pools                 ← map_create_to_api
//! PUT  /pools/{poolid}        ← map_update_to_api
//! PUT  /pools/{poolid}        ← map_guests_to_api / map_remove_guests_to_api
//! ```
//!
//! Inbound mapping is purely structural: nothing is validated and malformed
//! fields degrade to absent values. Validation is a separate step
//! ([`PoolConfig::validate`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::document::{get_array, get_guest_id, get_str, ApiDocument};
use crate::domain::{GuestId, GuestKind, GuestResource, PoolConfig, PoolName};

/// Entry of the pool listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub name: PoolName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Map a pool document into a [`PoolConfig`]
///
/// Members without a numeric `vmid` (storage members, for instance) are
/// skipped. Member order from the response is kept.
pub fn map_pool_from_api(raw: &ApiDocument) -> PoolConfig {
    let mut config = PoolConfig::default();

    if let Some(name) = get_str(raw, "poolid") {
        config.name = PoolName::new_unchecked(name);
    }

    if let Some(comment) = get_str(raw, "comment") {
        config.comment = Some(comment.to_string());
    }

    if let Some(members) = get_array(raw, "members") {
        config.guests = Some(map_members(members));
    }

    config
}

fn map_members(members: &[Value]) -> Vec<GuestId> {
    members
        .iter()
        .filter_map(|member| {
            let id = member
                .as_object()
                .and_then(|entry| get_guest_id(entry, "vmid"));
            if id.is_none() {
                debug!("Skipping pool member without a usable vmid: {}", member);
            }
            id
        })
        .collect()
}

/// Map the pool listing
pub fn map_pool_list_from_api(raw: &[Value]) -> Vec<PoolSummary> {
    raw.iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            let name = get_str(entry, "poolid")?;
            Some(PoolSummary {
                name: PoolName::new_unchecked(name),
                comment: get_str(entry, "comment").map(str::to_string),
            })
        })
        .collect()
}

/// Map the cluster guest listing into guest snapshots
pub fn map_guest_resources_from_api(raw: &[Value]) -> Vec<GuestResource> {
    raw.iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            let Some(id) = get_guest_id(entry, "vmid") else {
                debug!("Skipping resource without a usable vmid");
                return None;
            };
            Some(GuestResource {
                id,
                pool: get_str(entry, "pool")
                    .filter(|pool| !pool.is_empty())
                    .map(PoolName::new_unchecked),
                name: get_str(entry, "name").map(str::to_string),
                node: get_str(entry, "node").map(str::to_string),
                kind: get_str(entry, "type")
                    .map(GuestKind::from_wire)
                    .unwrap_or_default(),
            })
        })
        .collect()
}

/// Build the payload assigning `guests` to `pool`
///
/// Always exactly `poolid` and `vms`; ids are joined in the given order with
/// duplicates kept.
pub fn map_guests_to_api(pool: &PoolName, guests: &[GuestId]) -> ApiDocument {
    let mut params = ApiDocument::new();
    params.insert("poolid".to_string(), Value::String(pool.to_string()));
    params.insert("vms".to_string(), Value::String(join_guest_ids(guests)));
    params
}

/// Build the payload detaching `guests` from `pool`
pub fn map_remove_guests_to_api(pool: &PoolName, guests: &[GuestId]) -> ApiDocument {
    let mut params = map_guests_to_api(pool, guests);
    params.insert("delete".to_string(), Value::String("1".to_string()));
    params
}

/// Build the pool creation payload
pub fn map_create_to_api(config: &PoolConfig) -> ApiDocument {
    let mut params = ApiDocument::new();
    params.insert("poolid".to_string(), Value::String(config.name.to_string()));
    if let Some(comment) = &config.comment {
        params.insert("comment".to_string(), Value::String(comment.clone()));
    }
    params
}

/// Build the pool update payload
///
/// An unset comment is left out so the remote value is kept; an empty
/// comment is sent as-is and clears it.
pub fn map_update_to_api(config: &PoolConfig) -> ApiDocument {
    map_create_to_api(config)
}

fn join_guest_ids(guests: &[GuestId]) -> String {
    guests
        .iter()
        .map(GuestId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
