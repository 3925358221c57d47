// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pool Membership Reconciliation
//!
//! A guest can sit in at most one pool, so moving guests into a pool first
//! requires detaching them from wherever they currently are. Everything in
//! this module is a pure function over caller-supplied snapshots.
//!
//! ```text
//! current guests ──┐
//!                  ├─ guests_to_remove_from_pools ─→ removals per pool
//! guests to add ───┘                                      │
//!                                                         ▼
//!                                   MembershipPlan ─→ remove payloads, add payload
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapters::{map_guests_to_api, map_remove_guests_to_api, ApiDocument};
use crate::domain::{GuestId, GuestResource, PoolName};

/// Work out which pools each of `guests_to_add` must leave first
///
/// Ids that are unknown or unpooled need nothing. Per pool, ids appear in
/// the order they have in `guests_to_add`. The destination pool is not
/// treated specially; a guest already in it is reported like any other.
pub fn guests_to_remove_from_pools(
    guests: &[GuestResource],
    guests_to_add: &[GuestId],
) -> HashMap<PoolName, Vec<GuestId>> {
    let current_pools: HashMap<GuestId, &PoolName> = guests
        .iter()
        .filter_map(|guest| guest.current_pool().map(|pool| (guest.id, pool)))
        .collect();

    let mut removals: HashMap<PoolName, Vec<GuestId>> = HashMap::new();
    for id in guests_to_add {
        if let Some(pool) = current_pools.get(id) {
            removals.entry((*pool).clone()).or_default().push(*id);
        }
    }
    removals
}

/// Current members that are not in `desired`, in current order
pub fn guests_to_detach(current: Option<&[GuestId]>, desired: &[GuestId]) -> Vec<GuestId> {
    let desired: HashSet<GuestId> = desired.iter().copied().collect();
    current
        .unwrap_or_default()
        .iter()
        .copied()
        .filter(|id| !desired.contains(id))
        .collect()
}

/// Ordered set of membership changes for one target pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub target: PoolName,

    /// Guests to detach, per pool they currently sit in
    pub removals: HashMap<PoolName, Vec<GuestId>>,

    /// Guests to attach to `target`
    pub additions: Vec<GuestId>,
}

impl MembershipPlan {
    /// Plan moving `guests_to_add` into `target`
    ///
    /// With `skip_noop` set, guests that are already in `target` are neither
    /// detached from it nor added again.
    pub fn for_add(
        target: &PoolName,
        guests: &[GuestResource],
        guests_to_add: &[GuestId],
        skip_noop: bool,
    ) -> Self {
        let mut removals = guests_to_remove_from_pools(guests, guests_to_add);
        let mut additions = guests_to_add.to_vec();

        if skip_noop {
            if let Some(already_there) = removals.remove(target) {
                let already_there: HashSet<GuestId> = already_there.into_iter().collect();
                additions.retain(|id| !already_there.contains(id));
            }
        }

        debug!(
            "Planned add to pool {}: {} pool(s) to detach from, {} guest(s) to add",
            target,
            removals.len(),
            additions.len()
        );

        Self {
            target: target.clone(),
            removals,
            additions,
        }
    }

    /// Plan making `desired` the exact membership of `target`
    ///
    /// `current_members` is the target's membership as last read; members
    /// missing from `desired` are detached from the target.
    pub fn for_set(
        target: &PoolName,
        current_members: Option<&[GuestId]>,
        guests: &[GuestResource],
        desired: &[GuestId],
        skip_noop: bool,
    ) -> Self {
        let mut plan = Self::for_add(target, guests, desired, skip_noop);

        let detach = guests_to_detach(current_members, desired);
        if !detach.is_empty() {
            let entry = plan.removals.entry(target.clone()).or_default();
            for id in detach {
                if !entry.contains(&id) {
                    entry.push(id);
                }
            }
        }

        plan
    }

    /// True when executing the plan would not change anything
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.values().all(Vec::is_empty)
    }

    /// Removal payloads, one per pool, ordered by pool name
    pub fn removal_payloads(&self) -> Vec<(PoolName, ApiDocument)> {
        let mut pools: Vec<_> = self
            .removals
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .collect();
        pools.sort_by(|(a, _), (b, _)| a.cmp(b));
        pools
            .into_iter()
            .map(|(pool, ids)| (pool.clone(), map_remove_guests_to_api(pool, ids)))
            .collect()
    }

    /// Addition payload for the target, if anything is left to add
    pub fn addition_payload(&self) -> Option<ApiDocument> {
        (!self.additions.is_empty()).then(|| map_guests_to_api(&self.target, &self.additions))
    }
}
