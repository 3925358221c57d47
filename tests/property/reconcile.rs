// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Membership Reconciliation

use std::collections::HashMap;

use cim_resource_pool::domain::{GuestId, GuestResource, PoolName};
use cim_resource_pool::{guests_to_remove_from_pools, MembershipPlan};
use proptest::prelude::*;

/// Guests with unique ids, each in one of a few pools or unpooled
fn snapshot() -> impl Strategy<Value = Vec<GuestResource>> {
    prop::collection::btree_map(100u32..200, prop::sample::select(vec!["", "a", "b", "c"]), 0..30)
        .prop_map(|guests| {
            guests
                .into_iter()
                .map(|(id, pool)| GuestResource::new(id, pool))
                .collect()
        })
}

fn ids() -> impl Strategy<Value = Vec<GuestId>> {
    prop::collection::vec(90u32..210, 0..30)
}

proptest! {
    #[test]
    fn prop_removals_only_list_current_members(guests in snapshot(), to_add in ids()) {
        let pools: HashMap<GuestId, Option<&PoolName>> =
            guests.iter().map(|g| (g.id, g.current_pool())).collect();

        for (pool, removed) in guests_to_remove_from_pools(&guests, &to_add) {
            prop_assert!(!removed.is_empty());
            for id in removed {
                prop_assert!(to_add.contains(&id));
                prop_assert_eq!(pools.get(&id).copied().flatten(), Some(&pool));
            }
        }
    }

    #[test]
    fn prop_removals_preserve_request_order(guests in snapshot(), to_add in ids()) {
        for (pool, removed) in guests_to_remove_from_pools(&guests, &to_add) {
            let expected: Vec<GuestId> = to_add
                .iter()
                .copied()
                .filter(|id| {
                    guests
                        .iter()
                        .any(|g| g.id == *id && g.current_pool() == Some(&pool))
                })
                .collect();
            prop_assert_eq!(removed, expected);
        }
    }

    #[test]
    fn prop_skip_noop_never_touches_target(guests in snapshot(), to_add in ids()) {
        let target = PoolName::new_unchecked("a");
        let plan = MembershipPlan::for_add(&target, &guests, &to_add, true);

        prop_assert!(!plan.removals.contains_key(&target));
        for id in &plan.additions {
            let in_target = guests
                .iter()
                .any(|g| g.id == *id && g.current_pool() == Some(&target));
            prop_assert!(!in_target);
        }
    }
}
