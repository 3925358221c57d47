// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Wire Mapping

use cim_resource_pool::{map_guests_to_api, map_pool_from_api, ApiDocument};
use proptest::prelude::*;
use serde_json::{json, Value};

fn pool_document(pool: &str, guests: &[u32]) -> ApiDocument {
    let members: Vec<Value> = guests
        .iter()
        .map(|id| json!({"vmid": f64::from(*id), "type": "qemu"}))
        .collect();
    match json!({"poolid": pool, "members": members}) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

proptest! {
    #[test]
    fn prop_round_trip_keeps_pool_and_order(
        pool in "[a-zA-Z0-9_-]{0,16}",
        guests in prop::collection::vec(100u32..1_000_000, 0..20),
    ) {
        let config = map_pool_from_api(&pool_document(&pool, &guests));
        prop_assert_eq!(config.guests.as_deref(), Some(guests.as_slice()));

        let outbound = map_guests_to_api(&config.name, config.guests.as_deref().unwrap_or_default());
        let expected_vms = guests
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");

        prop_assert_eq!(outbound.len(), 2);
        prop_assert_eq!(&outbound["poolid"], &json!(pool));
        prop_assert_eq!(&outbound["vms"], &json!(expected_vms));
    }

    #[test]
    fn prop_fractional_ids_truncate(id in 0u32..1_000_000, frac in 0.0f64..0.999) {
        let raw = match json!({"members": [{"vmid": f64::from(id) + frac}]}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        prop_assert_eq!(map_pool_from_api(&raw).guests, Some(vec![id]));
    }
}
