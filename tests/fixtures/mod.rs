// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-resource-pool
//!
//! Deterministic pool names, guest snapshots and wire documents shared by the
//! integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

use cim_resource_pool::domain::{GuestResource, PoolName};
use cim_resource_pool::ApiDocument;

/// A single legal pool name
pub fn pool_name_legal() -> String {
    "test-Pool_01".to_string()
}

/// Legal pool names covering every allowed character class
pub fn pool_name_legals() -> Vec<String> {
    vec![
        "a".to_string(),
        "Z".to_string(),
        "9".to_string(),
        "-".to_string(),
        "_".to_string(),
        "abcdefghijklmnopqrstuvwxyz".to_string(),
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
        "0123456789-_".to_string(),
        pool_name_legal(),
        pool_name_max_legal(),
    ]
}

/// Longest legal pool name
pub fn pool_name_max_legal() -> String {
    "a".repeat(PoolName::MAX_LENGTH)
}

/// Shortest pool name over the length limit
pub fn pool_name_max_illegal() -> String {
    "a".repeat(PoolName::MAX_LENGTH + 1)
}

/// Names containing at least one disallowed character
pub fn pool_name_error_characters() -> Vec<String> {
    [
        " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", ".", "/", ":", ";",
        "<", "=", ">", "?", "@", "[", "\\", "]", "^", "`", "{", "|", "}", "~", "é", "池",
    ]
    .iter()
    .map(|ch| format!("pool{}name", ch))
    .collect()
}

/// Guest snapshot: 100 and 300 in `test`, 200 in `poolA`
pub fn guests_fixture() -> Vec<GuestResource> {
    vec![
        GuestResource::new(100, "test"),
        GuestResource::new(200, "poolA"),
        GuestResource::new(300, "test"),
    ]
}

/// Unwrap a JSON object literal into a wire document
pub fn doc(value: Value) -> ApiDocument {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {}", other),
    }
}

/// Full pool response as returned for `GET /pools/test`
pub fn pool_document_fixture() -> ApiDocument {
    doc(json!({
        "poolid": "test",
        "comment": "test",
        "members": [
            {"vmid": 100.0},
            {"vmid": 300.0},
            {"vmid": 200.0}
        ]
    }))
}

/// `/cluster/resources?type=vm` response matching [`guests_fixture`]
pub fn resources_fixture() -> Value {
    json!([
        {"vmid": 100, "pool": "test", "name": "web01", "node": "pve1", "type": "qemu"},
        {"vmid": 200, "pool": "poolA", "name": "db01", "node": "pve1", "type": "qemu"},
        {"vmid": 300, "pool": "test", "name": "cache01", "node": "pve2", "type": "lxc"},
        {"vmid": 400, "name": "spare", "node": "pve2", "type": "lxc"}
    ])
}
