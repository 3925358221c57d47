// Copyright (c) 2025 - Cowboy AI, Inc.

//! Wire adapters
//!
//! Mapping between the remote manager's decoded documents and the typed
//! pool model. No I/O happens here.

pub mod document;
pub mod proxmox;

pub use document::{encode_form, ApiDocument};
pub use proxmox::{
    map_create_to_api, map_guest_resources_from_api, map_guests_to_api, map_pool_from_api,
    map_pool_list_from_api, map_remove_guests_to_api, map_update_to_api, PoolSummary,
};
