// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Pool Domain Models
//!
//! # Value Objects with Invariants
//!
//! - [`PoolName`] - pool identifier restricted to the remote naming rules
//! - [`PoolConfig`] - observed or desired pool state
//!
//! # Caller-Owned Snapshots
//!
//! - [`GuestResource`] - a guest workload and the pool it currently sits in

pub mod guest;
pub mod pool_config;
pub mod pool_name;

pub use guest::{GuestId, GuestKind, GuestResource};
pub use pool_config::PoolConfig;
pub use pool_name::{PoolName, PoolNameError};
