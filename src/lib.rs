//! Resource pool configuration for virtualization managers
//!
//! This crate maps the remote manager's pool documents to a typed model,
//! validates pool names, and plans the membership changes needed to move
//! guests between pools. It does no network I/O of its own; the
//! [`service`] layer drives a transport supplied by the caller.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod reconcile;
pub mod service;

// Re-export commonly used types
pub use adapters::{map_guests_to_api, map_pool_from_api, ApiDocument};
pub use config::PoolApiConfig;
pub use domain::{GuestId, GuestResource, PoolConfig, PoolName, PoolNameError};
pub use errors::{PoolError, PoolResult};
pub use reconcile::{guests_to_remove_from_pools, MembershipPlan};
pub use service::{PoolApi, PoolService};
