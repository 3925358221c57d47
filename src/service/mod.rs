// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Pool Management
//!
//! Coordinates the pure mapping and planning functions with the caller's
//! HTTP transport.
//!
//! ```text
//! Caller
//!     ↓
//! PoolService (this module)
//!     ↓
//! Wire mappers + MembershipPlan (pure)
//!     ↓
//! PoolApi (caller's transport)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_resource_pool::service::PoolService;
//!
//! let service = PoolService::new(my_http_transport);
//! let pool = PoolName::new("lab")?;
//! service.add_guests(&pool, &[100, 101]).await?;
//! ```

pub mod pool;

pub use pool::{PoolApi, PoolService};
