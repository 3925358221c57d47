// Copyright (c) 2025 - Cowboy AI, Inc.

//! Pool API endpoint configuration

use serde::{Deserialize, Serialize};

use crate::domain::PoolName;
use crate::errors::{PoolError, PoolResult};

/// Endpoint layout and planning options for the pool API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolApiConfig {
    /// API root (e.g., "/api2/json")
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Pools collection endpoint relative to `api_base`
    #[serde(default = "default_pools_endpoint")]
    pub pools_endpoint: String,

    /// Guest listing endpoint relative to `api_base`
    #[serde(default = "default_resources_endpoint")]
    pub resources_endpoint: String,

    /// Drop moves of guests that are already in the target pool
    #[serde(default = "default_skip_noop_moves")]
    pub skip_noop_moves: bool,
}

fn default_api_base() -> String {
    "/api2/json".to_string()
}

fn default_pools_endpoint() -> String {
    "/pools".to_string()
}

fn default_resources_endpoint() -> String {
    "/cluster/resources?type=vm".to_string()
}

fn default_skip_noop_moves() -> bool {
    true
}

impl Default for PoolApiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            pools_endpoint: default_pools_endpoint(),
            resources_endpoint: default_resources_endpoint(),
            skip_noop_moves: default_skip_noop_moves(),
        }
    }
}

impl PoolApiConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// Reads `POOL_API_BASE` and `POOL_SKIP_NOOP_MOVES` (`true`/`false`).
    pub fn from_env() -> PoolResult<Self> {
        let defaults = Self::default();
        let skip_noop_moves = match std::env::var("POOL_SKIP_NOOP_MOVES") {
            Ok(value) => parse_flag("POOL_SKIP_NOOP_MOVES", &value)?,
            Err(_) => defaults.skip_noop_moves,
        };
        Ok(Self {
            api_base: std::env::var("POOL_API_BASE").unwrap_or(defaults.api_base),
            skip_noop_moves,
            ..defaults
        })
    }

    /// Set the API root
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Enable or disable no-op move filtering
    pub fn with_skip_noop_moves(mut self, skip: bool) -> Self {
        self.skip_noop_moves = skip;
        self
    }

    /// Path of the pools collection
    pub fn pools_path(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), self.pools_endpoint)
    }

    /// Path of a single pool, with the name URL-encoded
    pub fn pool_path(&self, pool: &PoolName) -> String {
        format!("{}/{}", self.pools_path(), urlencoding::encode(pool.as_str()))
    }

    /// Path of the guest listing
    pub fn resources_path(&self) -> String {
        format!(
            "{}{}",
            self.api_base.trim_end_matches('/'),
            self.resources_endpoint
        )
    }
}

fn parse_flag(key: &str, value: &str) -> PoolResult<bool> {
    value.trim().parse().map_err(|_| {
        PoolError::Configuration(format!("{} must be 'true' or 'false', got '{}'", key, value))
    })
}
