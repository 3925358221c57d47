// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pool Service Layer
//!
//! Drives pool operations through a caller-supplied [`PoolApi`] transport.
//! Each method is a short sequence of requests:
//!
//! ```text
//! validate → read snapshot (optional) → plan (pure) → write requests
//! ```
//!
//! Errors from the transport are returned as-is; nothing is retried and
//! earlier writes in a sequence are not rolled back.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::adapters::{
    map_create_to_api, map_guest_resources_from_api, map_pool_from_api, map_pool_list_from_api,
    map_remove_guests_to_api, map_update_to_api, ApiDocument, PoolSummary,
};
use crate::config::PoolApiConfig;
use crate::domain::{GuestId, GuestResource, PoolConfig, PoolName};
use crate::errors::{PoolError, PoolResult};
use crate::reconcile::MembershipPlan;

/// Transport seam implemented by the HTTP layer
///
/// Paths are absolute API paths as produced by [`PoolApiConfig`]; request
/// bodies are wire documents ready for form encoding.
#[async_trait]
pub trait PoolApi: Send + Sync {
    /// GET a path and return the response's `data` value
    async fn get(&self, path: &str) -> PoolResult<Value>;

    /// POST a document to a path
    async fn post(&self, path: &str, body: ApiDocument) -> PoolResult<()>;

    /// PUT a document to a path
    async fn put(&self, path: &str, body: ApiDocument) -> PoolResult<()>;

    /// DELETE a path
    async fn delete(&self, path: &str) -> PoolResult<()>;
}

/// Pool operations on top of a [`PoolApi`] transport
pub struct PoolService<A> {
    api: A,
    config: PoolApiConfig,
}

impl<A: PoolApi> PoolService<A> {
    /// Create a service with the default endpoint layout
    pub fn new(api: A) -> Self {
        Self::with_config(api, PoolApiConfig::default())
    }

    pub fn with_config(api: A, config: PoolApiConfig) -> Self {
        Self { api, config }
    }

    pub fn config(&self) -> &PoolApiConfig {
        &self.config
    }

    /// Access the underlying transport
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read a single pool
    pub async fn get_pool(&self, pool: &PoolName) -> PoolResult<PoolConfig> {
        pool.validate()?;
        let data = self.api.get(&self.config.pool_path(pool)).await?;
        let raw = match data {
            Value::Object(raw) => raw,
            Value::Null => return Err(PoolError::NotFound(pool.clone())),
            other => {
                return Err(PoolError::Deserialization(format!(
                    "expected pool object, got {}",
                    other
                )))
            }
        };

        let mut config = map_pool_from_api(&raw);
        // Single-pool responses may omit `poolid`.
        if config.name.is_empty() {
            config.name = pool.clone();
        }
        Ok(config)
    }

    /// List all pools
    pub async fn list_pools(&self) -> PoolResult<Vec<PoolSummary>> {
        let data = self.api.get(&self.config.pools_path()).await?;
        let entries = expect_array(data, "pool list")?;
        Ok(map_pool_list_from_api(&entries))
    }

    /// Check whether a pool exists
    pub async fn exists(&self, pool: &PoolName) -> PoolResult<bool> {
        pool.validate()?;
        let pools = self.list_pools().await?;
        Ok(pools.iter().any(|summary| &summary.name == pool))
    }

    /// List all guests with their current pools
    pub async fn list_guests(&self) -> PoolResult<Vec<GuestResource>> {
        let data = self.api.get(&self.config.resources_path()).await?;
        let entries = expect_array(data, "guest list")?;
        Ok(map_guest_resources_from_api(&entries))
    }

    /// Create a pool and attach its guests
    pub async fn create_pool(&self, config: &PoolConfig) -> PoolResult<()> {
        config.validate()?;
        info!("Creating pool {}", config.name);
        self.api
            .post(&self.config.pools_path(), map_create_to_api(config))
            .await?;

        match config.guests.as_deref() {
            Some(guests) if !guests.is_empty() => self.add_guests(&config.name, guests).await,
            _ => Ok(()),
        }
    }

    /// Update whichever of comment and exact membership are specified
    pub async fn update_pool(&self, config: &PoolConfig) -> PoolResult<()> {
        config.validate()?;
        info!("Updating pool {}", config.name);
        if config.comment.is_some() {
            self.api
                .put(&self.config.pool_path(&config.name), map_update_to_api(config))
                .await?;
        }

        match config.guests.as_deref() {
            Some(guests) => self.set_guests(&config.name, guests).await,
            None => Ok(()),
        }
    }

    /// Delete a pool
    pub async fn delete_pool(&self, pool: &PoolName) -> PoolResult<()> {
        pool.validate()?;
        info!("Deleting pool {}", pool);
        self.api.delete(&self.config.pool_path(pool)).await
    }

    /// Move guests into a pool, detaching them from other pools first
    pub async fn add_guests(&self, pool: &PoolName, guests: &[GuestId]) -> PoolResult<()> {
        pool.validate()?;
        if guests.is_empty() {
            return Ok(());
        }
        let snapshot = self.list_guests().await?;
        let plan =
            MembershipPlan::for_add(pool, &snapshot, guests, self.config.skip_noop_moves);
        self.execute(&plan).await
    }

    /// Detach guests from a pool
    pub async fn remove_guests(&self, pool: &PoolName, guests: &[GuestId]) -> PoolResult<()> {
        pool.validate()?;
        if guests.is_empty() {
            return Ok(());
        }
        debug!("Removing {} guest(s) from pool {}", guests.len(), pool);
        self.api
            .put(
                &self.config.pool_path(pool),
                map_remove_guests_to_api(pool, guests),
            )
            .await
    }

    /// Make `guests` the exact membership of a pool
    pub async fn set_guests(&self, pool: &PoolName, guests: &[GuestId]) -> PoolResult<()> {
        let current = self.get_pool(pool).await?;
        let snapshot = self.list_guests().await?;
        let plan = MembershipPlan::for_set(
            pool,
            current.guests.as_deref(),
            &snapshot,
            guests,
            self.config.skip_noop_moves,
        );
        self.execute(&plan).await
    }

    /// Send the requests of a plan: removals first, then the addition
    pub async fn execute(&self, plan: &MembershipPlan) -> PoolResult<()> {
        if plan.is_empty() {
            debug!("Pool {} membership already up to date", plan.target);
            return Ok(());
        }

        for (source, body) in plan.removal_payloads() {
            debug!("Detaching guests from pool {}", source);
            self.api.put(&self.config.pool_path(&source), body).await?;
        }

        if let Some(body) = plan.addition_payload() {
            debug!("Attaching {} guest(s) to pool {}", plan.additions.len(), plan.target);
            self.api
                .put(&self.config.pool_path(&plan.target), body)
                .await?;
        }

        Ok(())
    }
}

fn expect_array(data: Value, what: &str) -> PoolResult<Vec<Value>> {
    match data {
        Value::Array(entries) => Ok(entries),
        other => Err(PoolError::Deserialization(format!(
            "expected {} array, got {}",
            what, other
        ))),
    }
}
