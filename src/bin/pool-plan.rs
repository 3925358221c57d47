// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pool Membership Planner
//!
//! Reads a guest snapshot and a target membership, then prints the form
//! bodies a client would send, in execution order. Nothing is sent.
//!
//! Run with: cargo run --bin pool-plan
//!
//! Environment:
//! 1. `POOL_TARGET` - target pool name
//! 2. `POOL_GUESTS` - comma-separated guest ids
//! 3. `POOL_RESOURCES_FILE` - JSON array as returned by `/cluster/resources`
//! 4. `POOL_CURRENT_FILE` (optional) - JSON pool document; when set the
//!    guest list becomes the exact membership instead of an addition

use anyhow::{Context, Result};
use cim_resource_pool::{
    adapters::{encode_form, map_guest_resources_from_api, map_pool_from_api},
    domain::{GuestId, PoolName},
    MembershipPlan, PoolApiConfig,
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn};

/// Configuration for the planner
#[derive(Debug, Clone)]
struct PlannerConfig {
    target: PoolName,
    guests: Vec<GuestId>,
    resources_file: PathBuf,
    current_file: Option<PathBuf>,
    api: PoolApiConfig,
}

impl PlannerConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let target = std::env::var("POOL_TARGET").context("POOL_TARGET not set")?;
        let target = PoolName::new(target).context("POOL_TARGET is not a valid pool name")?;

        let guests = std::env::var("POOL_GUESTS").context("POOL_GUESTS not set")?;
        let guests = parse_guest_ids(&guests)?;

        let resources_file = std::env::var("POOL_RESOURCES_FILE")
            .context("POOL_RESOURCES_FILE not set")?
            .into();

        let current_file = std::env::var("POOL_CURRENT_FILE").ok().map(PathBuf::from);

        Ok(Self {
            target,
            guests,
            resources_file,
            current_file,
            api: PoolApiConfig::from_env()?,
        })
    }
}

fn parse_guest_ids(value: &str) -> Result<Vec<GuestId>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<GuestId>()
                .with_context(|| format!("invalid guest id '{}'", id))
        })
        .collect()
}

fn read_json(path: &PathBuf) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Accept either the bare `data` payload or the full `{"data": ...}` envelope
fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PlannerConfig::from_env()?;
    info!("Planning membership of pool {}", config.target);

    let resources = unwrap_data(read_json(&config.resources_file)?);
    let entries = resources
        .as_array()
        .context("resources file must contain a JSON array")?;
    let snapshot = map_guest_resources_from_api(entries);
    info!("Loaded {} guest(s)", snapshot.len());

    let plan = match &config.current_file {
        Some(path) => {
            let current = unwrap_data(read_json(path)?);
            let current = current
                .as_object()
                .map(map_pool_from_api)
                .context("current pool file must contain a JSON object")?;
            if !current.name.is_empty() && current.name != config.target {
                warn!(
                    "Current pool file describes {}, not {}",
                    current.name, config.target
                );
            }
            MembershipPlan::for_set(
                &config.target,
                current.guests.as_deref(),
                &snapshot,
                &config.guests,
                config.api.skip_noop_moves,
            )
        }
        None => MembershipPlan::for_add(
            &config.target,
            &snapshot,
            &config.guests,
            config.api.skip_noop_moves,
        ),
    };

    if plan.is_empty() {
        info!("Nothing to do");
        return Ok(());
    }

    for (pool, body) in plan.removal_payloads() {
        println!("PUT {} {}", config.api.pool_path(&pool), encode_form(&body));
    }
    if let Some(body) = plan.addition_payload() {
        println!(
            "PUT {} {}",
            config.api.pool_path(&plan.target),
            encode_form(&body)
        );
    }

    Ok(())
}
