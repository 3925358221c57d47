// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pool Configuration Value Object
//!
//! Carries a pool's observed or desired state between the wire mappers and
//! the service layer. Optional fields keep three states apart:
//!
//! | field     | `None`          | `Some(empty)`          | `Some(values)` |
//! |-----------|-----------------|------------------------|----------------|
//! | `comment` | not specified   | explicitly blank       | comment text   |
//! | `guests`  | not specified   | explicitly no members  | member ids     |

use serde::{Deserialize, Serialize};

use super::{GuestId, PoolName, PoolNameError};

/// Resource pool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub name: PoolName,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Member guests in remote order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<GuestId>>,
}

impl PoolConfig {
    /// Create a configuration with only a name
    pub fn new(name: PoolName) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_guests(mut self, guests: Vec<GuestId>) -> Self {
        self.guests = Some(guests);
        self
    }

    /// Validate the configuration
    ///
    /// Only the name carries invariants; comment and guests are free-form.
    pub fn validate(&self) -> Result<(), PoolNameError> {
        self.name.validate()
    }
}
