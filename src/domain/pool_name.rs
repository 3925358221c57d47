// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pool Name Value Object with Naming Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Pool name validation error
///
/// The display strings are stable and match the messages callers already
/// compare against, so they must not change.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolNameError {
    #[error("PoolName cannot be empty")]
    Empty,

    #[error("PoolName may not be longer than 1024 characters")]
    Length,

    #[error(
        "PoolName may only contain the following characters: a-z, A-Z, 0-9, hyphen (-), and underscore (_)"
    )]
    Characters,
}

/// Resource pool identifier
///
/// Mirrors the remote API's `poolid` field. A `PoolName` may hold an
/// unvalidated value when it was read from the wire or built with
/// [`PoolName::new_unchecked`]; call [`PoolName::validate`] before using it
/// in a request.
///
/// # Invariants (checked in order)
/// - Non-empty
/// - At most 1024 bytes
/// - Only `a-z`, `A-Z`, `0-9`, `-` and `_`
///
/// # Examples
///
/// ```rust
/// use cim_resource_pool::domain::{PoolName, PoolNameError};
///
/// let pool = PoolName::new("production-vms").unwrap();
/// assert_eq!(pool.as_str(), "production-vms");
///
/// assert_eq!(PoolName::new(""), Err(PoolNameError::Empty));
/// assert_eq!(PoolName::new("web/db"), Err(PoolNameError::Characters));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolName(String);

impl PoolName {
    /// Maximum name length accepted by the client
    pub const MAX_LENGTH: usize = 1024;

    /// Create a new pool name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, PoolNameError> {
        let name = Self(name.into());
        name.validate()?;
        Ok(name)
    }

    /// Wrap a raw value without validating it
    pub fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Check the name against the remote naming rules
    pub fn validate(&self) -> Result<(), PoolNameError> {
        if self.0.is_empty() {
            return Err(PoolNameError::Empty);
        }

        if self.0.len() > Self::MAX_LENGTH {
            return Err(PoolNameError::Length);
        }

        if !self.0.chars().all(Self::is_allowed_char) {
            return Err(PoolNameError::Characters);
        }

        Ok(())
    }

    fn is_allowed_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
    }

    /// Get the pool name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no name has been set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PoolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PoolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PoolName {
    type Error = PoolNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PoolName {
    type Error = PoolNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
