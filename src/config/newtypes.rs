//! Validated newtype wrappers for store credentials.
//!
//! This module provides type-safe wrappers around the credential strings that
//! authenticate a store connection. Empty values are rejected on construction.

use crate::error::ConfigError;
use std::fmt;

/// A validated Swell store ID.
///
/// This newtype ensures the store ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use swell_api::ClientId;
///
/// let id = ClientId::new("my-store").unwrap();
/// assert_eq!(id.as_ref(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated store ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::MissingClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Swell store secret key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use swell_api::ClientKey;
///
/// let key = ClientKey::new("secret-key").unwrap();
/// assert_eq!(format!("{:?}", key), "ClientKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientKey(String);

impl ClientKey {
    /// Creates a new validated store secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingClientKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::MissingClientKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ClientKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientKey(*****)")
    }
}
