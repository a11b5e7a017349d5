//! Error types for client configuration.
//!
//! This module contains the errors produced while validating credentials
//! before a connection is established. Failures that occur after a request
//! leaves the client are reported as [`ApiError`](crate::ApiError) instead.
//!
//! # Error Handling
//!
//! Credential constructors and [`Client::init`](crate::Client::init) return
//! `Result<T, ConfigError>` to enable fail-fast validation before any
//! network traffic happens.
//!
//! # Example
//!
//! ```rust
//! use swell_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::MissingClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
///
/// Each variant carries the message reported when the corresponding
/// credential is missing at initialization time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store ID was empty or absent.
    #[error("Swell store 'id' is required to connect")]
    MissingClientId,

    /// Store secret key was empty or absent.
    #[error("Swell store 'key' is required to connect")]
    MissingClientKey,
}
