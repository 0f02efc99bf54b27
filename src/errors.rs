// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for synchronization operations

use std::fmt;
use thiserror::Error;

use crate::mapping::MappingError;

/// The remote system an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    /// Oracle VM Manager web services API
    Ovm,
    /// Device42 CMDB API
    Device42,
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            System::Ovm => write!(f, "Oracle VM Manager"),
            System::Device42 => write!(f, "Device42"),
        }
    }
}

/// Errors that can occur while synchronizing inventory
#[derive(Debug, Error)]
pub enum SyncError {
    /// The source API could not be reached (connect, TLS, timeout, broken body)
    #[error("Source unreachable: {0}")]
    SourceUnreachable(String),

    /// The source API answered with a non-success status
    #[error("Source rejected request to {url}: HTTP {status}")]
    SourceRejected { url: String, status: u16 },

    /// Credentials were refused by either side
    #[error("Authentication failed against {system}: HTTP {status}")]
    AuthFailure { system: System, status: u16 },

    /// A source record could not be transformed
    #[error("Malformed record '{entity}': {reason}")]
    MalformedRecord { entity: String, reason: String },

    /// The target API could not be reached
    #[error("Target unreachable: {0}")]
    TargetUnreachable(String),

    /// The target API refused a write or lookup
    #[error("Target rejected {endpoint}: HTTP {status}: {body}")]
    TargetRejected {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// The run report could not be serialized or written
    #[error("Report error: {0}")]
    Report(String),
}

impl SyncError {
    /// Whether this error prevents any further progress for the whole run,
    /// regardless of the configured failure policy.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SyncError::AuthFailure { .. } | SyncError::Configuration(_) | SyncError::Timeout(_)
        )
    }
}

/// Result type for synchronization operations
pub type SyncResult<T> = Result<T, SyncError>;

impl From<MappingError> for SyncError {
    fn from(err: MappingError) -> Self {
        SyncError::MalformedRecord {
            entity: err.entity().to_string(),
            reason: err.to_string(),
        }
    }
}
