// Copyright (c) 2025 - Cowboy AI, Inc.
//! System UUID normalization
//!
//! Oracle VM reports object identifiers as colon-delimited hex
//! (`36:33:37:35:...`). The CMDB expects the canonical RFC 4122 text form,
//! lowercase and hyphenated:
//!
//! ```text
//! 00:04:fb:00:00:06:00:00:3a:94:9d:bc:c8:7e:64:5b
//!                      │
//!                      ▼
//! 0004fb00-0006-0000-3a94-9dbcc87e645b
//! ```
//!
//! Normalization is idempotent: an already-canonical UUID passes through
//! unchanged, as does any other textual form the `uuid` crate accepts
//! (simple, braced, urn, uppercase).

use thiserror::Error;
use uuid::Uuid;

/// UUID normalization error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid system UUID '{input}': {reason}")]
pub struct UuidFormatError {
    input: String,
    reason: String,
}

impl UuidFormatError {
    /// The raw identifier that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Normalize a source identifier into canonical lowercase hyphenated form.
///
/// # Examples
///
/// ```rust
/// use ovm_cmdb_sync::domain::normalize_uuid;
///
/// let id = normalize_uuid("00:04:FB:00:00:06:00:00:3A:94:9D:BC:C8:7E:64:5B").unwrap();
/// assert_eq!(id, "0004fb00-0006-0000-3a94-9dbcc87e645b");
/// assert_eq!(normalize_uuid(&id).unwrap(), id);
/// ```
pub fn normalize_uuid(raw: &str) -> Result<String, UuidFormatError> {
    let compact: String = raw.trim().chars().filter(|c| *c != ':').collect();

    let parsed = Uuid::try_parse(&compact).map_err(|e| UuidFormatError {
        input: raw.to_string(),
        reason: e.to_string(),
    })?;

    // Hyphenated Display output is always lowercase
    Ok(parsed.hyphenated().to_string())
}
