// Copyright (c) 2025 - Cowboy AI, Inc.
//! Record Mapping - Pure Functions OVM JSON → Device42 Records
//!
//! Every function in this module is pure: raw JSON in, typed records out,
//! no I/O. The sync service performs the HTTP side.
//!
//! ```text
//! GET /Server ──> map_host ──────────> HostDeviceRecord  ──> POST device/
//!                    │
//!                    └─ port ids ──> GET /EthernetPort/{id}
//!                                        │
//!                                 map_ethernet_port ──> MacRecord ──> POST macs/
//!                                                  └──> IpRecord  ──> POST ips/
//!
//! GET /Vm ─────> map_vm ──> VmDeviceRecord ──> POST device/
//!                   └─────> MacRecord (per vNIC) ──> POST macs/
//! ```

pub mod host;
pub mod port;
pub mod vm;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::UuidFormatError;

pub use host::{map_host, MappedHost};
pub use port::{map_ethernet_port, MappedPort};
pub use vm::{correct_nic_device, map_vm, MappedVm};

/// Name used in errors when a record carries no usable name
const UNNAMED: &str = "<unnamed>";

/// Mapping error, always tagged with the entity it came from
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MappingError {
    #[error("cannot decode {kind} record: {reason}")]
    Decode {
        entity: String,
        kind: &'static str,
        reason: String,
    },

    #[error("{source}")]
    Uuid {
        entity: String,
        #[source]
        source: UuidFormatError,
    },

    #[error("processor speed must be a non-negative finite number, got {speed}")]
    ProcessorSpeed { entity: String, speed: f64 },
}

impl MappingError {
    /// Name of the record that failed to map
    pub fn entity(&self) -> &str {
        match self {
            MappingError::Decode { entity, .. }
            | MappingError::Uuid { entity, .. }
            | MappingError::ProcessorSpeed { entity, .. } => entity,
        }
    }
}

/// Which of a port's IP addresses are sent to the CMDB
///
/// Oracle VM may bind several addresses to one ethernet port. Device42 gets
/// one IP record per selected address, tagged with the interface name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpSelection {
    /// First address in source order
    First,
    /// Last address in source order
    #[default]
    Last,
    /// Every address
    All,
}

/// Best-effort display name of a raw record
pub(crate) fn record_name(raw: &Value) -> String {
    raw.get("name")
        .and_then(Value::as_str)
        .unwrap_or(UNNAMED)
        .to_string()
}

/// Decode a raw record into its typed source model
pub(crate) fn decode<T: DeserializeOwned>(
    raw: &Value,
    kind: &'static str,
) -> Result<T, MappingError> {
    T::deserialize(raw).map_err(|e| MappingError::Decode {
        entity: record_name(raw),
        kind,
        reason: e.to_string(),
    })
}
