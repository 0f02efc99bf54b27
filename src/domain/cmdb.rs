// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device42 CMDB record representations
//!
//! Flat records posted as `application/x-www-form-urlencoded` bodies. Field
//! names are the Device42 API parameter names; optional fields are left out
//! of the form entirely when `None`.

use serde::{Deserialize, Serialize};

/// Operating system name reported for every hypervisor host
pub const OVM_SERVER_OS: &str = "Oracle VM Server";

/// Device type for guests
pub const VIRTUAL_DEVICE_TYPE: &str = "virtual";

/// Virtual subtype for Oracle VM guests
pub const ORACLE_VM_SUBTYPE: &str = "oracle_vm";

/// Override policy passed through with host port MACs
pub const SMART_OVERRIDE: &str = "smart";

/// Device42 boolean flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn from_bool(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

/// `POST /api/1.0/device/` body for a hypervisor host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDeviceRecord {
    pub name: String,
    pub memory: u64,
    pub cpucount: u32,
    pub cpucore: u32,
    pub cpupower: u64,
    pub serial_no: String,
    pub hardware: String,
    pub manufacturer: String,
    pub os: String,
    pub osver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osverno: Option<String>,
    pub is_it_virtual_host: YesNo,
    pub uuid: String,
    pub in_service: YesNo,
}

/// `POST /api/1.0/device/` body for a virtual machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmDeviceRecord {
    #[serde(rename = "type")]
    pub device_type: String,
    pub virtual_subtype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,
    /// Asks Device42 to drop a previous host association
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host_clear: Option<YesNo>,
    pub name: String,
    pub memory: u64,
    pub cpucount: u32,
    pub os: String,
    pub in_service: YesNo,
    pub uuid: String,
    pub serial_no: String,
}

/// `POST /api/1.0/macs/` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacRecord {
    pub macaddress: String,
    pub device: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_policy: Option<String>,
}

/// `POST /api/1.0/ips/` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRecord {
    pub ipaddress: String,
    pub tag: String,
    pub macaddress: String,
    pub device: String,
}

/// Body of `GET /api/1.0/devices/serial/{serial}/`
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceLookup {
    pub name: String,
}
