// Copyright (c) 2025 - Cowboy AI, Inc.
//! Oracle VM Manager record models
//!
//! Typed views over the JSON returned by the Oracle VM web services API.
//! Only the fields the CMDB mapping reads are modelled; everything else in
//! the payload is ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to another OVM object (`{ "type", "value", "uri", "name" }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleId {
    pub value: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Run state reported for managers, servers and VMs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunState {
    Running,
    Stopped,
    Template,
    Other(String),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn is_template(&self) -> bool {
        matches!(self, RunState::Template)
    }
}

impl From<String> for RunState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "RUNNING" => RunState::Running,
            "STOPPED" => RunState::Stopped,
            "TEMPLATE" => RunState::Template,
            _ => RunState::Other(value),
        }
    }
}

impl From<RunState> for String {
    fn from(state: RunState) -> Self {
        state.to_string()
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Running => write!(f, "RUNNING"),
            RunState::Stopped => write!(f, "STOPPED"),
            RunState::Template => write!(f, "TEMPLATE"),
            RunState::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Element of `GET /Manager`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvmManager {
    pub manager_run_state: String,
}

impl OvmManager {
    /// The manager is ready once its run state reads RUNNING, in any case
    pub fn is_running(&self) -> bool {
        self.manager_run_state.eq_ignore_ascii_case("RUNNING")
    }
}

/// Element of `GET /Server`: a physical hypervisor host
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvmServer {
    pub id: SimpleId,
    pub name: String,
    pub hostname: String,
    pub memory: u64,
    pub populated_processor_sockets: u32,
    pub cores_per_processor_socket: u32,
    pub processor_speed: f64,
    pub serial_number: String,
    pub product_name: String,
    pub manufacturer: String,
    pub ovm_version: String,
    pub server_run_state: RunState,
    #[serde(default)]
    pub ethernet_port_ids: Vec<SimpleId>,
}

/// Element of `GET /Vm`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvmVm {
    pub id: SimpleId,
    pub name: String,
    pub current_memory: u64,
    pub current_cpu_count: u32,
    pub os_type: String,
    /// Absent or null when the VM is not placed on any server
    #[serde(default)]
    pub server_id: Option<SimpleId>,
    pub vm_run_state: RunState,
    #[serde(default)]
    pub virtual_nic_ids: Vec<SimpleId>,
}

/// IP address bound to an ethernet port
#[derive(Debug, Clone, Deserialize)]
pub struct OvmIpAddress {
    pub address: String,
}

/// `GET /EthernetPort/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvmEthernetPort {
    pub mac_address: String,
    pub interface_name: String,
    pub server_id: SimpleId,
    #[serde(default)]
    pub ipaddresses: Option<Vec<OvmIpAddress>>,
}
