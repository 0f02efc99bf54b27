// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory doubles for the source and target APIs

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use ovm_cmdb_sync::domain::{HostDeviceRecord, IpRecord, MacRecord, OvmManager, VmDeviceRecord};
use ovm_cmdb_sync::{CmdbTarget, InventorySource, SyncError, SyncResult, System};

/// Serves canned OVM collections
pub struct MockSource {
    pub manager_state: String,
    pub servers: Vec<Value>,
    pub vms: Vec<Value>,
    pub ports: HashMap<String, Value>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            manager_state: "RUNNING".to_string(),
            servers: Vec::new(),
            vms: Vec::new(),
            ports: HashMap::new(),
        }
    }

    pub fn with_server(mut self, server: Value) -> Self {
        self.servers.push(server);
        self
    }

    pub fn with_vm(mut self, vm: Value) -> Self {
        self.vms.push(vm);
        self
    }

    pub fn with_port(mut self, id: &str, port: Value) -> Self {
        self.ports.insert(id.to_string(), port);
        self
    }
}

#[async_trait]
impl InventorySource for MockSource {
    async fn managers(&self) -> SyncResult<Vec<OvmManager>> {
        Ok(vec![OvmManager {
            manager_run_state: self.manager_state.clone(),
        }])
    }

    async fn list_servers(&self) -> SyncResult<Vec<Value>> {
        Ok(self.servers.clone())
    }

    async fn list_vms(&self) -> SyncResult<Vec<Value>> {
        Ok(self.vms.clone())
    }

    async fn ethernet_port(&self, id: &str) -> SyncResult<Value> {
        self.ports
            .get(id)
            .cloned()
            .ok_or_else(|| SyncError::SourceRejected {
                url: format!("EthernetPort/{}", id),
                status: 404,
            })
    }
}

/// One request received by [`MockTarget`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Posted {
    HostDevice(HostDeviceRecord),
    VmDevice(VmDeviceRecord),
    Mac(MacRecord),
    Ip(IpRecord),
    SerialLookup(String),
}

/// Records every request; rejects the ones it is told to
#[derive(Default)]
pub struct MockTarget {
    posted: Mutex<Vec<Posted>>,
    known_names: HashMap<String, String>,
    rejected_devices: HashSet<String>,
    rejected_macs: HashSet<String>,
    deny_all: bool,
}

impl MockTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The CMDB already holds `serial` under `name`
    pub fn with_known_name(mut self, serial: &str, name: &str) -> Self {
        self.known_names.insert(serial.to_string(), name.to_string());
        self
    }

    pub fn rejecting_device(mut self, name: &str) -> Self {
        self.rejected_devices.insert(name.to_string());
        self
    }

    pub fn rejecting_mac(mut self, mac: &str) -> Self {
        self.rejected_macs.insert(mac.to_string());
        self
    }

    /// Every request fails with HTTP 401
    pub fn denying_all(mut self) -> Self {
        self.deny_all = true;
        self
    }

    pub fn posted(&self) -> Vec<Posted> {
        self.posted.lock().unwrap().clone()
    }

    pub fn vm_devices(&self) -> Vec<VmDeviceRecord> {
        self.posted()
            .into_iter()
            .filter_map(|p| match p {
                Posted::VmDevice(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    pub fn macs(&self) -> Vec<MacRecord> {
        self.posted()
            .into_iter()
            .filter_map(|p| match p {
                Posted::Mac(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn ips(&self) -> Vec<IpRecord> {
        self.posted()
            .into_iter()
            .filter_map(|p| match p {
                Posted::Ip(ip) => Some(ip),
                _ => None,
            })
            .collect()
    }

    fn accept(&self, request: Posted) -> SyncResult<()> {
        if self.deny_all {
            return Err(SyncError::AuthFailure {
                system: System::Device42,
                status: 401,
            });
        }

        let rejected = match &request {
            Posted::HostDevice(d) => self.rejected_devices.contains(&d.name),
            Posted::VmDevice(d) => self.rejected_devices.contains(&d.name),
            Posted::Mac(m) => self.rejected_macs.contains(&m.macaddress),
            _ => false,
        };

        self.posted.lock().unwrap().push(request);

        if rejected {
            return Err(SyncError::TargetRejected {
                endpoint: "mock".to_string(),
                status: 500,
                body: "rejected by test".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CmdbTarget for MockTarget {
    async fn post_host_device(&self, record: &HostDeviceRecord) -> SyncResult<()> {
        self.accept(Posted::HostDevice(record.clone()))
    }

    async fn post_vm_device(&self, record: &VmDeviceRecord) -> SyncResult<()> {
        self.accept(Posted::VmDevice(record.clone()))
    }

    async fn post_mac(&self, record: &MacRecord) -> SyncResult<()> {
        self.accept(Posted::Mac(record.clone()))
    }

    async fn post_ip(&self, record: &IpRecord) -> SyncResult<()> {
        self.accept(Posted::Ip(record.clone()))
    }

    async fn device_name_by_serial(&self, serial: &str) -> SyncResult<String> {
        self.accept(Posted::SerialLookup(serial.to_string()))?;

        if let Some(name) = self.known_names.get(serial) {
            return Ok(name.clone());
        }

        // Otherwise Device42 knows it under the name we just posted
        self.vm_devices()
            .into_iter()
            .rev()
            .find(|d| d.serial_no == serial)
            .map(|d| d.name)
            .ok_or_else(|| SyncError::TargetRejected {
                endpoint: format!("api/1.0/devices/serial/{}/", serial),
                status: 404,
                body: "device not found".to_string(),
            })
    }
}
