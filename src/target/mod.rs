// Copyright (c) 2025 - Cowboy AI, Inc.

//! CMDB target adapters
//!
//! The [`CmdbTarget`] trait is the write side of a sync run. Each call is an
//! independent request; nothing ties a device post to the MAC and IP posts
//! that follow it.

pub mod device42;

use async_trait::async_trait;

use crate::domain::{HostDeviceRecord, IpRecord, MacRecord, VmDeviceRecord};
use crate::errors::SyncResult;

pub use device42::Device42Client;

/// Write access to the CMDB
#[async_trait]
pub trait CmdbTarget: Send + Sync {
    /// Create or update a hypervisor host device
    async fn post_host_device(&self, record: &HostDeviceRecord) -> SyncResult<()>;

    /// Create or update a virtual machine device
    async fn post_vm_device(&self, record: &VmDeviceRecord) -> SyncResult<()>;

    /// Create or update a MAC address
    async fn post_mac(&self, record: &MacRecord) -> SyncResult<()>;

    /// Create or update an IP address
    async fn post_ip(&self, record: &IpRecord) -> SyncResult<()>;

    /// Name of the device the CMDB holds under this serial number
    async fn device_name_by_serial(&self, serial: &str) -> SyncResult<String>;
}
