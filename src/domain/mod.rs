// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Domain Models
//!
//! Both sides of the synchronization, expressed as plain data:
//!
//! - [`ovm`] - records read from the Oracle VM Manager API
//! - [`cmdb`] - records written to the Device42 API
//!
//! # Value Helpers
//!
//! - [`normalize_uuid`] - colon-delimited hex → canonical lowercase UUID
//! - [`split_ovm_version`] - `3.4.2-1234` → `("3.4.2", Some("1234"))`

pub mod cmdb;
pub mod ovm;
pub mod system_uuid;
pub mod version;

pub use cmdb::{
    DeviceLookup, HostDeviceRecord, IpRecord, MacRecord, VmDeviceRecord, YesNo,
};
pub use ovm::{OvmEthernetPort, OvmManager, OvmServer, OvmVm, RunState, SimpleId};
pub use system_uuid::{normalize_uuid, UuidFormatError};
pub use version::split_ovm_version;
