//! Oracle VM → Device42 inventory synchronization
//!
//! Reads hypervisor hosts and virtual machines from an Oracle VM Manager,
//! maps them onto Device42 device, MAC and IP records, and posts them to the
//! CMDB.
//!
//! - [`source`] - Oracle VM Manager extraction and the manager readiness wait
//! - [`mapping`] - pure record transformations
//! - [`target`] - Device42 loading
//! - [`sync`] - the run orchestrator and its report

pub mod config;
pub mod domain;
pub mod errors;
pub mod mapping;
pub mod source;
pub mod sync;
pub mod target;

// Re-export commonly used types
pub use config::{Device42Config, OvmConfig, SyncConfig, SyncSettings};
pub use errors::{SyncError, SyncResult, System};
pub use source::{InventorySource, ManagerWaitPolicy, OvmClient};
pub use sync::{FailurePolicy, SyncAborted, SyncOptions, SyncReport, SyncService, SyncSummary};
pub use target::{CmdbTarget, Device42Client};
