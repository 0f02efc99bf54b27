// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sync Service - OVM → Device42
//!
//! Orchestrates one complete run, strictly in sequence:
//!
//! ```text
//! wait for manager RUNNING
//!     ↓
//! for each server:   POST device → for each port: GET port → POST mac → POST ip(s)
//!     ↓
//! for each vm:       (skip templates)
//!                    POST device → GET device by serial → POST mac per vNIC
//!                                  (NICs renamed to the CMDB's device name)
//! ```
//!
//! # Failure Handling
//!
//! Under [`FailurePolicy::ContinueOnError`] a failure is recorded against the
//! entity being processed and the run moves on; under
//! [`FailurePolicy::FailFast`] the first failure ends the run. Errors that
//! make every later request pointless (authentication, timeouts) end the run
//! under either policy.

pub mod report;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::errors::{SyncError, SyncResult};
use crate::mapping::{
    correct_nic_device, map_ethernet_port, map_host, map_vm, record_name, IpSelection, MappedVm,
};
use crate::source::{wait_for_manager, InventorySource, ManagerWaitPolicy};
use crate::target::CmdbTarget;

pub use report::{EntityKind, EntityReport, Outcome, SyncReport, SyncSummary};

/// What to do when one entity fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Record the failure and carry on with the next entity
    #[default]
    #[serde(rename = "continue")]
    ContinueOnError,
    /// Abort the run on the first failure
    #[serde(rename = "fail-fast")]
    FailFast,
}

/// A run that stopped early, with the report of what it got done
#[derive(Debug, Error)]
#[error("{error}")]
pub struct SyncAborted {
    #[source]
    pub error: SyncError,
    pub report: Box<SyncReport>,
}

/// Tunables for a sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub failure_policy: FailurePolicy,
    pub ip_selection: IpSelection,
    pub manager_wait: ManagerWaitPolicy,
}

/// Synchronizes one inventory source into one CMDB
pub struct SyncService<S, T> {
    source: S,
    target: T,
    options: SyncOptions,
}

impl<S, T> SyncService<S, T>
where
    S: InventorySource,
    T: CmdbTarget,
{
    pub fn new(source: S, target: T, options: SyncOptions) -> Self {
        Self {
            source,
            target,
            options,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Run one full synchronization.
    ///
    /// On abort the error comes back together with the report of everything
    /// posted up to that point, including the entity that was in progress.
    pub async fn run(&self) -> Result<SyncReport, SyncAborted> {
        let mut report = SyncReport::start();
        let result = self.run_into(&mut report).await;
        report.finish();

        match result {
            Ok(()) => {
                info!("Sync finished: {}", report.summary());
                Ok(report)
            }
            Err(error) => {
                report.aborted = Some(error.to_string());
                error!("Sync aborted: {}", report.summary());
                Err(SyncAborted {
                    error,
                    report: Box::new(report),
                })
            }
        }
    }

    async fn run_into(&self, report: &mut SyncReport) -> SyncResult<()> {
        wait_for_manager(&self.source, &self.options.manager_wait).await?;

        let servers = self.source.list_servers().await?;
        info!("Found {} Oracle VM servers", servers.len());
        for raw in &servers {
            let mut entity = EntityReport::new(EntityKind::Host, record_name(raw));
            let result = self.sync_host(raw, &mut entity).await;
            report.record(entity);
            result?;
        }

        let vms = self.source.list_vms().await?;
        info!("Found {} virtual machines", vms.len());
        for raw in &vms {
            let mut entity = EntityReport::new(EntityKind::Vm, record_name(raw));
            match self.sync_vm(raw, &mut entity).await {
                Ok(true) => report.record(entity),
                Ok(false) => report.templates_skipped += 1,
                Err(e) => {
                    report.record(entity);
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Record a failure against `entity`, or turn it into an abort
    fn absorb(&self, entity: &mut EntityReport, err: SyncError) -> SyncResult<()> {
        entity.errors.push(err.to_string());

        if err.is_fatal() || self.options.failure_policy == FailurePolicy::FailFast {
            error!("Aborting sync at {} {}: {}", entity.kind, entity.name, err);
            return Err(err);
        }

        warn!("{} {}: {}", entity.kind, entity.name, err);
        Ok(())
    }

    async fn sync_host(&self, raw: &Value, entity: &mut EntityReport) -> SyncResult<()> {
        let mapped = match map_host(raw) {
            Ok(mapped) => mapped,
            Err(e) => return self.absorb(entity, e.into()),
        };

        info!("Processing Oracle VM Server {}", mapped.display_name);

        match self.target.post_host_device(&mapped.device).await {
            Ok(()) => entity.device_posted = true,
            Err(e) => self.absorb(entity, e)?,
        }

        for port_id in &mapped.port_ids {
            self.sync_port(entity, port_id).await?;
        }

        Ok(())
    }

    async fn sync_port(&self, entity: &mut EntityReport, port_id: &str) -> SyncResult<()> {
        let raw = match self.source.ethernet_port(port_id).await {
            Ok(raw) => raw,
            Err(e) => return self.absorb(entity, e),
        };

        let port = match map_ethernet_port(&raw, self.options.ip_selection) {
            Ok(port) => port,
            Err(e) => return self.absorb(entity, e.into()),
        };

        debug!("Posting port {} ({})", port_id, port.mac.macaddress);
        match self.target.post_mac(&port.mac).await {
            Ok(()) => entity.macs_posted += 1,
            Err(e) => self.absorb(entity, e)?,
        }

        for ip in &port.ips {
            match self.target.post_ip(ip).await {
                Ok(()) => entity.ips_posted += 1,
                Err(e) => self.absorb(entity, e)?,
            }
        }

        Ok(())
    }

    /// Returns `false` when the record is a template and was skipped
    async fn sync_vm(&self, raw: &Value, entity: &mut EntityReport) -> SyncResult<bool> {
        let MappedVm { device, mut nics } = match map_vm(raw) {
            Ok(Some(mapped)) => mapped,
            Ok(None) => {
                debug!("Skipping template {}", entity.name);
                return Ok(false);
            }
            Err(e) => {
                self.absorb(entity, e.into())?;
                return Ok(true);
            }
        };

        info!("Processing virtual machine {}", device.name);

        match self.target.post_vm_device(&device).await {
            Ok(()) => {
                entity.device_posted = true;

                match self.target.device_name_by_serial(&device.serial_no).await {
                    Ok(name) => {
                        if name != device.name {
                            info!(
                                "Device42 holds {} as {}, attaching NICs there",
                                device.name, name
                            );
                            entity.renamed_to = Some(name.clone());
                        }
                        correct_nic_device(&mut nics, &name);
                    }
                    Err(e) => self.absorb(entity, e)?,
                }
            }
            Err(e) => self.absorb(entity, e)?,
        }

        for nic in &nics {
            match self.target.post_mac(nic).await {
                Ok(()) => entity.macs_posted += 1,
                Err(e) => self.absorb(entity, e)?,
            }
        }

        Ok(true)
    }
}
