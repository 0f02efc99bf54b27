// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Source - Oracle VM Manager extraction
//!
//! The [`InventorySource`] trait is the read side of a sync run. Each method
//! is a single idempotent GET; list bodies are handed back as raw JSON so
//! that one malformed record fails on its own during mapping instead of
//! failing the whole collection.
//!
//! Before any extraction, [`wait_for_manager`] blocks until the manager
//! reports `RUNNING`, polling at a fixed interval and optionally bounded by
//! a deadline.

pub mod ovm;

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::OvmManager;
use crate::errors::{SyncError, SyncResult};

pub use ovm::OvmClient;

/// Read access to the virtualization manager
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// `GET /Manager`
    async fn managers(&self) -> SyncResult<Vec<OvmManager>>;

    /// `GET /Server`
    async fn list_servers(&self) -> SyncResult<Vec<Value>>;

    /// `GET /Vm`
    async fn list_vms(&self) -> SyncResult<Vec<Value>>;

    /// `GET /EthernetPort/{id}`
    async fn ethernet_port(&self, id: &str) -> SyncResult<Value>;
}

/// How long and how often to poll the manager state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerWaitPolicy {
    pub poll_interval: Duration,
    /// `None` waits indefinitely
    pub max_wait: Option<Duration>,
}

impl Default for ManagerWaitPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            max_wait: None,
        }
    }
}

/// Block until the manager reports `RUNNING`.
///
/// Transport failures and error statuses count as "not ready yet" and are
/// polled again; fatal errors (authentication) return immediately. Dropping
/// the returned future cancels the wait.
pub async fn wait_for_manager<S>(source: &S, policy: &ManagerWaitPolicy) -> SyncResult<()>
where
    S: InventorySource + ?Sized,
{
    let poll = async {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            match source.managers().await {
                Ok(managers) if managers.first().is_some_and(OvmManager::is_running) => {
                    info!("Oracle VM Manager is running (after {} polls)", attempt);
                    return Ok(());
                }
                Ok(managers) => {
                    let state = managers
                        .first()
                        .map(|m| m.manager_run_state.as_str())
                        .unwrap_or("<none>");
                    debug!("Manager state is {} (poll {}), waiting", state, attempt);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => warn!("Manager state poll {} failed: {}", attempt, e),
            }

            tokio::time::sleep(policy.poll_interval).await;
        }
    };

    match policy.max_wait {
        Some(limit) => tokio::time::timeout(limit, poll).await.map_err(|_| {
            SyncError::Timeout(format!(
                "Oracle VM Manager not running after {}s",
                limit.as_secs_f64()
            ))
        })?,
        None => poll.await,
    }
}
