// Copyright (c) 2025 - Cowboy AI, Inc.
//! Run report
//!
//! Posts are not transactional: a host device can land while its MAC posts
//! fail. The report records, per entity, what reached the CMDB and what did
//! not, so a partial run can be inspected and re-run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::errors::{SyncError, SyncResult};

/// Kind of synchronized entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Host,
    Vm,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Host => write!(f, "host"),
            EntityKind::Vm => write!(f, "vm"),
        }
    }
}

/// How far one entity got
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Every post went through
    Succeeded,
    /// Some posts went through, some failed
    Partial,
    /// Nothing reached the CMDB
    Failed,
}

/// Result of synchronizing one host or VM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReport {
    pub kind: EntityKind,
    pub name: String,
    pub outcome: Outcome,
    pub device_posted: bool,
    pub macs_posted: usize,
    pub ips_posted: usize,
    /// Device42 name the NICs were attached to, when it differs from ours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed_to: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl EntityReport {
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            outcome: Outcome::Succeeded,
            device_posted: false,
            macs_posted: 0,
            ips_posted: 0,
            renamed_to: None,
            errors: Vec::new(),
        }
    }

    fn anything_posted(&self) -> bool {
        self.device_posted || self.macs_posted > 0 || self.ips_posted > 0
    }

    /// Derive the outcome from what was posted and what failed
    pub fn settle(&mut self) {
        self.outcome = if self.errors.is_empty() {
            Outcome::Succeeded
        } else if self.anything_posted() {
            Outcome::Partial
        } else {
            Outcome::Failed
        };
    }
}

/// Counts over a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub hosts: usize,
    pub vms: usize,
    pub templates_skipped: usize,
    pub succeeded: usize,
    pub partial: usize,
    pub failed: usize,
    /// The run stopped before every entity was visited
    pub aborted: bool,
}

impl SyncSummary {
    pub fn is_clean(&self) -> bool {
        !self.aborted && self.partial == 0 && self.failed == 0
    }
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hosts, {} VMs ({} templates skipped): {} succeeded, {} partial, {} failed",
            self.hosts,
            self.vms,
            self.templates_skipped,
            self.succeeded,
            self.partial,
            self.failed
        )?;
        if self.aborted {
            write!(f, ", aborted")?;
        }
        Ok(())
    }
}

/// Everything one sync run did
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub templates_skipped: usize,
    pub entities: Vec<EntityReport>,
    /// Why the run stopped early, if it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aborted: Option<String>,
}

impl SyncReport {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            templates_skipped: 0,
            entities: Vec::new(),
            aborted: None,
        }
    }

    /// Settle and append an entity
    pub fn record(&mut self, mut entity: EntityReport) {
        entity.settle();
        self.entities.push(entity);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn entity(&self, kind: EntityKind, name: &str) -> Option<&EntityReport> {
        self.entities
            .iter()
            .find(|e| e.kind == kind && e.name == name)
    }

    pub fn summary(&self) -> SyncSummary {
        let mut summary = SyncSummary {
            templates_skipped: self.templates_skipped,
            aborted: self.aborted.is_some(),
            ..Default::default()
        };

        for entity in &self.entities {
            match entity.kind {
                EntityKind::Host => summary.hosts += 1,
                EntityKind::Vm => summary.vms += 1,
            }
            match entity.outcome {
                Outcome::Succeeded => summary.succeeded += 1,
                Outcome::Partial => summary.partial += 1,
                Outcome::Failed => summary.failed += 1,
            }
        }

        summary
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: impl AsRef<Path>) -> SyncResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            SyncError::Report(format!("Cannot serialize report: {}", e))
        })?;
        std::fs::write(path, json).map_err(|e| {
            SyncError::Report(format!("Cannot write report to {}: {}", path.display(), e))
        })
    }
}
