// Copyright (c) 2025 - Cowboy AI, Inc.
//! Synchronization configuration
//!
//! Loaded from a TOML file with one section per system:
//!
//! ```toml
//! [ovm]
//! base_uri = "https://ovm-manager:7002/ovm/core/wsapi/rest"
//! username = "admin"
//! password = "secret"
//! max_wait_secs = 600
//!
//! [device42]
//! base_uri = "https://device42.example.com"
//! username = "admin"
//! password = "secret"
//!
//! [sync]
//! failure_policy = "continue"
//! ip_selection = "last"
//! ```
//!
//! or, when no file is present, from `OVM_*` / `D42_*` environment variables.

use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{SyncError, SyncResult};
use crate::mapping::IpSelection;
use crate::source::ManagerWaitPolicy;
use crate::sync::{FailurePolicy, SyncOptions};

fn default_poll_interval() -> u64 {
    1
}

fn default_timeout() -> u64 {
    30
}

/// Oracle VM Manager connection
#[derive(Clone, Deserialize)]
pub struct OvmConfig {
    /// Web services REST root, e.g. `https://ovm:7002/ovm/core/wsapi/rest`
    pub base_uri: String,
    pub username: String,
    pub password: String,

    /// Delay between manager state polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Give up waiting for the manager after this long; unset waits forever
    #[serde(default)]
    pub max_wait_secs: Option<u64>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// OVM Manager ships with a self-signed certificate
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Device42 connection
#[derive(Clone, Deserialize)]
pub struct Device42Config {
    pub base_uri: String,
    pub username: String,
    pub password: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Run behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncSettings {
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    #[serde(default)]
    pub ip_selection: IpSelection,

    /// Write the JSON run report here when set
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

/// Complete configuration for one run
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub ovm: OvmConfig,
    pub device42: Device42Config,
    #[serde(default)]
    pub sync: SyncSettings,
}

impl SyncConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> SyncResult<Self> {
        let config: SyncConfig = toml::from_str(text)
            .map_err(|e| SyncError::Configuration(format!("Invalid config file: {}", e)))?;
        config.normalized()
    }

    /// Load and validate a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> SyncResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SyncError::Configuration(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; [`SyncConfig::from_env`] passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SyncResult<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| SyncError::Configuration(format!("{} not set", key)))
        };
        let parsed = |key: &str, default: u64| -> SyncResult<u64> {
            match lookup(key) {
                Some(v) => v
                    .parse()
                    .map_err(|_| SyncError::Configuration(format!("{} is not a number: {}", key, v))),
                None => Ok(default),
            }
        };
        let flag = |key: &str| {
            lookup(key)
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false)
        };

        let max_wait_secs = match lookup("OVM_MAX_WAIT_SECS") {
            Some(_) => Some(parsed("OVM_MAX_WAIT_SECS", 0)?),
            None => None,
        };

        let failure_policy = match lookup("SYNC_FAILURE_POLICY").as_deref() {
            None | Some("continue") => FailurePolicy::ContinueOnError,
            Some("fail-fast") => FailurePolicy::FailFast,
            Some(other) => {
                return Err(SyncError::Configuration(format!(
                    "SYNC_FAILURE_POLICY must be 'continue' or 'fail-fast', got '{}'",
                    other
                )))
            }
        };

        let ip_selection = match lookup("SYNC_IP_SELECTION").as_deref() {
            None | Some("last") => IpSelection::Last,
            Some("first") => IpSelection::First,
            Some("all") => IpSelection::All,
            Some(other) => {
                return Err(SyncError::Configuration(format!(
                    "SYNC_IP_SELECTION must be 'first', 'last' or 'all', got '{}'",
                    other
                )))
            }
        };

        let config = SyncConfig {
            ovm: OvmConfig {
                base_uri: required("OVM_BASE_URI")?,
                username: required("OVM_USERNAME")?,
                password: required("OVM_PASSWORD")?,
                poll_interval_secs: parsed("OVM_POLL_INTERVAL_SECS", default_poll_interval())?,
                max_wait_secs,
                timeout_secs: parsed("OVM_TIMEOUT_SECS", default_timeout())?,
                accept_invalid_certs: flag("OVM_ACCEPT_INVALID_CERTS"),
            },
            device42: Device42Config {
                base_uri: required("D42_BASE_URI")?,
                username: required("D42_USERNAME")?,
                password: required("D42_PASSWORD")?,
                timeout_secs: parsed("D42_TIMEOUT_SECS", default_timeout())?,
                accept_invalid_certs: flag("D42_ACCEPT_INVALID_CERTS"),
            },
            sync: SyncSettings {
                failure_policy,
                ip_selection,
                report_path: lookup("SYNC_REPORT_PATH").map(PathBuf::from),
            },
        };

        config.normalized()
    }

    /// Trim trailing slashes from base URIs and check invariants
    fn normalized(mut self) -> SyncResult<Self> {
        self.ovm.base_uri = self.ovm.base_uri.trim_end_matches('/').to_string();
        self.device42.base_uri = self.device42.base_uri.trim_end_matches('/').to_string();
        self.validate()?;
        Ok(self)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> SyncResult<()> {
        validate_base_uri("ovm.base_uri", &self.ovm.base_uri)?;
        validate_base_uri("device42.base_uri", &self.device42.base_uri)?;

        if self.ovm.username.is_empty() {
            return Err(SyncError::Configuration("ovm.username is empty".to_string()));
        }
        if self.device42.username.is_empty() {
            return Err(SyncError::Configuration(
                "device42.username is empty".to_string(),
            ));
        }
        if self.ovm.poll_interval_secs == 0 {
            return Err(SyncError::Configuration(
                "ovm.poll_interval_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Options for the sync service
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            failure_policy: self.sync.failure_policy,
            ip_selection: self.sync.ip_selection,
            manager_wait: ManagerWaitPolicy {
                poll_interval: Duration::from_secs(self.ovm.poll_interval_secs),
                max_wait: self.ovm.max_wait_secs.map(Duration::from_secs),
            },
        }
    }
}

fn validate_base_uri(field: &str, uri: &str) -> SyncResult<()> {
    let url = Url::parse(uri)
        .map_err(|e| SyncError::Configuration(format!("{} '{}' is invalid: {}", field, uri, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(SyncError::Configuration(format!(
            "{} must use http or https, got '{}'",
            field, scheme
        ))),
    }
}

impl fmt::Debug for OvmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OvmConfig")
            .field("base_uri", &self.base_uri)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("max_wait_secs", &self.max_wait_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl fmt::Debug for Device42Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device42Config")
            .field("base_uri", &self.base_uri)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
