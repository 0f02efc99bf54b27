// Copyright (c) 2025 - Cowboy AI, Inc.

//! Device42 CMDB Adapter
//!
//! Writes inventory into Device42 through its v1.0 REST API:
//!
//! ```text
//! POST {base}/api/1.0/device/                  (form) host or VM device
//! POST {base}/api/1.0/macs/                    (form) MAC address
//! POST {base}/api/1.0/ips/                     (form) IP address
//! GET  {base}/api/1.0/devices/serial/{serial}/ (json) device lookup
//! ```
//!
//! Device42 upserts on these endpoints, so re-running a sync updates
//! existing records instead of duplicating them. Write responses carry a
//! `{"code": 0, "msg": [...]}` envelope; a non-zero code is a rejection even
//! on HTTP 200.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use super::CmdbTarget;
use crate::config::Device42Config;
use crate::domain::{DeviceLookup, HostDeviceRecord, IpRecord, MacRecord, VmDeviceRecord};
use crate::errors::{SyncError, SyncResult, System};

const DEVICE_ENDPOINT: &str = "api/1.0/device/";
const MAC_ENDPOINT: &str = "api/1.0/macs/";
const IP_ENDPOINT: &str = "api/1.0/ips/";

/// Device42 API client
pub struct Device42Client {
    base_uri: String,
    client: Client,
}

impl Device42Client {
    /// Create a new Device42 client
    pub fn new(config: &Device42Config) -> SyncResult<Self> {
        info!("Connecting to Device42 at {}", config.base_uri);

        let mut headers = HeaderMap::new();
        let credentials = STANDARD.encode(format!("{}:{}", config.username, config.password));
        let mut auth = HeaderValue::from_str(&format!("Basic {}", credentials)).map_err(|e| {
            SyncError::Configuration(format!("Invalid Device42 credentials: {}", e))
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                SyncError::Configuration(format!("Failed to create Device42 HTTP client: {}", e))
            })?;

        Ok(Self {
            base_uri: config.base_uri.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_uri, endpoint)
    }

    fn serial_lookup_endpoint(serial: &str) -> String {
        format!("api/1.0/devices/serial/{}/", urlencoding::encode(serial))
    }

    async fn post_form<T: Serialize + Sync>(&self, endpoint: &str, record: &T) -> SyncResult<()> {
        let url = self.url(endpoint);

        let response = self
            .client
            .post(&url)
            .form(record)
            .send()
            .await
            .map_err(|e| SyncError::TargetUnreachable(format!("POST {}: {}", url, e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SyncError::TargetUnreachable(format!("POST {}: reading body: {}", url, e))
        })?;
        check_response(endpoint, status, &body)?;

        debug!("POST {} accepted", endpoint);
        Ok(())
    }
}

/// Classify a Device42 response
fn check_response(endpoint: &str, status: StatusCode, body: &str) -> SyncResult<()> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(SyncError::AuthFailure {
            system: System::Device42,
            status: status.as_u16(),
        });
    }

    let rejected = || SyncError::TargetRejected {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body: body.to_string(),
    };

    if !status.is_success() {
        return Err(rejected());
    }

    // Envelope errors arrive with HTTP 200
    if let Ok(envelope) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(code) = envelope.get("code").and_then(serde_json::Value::as_i64) {
            if code != 0 {
                return Err(rejected());
            }
        }
    }

    Ok(())
}

#[async_trait]
impl CmdbTarget for Device42Client {
    async fn post_host_device(&self, record: &HostDeviceRecord) -> SyncResult<()> {
        self.post_form(DEVICE_ENDPOINT, record).await
    }

    async fn post_vm_device(&self, record: &VmDeviceRecord) -> SyncResult<()> {
        self.post_form(DEVICE_ENDPOINT, record).await
    }

    async fn post_mac(&self, record: &MacRecord) -> SyncResult<()> {
        self.post_form(MAC_ENDPOINT, record).await
    }

    async fn post_ip(&self, record: &IpRecord) -> SyncResult<()> {
        self.post_form(IP_ENDPOINT, record).await
    }

    async fn device_name_by_serial(&self, serial: &str) -> SyncResult<String> {
        let endpoint = Self::serial_lookup_endpoint(serial);
        let url = self.url(&endpoint);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SyncError::TargetUnreachable(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SyncError::TargetUnreachable(format!("GET {}: reading body: {}", url, e))
        })?;
        check_response(&endpoint, status, &body)?;

        let device: DeviceLookup =
            serde_json::from_str(&body).map_err(|e| SyncError::TargetRejected {
                endpoint,
                status: status.as_u16(),
                body: format!("Unexpected lookup body: {}", e),
            })?;

        Ok(device.name)
    }
}
