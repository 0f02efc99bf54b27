// Copyright (c) 2025 - Cowboy AI, Inc.

//! Oracle VM Manager web services client
//!
//! Thin reqwest wrapper over the OVM 3.x REST API:
//!
//! ```text
//! GET {base}/Manager               → [ { managerRunState, ... } ]
//! GET {base}/Server                → [ server, ... ]
//! GET {base}/Vm                    → [ vm, ... ]
//! GET {base}/EthernetPort/{id}     → port
//! ```
//!
//! Every request carries HTTP Basic credentials and JSON `Accept` /
//! `Content-Type` headers.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::InventorySource;
use crate::config::OvmConfig;
use crate::domain::OvmManager;
use crate::errors::{SyncError, SyncResult, System};

/// Authenticated session against one Oracle VM Manager
pub struct OvmClient {
    base_uri: String,
    username: String,
    password: String,
    client: Client,
}

impl OvmClient {
    /// Create a new client; no request is made until the first call
    pub fn new(config: &OvmConfig) -> SyncResult<Self> {
        info!("Connecting to Oracle VM Manager at {}", config.base_uri);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                SyncError::Configuration(format!("Failed to create OVM HTTP client: {}", e))
            })?;

        Ok(Self {
            base_uri: config.base_uri.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| SyncError::SourceUnreachable(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SyncError::AuthFailure {
                system: System::Ovm,
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(SyncError::SourceRejected {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SyncError::SourceUnreachable(format!("GET {}: {}", url, e)))?;

        serde_json::from_slice(&body).map_err(|e| SyncError::MalformedRecord {
            entity: url,
            reason: format!("Invalid JSON body: {}", e),
        })
    }
}

#[async_trait]
impl InventorySource for OvmClient {
    async fn managers(&self) -> SyncResult<Vec<OvmManager>> {
        self.get_json("Manager").await
    }

    async fn list_servers(&self) -> SyncResult<Vec<Value>> {
        self.get_json("Server").await
    }

    async fn list_vms(&self) -> SyncResult<Vec<Value>> {
        self.get_json("Vm").await
    }

    async fn ethernet_port(&self, id: &str) -> SyncResult<Value> {
        self.get_json(&format!("EthernetPort/{}", urlencoding::encode(id)))
            .await
    }
}
