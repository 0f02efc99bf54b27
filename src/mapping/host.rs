// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hypervisor host mapping

use serde_json::Value;

use super::{decode, MappingError};
use crate::domain::cmdb::OVM_SERVER_OS;
use crate::domain::{normalize_uuid, split_ovm_version, HostDeviceRecord, OvmServer, YesNo};

/// A host ready for loading: its device record plus the ethernet ports to
/// fetch and post after it.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedHost {
    /// OVM display name, used for progress logging
    pub display_name: String,
    pub device: HostDeviceRecord,
    pub port_ids: Vec<String>,
}

/// Map one element of `GET /Server` to a Device42 device.
pub fn map_host(raw: &Value) -> Result<MappedHost, MappingError> {
    let server: OvmServer = decode(raw, "server")?;

    let uuid = normalize_uuid(&server.id.value).map_err(|source| MappingError::Uuid {
        entity: server.name.clone(),
        source,
    })?;

    let speed = server.processor_speed;
    if !speed.is_finite() || speed < 0.0 {
        return Err(MappingError::ProcessorSpeed {
            entity: server.name,
            speed,
        });
    }
    let cpupower = (speed / 1000.0).trunc() as u64;

    let (osver, osverno) = split_ovm_version(&server.ovm_version);

    let device = HostDeviceRecord {
        name: server.hostname.clone(),
        memory: server.memory,
        cpucount: server.populated_processor_sockets,
        cpucore: server.cores_per_processor_socket,
        cpupower,
        serial_no: server.serial_number.clone(),
        hardware: server.product_name.clone(),
        manufacturer: server.manufacturer.clone(),
        os: OVM_SERVER_OS.to_string(),
        osver: osver.to_string(),
        osverno: osverno.map(str::to_string),
        is_it_virtual_host: YesNo::Yes,
        uuid,
        in_service: YesNo::from_bool(server.server_run_state.is_running()),
    };

    Ok(MappedHost {
        display_name: server.name,
        device,
        port_ids: server
            .ethernet_port_ids
            .into_iter()
            .map(|id| id.value)
            .collect(),
    })
}
