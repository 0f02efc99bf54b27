// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host ethernet port mapping

use serde_json::Value;

use super::{decode, IpSelection, MappingError};
use crate::domain::cmdb::SMART_OVERRIDE;
use crate::domain::{IpRecord, MacRecord, OvmEthernetPort};

/// One physical port: its MAC record and the IP records selected for it
#[derive(Debug, Clone, PartialEq)]
pub struct MappedPort {
    pub mac: MacRecord,
    pub ips: Vec<IpRecord>,
}

/// Map the body of `GET /EthernetPort/{id}`.
pub fn map_ethernet_port(raw: &Value, selection: IpSelection) -> Result<MappedPort, MappingError> {
    let port: OvmEthernetPort = decode(raw, "ethernet port")?;

    let device = port
        .server_id
        .name
        .clone()
        .ok_or_else(|| MappingError::Decode {
            entity: port.interface_name.clone(),
            kind: "ethernet port",
            reason: "serverId carries no host name".to_string(),
        })?;

    let addresses = port.ipaddresses.unwrap_or_default();
    let selected: Vec<_> = match selection {
        IpSelection::First => addresses.into_iter().take(1).collect(),
        IpSelection::Last => addresses.into_iter().last().into_iter().collect(),
        IpSelection::All => addresses,
    };

    let ips = selected
        .into_iter()
        .map(|ip| IpRecord {
            ipaddress: ip.address,
            tag: port.interface_name.clone(),
            macaddress: port.mac_address.clone(),
            device: device.clone(),
        })
        .collect();

    let mac = MacRecord {
        macaddress: port.mac_address,
        device,
        port_name: Some(port.interface_name),
        override_policy: Some(SMART_OVERRIDE.to_string()),
    };

    Ok(MappedPort { mac, ips })
}
