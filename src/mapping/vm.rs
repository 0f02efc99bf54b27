// Copyright (c) 2025 - Cowboy AI, Inc.
//! Virtual machine mapping

use serde_json::Value;

use super::{decode, MappingError};
use crate::domain::cmdb::{ORACLE_VM_SUBTYPE, VIRTUAL_DEVICE_TYPE};
use crate::domain::{normalize_uuid, MacRecord, OvmVm, RunState, VmDeviceRecord, YesNo};

/// A VM ready for loading: its device record plus one MAC record per vNIC
#[derive(Debug, Clone, PartialEq)]
pub struct MappedVm {
    pub device: VmDeviceRecord,
    pub nics: Vec<MacRecord>,
}

/// Map one element of `GET /Vm`.
///
/// Returns `Ok(None)` for templates, which are never synchronized. A template
/// is recognized from `vmRunState` alone, before the rest of the record is
/// decoded, so an incomplete template is still skipped rather than rejected.
///
/// The serial number is the normalized instance UUID: Oracle VM sets the
/// guest's SMBIOS system serial to its UUID for hardware virtualized guests,
/// so that is what discovery tools on the guest will report too.
pub fn map_vm(raw: &Value) -> Result<Option<MappedVm>, MappingError> {
    if is_template(raw) {
        return Ok(None);
    }

    let vm: OvmVm = decode(raw, "vm")?;

    let uuid = normalize_uuid(&vm.id.value).map_err(|source| MappingError::Uuid {
        entity: vm.name.clone(),
        source,
    })?;

    let host_name = vm.server_id.as_ref().and_then(|server| server.name.clone());
    let (virtual_host, virtual_host_clear) = match host_name {
        Some(host) => (Some(host), None),
        None => (None, Some(YesNo::Yes)),
    };

    let nics = vm
        .virtual_nic_ids
        .iter()
        .map(|vnic| MacRecord {
            // OVM names a vNIC after its MAC address
            macaddress: vnic.name.clone().unwrap_or_else(|| vnic.value.clone()),
            device: vm.name.clone(),
            port_name: None,
            override_policy: None,
        })
        .collect();

    let device = VmDeviceRecord {
        device_type: VIRTUAL_DEVICE_TYPE.to_string(),
        virtual_subtype: ORACLE_VM_SUBTYPE.to_string(),
        virtual_host,
        virtual_host_clear,
        name: vm.name,
        memory: vm.current_memory,
        cpucount: vm.current_cpu_count,
        os: vm.os_type,
        in_service: YesNo::from_bool(vm.vm_run_state.is_running()),
        serial_no: uuid.clone(),
        uuid,
    };

    Ok(Some(MappedVm { device, nics }))
}

fn is_template(raw: &Value) -> bool {
    raw.get("vmRunState")
        .and_then(Value::as_str)
        .map(|state| RunState::from(state.to_string()).is_template())
        .unwrap_or(false)
}

/// Point every NIC at the device name the CMDB actually holds for this
/// serial, so a VM already registered under another name does not get a
/// duplicate device created by the MAC posts.
pub fn correct_nic_device(nics: &mut [MacRecord], authoritative_name: &str) {
    for nic in nics.iter_mut() {
        if nic.device != authoritative_name {
            nic.device = authoritative_name.to_string();
        }
    }
}
