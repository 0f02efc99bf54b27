// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Host and VM Mapping

use ovm_cmdb_sync::domain::YesNo;
use ovm_cmdb_sync::mapping::{map_host, map_vm};
use proptest::prelude::*;
use serde_json::{json, Value};

fn server(speed: u64, state: &str) -> Value {
    json!({
        "id": { "value": "36:33:37:35:35:39:43:4e:37:37:33:30:30:33:4c:53" },
        "name": "ovs01",
        "hostname": "ovs01.example.com",
        "memory": 65536,
        "populatedProcessorSockets": 2,
        "coresPerProcessorSocket": 8,
        "processorSpeed": speed,
        "serialNumber": "SN1",
        "productName": "X6-2",
        "manufacturer": "Oracle Corporation",
        "ovmVersion": "3.4.6-2105",
        "serverRunState": state,
        "ethernetPortIds": []
    })
}

fn vm(id: &str, state: &str) -> Value {
    json!({
        "id": { "value": id },
        "name": "vm",
        "currentMemory": 1024,
        "currentCpuCount": 1,
        "osType": "Oracle Linux 8",
        "serverId": null,
        "vmRunState": state,
        "virtualNicIds": []
    })
}

fn run_state() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("RUNNING".to_string()),
        Just("STOPPED".to_string()),
        Just("SUSPENDED".to_string()),
        Just("STARTING".to_string()),
        "[A-Za-z]{1,12}",
    ]
}

proptest! {
    /// cpupower is processorSpeed / 1000, truncated
    #[test]
    fn prop_cpupower_truncates(speed in 0u64..100_000_000) {
        let device = map_host(&server(speed, "RUNNING")).unwrap().device;
        prop_assert_eq!(device.cpupower, speed / 1000);
    }

    /// Hosts are in service exactly when the run state is RUNNING
    #[test]
    fn prop_host_in_service_iff_running(state in run_state()) {
        let device = map_host(&server(2_400_000, &state)).unwrap().device;
        prop_assert_eq!(device.in_service == YesNo::Yes, state == "RUNNING");
    }

    /// Every non-template VM carries serial_no == uuid
    #[test]
    fn prop_vm_serial_equals_uuid(bytes in any::<[u8; 16]>(), state in run_state()) {
        prop_assume!(state != "TEMPLATE");
        let id = bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":");

        let device = map_vm(&vm(&id, &state)).unwrap().unwrap().device;
        prop_assert_eq!(&device.serial_no, &device.uuid);
        prop_assert_eq!(device.in_service == YesNo::Yes, state == "RUNNING");
    }

    /// Templates never produce a record, whatever else they contain
    #[test]
    fn prop_templates_skipped(bytes in any::<[u8; 16]>()) {
        let id = bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":");
        prop_assert!(map_vm(&vm(&id, "TEMPLATE")).unwrap().is_none());
    }
}
