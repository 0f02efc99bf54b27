// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for ovm-cmdb-sync
//!
//! Deterministic Oracle VM payloads shaped like real `/Server`, `/Vm` and
//! `/EthernetPort` responses, plus in-memory source and target doubles.
//!
//! # Design Principles
//! - All identifiers are fixed constants
//! - Fixtures return raw `serde_json::Value`, exactly what the API hands back
//! - Tests tweak a fixture field by field instead of writing JSON inline

#![allow(dead_code)]

pub mod mocks;

use serde_json::{json, Value};

pub const HOST_ID: &str = "36:33:37:35:35:39:43:4e:37:37:33:30:30:33:4c:53";
pub const HOST_UUID: &str = "36333735-3539-434e-3737-333030334c53";

pub const VM_ID: &str = "00:04:FB:00:00:06:00:00:3A:94:9D:BC:C8:7E:64:5B";
pub const VM_UUID: &str = "0004fb00-0006-0000-3a94-9dbcc87e645b";

pub const PORT_ETH0: &str = "0004fb00002000001c71b5a0b4e1c2d3";
pub const PORT_ETH1: &str = "0004fb00002000001c71b5a0b4e1c2d4";

/// A running hypervisor host with two ethernet ports
pub fn server_fixture() -> Value {
    json!({
        "id": {
            "type": "com.oracle.ovm.mgr.ws.model.Server",
            "value": HOST_ID,
            "uri": "https://ovm:7002/ovm/core/wsapi/rest/Server/36:33:37:35",
            "name": "ovs01"
        },
        "name": "ovs01",
        "hostname": "ovs01.example.com",
        "memory": 262144,
        "populatedProcessorSockets": 2,
        "coresPerProcessorSocket": 12,
        "processorSpeed": 2400000,
        "serialNumber": "CZ3730033L",
        "productName": "ProLiant DL380 Gen9",
        "manufacturer": "HP",
        "ovmVersion": "3.4.2-1234",
        "serverRunState": "RUNNING",
        "ethernetPortIds": [
            { "type": "com.oracle.ovm.mgr.ws.model.EthernetPort", "value": PORT_ETH0, "name": "eth0 on ovs01" },
            { "type": "com.oracle.ovm.mgr.ws.model.EthernetPort", "value": PORT_ETH1, "name": "eth1 on ovs01" }
        ]
    })
}

/// `eth0`: one bonded management address
pub fn eth0_fixture() -> Value {
    json!({
        "id": { "value": PORT_ETH0, "name": "eth0 on ovs01" },
        "name": "eth0 on ovs01",
        "macAddress": "00:10:e0:8f:1a:2b",
        "interfaceName": "eth0",
        "serverId": { "value": HOST_ID, "name": "ovs01.example.com" },
        "ipaddresses": [
            { "address": "10.20.0.11", "netmask": "255.255.255.0" },
            { "address": "10.20.0.12", "netmask": "255.255.255.0" }
        ]
    })
}

/// `eth1`: storage port without addresses
pub fn eth1_fixture() -> Value {
    json!({
        "id": { "value": PORT_ETH1, "name": "eth1 on ovs01" },
        "name": "eth1 on ovs01",
        "macAddress": "00:10:e0:8f:1a:2c",
        "interfaceName": "eth1",
        "serverId": { "value": HOST_ID, "name": "ovs01.example.com" },
        "ipaddresses": null
    })
}

/// A running VM placed on `ovs01` with two vNICs
pub fn vm_fixture() -> Value {
    json!({
        "id": {
            "type": "com.oracle.ovm.mgr.ws.model.Vm",
            "value": VM_ID,
            "name": "web01"
        },
        "name": "web01",
        "currentMemory": 8192,
        "currentCpuCount": 4,
        "osType": "Oracle Linux 7",
        "serverId": { "value": HOST_ID, "name": "ovs01.example.com" },
        "vmRunState": "RUNNING",
        "virtualNicIds": [
            { "value": "0004fb0000070000aa01", "name": "00:21:f6:00:00:01" },
            { "value": "0004fb0000070000aa02", "name": "00:21:f6:00:00:02" }
        ]
    })
}

/// A VM template; never synchronized
pub fn template_fixture() -> Value {
    let mut vm = vm_fixture();
    vm["name"] = json!("ol7-template");
    vm["id"]["value"] = json!("0004fb00001400001111222233334444");
    vm["vmRunState"] = json!("TEMPLATE");
    vm["serverId"] = Value::Null;
    vm
}

/// A template as older managers return it, without guest details
pub fn sparse_template_fixture() -> Value {
    let mut vm = template_fixture();
    if let Some(fields) = vm.as_object_mut() {
        fields.remove("osType");
        fields.remove("currentMemory");
    }
    vm
}

/// A VM not placed on any server
pub fn unplaced_vm_fixture() -> Value {
    let mut vm = vm_fixture();
    vm["name"] = json!("db01");
    vm["id"]["value"] = json!("0004fb0000060000aaaabbbbccccdddd");
    vm["vmRunState"] = json!("STOPPED");
    vm["serverId"] = Value::Null;
    vm["virtualNicIds"] = json!([{ "value": "0004fb0000070000bb01", "name": "00:21:f6:00:00:10" }]);
    vm
}
