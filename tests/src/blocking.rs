// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]

use std::collections::BTreeSet;
use std::sync::Arc;

use gridlock_common::models::host::Host;
use gridlock_common::models::{Account, Detection, StaticIpList};
use gridlock_core::client::CLIENT_NAME;
use gridlock_core::transport::Transport;
use gridlock_core::{ActivationPolicy, Error, PxGridClient, ResponseClient, StopSignal};

use crate::harness::{
    ScriptedTransport, empty_lookup_body, radius_failure_body, script_control_plane,
    sessions_body, test_config,
};

async fn connected(transport: &Arc<ScriptedTransport>) -> PxGridClient {
    PxGridClient::with_transport(
        test_config(),
        transport.clone() as Arc<dyn Transport>,
        ActivationPolicy::default(),
        StopSignal::new(),
    )
    .await
    .expect("client construction should succeed")
}

fn quarantined_macs(transport: &ScriptedTransport) -> BTreeSet<String> {
    transport
        .requests_to("applyEndpointByMacAddress")
        .iter()
        .map(|r| r.body["macAddress"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn block_host_unions_explicit_and_resolved_macs() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on(
        "getSessions",
        200,
        sessions_body(&[
            ("10.0.0.9", "AA:BB:CC:00:11:22"),
            ("10.9.9.9", "AA:BB:CC:00:99:99"),
        ]),
    );
    transport.on("applyEndpointByMacAddress", 200, "{}");

    let client = connected(&transport).await;
    let mut host = Host::from_macs(["aa-bb-cc-00-11-33"]);
    host.ip = "10.0.0.9".to_string();

    let blocked = client.block_host(&host).await.unwrap();

    let expected: BTreeSet<String> = ["AA:BB:CC:00:11:22", "AA:BB:CC:00:11:33"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(blocked, expected);
    assert_eq!(quarantined_macs(&transport), expected);

    // Data-plane calls authenticate with the per-node secret, not the
    // control password, and always carry the configured policy.
    for request in transport.requests_to("applyEndpointByMacAddress") {
        assert_eq!(request.username, "gridlock");
        assert_eq!(request.password, "node-secret");
        assert_eq!(request.body["policyName"], "QUARANTINE");
    }
}

#[tokio::test]
async fn block_host_returns_macs_in_wire_form() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("getSessions", 200, sessions_body(&[]));
    transport.on("applyEndpointByMacAddress", 200, "{}");

    let client = connected(&transport).await;
    let host = Host::from_macs(["2c-cf-67-f2-51-e3", "2ccf.67f2.51e4"]);

    let blocked = client.block_host(&host).await.unwrap();

    // Formats collapse to the uppercase colon form on the wire and in the
    // set handed back for the platform's ledger.
    let expected: BTreeSet<String> = ["2C:CF:67:F2:51:E3", "2C:CF:67:F2:51:E4"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(blocked, expected);
    assert_eq!(quarantined_macs(&transport), expected);
}

#[tokio::test]
async fn block_host_with_macs_ignores_resolution_failure() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("getSessions", 500, r#"{"error": "mnt node down"}"#);
    transport.on("applyEndpointByMacAddress", 200, "{}");

    let client = connected(&transport).await;
    let mut host = Host::from_macs(["AA:BB:CC:00:11:22"]);
    host.ip = "10.0.0.9".to_string();

    let blocked = client.block_host(&host).await.unwrap();

    let expected: BTreeSet<String> =
        BTreeSet::from(["AA:BB:CC:00:11:22".to_string()]);
    assert_eq!(blocked, expected);
    assert_eq!(quarantined_macs(&transport), expected);
}

#[tokio::test]
async fn block_host_ip_only_quarantines_resolved_macs() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on(
        "getSessions",
        200,
        sessions_body(&[
            ("10.0.0.9", "AA:BB:CC:00:11:22"),
            ("10.0.0.9", "AA:BB:CC:00:11:22"),
            ("10.0.0.9", "AA:BB:CC:00:11:44"),
        ]),
    );
    transport.on("applyEndpointByMacAddress", 200, "{}");

    let client = connected(&transport).await;
    let host = Host::from_ip("10.0.0.9");

    let blocked = client.block_host(&host).await.unwrap();

    // Duplicate sessions collapse through the set union.
    let expected: BTreeSet<String> = ["AA:BB:CC:00:11:22", "AA:BB:CC:00:11:44"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(blocked, expected);
    assert_eq!(quarantined_macs(&transport), expected);
}

#[tokio::test]
async fn block_host_ip_only_resolution_failure_blocks_nothing() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("getSessions", 500, r#"{"error": "mnt node down"}"#);

    let client = connected(&transport).await;
    let host = Host::from_ip("10.0.0.9");

    let blocked = client.block_host(&host).await.unwrap();

    assert!(blocked.is_empty());
    assert!(transport.requests_to("applyEndpointByMacAddress").is_empty());
}

#[tokio::test]
async fn block_host_ip_only_missing_session_service_blocks_nothing() {
    let transport = ScriptedTransport::new();
    transport.on("AccountActivate", 200, crate::harness::enabled_body());
    transport.on_with_body("ServiceLookup", Some("session"), 200, empty_lookup_body());

    let client = connected(&transport).await;
    let host = Host::from_ip("10.0.0.9");

    let blocked = client.block_host(&host).await.unwrap();
    assert!(blocked.is_empty());
}

#[tokio::test]
async fn block_host_malformed_session_body_propagates() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("getSessions", 200, "<html>not json</html>");

    let client = connected(&transport).await;
    let host = Host::from_ip("10.0.0.9");

    match client.block_host(&host).await {
        Err(Error::MalformedResponse(_)) => {}
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn radius_failure_500_counts_as_quarantined() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("getSessions", 200, sessions_body(&[]));
    transport.on("applyEndpointByMacAddress", 500, radius_failure_body());

    let client = connected(&transport).await;
    let host = Host::from_macs(["AA:BB:CC:00:11:22"]);

    let blocked = client.block_host(&host).await.unwrap();
    assert_eq!(blocked.len(), 1);
}

#[tokio::test]
async fn non_radius_500_on_quarantine_propagates() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("getSessions", 200, sessions_body(&[]));
    transport.on(
        "applyEndpointByMacAddress",
        500,
        r#"{"ERSResponse": {"messages": [{"title": "Internal Error"}]}}"#,
    );

    let client = connected(&transport).await;
    let host = Host::from_macs(["AA:BB:CC:00:11:22"]);

    match client.block_host(&host).await {
        Err(Error::RequestFailed { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal Error"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn unblock_host_clears_exactly_the_recorded_set() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("clearEndpointByMacAddress", 200, "{}");

    let client = connected(&transport).await;
    let mut host = Host::default();
    host.record_blocked(CLIENT_NAME, ["AA:BB:CC:00:11:22", "AA:BB:CC:00:11:33"]);
    host.record_blocked("Other Client", ["DE:AD:BE:EF:00:01"]);

    let released = client.unblock_host(&host).await.unwrap();

    assert_eq!(released, ["AA:BB:CC:00:11:22", "AA:BB:CC:00:11:33"]);
    let cleared: Vec<String> = transport
        .requests_to("clearEndpointByMacAddress")
        .iter()
        .map(|r| r.body["macAddress"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(cleared, ["AA:BB:CC:00:11:22", "AA:BB:CC:00:11:33"]);
}

#[tokio::test]
async fn unblock_host_without_record_is_a_noop() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);

    let client = connected(&transport).await;
    let host = Host::default();

    let released = client.unblock_host(&host).await.unwrap();
    assert!(released.is_empty());
    assert!(transport.requests_to("clearEndpointByMacAddress").is_empty());
}

#[tokio::test]
async fn unsupported_capabilities_never_fail_and_return_empty() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);

    let client = connected(&transport).await;
    let requests_after_connect = transport.requests().len();

    let host = Host::from_ip("10.0.0.9");
    let detection = Detection {
        id: "det-1".to_string(),
        category: "lateral".to_string(),
    };
    let account = Account {
        name: "svc-backup".to_string(),
    };
    let ips = StaticIpList {
        dst_ips: vec!["203.0.113.7".to_string()],
    };

    assert!(client.groom_host(&host).await.unwrap().is_empty());
    assert!(client.block_detection(&detection).await.unwrap().is_empty());
    assert!(client.unblock_detection(&detection).await.unwrap().is_empty());
    assert!(client.block_account(&account).await.unwrap().is_empty());
    assert!(client.unblock_account(&account).await.unwrap().is_empty());
    assert!(client.block_static_dst_ips(&ips).await.unwrap().is_empty());
    assert!(client.unblock_static_dst_ips(&ips).await.unwrap().is_empty());

    // None of the stubs touch the wire.
    assert_eq!(transport.requests().len(), requests_after_connect);
}

#[tokio::test]
async fn each_operation_refetches_service_and_secret() {
    let transport = ScriptedTransport::new();
    script_control_plane(&transport);
    transport.on("getSessions", 200, sessions_body(&[]));
    transport.on("applyEndpointByMacAddress", 200, "{}");

    let client = connected(&transport).await;
    let host = Host::from_macs(["AA:BB:CC:00:11:22", "AA:BB:CC:00:11:33"]);

    client.block_host(&host).await.unwrap();

    // One session resolution plus one ANC resolution per MAC; no caching.
    assert_eq!(transport.requests_to("AccessSecret").len(), 3);
    assert_eq!(transport.requests_to("ServiceLookup").len(), 3);
}
