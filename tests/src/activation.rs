// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]

use std::sync::Arc;
use std::time::Duration;

use gridlock_core::transport::Transport;
use gridlock_core::{ActivationPolicy, Error, PxGridClient, StopSignal};

use crate::harness::{ScriptedTransport, enabled_body, pending_body, test_config};

#[tokio::test(start_paused = true)]
async fn enabled_on_first_poll_completes_without_sleeping() {
    let transport = ScriptedTransport::new();
    transport.on("AccountActivate", 200, enabled_body());

    let started = tokio::time::Instant::now();
    let client = PxGridClient::with_transport(
        test_config(),
        transport.clone() as Arc<dyn Transport>,
        ActivationPolicy::default(),
        StopSignal::new(),
    )
    .await;

    assert!(client.is_ok(), "construction failed: {:?}", client.err());
    assert_eq!(started.elapsed(), Duration::ZERO, "no sleep expected");
    assert_eq!(transport.requests_to("AccountActivate").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn pending_then_enabled_waits_one_full_interval() {
    let transport = ScriptedTransport::new();
    transport.on("AccountActivate", 200, pending_body());
    transport.on("AccountActivate", 200, enabled_body());

    let started = tokio::time::Instant::now();
    let client = PxGridClient::with_transport(
        test_config(),
        transport.clone() as Arc<dyn Transport>,
        ActivationPolicy::default(),
        StopSignal::new(),
    )
    .await;

    assert!(client.is_ok(), "construction failed: {:?}", client.err());
    assert_eq!(started.elapsed(), Duration::from_secs(60));
    assert_eq!(transport.requests_to("AccountActivate").len(), 2);
}

#[tokio::test(start_paused = true)]
async fn bounded_policy_gives_up_after_budget() {
    let transport = ScriptedTransport::new();
    transport.on("AccountActivate", 200, pending_body());

    let result = PxGridClient::with_transport(
        test_config(),
        transport.clone() as Arc<dyn Transport>,
        ActivationPolicy::bounded(Duration::from_secs(1), 3),
        StopSignal::new(),
    )
    .await;

    match result {
        Err(Error::ActivationExhausted { attempts }) => assert_eq!(attempts, 3),
        Err(other) => panic!("expected ActivationExhausted, got {other}"),
        Ok(_) => panic!("construction unexpectedly succeeded"),
    }
    assert_eq!(transport.requests_to("AccountActivate").len(), 3);
}

#[tokio::test]
async fn raised_stop_signal_cancels_before_any_poll() {
    let transport = ScriptedTransport::new();
    transport.on("AccountActivate", 200, pending_body());

    let stop = StopSignal::new();
    stop.trigger();

    let result = PxGridClient::with_transport(
        test_config(),
        transport.clone() as Arc<dyn Transport>,
        ActivationPolicy::default(),
        stop,
    )
    .await;

    assert!(matches!(result, Err(Error::ActivationCancelled)));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn activation_sends_description_with_control_credentials() {
    let transport = ScriptedTransport::new();
    transport.on("AccountActivate", 200, enabled_body());

    PxGridClient::with_transport(
        test_config(),
        transport.clone() as Arc<dyn Transport>,
        ActivationPolicy::default(),
        StopSignal::new(),
    )
    .await
    .expect("construction should succeed");

    let activate = &transport.requests_to("AccountActivate")[0];
    assert_eq!(activate.username, "gridlock");
    assert_eq!(activate.password, "control-secret");
    assert_eq!(
        activate.body["description"],
        "Gridlock Automated Response"
    );
    assert!(
        activate
            .url
            .starts_with("https://ise.test.local:8910/pxgrid/control/")
    );
}
