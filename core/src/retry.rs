// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Activation Retry Policy
//!
//! A fresh pxGrid account sits in `PENDING` until an ISE administrator
//! approves it, which can take anywhere from seconds to days. The default
//! policy reproduces the upstream contract: poll every 60 seconds, forever.
//! Deployments that prefer failing fast bound the wait with `max_attempts`,
//! and the platform can abort an in-flight wait through a [`StopSignal`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Interval between activation polls unless reconfigured.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Controls how long client construction waits for account approval.
#[derive(Debug, Clone)]
pub struct ActivationPolicy {
    /// Pause between consecutive `AccountActivate` polls.
    pub interval: Duration,
    /// Total poll budget. `None` waits until enabled or cancelled.
    pub max_attempts: Option<u32>,
}

impl Default for ActivationPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

impl ActivationPolicy {
    /// A policy that gives up after `max_attempts` polls.
    pub fn bounded(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: Some(max_attempts),
        }
    }

    /// Whether the attempt counter has exhausted this policy's budget.
    pub fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

/// Cooperative cancellation flag for the activation wait.
///
/// Cloneable and cheap to share; the platform keeps one end and hands the
/// other to the client constructor. Checked between polls, so cancellation
/// latency is at most one poll interval.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
