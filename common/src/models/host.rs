// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Host Model
//!
//! This module defines the [`Host`] entity as handed over by the response platform.
//!
//! ## Key Concepts
//! * **Platform ownership**: Hosts are created and persisted by the platform; the
//!   client only reads them and reports back which MAC addresses it acted on.
//! * **Identity**: A host carries zero or more MAC addresses and, independently, a
//!   last-known IP. Either side may be empty; the client unions explicit MACs with
//!   MACs resolved live from the IP.
//! * **Blocked-elements ledger**: `blocked_elements` records, per integration name,
//!   the MAC addresses that integration previously blocked. Symmetric unblocking
//!   reads exactly this record and nothing else.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A network endpoint as seen by the response platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Host {
    /// Last-known IP address. Empty when the platform has none.
    #[serde(default)]
    pub ip: String,

    /// MAC addresses the platform has associated with this host.
    #[serde(default)]
    pub mac_addresses: Vec<String>,

    /// Per-integration record of previously blocked MAC addresses,
    /// keyed by the integration's `name()`.
    #[serde(default)]
    pub blocked_elements: HashMap<String, Vec<String>>,
}

impl Host {
    /// Creates a host known only by its last IP.
    pub fn from_ip(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Self::default()
        }
    }

    /// Creates a host with explicit MAC addresses and no IP.
    pub fn from_macs<I, S>(macs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mac_addresses: macs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// MAC addresses a named integration previously blocked on this host.
    pub fn blocked_by(&self, client_name: &str) -> &[String] {
        self.blocked_elements
            .get(client_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Records the MACs an integration just blocked, replacing any
    /// earlier record for that integration.
    pub fn record_blocked<I, S>(&mut self, client_name: &str, macs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked_elements.insert(
            client_name.to_string(),
            macs.into_iter().map(Into::into).collect(),
        );
    }
}
