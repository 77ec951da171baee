// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Platform Capability Contract
//!
//! The fixed capability set a response platform requires from every
//! third-party integration. Each integration implements the whole trait;
//! operations it cannot perform are explicit no-ops returning empty results,
//! never missing methods, so the platform can treat all integrations
//! uniformly and its blocking pipeline never fails merely because an
//! integration lacks an action kind.

use std::collections::BTreeSet;

use async_trait::async_trait;

use gridlock_common::models::host::Host;
use gridlock_common::models::{Account, Detection, StaticIpList};

use crate::error::Result;

#[async_trait]
pub trait ResponseClient: Send + Sync {
    /// Stable integration name, used as the key into each host's
    /// blocked-elements ledger.
    fn name(&self) -> &str;

    /// Blocks a host and returns the MAC addresses acted on. Addresses are
    /// normalized to the uppercase colon-separated wire form first, so the
    /// returned set matches the supplied ones up to formatting. The platform
    /// persists the returned set under [`ResponseClient::name`] so the
    /// block can later be undone symmetrically.
    async fn block_host(&self, host: &Host) -> Result<BTreeSet<String>>;

    /// Unblocks exactly the MAC addresses previously recorded for this
    /// integration on the host, returning that same list.
    async fn unblock_host(&self, host: &Host) -> Result<Vec<String>>;

    /// Re-applies or refreshes an existing block. Optional.
    async fn groom_host(&self, host: &Host) -> Result<Vec<String>>;

    async fn block_detection(&self, detection: &Detection) -> Result<Vec<String>>;
    async fn unblock_detection(&self, detection: &Detection) -> Result<Vec<String>>;

    async fn block_account(&self, account: &Account) -> Result<Vec<String>>;
    async fn unblock_account(&self, account: &Account) -> Result<Vec<String>>;

    async fn block_static_dst_ips(&self, ips: &StaticIpList) -> Result<Vec<String>>;
    async fn unblock_static_dst_ips(&self, ips: &StaticIpList) -> Result<Vec<String>>;
}
