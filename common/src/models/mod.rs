// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

pub mod host;

use serde::{Deserialize, Serialize};

/// A detection raised by the response platform. Carried for capability
/// completeness; this integration does not act on detections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub id: String,
    pub category: String,
}

/// A directory account known to the response platform. Carried for
/// capability completeness; this integration does not act on accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
}

/// A static destination IP list the platform may ask to block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticIpList {
    pub dst_ips: Vec<String>,
}
