// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Response Validation
//!
//! The acceptance rules for every data-plane REST response, kept as a pure
//! function so each branch is testable in isolation:
//!
//! * **200 / 204** — accepted regardless of body content.
//! * **500 with a "Radius Failure" ERS body** — accepted. ISE reports a RADIUS
//!   CoA hiccup as a server error even though the ANC operation itself was
//!   applied; this carve-out mirrors the appliance's observed behavior.
//! * **any other 500 body** (different title, unparseable or non-ERS JSON) —
//!   rejected with the original status and raw body preserved.
//! * **everything else non-2xx** — rejected immediately.

use crate::error::{Error, Result};
use crate::wire::ErsEnvelope;

/// ERS message title ISE uses for the not-actually-an-error 500.
const RADIUS_FAILURE: &str = "Radius Failure";

/// Applies the acceptance rules to a raw status/body pair.
pub fn validate(status: u16, body: &str) -> Result<()> {
    match status {
        200 | 204 => Ok(()),
        500 if is_radius_failure(body) => Ok(()),
        _ => Err(Error::RequestFailed {
            status,
            body: body.to_string(),
        }),
    }
}

/// Whether a 500 body is the ISE "Radius Failure" envelope. Only the first
/// message's title is consulted, matching the appliance contract.
fn is_radius_failure(body: &str) -> bool {
    serde_json::from_str::<ErsEnvelope>(body)
        .map(|envelope| {
            envelope
                .response
                .messages
                .first()
                .is_some_and(|message| message.title == RADIUS_FAILURE)
        })
        .unwrap_or(false)
}
