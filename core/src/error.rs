// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Failure taxonomy for the pxGrid client.
//!
//! Transport-level failures keep their `reqwest` detail and are never retried.
//! Every non-2xx REST response (minus the Radius-Failure carve-out handled in
//! [`crate::validate`]) collapses into [`Error::RequestFailed`] so callers can
//! decide uniformly whether to propagate or swallow.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// DNS, connection or TLS handshake failure. Propagates unmodified.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The appliance answered with a status the client does not accept.
    /// Carries the original status and raw body for diagnosis.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// A service lookup returned no nodes for the named service.
    #[error("pxGrid service '{0}' is not available on any node")]
    ServiceUnavailable(String),

    /// The appliance answered 2xx but the body did not decode.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Certificate or key material could not be read from disk.
    #[error("failed to read TLS material: {0}")]
    Io(#[from] std::io::Error),

    /// TLS configuration is self-contradictory or unsupported.
    #[error("tls configuration error: {0}")]
    Tls(String),

    /// The activation stop signal was raised before the account was enabled.
    #[error("account activation cancelled")]
    ActivationCancelled,

    /// The activation policy's attempt budget ran out.
    #[error("account not enabled after {attempts} activation attempts")]
    ActivationExhausted { attempts: u32 },
}

impl Error {
    /// HTTP-level failures that MAC-from-IP resolution is allowed to swallow.
    ///
    /// Transport and decode failures are deliberately excluded; those always
    /// propagate to the platform.
    pub fn is_http_failure(&self) -> bool {
        matches!(
            self,
            Error::RequestFailed { .. } | Error::ServiceUnavailable(_)
        )
    }
}
