// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Connection Configuration
//!
//! Static parameters for one pxGrid session against a Cisco ISE deployment.
//!
//! ## Key Concepts
//! * **Immutable per session**: Once a [`PxGridConfig`] is handed to a client it is
//!   never mutated. Credential or policy changes require a new client.
//! * **String-typed verify flag**: The upstream configuration surface delivers the
//!   TLS verification switch as a string. Only a case-insensitive `"true"` enables
//!   verification; every other value (including empty) disables it.
//! * **Deferred TLS failures**: Paths to certificates are not checked here. A bad
//!   path or unreadable PEM surfaces when the transport first builds its TLS stack.

use serde::Deserialize;

/// Description string sent alongside the pxGrid account-activation request.
const ACTIVATION_DESCRIPTION: &str = "Gridlock Automated Response";

/// Connection parameters for a single ISE appliance.
///
/// Typically deserialized from the operator's TOML file, or assembled directly
/// by the host platform embedding the client.
#[derive(Debug, Clone, Deserialize)]
pub struct PxGridConfig {
    /// Hostname or IP of the pxGrid node.
    pub appliance: String,

    /// HTTPS port of the pxGrid control API (8910 on a stock deployment).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Primary account username. Used for control-channel Basic auth and as
    /// the username half of every data-plane call.
    pub username: String,

    /// Primary account password. Only ever used on the control channel; the
    /// data plane authenticates with per-node access secrets instead.
    pub password: String,

    /// Path to a PEM client certificate. Empty disables client identity.
    #[serde(default)]
    pub client_cert: String,

    /// Path to the PEM private key matching `client_cert`.
    #[serde(default)]
    pub client_key: String,

    /// Passphrase for `client_key` when the key is encrypted.
    #[serde(default)]
    pub client_key_password: String,

    /// Path to a PEM CA bundle used as the trust anchor. Takes precedence
    /// over a disabled `verify` flag when both are configured.
    #[serde(default)]
    pub ca_bundle: String,

    /// TLS verification switch, string-typed by the upstream contract.
    /// `"true"` (any casing) verifies; anything else does not.
    #[serde(default)]
    pub verify: String,

    /// Name of the ANC policy applied when quarantining an endpoint.
    pub quarantine_policy: String,
}

fn default_port() -> u16 {
    8910
}

/// TLS material derived from a [`PxGridConfig`], consumed exactly once when
/// the HTTP transport is constructed.
///
/// The branches mirror the configuration contract:
/// * `identity` is present when a client certificate path was configured.
/// * `trust` selects between an explicit CA bundle, the system roots, and
///   fully disabled verification. The CA bundle wins over a disabled verify
///   flag; disabling verification is explicit and logged by the transport,
///   never a silent default.
#[derive(Debug, Clone)]
pub struct TlsSettings {
    pub identity: Option<ClientIdentity>,
    pub trust: TrustAnchor,
}

#[derive(Debug, Clone)]
pub struct ClientIdentity {
    pub cert_path: String,
    pub key_path: String,
    pub key_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustAnchor {
    /// Validate against the platform's default root store.
    SystemRoots,
    /// Validate against the configured PEM bundle only.
    CaBundle(String),
    /// No hostname checking, no certificate validation.
    Insecure,
}

impl PxGridConfig {
    /// Basic-auth pair for the control channel.
    pub fn auth(&self) -> (&str, &str) {
        (&self.username, &self.password)
    }

    /// Resolves the string-typed verify flag into a boolean.
    pub fn verify(&self) -> bool {
        self.verify.eq_ignore_ascii_case("true")
    }

    /// Description reported to ISE during account activation.
    pub fn description(&self) -> &'static str {
        ACTIVATION_DESCRIPTION
    }

    /// Base URL of the pxGrid control API on this appliance.
    pub fn control_base_url(&self) -> String {
        format!("https://{}:{}/pxgrid/control", self.appliance, self.port)
    }

    /// Derives the TLS material for the transport build.
    ///
    /// The CA-bundle and disable-verification branches are mutually
    /// exclusive; an explicit bundle takes precedence when both appear.
    pub fn tls_settings(&self) -> TlsSettings {
        let identity = if self.client_cert.is_empty() {
            None
        } else {
            Some(ClientIdentity {
                cert_path: self.client_cert.clone(),
                key_path: self.client_key.clone(),
                key_password: if self.client_key_password.is_empty() {
                    None
                } else {
                    Some(self.client_key_password.clone())
                },
            })
        };

        let trust = if !self.ca_bundle.is_empty() {
            TrustAnchor::CaBundle(self.ca_bundle.clone())
        } else if !self.verify() {
            TrustAnchor::Insecure
        } else {
            TrustAnchor::SystemRoots
        };

        TlsSettings { identity, trust }
    }
}
