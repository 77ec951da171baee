// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # HTTP Transport Seam
//!
//! Every REST exchange with the appliance flows through the [`Transport`]
//! trait: one request in, one raw status/body pair out. The production
//! implementation is a thin [`reqwest`] wrapper; tests substitute a scripted
//! transport to drive the client without a network.
//!
//! ## TLS
//!
//! The `reqwest::Client` is built exactly once from [`TlsSettings`], so all
//! TLS decisions are made eagerly at construction instead of behind a lazily
//! cached field. Unreadable certificate files surface here as errors.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use gridlock_common::config::{ClientIdentity, TlsSettings, TrustAnchor};
use gridlock_common::warn;

use crate::error::{Error, Result};

/// HTTP methods the pxGrid surface uses. Anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
}

/// One authenticated REST call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Basic-auth username; always the primary account name.
    pub username: String,
    /// Basic-auth password: the primary password on the control channel,
    /// a freshly fetched per-node secret on the data plane.
    pub password: String,
    pub body: Value,
}

/// Raw result of a REST call, before any acceptance policy is applied.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one call and returns the raw response. Only transport-level
    /// problems (DNS, refused connection, handshake) are errors here; any
    /// HTTP status comes back as a normal [`ApiResponse`].
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Production transport over a single pooled [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(tls: &TlsSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);

        match &tls.trust {
            TrustAnchor::SystemRoots => {}
            TrustAnchor::CaBundle(path) => {
                let pem = std::fs::read(path)?;
                for certificate in reqwest::Certificate::from_pem_bundle(&pem)? {
                    builder = builder.add_root_certificate(certificate);
                }
                builder = builder.tls_built_in_root_certs(false);
            }
            TrustAnchor::Insecure => {
                warn!("TLS verification disabled: accepting any certificate and hostname");
                builder = builder
                    .danger_accept_invalid_certs(true)
                    .danger_accept_invalid_hostnames(true);
            }
        }

        if let Some(identity) = &tls.identity {
            builder = builder.identity(load_identity(identity)?);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

/// Loads the client identity from disk.
///
/// PEM cert/key pairs must use an unencrypted PKCS#8 key; an encrypted key
/// has to be delivered as a PKCS#12 bundle (`.p12`/`.pfx`), where the
/// configured key password unlocks the bundle.
fn load_identity(identity: &ClientIdentity) -> Result<reqwest::Identity> {
    let cert = std::fs::read(&identity.cert_path)?;

    if identity.cert_path.ends_with(".p12") || identity.cert_path.ends_with(".pfx") {
        let password = identity.key_password.as_deref().unwrap_or("");
        return Ok(reqwest::Identity::from_pkcs12_der(&cert, password)?);
    }

    if identity.key_password.is_some() {
        return Err(Error::Tls(
            "encrypted PEM keys are not supported; repackage the identity as PKCS#12".to_string(),
        ));
    }

    let key = std::fs::read(&identity.key_path)?;
    Ok(reqwest::Identity::from_pkcs8_pem(&cert, &key)?)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
        };

        let response = self
            .client
            .request(method, &request.url)
            .basic_auth(&request.username, Some(&request.password))
            .json(&request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
