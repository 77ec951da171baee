// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # pxGrid Wire Format
//!
//! Request and response bodies for the control channel and the ANC/session
//! data plane. Everything is JSON with camelCase field names on the wire.
//!
//! Response types tolerate unknown fields; ISE adds properties across
//! releases and the client only depends on the handful modeled here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `AccountActivate`. The description is omitted entirely when
/// absent; older ISE releases reject a null description.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountActivateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountActivateResponse {
    pub account_state: AccountState,
}

/// Lifecycle state of the pxGrid account as reported by the appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountState {
    Enabled,
    Pending,
    Disabled,
    /// Any state this client does not model; treated as "not yet enabled".
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLookupRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLookupResponse {
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
}

/// One node offering a named pxGrid microservice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub node_name: String,
    pub properties: ServiceProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProperties {
    pub rest_base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRegisterRequest<'a> {
    pub name: &'a str,
    pub properties: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSecretRequest<'a> {
    pub peer_node_name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSecretResponse {
    pub secret: String,
}

/// Body for `applyEndpointByMacAddress`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPolicyRequest<'a> {
    pub mac_address: &'a str,
    pub policy_name: &'a str,
}

/// Body for `clearEndpointByMacAddress`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearPolicyRequest<'a> {
    pub mac_address: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsResponse {
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// One active session as reported by `getSessions`. Real session records
/// carry far more; only the fields the client filters or displays are kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub nas_ip_address: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Outer envelope of an ISE ERS error body, as seen on raw 500 responses.
#[derive(Debug, Deserialize)]
pub struct ErsEnvelope {
    #[serde(rename = "ERSResponse")]
    pub response: ErsBody,
}

#[derive(Debug, Deserialize)]
pub struct ErsBody {
    #[serde(default)]
    pub messages: Vec<ErsMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ErsMessage {
    #[serde(default)]
    pub title: String,
}
