// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Control Channel
//!
//! The four pxGrid control operations, all POSTs under
//! `https://{appliance}:{port}/pxgrid/control/` authenticated with the primary
//! username/password pair. The control channel has no acceptance carve-outs:
//! anything outside 2xx is a failure, and bodies must decode.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use gridlock_common::config::PxGridConfig;
use gridlock_common::debug;

use crate::error::{Error, Result};
use crate::transport::{ApiRequest, Method, Transport};
use crate::wire::{
    AccessSecretRequest, AccessSecretResponse, AccountActivateRequest, AccountActivateResponse,
    AccountState, ServiceDescriptor, ServiceLookupRequest, ServiceLookupResponse,
    ServiceRegisterRequest,
};

pub struct ControlChannel {
    config: PxGridConfig,
    transport: Arc<dyn Transport>,
}

impl ControlChannel {
    pub fn new(config: PxGridConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// POSTs one control operation and decodes its body.
    async fn call<T: DeserializeOwned>(&self, operation: &str, payload: Value) -> Result<T> {
        let url = format!("{}/{}", self.config.control_base_url(), operation);
        debug!(operation, url = %url, "control channel call");

        let (username, password) = self.config.auth();
        let request = ApiRequest {
            method: Method::Post,
            url,
            username: username.to_string(),
            password: password.to_string(),
            body: payload,
        };

        let response = self.transport.send(&request).await?;
        if !(200..300).contains(&response.status) {
            return Err(Error::RequestFailed {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Activates (or re-checks) the pxGrid account and returns its state.
    pub async fn account_activate(&self) -> Result<AccountState> {
        let payload = serde_json::to_value(AccountActivateRequest {
            description: Some(self.config.description()),
        })?;
        let response: AccountActivateResponse = self.call("AccountActivate", payload).await?;
        Ok(response.account_state)
    }

    /// Looks up every node serving a named microservice.
    pub async fn service_lookup(&self, service_name: &str) -> Result<Vec<ServiceDescriptor>> {
        let payload = serde_json::to_value(ServiceLookupRequest { name: service_name })?;
        let response: ServiceLookupResponse = self.call("ServiceLookup", payload).await?;
        Ok(response.services)
    }

    /// First node serving a named microservice, the one every operation uses.
    /// An empty lookup result is a [`Error::ServiceUnavailable`], never an
    /// index panic.
    pub async fn first_service(&self, service_name: &str) -> Result<ServiceDescriptor> {
        self.service_lookup(service_name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::ServiceUnavailable(service_name.to_string()))
    }

    /// Registers a service this node offers. Exposed for completeness of the
    /// control surface; the response client itself never registers anything.
    pub async fn service_register(&self, service_name: &str, properties: Value) -> Result<Value> {
        let payload = serde_json::to_value(ServiceRegisterRequest {
            name: service_name,
            properties,
        })?;
        self.call("ServiceRegister", payload).await
    }

    /// Fetches a fresh per-node shared secret for data-plane Basic auth.
    /// Secrets are single-use by convention and never cached.
    pub async fn access_secret(&self, peer_node_name: &str) -> Result<String> {
        let payload = serde_json::to_value(AccessSecretRequest { peer_node_name })?;
        let response: AccessSecretResponse = self.call("AccessSecret", payload).await?;
        Ok(response.secret)
    }
}
