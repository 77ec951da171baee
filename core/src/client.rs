// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Endpoint-Action Client
//!
//! The concrete [`ResponseClient`] for Cisco ISE. Blocking a host means
//! applying the configured ANC quarantine policy to every MAC address the
//! client can attribute to it; unblocking clears the policy from exactly the
//! MACs recorded at block time.
//!
//! ## Key Concepts
//! * **Fresh lookups per operation**: Every quarantine/clear/session call
//!   re-resolves the serving node and fetches a new access secret. Secrets
//!   rotate on the appliance, so nothing here is cached across calls.
//! * **Two credential pairs**: The control channel authenticates with the
//!   primary username/password; the data plane with the primary username and
//!   a per-node secret.
//! * **Swallowed resolution failures**: MAC-from-IP resolution is best
//!   effort. An HTTP-level failure there only shrinks the MAC set; transport
//!   and decode failures still propagate.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use gridlock_common::config::PxGridConfig;
use gridlock_common::models::host::Host;
use gridlock_common::models::{Account, Detection, StaticIpList};
use gridlock_common::utils::mac;
use gridlock_common::{action, debug, info, success, warn};

use crate::capability::ResponseClient;
use crate::control::ControlChannel;
use crate::error::{Error, Result};
use crate::retry::{ActivationPolicy, StopSignal};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
use crate::validate::validate;
use crate::wire::{AccountState, ApplyPolicyRequest, ClearPolicyRequest, Session};

/// Ledger key under which the platform records MACs this client blocked.
pub const CLIENT_NAME: &str = "PxGrid Client";

/// ANC configuration microservice (apply/clear policy by MAC).
const ANC_CONFIG_SERVICE: &str = "com.cisco.ise.config.anc";
/// Session directory microservice (active sessions, MAC-from-IP).
const SESSION_SERVICE: &str = "com.cisco.ise.session";

pub struct PxGridClient {
    config: PxGridConfig,
    control: ControlChannel,
    transport: Arc<dyn Transport>,
}

impl PxGridClient {
    /// Builds the HTTPS transport from the configuration and waits for the
    /// pxGrid account to reach `ENABLED` per the activation policy.
    pub async fn connect(
        config: PxGridConfig,
        policy: ActivationPolicy,
        stop: StopSignal,
    ) -> Result<Self> {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config.tls_settings())?);
        Self::with_transport(config, transport, policy, stop).await
    }

    /// Same as [`PxGridClient::connect`] over a caller-supplied transport.
    /// This is the seam integration tests use to script the appliance.
    pub async fn with_transport(
        config: PxGridConfig,
        transport: Arc<dyn Transport>,
        policy: ActivationPolicy,
        stop: StopSignal,
    ) -> Result<Self> {
        let control = ControlChannel::new(config.clone(), transport.clone());
        wait_until_enabled(&control, &policy, &stop).await?;

        Ok(Self {
            config,
            control,
            transport,
        })
    }

    /// One authenticated data-plane call, accepted per [`validate`].
    async fn request(
        &self,
        method: Method,
        url: String,
        secret: &str,
        payload: Value,
    ) -> Result<ApiResponse> {
        let request = ApiRequest {
            method,
            url,
            username: self.config.username.clone(),
            password: secret.to_string(),
            body: payload,
        };

        let response = self.transport.send(&request).await?;
        validate(response.status, &response.body)?;
        Ok(response)
    }

    /// Resolves a microservice to its first node's REST base URL plus a
    /// fresh access secret for that node.
    async fn resolve_service(&self, service_name: &str) -> Result<(String, String)> {
        let service = self.control.first_service(service_name).await?;
        let secret = self.control.access_secret(&service.node_name).await?;
        Ok((service.properties.rest_base_url, secret))
    }

    /// Applies the configured quarantine policy to one MAC address.
    pub async fn quarantine_endpoint(&self, mac_address: &str) -> Result<()> {
        let (base_url, secret) = self.resolve_service(ANC_CONFIG_SERVICE).await?;
        let url = format!("{base_url}/applyEndpointByMacAddress");
        let payload = serde_json::to_value(ApplyPolicyRequest {
            mac_address,
            policy_name: &self.config.quarantine_policy,
        })?;

        self.request(Method::Post, url, &secret, payload).await?;
        action!(
            mac = %mac_address,
            policy = %self.config.quarantine_policy,
            "quarantine policy applied"
        );
        Ok(())
    }

    /// Clears any ANC policy from one MAC address.
    pub async fn clear_endpoint(&self, mac_address: &str) -> Result<()> {
        let (base_url, secret) = self.resolve_service(ANC_CONFIG_SERVICE).await?;
        let url = format!("{base_url}/clearEndpointByMacAddress");
        let payload = serde_json::to_value(ClearPolicyRequest { mac_address })?;

        self.request(Method::Post, url, &secret, payload).await?;
        action!(mac = %mac_address, "quarantine policy cleared");
        Ok(())
    }

    /// Fetches every active session the session directory knows about.
    pub async fn sessions(&self) -> Result<Vec<Session>> {
        let (base_url, secret) = self.resolve_service(SESSION_SERVICE).await?;
        let url = format!("{base_url}/getSessions");

        let response = self.request(Method::Post, url, &secret, json!({})).await?;
        let decoded: crate::wire::SessionsResponse = serde_json::from_str(&response.body)?;
        Ok(decoded.sessions)
    }

    /// MAC addresses of sessions whose NAS IP matches `ip`, in session
    /// order. Duplicates are possible here; callers dedup via set union.
    pub async fn macs_for_ip(&self, ip: &str) -> Result<Vec<String>> {
        let sessions = self.sessions().await?;
        Ok(sessions
            .into_iter()
            .filter(|session| session.nas_ip_address.as_deref() == Some(ip))
            .filter_map(|session| session.mac_address)
            .collect())
    }

    /// Best-effort MAC resolution: HTTP-level failures shrink the result to
    /// nothing instead of failing the caller.
    async fn macs_for_ip_lenient(&self, ip: &str) -> Result<Vec<String>> {
        match self.macs_for_ip(ip).await {
            Ok(resolved) => Ok(resolved),
            Err(err) if err.is_http_failure() => {
                debug!(ip = %ip, error = %err, "MAC resolution failed, continuing without");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }
}

/// Polls `AccountActivate` until the account is enabled, the stop signal is
/// raised, or the policy's attempt budget runs out.
async fn wait_until_enabled(
    control: &ControlChannel,
    policy: &ActivationPolicy,
    stop: &StopSignal,
) -> Result<()> {
    let mut attempts: u32 = 0;

    loop {
        if stop.is_triggered() {
            return Err(Error::ActivationCancelled);
        }

        attempts += 1;
        match control.account_activate().await? {
            AccountState::Enabled => {
                success!(attempts, "pxGrid account enabled");
                return Ok(());
            }
            state => {
                info!(?state, attempts, "pxGrid account not yet enabled, waiting for approval");
            }
        }

        if policy.exhausted(attempts) {
            return Err(Error::ActivationExhausted { attempts });
        }

        tokio::time::sleep(policy.interval).await;
    }
}

#[async_trait]
impl ResponseClient for PxGridClient {
    fn name(&self) -> &str {
        CLIENT_NAME
    }

    async fn block_host(&self, host: &Host) -> Result<BTreeSet<String>> {
        let mut macs: BTreeSet<String> = BTreeSet::new();

        if !host.mac_addresses.is_empty() {
            macs.extend(host.mac_addresses.iter().map(|m| canonical_or_raw(m)));
            macs.extend(
                self.macs_for_ip_lenient(&host.ip)
                    .await?
                    .into_iter()
                    .map(|m| canonical_or_raw(&m)),
            );
        } else if !host.ip.is_empty() {
            macs.extend(
                self.macs_for_ip_lenient(&host.ip)
                    .await?
                    .into_iter()
                    .map(|m| canonical_or_raw(&m)),
            );
        }

        for mac_address in &macs {
            self.quarantine_endpoint(mac_address).await?;
        }

        Ok(macs)
    }

    async fn unblock_host(&self, host: &Host) -> Result<Vec<String>> {
        let mac_addresses = host.blocked_by(self.name()).to_vec();

        for mac_address in &mac_addresses {
            self.clear_endpoint(mac_address).await?;
        }

        Ok(mac_addresses)
    }

    async fn groom_host(&self, _host: &Host) -> Result<Vec<String>> {
        warn!("pxGrid client does not implement host grooming");
        Ok(Vec::new())
    }

    async fn block_detection(&self, _detection: &Detection) -> Result<Vec<String>> {
        // this client only implements host-based blocking
        warn!("pxGrid client does not implement detection-based blocking");
        Ok(Vec::new())
    }

    async fn unblock_detection(&self, _detection: &Detection) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn block_account(&self, _account: &Account) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn unblock_account(&self, _account: &Account) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn block_static_dst_ips(&self, _ips: &StaticIpList) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn unblock_static_dst_ips(&self, _ips: &StaticIpList) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Canonicalizes a MAC for the wire, passing invalid input through so the
/// appliance stays the authority on what it rejects.
fn canonical_or_raw(input: &str) -> String {
    mac::canonicalize(input).unwrap_or_else(|| input.to_string())
}
