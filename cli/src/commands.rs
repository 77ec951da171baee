// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! This module defines the strict schema for user input.
//!
//! Execution logic for each command lives in its own submodule; the
//! definition of arguments, flags and help text is centralized here.
//!
//! The CLI is structured hierarchically:
//!
//! * [`CommandLine`]: top-level struct with global flags (config path,
//!   verbosity, redaction).
//! * [`Commands`]: the mutually exclusive operation modes.

pub mod activate;
pub mod quarantine;
pub mod release;
pub mod sessions;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use gridlock_common::config::PxGridConfig;
use gridlock_core::{ActivationPolicy, PxGridClient, StopSignal};

#[derive(Parser)]
#[command(name = "gridlock")]
#[command(about = "Quarantine and release network endpoints through Cisco ISE pxGrid.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the TOML connection configuration
    #[arg(short = 'c', long = "config", default_value = "gridlock.toml", global = true)]
    pub config: PathBuf,

    /// Redact sensitive info (MAC addresses, endpoint IPs)
    #[arg(long = "redact", global = true)]
    pub redact: bool,

    /// Increase logging detail (-v: debug logs, -vv: wire traces)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Activate the pxGrid account and wait until ISE approves it
    #[command(alias = "a")]
    Activate {
        /// Give up after this many polls (default: wait forever)
        #[arg(long = "max-attempts")]
        max_attempts: Option<u32>,

        /// Seconds between activation polls
        #[arg(long = "interval", default_value_t = 60)]
        interval_secs: u64,
    },

    /// Apply the configured quarantine policy to one or more MAC addresses
    #[command(alias = "q")]
    Quarantine {
        #[arg(value_name = "MACS", num_args(1..))]
        macs: Vec<String>,
    },

    /// Clear the quarantine policy from one or more MAC addresses
    #[command(alias = "r")]
    Release {
        #[arg(value_name = "MACS", num_args(1..))]
        macs: Vec<String>,
    },

    /// List active sessions, optionally filtered by NAS IP
    #[command(alias = "s")]
    Sessions {
        #[arg(value_name = "IP")]
        ip: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Loads the connection configuration the command points at.
    pub fn load_config(&self) -> anyhow::Result<PxGridConfig> {
        let raw = std::fs::read_to_string(&self.config)
            .with_context(|| format!("cannot read config file {}", self.config.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("cannot parse config file {}", self.config.display()))
    }

    /// Connects a client with the default activation policy. Interactive
    /// commands assume the account is already enabled, so the first poll
    /// normally succeeds immediately.
    pub async fn connect(&self) -> anyhow::Result<PxGridClient> {
        self.connect_with_policy(ActivationPolicy::default()).await
    }

    /// Connects with an operator-supplied activation policy.
    pub async fn connect_with_policy(
        &self,
        policy: ActivationPolicy,
    ) -> anyhow::Result<PxGridClient> {
        let config = self.load_config()?;
        let client = PxGridClient::connect(config, policy, StopSignal::new()).await?;
        Ok(client)
    }
}

/// Translates the `activate` flags into a policy.
pub fn policy_from_flags(max_attempts: Option<u32>, interval_secs: u64) -> ActivationPolicy {
    let interval = Duration::from_secs(interval_secs);
    match max_attempts {
        Some(max) => ActivationPolicy::bounded(interval, max),
        None => ActivationPolicy {
            interval,
            max_attempts: None,
        },
    }
}
