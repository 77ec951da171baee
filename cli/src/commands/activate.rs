// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;

use gridlock_common::success;
use gridlock_core::ResponseClient;

use crate::commands::{CommandLine, policy_from_flags};

/// Runs the activation wait and reports the final account state.
///
/// With a fresh account this blocks until an ISE administrator approves the
/// pxGrid client (or the attempt budget runs out when `--max-attempts` is
/// given). Re-running against an approved account returns immediately.
pub async fn activate(
    command_line: &CommandLine,
    max_attempts: Option<u32>,
    interval_secs: u64,
) -> anyhow::Result<()> {
    let policy = policy_from_flags(max_attempts, interval_secs);
    let client = command_line.connect_with_policy(policy).await?;

    success!(client = %client.name(), "account enabled, integration ready");
    println!("{}", "pxGrid account ENABLED".green().bold());
    Ok(())
}
