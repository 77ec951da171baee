// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::bail;
use colored::*;

use gridlock_common::utils::{mac, redact};

use crate::commands::CommandLine;

/// Applies the configured quarantine policy to each given MAC address.
///
/// Inputs are validated and canonicalized before any call goes out, so a
/// typo in one address aborts the whole run instead of half-applying.
pub async fn quarantine(command_line: &CommandLine, macs: &[String]) -> anyhow::Result<()> {
    let targets = canonicalize_all(macs)?;
    let client = command_line.connect().await?;

    for target in &targets {
        client.quarantine_endpoint(target).await?;
        let shown = display_mac(target, command_line.redact);
        println!("{} {}", "quarantined".red().bold(), shown);
    }

    Ok(())
}

pub(crate) fn canonicalize_all(macs: &[String]) -> anyhow::Result<Vec<String>> {
    let mut targets = Vec::with_capacity(macs.len());
    for raw in macs {
        match mac::canonicalize(raw) {
            Some(canonical) => targets.push(canonical),
            None => bail!("'{raw}' is not a valid MAC address"),
        }
    }
    Ok(targets)
}

pub(crate) fn display_mac(mac_address: &str, redacted: bool) -> String {
    if redacted {
        redact::mac_addr(mac_address)
    } else {
        mac_address.to_string()
    }
}
