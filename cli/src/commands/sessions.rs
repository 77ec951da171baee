// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;

use gridlock_common::info;
use gridlock_common::utils::{mac, redact};

use crate::commands::CommandLine;

/// Lists active sessions from the ISE session directory, newest knowledge
/// first as the appliance reports them. With an IP argument only sessions
/// whose NAS IP matches are shown, mirroring what MAC-from-IP resolution
/// would act on.
pub async fn sessions(command_line: &CommandLine, ip: Option<&str>) -> anyhow::Result<()> {
    let client = command_line.connect().await?;
    let all = client.sessions().await?;

    let selected: Vec<_> = all
        .into_iter()
        .filter(|session| match ip {
            Some(wanted) => session.nas_ip_address.as_deref() == Some(wanted),
            None => true,
        })
        .collect();

    if selected.is_empty() {
        info!("No matching sessions reported by ISE");
        return Ok(());
    }

    for (idx, session) in selected.iter().enumerate() {
        let mac_shown = session
            .mac_address
            .as_deref()
            .map(|m| display(m, command_line.redact, redact::mac_addr))
            .unwrap_or_else(|| "-".to_string());
        let ip_shown = session
            .nas_ip_address
            .as_deref()
            .map(|i| display(i, command_line.redact, redact::ip_addr))
            .unwrap_or_else(|| "-".to_string());
        let vendor = session
            .mac_address
            .as_deref()
            .and_then(mac::get_vendor)
            .unwrap_or_else(|| "unknown vendor".to_string());
        let user = session.user_name.as_deref().unwrap_or("-");
        let state = session.state.as_deref().unwrap_or("-");

        println!(
            "[{}] {}  {}  {}  {}  {}",
            idx.to_string().cyan(),
            mac_shown.bold(),
            ip_shown,
            vendor.italic(),
            user,
            state.dimmed(),
        );
    }

    Ok(())
}

fn display(value: &str, redacted: bool, mask: fn(&str) -> String) -> String {
    if redacted { mask(value) } else { value.to_string() }
}
