// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

pub mod capability;
pub mod client;
pub mod control;
pub mod error;
pub mod retry;
pub mod transport;
pub mod validate;
pub mod wire;

pub use capability::ResponseClient;
pub use client::PxGridClient;
pub use error::{Error, Result};
pub use retry::{ActivationPolicy, StopSignal};
