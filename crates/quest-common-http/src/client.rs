// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use tracing::debug;

/// Creates a client builder carrying the standard Quest User-Agent.
///
/// Use this when the client needs further customization.
///
/// # Example
/// ```ignore
/// let client = quest_common_http::builder()
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a client with the standard User-Agent.
///
/// Timeouts are left to each request so callers can choose per operation.
pub fn new_client() -> Result<Client, reqwest::Error> {
	debug!(user_agent = %user_agent(), "building HTTP client");
	builder().build()
}

/// Returns the standard Quest User-Agent string.
///
/// Format: `quest/{platform}/{version}`, e.g. `quest/linux-x86_64/0.1.0`.
pub fn user_agent() -> String {
	format!("quest/{}/{}", platform(), env!("CARGO_PKG_VERSION"))
}

/// `{os}-{arch}` of the running binary.
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_three_segments() {
		let ua = user_agent();
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 3);
		assert_eq!(parts[0], "quest");
		assert_eq!(parts[1], platform());
		assert_eq!(parts[2], env!("CARGO_PKG_VERSION"));
	}

	#[test]
	fn platform_joins_os_and_arch() {
		let platform = platform();
		assert!(platform.starts_with(std::env::consts::OS));
		assert!(platform.ends_with(std::env::consts::ARCH));
	}

	#[test]
	fn client_builds() {
		assert!(new_client().is_ok());
	}
}
