// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build information for `quest version`.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"Version:    {}\n\
		 Platform:   {}\n\
		 User-Agent: {}",
		env!("CARGO_PKG_VERSION"),
		quest_common_http::platform(),
		quest_common_http::user_agent(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_info_lists_package_version() {
		let info = format_version_info();
		assert!(info.contains(env!("CARGO_PKG_VERSION")));
		assert!(info.contains(&quest_common_http::platform()));
		assert_eq!(info.lines().count(), 3);
	}
}
