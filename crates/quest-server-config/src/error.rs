// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

use quest_common_config::SecretEnvError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A required variable was unset or empty.
	#[error("Missing required configuration: {0}")]
	MissingConfiguration(String),

	#[error("Failed to parse env file {path}: {source}")]
	Dotenv {
		path: PathBuf,
		#[source]
		source: dotenvy::Error,
	},

	#[error("Secret loading error: {0}")]
	Secret(#[from] SecretEnvError),
}
