// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Startup environment validation for Quest.
//!
//! This crate provides:
//! - A declarative table of every environment variable Quest reads
//!   ([`fields::FIELDS`]), split into required secrets and optional
//!   integrations with defaults
//! - Layered loading from a `.env` file and the process environment, with
//!   `VAR_FILE` support for mounted secrets
//! - [`ServerEnv`], the validated record handed to the rest of the program
//!
//! # Usage
//!
//! ```ignore
//! use quest_server_config::load_env;
//!
//! let env = load_env()?;
//! let client = SerperClient::new(env.serper_api_key().clone())?;
//! ```

pub mod error;
pub mod fields;
pub mod layer;
pub mod sources;

use std::collections::BTreeMap;
use std::path::PathBuf;

use quest_common_config::SecretString;
use serde::Serialize;
use tracing::{debug, error, info};

pub use error::ConfigError;
pub use fields::{FieldSpec, Requirement, FIELDS, PLACEHOLDER};
pub use layer::EnvLayer;
pub use sources::{ConfigSource, DotenvSource, EnvSource, MapSource, Precedence};

use fields::{
	ALLOWED_ORIGINS, BETTER_AUTH_SECRET, DATABASE_URL, DEFAULT_ALLOWED_ORIGINS, DEFAULT_LOG_LEVEL,
	DEFAULT_SERPER_BASE_URL, FIRECRAWL_API_KEY, GOOGLE_GENERATIVE_AI_API_KEY, LOG_LEVEL, REDIS_URL,
	SERPER_API_KEY, SERPER_BASE_URL,
};

/// Validated process configuration.
///
/// Every required value is non-empty and every optional value is either what
/// the operator supplied or its documented default. Built once at startup and
/// passed to whatever needs it.
#[derive(Debug, Clone)]
pub struct ServerEnv {
	serper_api_key: SecretString,
	google_generative_ai_api_key: SecretString,
	firecrawl_api_key: SecretString,
	database_url: SecretString,
	redis_url: SecretString,
	better_auth_secret: SecretString,
	optional: BTreeMap<&'static str, SecretString>,
}

/// One line of [`ServerEnv::summary`]. Sensitive values are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldStatus {
	pub name: &'static str,
	pub required: bool,
	pub configured: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

impl ServerEnv {
	/// Flat lookup of any known variable.
	pub fn get(&self, name: &str) -> Option<&SecretString> {
		match name {
			SERPER_API_KEY => Some(&self.serper_api_key),
			GOOGLE_GENERATIVE_AI_API_KEY => Some(&self.google_generative_ai_api_key),
			FIRECRAWL_API_KEY => Some(&self.firecrawl_api_key),
			DATABASE_URL => Some(&self.database_url),
			REDIS_URL => Some(&self.redis_url),
			BETTER_AUTH_SECRET => Some(&self.better_auth_secret),
			_ => self.optional.get(name),
		}
	}

	/// Whether `name` holds a real value rather than the placeholder.
	///
	/// Downstream code treats a placeholder credential as "integration
	/// disabled" and must not send it anywhere.
	pub fn is_configured(&self, name: &str) -> bool {
		self.get(name)
			.is_some_and(|value| value.expose() != PLACEHOLDER)
	}

	pub fn serper_api_key(&self) -> &SecretString {
		&self.serper_api_key
	}

	pub fn google_generative_ai_api_key(&self) -> &SecretString {
		&self.google_generative_ai_api_key
	}

	pub fn firecrawl_api_key(&self) -> &SecretString {
		&self.firecrawl_api_key
	}

	pub fn database_url(&self) -> &SecretString {
		&self.database_url
	}

	pub fn redis_url(&self) -> &SecretString {
		&self.redis_url
	}

	pub fn better_auth_secret(&self) -> &SecretString {
		&self.better_auth_secret
	}

	/// Raw `ALLOWED_ORIGINS` value.
	pub fn allowed_origins(&self) -> &str {
		self.public_value(ALLOWED_ORIGINS, DEFAULT_ALLOWED_ORIGINS)
	}

	/// `ALLOWED_ORIGINS` split on commas, trimmed, empties dropped.
	pub fn allowed_origin_list(&self) -> Vec<String> {
		self.allowed_origins()
			.split(',')
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(str::to_string)
			.collect()
	}

	/// Log filter used when `RUST_LOG` is unset.
	pub fn log_level(&self) -> &str {
		self.public_value(LOG_LEVEL, DEFAULT_LOG_LEVEL)
	}

	/// Serper API base URL, for proxies and test doubles.
	pub fn serper_base_url(&self) -> &str {
		self.public_value(SERPER_BASE_URL, DEFAULT_SERPER_BASE_URL)
	}

	/// Per-variable report in table order.
	pub fn summary(&self) -> Vec<FieldStatus> {
		FIELDS
			.iter()
			.map(|field| FieldStatus {
				name: field.name,
				required: field.is_required(),
				configured: self.is_configured(field.name),
				value: if field.sensitive {
					None
				} else {
					self.get(field.name).map(|v| v.expose().clone())
				},
			})
			.collect()
	}

	fn public_value(&self, name: &str, default: &'static str) -> &str {
		self.optional
			.get(name)
			.map(|v| v.expose().as_str())
			.unwrap_or(default)
	}
}

/// Load configuration from `./.env` and the process environment.
///
/// Precedence (highest to lowest):
/// 1. Environment variables
/// 2. `.env` in the working directory
/// 3. Built-in defaults for optional variables
pub fn load_env() -> Result<ServerEnv, ConfigError> {
	load_env_from_sources(vec![
		Box::new(DotenvSource::working_dir()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom env file path.
pub fn load_env_with_file(path: impl Into<PathBuf>) -> Result<ServerEnv, ConfigError> {
	load_env_from_sources(vec![Box::new(DotenvSource::new(path)), Box::new(EnvSource)])
}

/// Load configuration from explicit sources, merged by precedence.
pub fn load_env_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerEnv, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = EnvLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		debug!(
			source = source.name(),
			variables = layer.len(),
			"configuration source loaded"
		);
		merged.merge(layer);
	}

	finalize(merged)
}

/// Validate a merged layer into the final record.
fn finalize(mut layer: EnvLayer) -> Result<ServerEnv, ConfigError> {
	let missing: Vec<&'static str> = fields::required_fields()
		.filter(|f| !layer.contains(f.name))
		.map(|f| f.name)
		.collect();

	if let Some(first) = missing.first() {
		error!(missing = ?missing, "required configuration is missing");
		return Err(ConfigError::MissingConfiguration(first.to_string()));
	}

	let mut take_required = |name: &str| {
		layer
			.take(name)
			.ok_or_else(|| ConfigError::MissingConfiguration(name.to_string()))
	};

	let serper_api_key = take_required(SERPER_API_KEY)?;
	let google_generative_ai_api_key = take_required(GOOGLE_GENERATIVE_AI_API_KEY)?;
	let firecrawl_api_key = take_required(FIRECRAWL_API_KEY)?;
	let database_url = take_required(DATABASE_URL)?;
	let redis_url = take_required(REDIS_URL)?;
	let better_auth_secret = take_required(BETTER_AUTH_SECRET)?;

	let mut optional = BTreeMap::new();
	let mut defaulted = 0usize;
	for field in fields::optional_fields() {
		let value = match layer.take(field.name) {
			Some(value) => value,
			None => {
				defaulted += 1;
				SecretString::from(field.default_value().unwrap_or(PLACEHOLDER))
			}
		};
		optional.insert(field.name, value);
	}

	let env = ServerEnv {
		serper_api_key,
		google_generative_ai_api_key,
		firecrawl_api_key,
		database_url,
		redis_url,
		better_auth_secret,
		optional,
	};

	info!(
		required = fields::required_fields().count(),
		optional_supplied = fields::optional_fields().count() - defaulted,
		optional_defaulted = defaulted,
		allowed_origins = %env.allowed_origins(),
		"environment configuration loaded"
	);

	Ok(env)
}
