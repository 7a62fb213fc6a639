// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The declarative list of environment variables Quest reads.

/// Substituted for optional credentials that were not supplied.
pub const PLACEHOLDER: &str = "dummy";

pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_SERPER_BASE_URL: &str = "https://google.serper.dev";

pub const SERPER_API_KEY: &str = "SERPER_API_KEY";
pub const GOOGLE_GENERATIVE_AI_API_KEY: &str = "GOOGLE_GENERATIVE_AI_API_KEY";
pub const FIRECRAWL_API_KEY: &str = "FIRECRAWL_API_KEY";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const REDIS_URL: &str = "REDIS_URL";
pub const BETTER_AUTH_SECRET: &str = "BETTER_AUTH_SECRET";
pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const SERPER_BASE_URL: &str = "SERPER_BASE_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
	/// Must be present and non-empty.
	Required,
	/// Falls back to `default` when absent.
	Optional { default: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
	pub name: &'static str,
	pub requirement: Requirement,
	/// Sensitive values are never printed, not even in summaries.
	pub sensitive: bool,
}

impl FieldSpec {
	const fn required(name: &'static str) -> Self {
		Self {
			name,
			requirement: Requirement::Required,
			sensitive: true,
		}
	}

	const fn placeholder(name: &'static str) -> Self {
		Self {
			name,
			requirement: Requirement::Optional {
				default: PLACEHOLDER,
			},
			sensitive: true,
		}
	}

	const fn public(name: &'static str, default: &'static str) -> Self {
		Self {
			name,
			requirement: Requirement::Optional { default },
			sensitive: false,
		}
	}

	pub fn is_required(&self) -> bool {
		matches!(self.requirement, Requirement::Required)
	}

	pub fn default_value(&self) -> Option<&'static str> {
		match self.requirement {
			Requirement::Required => None,
			Requirement::Optional { default } => Some(default),
		}
	}
}

pub const FIELDS: &[FieldSpec] = &[
	// Search, generation and crawling
	FieldSpec::required(SERPER_API_KEY),
	FieldSpec::required(GOOGLE_GENERATIVE_AI_API_KEY),
	FieldSpec::required(FIRECRAWL_API_KEY),
	// Auth and storage
	FieldSpec::required(DATABASE_URL),
	FieldSpec::required(REDIS_URL),
	FieldSpec::required(BETTER_AUTH_SECRET),
	// Optional integrations
	FieldSpec::placeholder("XAI_API_KEY"),
	FieldSpec::placeholder("OPENAI_API_KEY"),
	FieldSpec::placeholder("ANTHROPIC_API_KEY"),
	FieldSpec::placeholder("GROQ_API_KEY"),
	FieldSpec::placeholder("DAYTONA_API_KEY"),
	FieldSpec::placeholder("GITHUB_CLIENT_ID"),
	FieldSpec::placeholder("GITHUB_CLIENT_SECRET"),
	FieldSpec::placeholder("GOOGLE_CLIENT_ID"),
	FieldSpec::placeholder("GOOGLE_CLIENT_SECRET"),
	FieldSpec::placeholder("TWITTER_CLIENT_ID"),
	FieldSpec::placeholder("TWITTER_CLIENT_SECRET"),
	FieldSpec::placeholder("UPSTASH_REDIS_REST_URL"),
	FieldSpec::placeholder("UPSTASH_REDIS_REST_TOKEN"),
	FieldSpec::placeholder("ELEVENLABS_API_KEY"),
	FieldSpec::placeholder("TAVILY_API_KEY"),
	FieldSpec::placeholder("EXA_API_KEY"),
	FieldSpec::placeholder("VALYU_API_KEY"),
	FieldSpec::placeholder("TMDB_API_KEY"),
	FieldSpec::public("YT_ENDPOINT", PLACEHOLDER),
	FieldSpec::placeholder("PARALLEL_API_KEY"),
	FieldSpec::placeholder("OPENWEATHER_API_KEY"),
	FieldSpec::placeholder("GOOGLE_MAPS_API_KEY"),
	FieldSpec::placeholder("AMADEUS_API_KEY"),
	FieldSpec::placeholder("AMADEUS_API_SECRET"),
	FieldSpec::placeholder("CRON_SECRET"),
	FieldSpec::placeholder("BLOB_READ_WRITE_TOKEN"),
	FieldSpec::placeholder("SMITHERY_API_KEY"),
	FieldSpec::placeholder("COINGECKO_API_KEY"),
	FieldSpec::placeholder("QSTASH_TOKEN"),
	FieldSpec::placeholder("RESEND_API_KEY"),
	FieldSpec::placeholder("SUPERMEMORY_API_KEY"),
	// Server
	FieldSpec::public(ALLOWED_ORIGINS, DEFAULT_ALLOWED_ORIGINS),
	FieldSpec::public(LOG_LEVEL, DEFAULT_LOG_LEVEL),
	FieldSpec::public(SERPER_BASE_URL, DEFAULT_SERPER_BASE_URL),
];

/// Look up a field by variable name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
	FIELDS.iter().find(|f| f.name == name)
}

pub fn required_fields() -> impl Iterator<Item = &'static FieldSpec> {
	FIELDS.iter().filter(|f| f.is_required())
}

pub fn optional_fields() -> impl Iterator<Item = &'static FieldSpec> {
	FIELDS.iter().filter(|f| !f.is_required())
}
