// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for Serper.dev API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Serper API.
#[derive(Debug, Error)]
pub enum SerperError {
	/// The client was constructed without an API key.
	#[error("Serper API key is required")]
	InvalidCredentials,

	/// Serper answered with a non-success status.
	#[error("Serper API error: {status} {status_text}")]
	ProviderError { status: u16, status_text: String },

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Invalid or unparseable response from Serper.
	#[error("Invalid response from Serper: {0}")]
	InvalidResponse(String),

	/// The caller cancelled the operation before it finished.
	#[error("Search cancelled")]
	Cancelled,
}

impl SerperError {
	/// HTTP status reported by Serper, if this is a provider error.
	pub fn status(&self) -> Option<u16> {
		match self {
			SerperError::ProviderError { status, .. } => Some(*status),
			_ => None,
		}
	}

	pub fn is_rate_limited(&self) -> bool {
		self.status() == Some(429)
	}

	pub fn is_unauthorized(&self) -> bool {
		matches!(self.status(), Some(401 | 403))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn provider(status: u16, status_text: &str) -> SerperError {
		SerperError::ProviderError {
			status,
			status_text: status_text.to_string(),
		}
	}

	#[test]
	fn provider_error_message_has_code_and_text() {
		let err = provider(429, "Too Many Requests");
		assert_eq!(err.to_string(), "Serper API error: 429 Too Many Requests");
	}

	#[test]
	fn classification_helpers() {
		assert!(provider(429, "Too Many Requests").is_rate_limited());
		assert!(!provider(500, "Internal Server Error").is_rate_limited());
		assert!(provider(401, "Unauthorized").is_unauthorized());
		assert!(provider(403, "Forbidden").is_unauthorized());
		assert!(!SerperError::Timeout.is_unauthorized());
		assert_eq!(SerperError::InvalidCredentials.status(), None);
	}
}
