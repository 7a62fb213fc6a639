// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Serper.dev API client implementation.

use std::time::Duration;

use quest_common_config::SecretString;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, trace, warn};

use crate::error::SerperError;
use crate::types::{
	normalize_num, CombinedResults, SearchOptions, SearchRequestBody, SearchType,
	SearchWithImagesOptions, SerperResponse, IMAGE_RESULT_COUNT,
};

pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev";
/// Per-request timeout unless overridden with [`SerperClient::with_timeout`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "X-API-KEY";

/// Client for interacting with Serper.dev Google Search API.
///
/// Holds only the API key, base URL and a pooled HTTP client; cloning is cheap
/// and clones share connections.
#[derive(Debug, Clone)]
pub struct SerperClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
	timeout: Duration,
}

impl SerperClient {
	/// Creates a new Serper client with the given API key.
	///
	/// Fails with [`SerperError::InvalidCredentials`] when the key is empty.
	pub fn new(api_key: impl Into<SecretString>) -> Result<Self, SerperError> {
		let api_key = api_key.into();
		if api_key.is_blank() {
			error!("Serper client constructed without an API key");
			return Err(SerperError::InvalidCredentials);
		}

		let http_client = quest_common_http::new_client()?;

		Ok(Self {
			http_client,
			api_key,
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: REQUEST_TIMEOUT,
		})
	}

	/// Creates a client from a key that may not have been configured.
	pub fn from_optional_key(api_key: Option<SecretString>) -> Result<Self, SerperError> {
		match api_key {
			Some(key) => Self::new(key),
			None => {
				error!("Serper API key is not configured");
				Err(SerperError::InvalidCredentials)
			}
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	/// Sets the timeout applied to each request.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Performs a single search against the endpoint picked by
	/// `options.search_type`.
	///
	/// The query is forwarded as-is, including an empty string. A zero count
	/// becomes the default of 10 and larger counts are capped at 100.
	/// Non-success statuses become [`SerperError::ProviderError`]; nothing is
	/// retried.
	#[instrument(
		skip(self, query, options),
		fields(query = %query, search_type = %options.search_type, num = options.num)
	)]
	pub async fn search(
		&self,
		query: &str,
		options: SearchOptions,
	) -> Result<SerperResponse, SerperError> {
		let url = format!("{}{}", self.base_url, options.search_type.path());
		let body = SearchRequestBody {
			q: query,
			num: normalize_num(options.num),
			autocorrect: options.autocorrect,
		};

		debug!(url = %url, "Sending search request to Serper");
		trace!(autocorrect = options.autocorrect, "Search parameters");

		let response = self
			.http_client
			.post(&url)
			.header(API_KEY_HEADER, self.api_key.expose())
			.header(CONTENT_TYPE, "application/json")
			.timeout(self.timeout)
			.json(&body)
			.send()
			.await
			.map_err(transport_error)?;

		let status = response.status();
		debug!(status = %status, "Received response from Serper");

		if !status.is_success() {
			let status_code = status.as_u16();
			let status_text = status.canonical_reason().unwrap_or_default().to_string();
			let body = response.text().await.unwrap_or_default();

			error!(
				status = status_code,
				status_text = %status_text,
				body = %body,
				"Serper API error"
			);
			return Err(SerperError::ProviderError {
				status: status_code,
				status_text,
			});
		}

		let body = response.text().await.map_err(transport_error)?;
		trace!(body = %body, "Response body");

		let parsed: SerperResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Serper response");
			SerperError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(
			organic = parsed.organic.len(),
			images = parsed.images.as_ref().map_or(0, Vec::len),
			"Search completed successfully"
		);

		Ok(parsed)
	}

	/// Fetches primary results and three images concurrently.
	///
	/// Both requests must succeed. The first failure is returned and the
	/// other request is dropped.
	pub async fn search_with_images(
		&self,
		query: &str,
		options: SearchWithImagesOptions,
	) -> Result<CombinedResults, SerperError> {
		self.search_with_images_cancellable(query, options, &CancellationToken::new())
			.await
	}

	/// Like [`SerperClient::search_with_images`], but aborts both in-flight
	/// requests with [`SerperError::Cancelled`] once `cancel` fires.
	#[instrument(
		skip(self, query, options, cancel),
		fields(
			query = %query,
			max_results = options.max_results,
			include_news = options.include_news
		)
	)]
	pub async fn search_with_images_cancellable(
		&self,
		query: &str,
		options: SearchWithImagesOptions,
		cancel: &CancellationToken,
	) -> Result<CombinedResults, SerperError> {
		let primary_type = if options.include_news {
			SearchType::News
		} else {
			SearchType::Search
		};

		let primary = self.search(
			query,
			SearchOptions::new(primary_type).with_num(options.max_results),
		);
		let images = self.search(
			query,
			SearchOptions::new(SearchType::Images).with_num(IMAGE_RESULT_COUNT),
		);

		let (primary, images) = tokio::select! {
			_ = cancel.cancelled() => {
				warn!("Combined search cancelled");
				return Err(SerperError::Cancelled);
			}
			joined = async { tokio::try_join!(primary, images) } => joined?,
		};

		let results = match (primary_type, primary.news) {
			(SearchType::News, Some(news)) => news,
			_ => primary.organic,
		};
		let images = images.images.unwrap_or_default();

		debug!(
			results = results.len(),
			images = images.len(),
			"Combined search completed"
		);

		Ok(CombinedResults { results, images })
	}
}

fn transport_error(e: reqwest::Error) -> SerperError {
	if e.is_timeout() {
		error!("Request timed out");
		return SerperError::Timeout;
	}
	error!(error = %e, "Network error during Serper request");
	SerperError::Network(e)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let client = SerperClient::new("test-api-key").unwrap();
		assert_eq!(client.api_key.expose(), "test-api-key");
		assert_eq!(client.base_url(), DEFAULT_BASE_URL);
		assert_eq!(client.timeout(), REQUEST_TIMEOUT);
	}

	#[test]
	fn test_empty_key_is_invalid_credentials() {
		assert!(matches!(
			SerperClient::new(""),
			Err(SerperError::InvalidCredentials)
		));
		assert!(matches!(
			SerperClient::new("   "),
			Err(SerperError::InvalidCredentials)
		));
	}

	#[test]
	fn test_absent_key_is_invalid_credentials() {
		assert!(matches!(
			SerperClient::from_optional_key(None),
			Err(SerperError::InvalidCredentials)
		));
		assert!(SerperClient::from_optional_key(Some("key".into())).is_ok());
	}

	#[test]
	fn test_with_base_url_drops_trailing_slash() {
		let client = SerperClient::new("key")
			.unwrap()
			.with_base_url("http://127.0.0.1:9999/");
		assert_eq!(client.base_url(), "http://127.0.0.1:9999");
	}

	#[test]
	fn test_with_timeout() {
		let client = SerperClient::new("key")
			.unwrap()
			.with_timeout(Duration::from_millis(250));
		assert_eq!(client.timeout(), Duration::from_millis(250));
	}

	#[test]
	fn test_debug_hides_api_key() {
		let client = SerperClient::new("very-secret-key").unwrap();
		assert!(!format!("{client:?}").contains("very-secret-key"));
	}
}
