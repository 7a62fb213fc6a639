// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for Serper.dev API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result count used when the caller does not ask for one.
pub const DEFAULT_NUM: u32 = 10;
/// Serper accepts at most this many results per request.
pub const MAX_NUM: u32 = 100;
/// Images fetched alongside the primary results in a combined search.
pub const IMAGE_RESULT_COUNT: u32 = 3;

/// Count actually sent to Serper. Zero means "use the default"; anything
/// else is clamped to the 1-100 range the provider accepts.
pub fn normalize_num(num: u32) -> u32 {
	if num == 0 {
		DEFAULT_NUM
	} else {
		num.min(MAX_NUM)
	}
}

/// Which Serper endpoint to query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
	#[default]
	Search,
	News,
	Images,
}

impl SearchType {
	pub fn as_str(&self) -> &'static str {
		match self {
			SearchType::Search => "search",
			SearchType::News => "news",
			SearchType::Images => "images",
		}
	}

	/// Endpoint path relative to the API base URL.
	pub fn path(&self) -> &'static str {
		match self {
			SearchType::Search => "/search",
			SearchType::News => "/news",
			SearchType::Images => "/images",
		}
	}
}

impl fmt::Display for SearchType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Options for [`crate::SerperClient::search`].
///
/// `num` is normalized again when the request is built, so a struct literal
/// cannot send an out-of-range count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
	pub search_type: SearchType,
	pub num: u32,
	pub autocorrect: bool,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			search_type: SearchType::Search,
			num: DEFAULT_NUM,
			autocorrect: true,
		}
	}
}

impl SearchOptions {
	pub fn new(search_type: SearchType) -> Self {
		Self {
			search_type,
			..Self::default()
		}
	}

	/// Sets the result count. See [`normalize_num`].
	pub fn with_num(mut self, num: u32) -> Self {
		self.num = normalize_num(num);
		self
	}

	pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
		self.autocorrect = autocorrect;
		self
	}
}

/// Options for [`crate::SerperClient::search_with_images`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWithImagesOptions {
	pub max_results: u32,
	/// Query the news endpoint instead of web search for the primary results.
	pub include_news: bool,
}

impl Default for SearchWithImagesOptions {
	fn default() -> Self {
		Self {
			max_results: DEFAULT_NUM,
			include_news: false,
		}
	}
}

impl SearchWithImagesOptions {
	pub fn with_max_results(mut self, max_results: u32) -> Self {
		self.max_results = max_results;
		self
	}

	pub fn with_news(mut self, include_news: bool) -> Self {
		self.include_news = include_news;
		self
	}
}

/// Request body sent to every endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequestBody<'a> {
	pub q: &'a str,
	pub num: u32,
	pub autocorrect: bool,
}

/// Decoded Serper response. Items keep the provider's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerperResponse {
	#[serde(default)]
	pub search_parameters: SearchParameters,
	#[serde(default)]
	pub organic: Vec<SearchResultItem>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub images: Option<Vec<ImageResultItem>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub news: Option<Vec<SearchResultItem>>,
}

/// Query parameters as echoed back by Serper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
	#[serde(default)]
	pub q: String,
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub search_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub num: Option<u32>,
}

/// A single web or news result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
	#[serde(default)]
	pub title: String,
	pub link: String,
	#[serde(default)]
	pub snippet: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub position: Option<u32>,
}

/// A single image result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResultItem {
	#[serde(default)]
	pub title: String,
	pub image_url: String,
	pub link: String,
}

/// Output of [`crate::SerperClient::search_with_images`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedResults {
	/// Web results (`organic`). When `include_news` is set these are the
	/// provider's `news` items instead, falling back to `organic` if the
	/// response has no `news` field.
	pub results: Vec<SearchResultItem>,
	pub images: Vec<ImageResultItem>,
}
