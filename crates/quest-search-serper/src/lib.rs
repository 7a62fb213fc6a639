// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Serper.dev Google Search API client for Quest.
//!
//! This crate provides a typed Rust client for the Serper.dev API,
//! encapsulating HTTP communication and response parsing. It offers a single
//! search call and a combined call that fetches web (or news) results and a
//! few images concurrently.

pub mod client;
pub mod error;
pub mod types;

pub use client::{SerperClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use error::SerperError;
pub use tokio_util::sync::CancellationToken;
pub use types::{
	CombinedResults, ImageResultItem, SearchOptions, SearchParameters, SearchResultItem,
	SearchType, SearchWithImagesOptions, SerperResponse,
};
