// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Quest.
//!
//! Every outbound client is built here so requests carry the same User-Agent.

mod client;

pub use client::{builder, new_client, platform, user_agent};
