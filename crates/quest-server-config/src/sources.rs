// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: process environment, `.env` files and in-memory maps.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::EnvLayer;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	DotenvFile = 20,
	Environment = 50,
	Override = 90,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<EnvLayer, ConfigError>;
}

/// Variables from a dotenv file. A missing file yields an empty layer.
pub struct DotenvSource {
	path: PathBuf,
}

impl DotenvSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// `.env` in the working directory.
	pub fn working_dir() -> Self {
		Self::new(".env")
	}
}

impl ConfigSource for DotenvSource {
	fn name(&self) -> &'static str {
		"dotenv"
	}

	fn precedence(&self) -> Precedence {
		Precedence::DotenvFile
	}

	fn load(&self) -> Result<EnvLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "env file not found, skipping");
			return Ok(EnvLayer::default());
		}

		debug!(path = %self.path.display(), "loading env file");
		let dotenv_error = |source| ConfigError::Dotenv {
			path: self.path.clone(),
			source,
		};

		let mut vars = HashMap::new();
		for item in dotenvy::from_path_iter(&self.path).map_err(dotenv_error)? {
			let (key, value) = item.map_err(dotenv_error)?;
			vars.insert(key, value);
		}

		trace!(entries = vars.len(), "parsed env file");
		EnvLayer::from_lookup(|name| vars.get(name).cloned())
	}
}

/// The live process environment.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<EnvLayer, ConfigError> {
		debug!("loading environment variables");
		EnvLayer::from_lookup(|name| std::env::var(name).ok())
	}
}

/// An explicit set of variables, for tests and embedders that must not read
/// global process state.
pub struct MapSource {
	vars: HashMap<String, String>,
	precedence: Precedence,
}

impl MapSource {
	pub fn new<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: vars
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
			precedence: Precedence::Override,
		}
	}

	pub fn with_precedence(mut self, precedence: Precedence) -> Self {
		self.precedence = precedence;
		self
	}
}

impl ConfigSource for MapSource {
	fn name(&self) -> &'static str {
		"map"
	}

	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<EnvLayer, ConfigError> {
		EnvLayer::from_lookup(|name| self.vars.get(name).cloned())
	}
}
