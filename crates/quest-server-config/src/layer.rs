// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by one source, merged across sources.

use std::collections::BTreeMap;

use quest_common_config::{read_secret_var, SecretString};

use crate::error::ConfigError;
use crate::fields::FIELDS;

/// Values read from a single source. Only known, non-empty variables are kept.
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
	values: BTreeMap<&'static str, SecretString>,
}

impl EnvLayer {
	/// Read every known field through `lookup`, honouring `VAR_FILE`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut layer = EnvLayer::default();
		for field in FIELDS {
			if let Some(value) = read_secret_var(field.name, &lookup)? {
				layer.values.insert(field.name, value);
			}
		}
		Ok(layer)
	}

	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: EnvLayer) {
		self.values.extend(other.values);
	}

	pub fn get(&self, name: &str) -> Option<&SecretString> {
		self.values.get(name)
	}

	pub fn take(&mut self, name: &str) -> Option<SecretString> {
		self.values.remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
