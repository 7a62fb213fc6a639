// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret lookup with `VAR_FILE` support.
//!
//! Container platforms usually mount secrets as files. For any variable `VAR`
//! the helpers here first look at `VAR_FILE`; when it is set, the file's
//! contents (minus one trailing newline) become the value. Otherwise `VAR`
//! itself is used. Empty values count as unset.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::secret::SecretString;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file for {var} at {path}: {source}")]
	Io {
		var: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Resolve `var` through `lookup`, honouring the `VAR_FILE` convention.
///
/// `lookup` returns the raw value of a variable, or `None` when unset. Passing
/// something other than the process environment lets callers resolve secrets
/// from an in-memory map or a parsed `.env` file.
pub fn read_secret_var<F>(var: &str, lookup: F) -> Result<Option<SecretString>, SecretEnvError>
where
	F: Fn(&str) -> Option<String>,
{
	let file_var = format!("{var}_FILE");

	if let Some(path_str) = lookup(&file_var) {
		if path_str.trim().is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			var: var.to_string(),
			path: path.clone(),
			source,
		})?;

		let value = content.strip_suffix('\n').unwrap_or(&content);
		let value = value.strip_suffix('\r').unwrap_or(value);
		if value.is_empty() {
			return Ok(None);
		}
		return Ok(Some(SecretString::from(value)));
	}

	Ok(lookup(var)
		.filter(|v| !v.is_empty())
		.map(SecretString::from))
}

/// Resolve `var` from the process environment.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	read_secret_var(var, |name| std::env::var(name).ok())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn lookup_in(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
		move |name| map.get(name).cloned()
	}

	fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn unset_is_none() {
		let map = vars(&[]);
		assert!(read_secret_var("SERPER_API_KEY", lookup_in(&map))
			.unwrap()
			.is_none());
	}

	#[test]
	fn empty_value_is_none() {
		let map = vars(&[("SERPER_API_KEY", "")]);
		assert!(read_secret_var("SERPER_API_KEY", lookup_in(&map))
			.unwrap()
			.is_none());
	}

	#[test]
	fn direct_value_is_used() {
		let map = vars(&[("SERPER_API_KEY", "direct")]);
		let secret = read_secret_var("SERPER_API_KEY", lookup_in(&map))
			.unwrap()
			.unwrap();
		assert_eq!(secret.expose(), "direct");
	}

	/// The file wins over the direct value and loses its trailing newline.
	#[test]
	fn file_var_takes_precedence() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "from-file").unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let map = vars(&[
			("REDIS_URL", "from-env"),
			("REDIS_URL_FILE", path.as_str()),
		]);
		let secret = read_secret_var("REDIS_URL", lookup_in(&map))
			.unwrap()
			.unwrap();
		assert_eq!(secret.expose(), "from-file");
	}

	#[test]
	fn only_one_trailing_newline_is_stripped() {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "value\n\n").unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let map = vars(&[("CRON_SECRET_FILE", path.as_str())]);
		let secret = read_secret_var("CRON_SECRET", lookup_in(&map))
			.unwrap()
			.unwrap();
		assert_eq!(secret.expose(), "value\n");
	}

	#[test]
	fn empty_file_is_none() {
		let file = NamedTempFile::new().unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let map = vars(&[("CRON_SECRET_FILE", path.as_str())]);
		assert!(read_secret_var("CRON_SECRET", lookup_in(&map))
			.unwrap()
			.is_none());
	}

	#[test]
	fn missing_file_is_an_error() {
		let map = vars(&[("DATABASE_URL_FILE", "/nonexistent/quest/secret")]);
		let err = read_secret_var("DATABASE_URL", lookup_in(&map)).unwrap_err();
		assert!(matches!(err, SecretEnvError::Io { ref var, .. } if var == "DATABASE_URL"));
	}

	#[test]
	fn empty_file_path_is_an_error() {
		let map = vars(&[("DATABASE_URL_FILE", "")]);
		let err = read_secret_var("DATABASE_URL", lookup_in(&map)).unwrap_err();
		assert!(matches!(err, SecretEnvError::EmptyPath { ref var } if var == "DATABASE_URL_FILE"));
	}

	#[test]
	fn process_env_lookup() {
		let var = "QUEST_TEST_PROCESS_ENV_SECRET_4821";
		std::env::set_var(var, "from-process");
		std::env::remove_var(format!("{var}_FILE"));

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "from-process");

		std::env::remove_var(var);
	}
}
