// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Common configuration primitives for Quest.
//!
//! - [`Secret<T>`]: keeps API keys and connection strings out of logs and
//!   serialized output
//! - [`read_secret_var`] / [`load_secret_env`]: read a value from `VAR` or from
//!   the file named by `VAR_FILE`

pub mod env;
pub mod secret;

pub use env::{load_secret_env, read_secret_var, SecretEnvError};
pub use secret::{Secret, SecretString, REDACTED};
