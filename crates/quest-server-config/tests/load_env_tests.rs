// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading through real files: `.env` parsing, `VAR_FILE` secrets and layer
//! precedence.

use std::io::Write;

use quest_server_config::{
	load_env_from_sources, ConfigError, DotenvSource, MapSource, Precedence, ServerEnv,
};
use tempfile::{NamedTempFile, TempDir};

const DOTENV: &str = "\
# required
SERPER_API_KEY=serper-from-dotenv
GOOGLE_GENERATIVE_AI_API_KEY=gemini-from-dotenv
FIRECRAWL_API_KEY=fc-from-dotenv
DATABASE_URL=postgres://quest@localhost/quest
REDIS_URL=redis://localhost:6379
BETTER_AUTH_SECRET=auth-from-dotenv

# optional
EXA_API_KEY=exa-from-dotenv
ALLOWED_ORIGINS=https://quest.example
";

fn dotenv_file(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

fn load(sources: Vec<Box<dyn quest_server_config::ConfigSource>>) -> Result<ServerEnv, ConfigError> {
	load_env_from_sources(sources)
}

#[test]
fn dotenv_alone_satisfies_required_fields() {
	let file = dotenv_file(DOTENV);
	let env = load(vec![Box::new(DotenvSource::new(file.path()))]).unwrap();

	assert_eq!(env.serper_api_key().expose(), "serper-from-dotenv");
	assert_eq!(env.database_url().expose(), "postgres://quest@localhost/quest");
	assert_eq!(env.allowed_origins(), "https://quest.example");
	assert!(env.is_configured("EXA_API_KEY"));
	assert!(!env.is_configured("TAVILY_API_KEY"));
}

#[test]
fn environment_layer_overrides_dotenv() {
	let file = dotenv_file(DOTENV);
	let environment = MapSource::new([
		("SERPER_API_KEY", "serper-from-env"),
		("EXA_API_KEY", "exa-from-env"),
	])
	.with_precedence(Precedence::Environment);

	let env = load(vec![
		Box::new(environment),
		Box::new(DotenvSource::new(file.path())),
	])
	.unwrap();

	assert_eq!(env.serper_api_key().expose(), "serper-from-env");
	assert_eq!(env.get("EXA_API_KEY").unwrap().expose(), "exa-from-env");
	assert_eq!(env.redis_url().expose(), "redis://localhost:6379");
}

#[test]
fn file_secret_overrides_inline_value() {
	let dir = TempDir::new().unwrap();
	let secret_path = dir.path().join("better_auth_secret");
	std::fs::write(&secret_path, "mounted-secret\n").unwrap();

	let file = dotenv_file(DOTENV);
	let environment = MapSource::new([(
		"BETTER_AUTH_SECRET_FILE".to_string(),
		secret_path.display().to_string(),
	)])
	.with_precedence(Precedence::Environment);

	let env = load(vec![
		Box::new(DotenvSource::new(file.path())),
		Box::new(environment),
	])
	.unwrap();

	assert_eq!(env.better_auth_secret().expose(), "mounted-secret");
}

#[test]
fn unreadable_secret_file_fails_loading() {
	let environment = MapSource::new([("DATABASE_URL_FILE", "/nonexistent/quest/db-url")]);

	let err = load(vec![Box::new(environment)]).unwrap_err();
	assert!(matches!(err, ConfigError::Secret(_)), "got {err}");
	assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn missing_required_in_every_layer_is_reported() {
	let partial = DOTENV.replace("REDIS_URL=redis://localhost:6379\n", "");
	let file = dotenv_file(&partial);

	let err = load(vec![Box::new(DotenvSource::new(file.path()))]).unwrap_err();
	assert_eq!(err.to_string(), "Missing required configuration: REDIS_URL");
}

#[test]
fn absent_dotenv_file_is_skipped() {
	let dir = TempDir::new().unwrap();
	let required = MapSource::new([
		("SERPER_API_KEY", "a"),
		("GOOGLE_GENERATIVE_AI_API_KEY", "b"),
		("FIRECRAWL_API_KEY", "c"),
		("DATABASE_URL", "d"),
		("REDIS_URL", "e"),
		("BETTER_AUTH_SECRET", "f"),
	]);

	let env = load(vec![
		Box::new(DotenvSource::new(dir.path().join(".env"))),
		Box::new(required),
	])
	.unwrap();
	assert_eq!(env.allowed_origins(), "http://localhost:3000");
	assert_eq!(env.get("YT_ENDPOINT").unwrap().expose(), "dummy");
}
