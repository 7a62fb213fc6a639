// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Quest CLI
//!
//! Validates the process configuration and runs Serper searches from the
//! command line. Results are printed to stdout as JSON; logs go to stderr.

mod version;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{
	fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use quest_search_serper::{
	CancellationToken, SearchOptions, SearchType, SearchWithImagesOptions, SerperClient,
};
use quest_server_config::{load_env, load_env_with_file, ServerEnv};

#[derive(Parser, Debug)]
#[command(name = "quest", version, about, long_about = None)]
struct Args {
	/// Read variables from this file instead of ./.env
	#[arg(long, global = true, value_name = "PATH")]
	env_file: Option<PathBuf>,

	/// Override the Serper API base URL (default: SERPER_BASE_URL)
	#[arg(long, global = true, value_name = "URL")]
	serper_base_url: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run a single search
	Search {
		/// Query text, sent unchanged
		query: String,
		/// Endpoint to query
		#[arg(long = "type", value_enum, default_value_t = SearchTypeArg::Search)]
		search_type: SearchTypeArg,
		/// Number of results (1-100)
		#[arg(short, long, default_value_t = 10)]
		num: u32,
		/// Disable provider-side query autocorrection
		#[arg(long)]
		no_autocorrect: bool,
	},
	/// Fetch results and three images concurrently
	Images {
		/// Query text, sent unchanged
		query: String,
		/// Number of primary results
		#[arg(short, long, default_value_t = 10)]
		max_results: u32,
		/// Use news results instead of web results
		#[arg(long)]
		news: bool,
	},
	/// Validate configuration and print which variables are set
	CheckEnv {
		/// Output raw JSON
		#[arg(long)]
		json: bool,
	},
	/// Show version and build information
	Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SearchTypeArg {
	Search,
	News,
	Images,
}

impl From<SearchTypeArg> for SearchType {
	fn from(arg: SearchTypeArg) -> Self {
		match arg {
			SearchTypeArg::Search => SearchType::Search,
			SearchTypeArg::News => SearchType::News,
			SearchTypeArg::Images => SearchType::Images,
		}
	}
}

fn init_tracing(level: &str) {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(format!("quest={level}")))
		.unwrap_or_else(|_| EnvFilter::new("quest=info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr))
		.init();
}

/// Subscriber active only while configuration loads, so validation errors
/// (every missing variable, not just the first) reach the operator before
/// `LOG_LEVEL` is known.
fn bootstrap_subscriber<W>(
	filter: EnvFilter,
	make_writer: W,
) -> impl tracing::Subscriber + Send + Sync
where
	W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(make_writer))
}

fn bootstrap_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quest=warn"))
}

fn load_config(args: &Args) -> Result<ServerEnv> {
	match &args.env_file {
		Some(path) => load_env_with_file(path)
			.with_context(|| format!("failed to load configuration from {}", path.display())),
		None => load_env().context("failed to load configuration"),
	}
}

fn build_client(args: &Args, env: &ServerEnv) -> Result<SerperClient> {
	let base_url = args
		.serper_base_url
		.as_deref()
		.unwrap_or_else(|| env.serper_base_url());
	let client =
		SerperClient::new(env.serper_api_key().clone()).context("failed to create Serper client")?;
	Ok(client.with_base_url(base_url))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
	let out = serde_json::to_string_pretty(value).context("failed to encode output")?;
	println!("{out}");
	Ok(())
}

fn print_summary(env: &ServerEnv) {
	println!("{:<32} {:<9} {:<11} VALUE", "NAME", "REQUIRED", "CONFIGURED");
	for status in env.summary() {
		println!(
			"{:<32} {:<9} {:<11} {}",
			status.name,
			if status.required { "yes" } else { "no" },
			if status.configured { "yes" } else { "no" },
			status.value.as_deref().unwrap_or("-"),
		);
	}
}

/// Cancels `token` on Ctrl-C so in-flight requests are dropped.
fn cancel_on_interrupt(token: CancellationToken) {
	tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			warn!("interrupted, cancelling search");
			token.cancel();
		}
	});
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	if let Command::Version = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	let bootstrap = bootstrap_subscriber(bootstrap_filter(), std::io::stderr);
	let env = tracing::subscriber::with_default(bootstrap, || load_config(&args))?;
	init_tracing(env.log_level());

	let configured = env.summary().iter().filter(|s| s.configured).count();
	info!(configured, "configuration loaded");

	match &args.command {
		Command::Search {
			query,
			search_type,
			num,
			no_autocorrect,
		} => {
			let client = build_client(&args, &env)?;
			let options = SearchOptions::new((*search_type).into())
				.with_num(*num)
				.with_autocorrect(!no_autocorrect);
			debug!(?options, "running search");

			let response = client
				.search(query, options)
				.await
				.context("search failed")?;
			print_json(&response)
		}
		Command::Images {
			query,
			max_results,
			news,
		} => {
			let client = build_client(&args, &env)?;
			let options = SearchWithImagesOptions::default()
				.with_max_results(*max_results)
				.with_news(*news);

			let token = CancellationToken::new();
			cancel_on_interrupt(token.clone());

			let combined = client
				.search_with_images_cancellable(query, options, &token)
				.await
				.context("combined search failed")?;
			print_json(&combined)
		}
		Command::CheckEnv { json } => {
			if *json {
				print_json(&env.summary())
			} else {
				print_summary(&env);
				Ok(())
			}
		}
		// Printed before configuration is loaded.
		Command::Version => Ok(()),
	}
}
