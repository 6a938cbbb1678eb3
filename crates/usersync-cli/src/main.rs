// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `usersync`: inspect how OpenShift users would be mirrored into SSO accounts.
//!
//! Nothing is written to the cluster or the SSO provider; the commands only
//! read and print.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use usersync_config::UsersyncConfig;
use usersync_core::{generate_account_name_from, resolve_email};
use usersync_k8s::KubeIdentityLookup;

mod draft;
mod logging;

/// Mirror OpenShift users into SSO accounts (dry run).
#[derive(Parser, Debug)]
#[command(name = "usersync", about = "Inspect SSO account mirroring for cluster users", version)]
struct Args {
	/// Config file (defaults to /etc/usersync/config.toml)
	#[arg(long, global = true, env = "USERSYNC_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the generated account name for a display name
	Name {
		display_name: String,
		/// Federated identity user ID used to disambiguate the name
		#[arg(long)]
		federated_id: Option<String>,
	},
	/// Print the email resolved from a user's primary identity
	Email { user: String },
	/// Print the mirrored account draft for a user as JSON
	Draft {
		user: String,
		/// Display name to generate the account name from (defaults to the user name)
		#[arg(long)]
		username: Option<String>,
	},
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	match args.command {
		Command::Version => {
			println!("usersync {}", env!("CARGO_PKG_VERSION"));
		}
		Command::Name {
			display_name,
			federated_id,
		} => {
			println!(
				"{}",
				generate_account_name_from(&display_name, federated_id.as_deref())
			);
		}
		Command::Email { user } => {
			let (_, lookup) = connect(args.config).await?;
			let user = lookup
				.fetch_user(&user)
				.await
				.with_context(|| format!("fetching user {user}"))?;
			let email = resolve_email(&lookup, &user)
				.await
				.with_context(|| format!("resolving email for {}", user.name))?;
			println!("{email}");
		}
		Command::Draft { user, username } => {
			let (config, lookup) = connect(args.config).await?;
			let user = lookup
				.fetch_user(&user)
				.await
				.with_context(|| format!("fetching user {user}"))?;
			let draft = draft::build_draft(
				&lookup,
				&user,
				&config.sso.identity_provider,
				username.as_deref(),
			)
			.await
			.with_context(|| format!("building draft for {}", user.name))?;
			println!("{}", serde_json::to_string_pretty(&draft)?);
		}
	}

	Ok(())
}

/// Loads configuration, installs logging and connects to the cluster.
async fn connect(config_path: Option<PathBuf>) -> anyhow::Result<(UsersyncConfig, KubeIdentityLookup)> {
	let config = match config_path {
		Some(path) => usersync_config::load_config_with_file(path),
		None => usersync_config::load_config(),
	}
	.context("loading configuration")?;

	logging::init_tracing(&config.logging);

	let lookup = KubeIdentityLookup::try_default(config.cluster.request_timeout())
		.await
		.context("connecting to cluster")?;

	Ok((config, lookup))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_name_with_federated_id() {
		let args = Args::try_parse_from(["usersync", "name", "Tester.01#", "--federated-id", "abc"]).unwrap();
		match args.command {
			Command::Name {
				display_name,
				federated_id,
			} => {
				assert_eq!(display_name, "Tester.01#");
				assert_eq!(federated_id.as_deref(), Some("abc"));
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn parses_global_config_after_subcommand() {
		let args =
			Args::try_parse_from(["usersync", "draft", "alice", "--config", "/tmp/usersync.toml"]).unwrap();
		assert_eq!(args.config, Some(PathBuf::from("/tmp/usersync.toml")));
		assert!(matches!(args.command, Command::Draft { ref user, username: None } if user == "alice"));
	}

	#[test]
	fn cli_definition_is_valid() {
		use clap::CommandFactory;
		Args::command().debug_assert();
	}
}
