// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use usersync_config::{LogFormat, LoggingConfig};

/// Installs the global subscriber. Logs go to stderr; stdout carries command output.
pub fn init_tracing(config: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

	let registry = tracing_subscriber::registry().with(filter);
	match config.format {
		LogFormat::Json => registry
			.with(
				tracing_subscriber::fmt::layer()
					.json()
					.with_writer(std::io::stderr),
			)
			.init(),
		LogFormat::Pretty => registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.init(),
	}
}
