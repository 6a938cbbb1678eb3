// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
}

impl FromStr for LogFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" | "text" => Ok(LogFormat::Pretty),
			"json" => Ok(LogFormat::Json),
			other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
		}
	}
}

impl fmt::Display for LogFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LogFormat::Pretty => write!(f, "pretty"),
			LogFormat::Json => write!(f, "json"),
		}
	}
}

/// Logging configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	/// Default `EnvFilter` directive when `RUST_LOG` is unset.
	pub level: String,
	pub format: LogFormat,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
		}
	}
}

/// Logging configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfigLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub format: Option<LogFormat>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: LoggingConfigLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(|| "info".to_string()),
			format: self.format.unwrap_or_default(),
		}
	}
}
