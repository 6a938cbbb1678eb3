// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ConfigLayer;
use crate::sections::{ClusterConfigLayer, LogFormat, LoggingConfigLayer, SsoConfigLayer};

/// Default location of the config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/usersync/config.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		Ok(ConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: USERSYNC_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		load_from(env_var)
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Builds a layer from a variable getter so tests need not touch the process env.
fn load_from(get: impl Fn(&str) -> Option<String>) -> Result<ConfigLayer, ConfigError> {
	let format = match get("USERSYNC_LOG_FORMAT") {
		Some(v) => Some(v.parse::<LogFormat>().map_err(|message| ConfigError::InvalidValue {
			key: "USERSYNC_LOG_FORMAT".to_string(),
			message,
		})?),
		None => None,
	};

	let request_timeout_secs = match get("USERSYNC_CLUSTER_REQUEST_TIMEOUT_SECS") {
		Some(v) => Some(v.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
			key: "USERSYNC_CLUSTER_REQUEST_TIMEOUT_SECS".to_string(),
			message: format!("invalid u64 value '{v}'"),
		})?),
		None => None,
	};

	Ok(ConfigLayer {
		logging: Some(LoggingConfigLayer {
			level: get("USERSYNC_LOG_LEVEL"),
			format,
		}),
		cluster: Some(ClusterConfigLayer {
			request_timeout_secs,
		}),
		sso: Some(SsoConfigLayer {
			identity_provider: get("USERSYNC_SSO_IDENTITY_PROVIDER"),
		}),
	})
}
