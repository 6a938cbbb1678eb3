// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for usersync.
//!
//! Layered from built-in defaults, an optional TOML file and `USERSYNC_*`
//! environment variables, in increasing precedence.
//!
//! ```ignore
//! let config = usersync_config::load_config()?;
//! println!("timeout: {:?}", config.cluster.request_timeout());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct UsersyncConfig {
	pub logging: LoggingConfig,
	pub cluster: ClusterConfig,
	pub sso: SsoConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`USERSYNC_*`)
/// 2. Config file (`/etc/usersync/config.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<UsersyncConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<UsersyncConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<UsersyncConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

fn finalize(layer: ConfigLayer) -> Result<UsersyncConfig, ConfigError> {
	let config = UsersyncConfig {
		logging: layer.logging.unwrap_or_default().finalize(),
		cluster: layer.cluster.unwrap_or_default().finalize(),
		sso: layer.sso.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		log_level = %config.logging.level,
		log_format = %config.logging.format,
		request_timeout_secs = config.cluster.request_timeout_secs,
		identity_provider = %config.sso.identity_provider,
		"configuration loaded"
	);

	Ok(config)
}

fn validate_config(config: &UsersyncConfig) -> Result<(), ConfigError> {
	if config.cluster.request_timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"cluster.request_timeout_secs must be greater than zero".to_string(),
		));
	}
	if config.sso.identity_provider.trim().is_empty() {
		return Err(ConfigError::Validation(
			"sso.identity_provider must not be empty".to_string(),
		));
	}
	Ok(())
}
