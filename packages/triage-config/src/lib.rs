mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Matching, Postgres, ProviderConfig, Providers, Security, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	for (label, provider) in
		[("relevance", &cfg.providers.relevance), ("summary", &cfg.providers.summary)]
	{
		if provider.api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("providers.{label}.api_base must be non-empty."),
			});
		}
		if !provider.path.starts_with('/') {
			return Err(Error::Validation {
				message: format!("providers.{label}.path must start with a slash."),
			});
		}
		if provider.timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("providers.{label}.timeout_ms must be greater than zero."),
			});
		}
	}

	if cfg.matching.agent_role.trim().is_empty() {
		return Err(Error::Validation {
			message: "matching.agent_role must be non-empty.".to_string(),
		});
	}
	if cfg.matching.default_top_n == 0 {
		return Err(Error::Validation {
			message: "matching.default_top_n must be greater than zero.".to_string(),
		});
	}
	if cfg.matching.max_solved_queries == 0 {
		return Err(Error::Validation {
			message: "matching.max_solved_queries must be greater than zero.".to_string(),
		});
	}
	if cfg.matching.fallback_queries.is_empty() {
		return Err(Error::Validation {
			message: "matching.fallback_queries must be non-empty.".to_string(),
		});
	}
	if cfg.matching.fallback_queries.iter().any(|query| query.trim().is_empty()) {
		return Err(Error::Validation {
			message: "matching.fallback_queries entries cannot be blank.".to_string(),
		});
	}
	if cfg.matching.default_expertise_domain.trim().is_empty() {
		return Err(Error::Validation {
			message: "matching.default_expertise_domain must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.providers
		.relevance
		.api_key
		.as_deref()
		.map(|key| key.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.providers.relevance.api_key = None;
	}
	if cfg.providers.summary.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.providers.summary.api_key = None;
	}
}
