use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	#[serde(default)]
	pub matching: Matching,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub relevance: ProviderConfig,
	pub summary: ProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
	pub api_base: String,
	#[serde(default)]
	pub api_key: Option<String>,
	pub path: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

/// Corpus policy. Every field has a default so the whole section can be
/// omitted; tests override individual values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Matching {
	/// Role marking a profile as a support agent.
	pub agent_role: String,
	/// Used when a request omits `top_n` or sends a non-positive value.
	pub default_top_n: u32,
	/// Per-agent cap on solved queries sent to the oracle.
	pub max_solved_queries: usize,
	/// Substituted when an agent has neither an explicit list nor history.
	pub fallback_queries: Vec<String>,
	/// Substituted when a profile carries no expertise information at all.
	pub default_expertise_domain: String,
}
impl Default for Matching {
	fn default() -> Self {
		Self {
			agent_role: default_agent_role(),
			default_top_n: 5,
			max_solved_queries: 10,
			fallback_queries: default_fallback_queries(),
			default_expertise_domain: default_expertise_domain(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}

fn default_agent_role() -> String {
	"Agent".to_string()
}

fn default_expertise_domain() -> String {
	"General Support".to_string()
}

fn default_fallback_queries() -> Vec<String> {
	vec![
		"How to reset an account password?".to_string(),
		"How to troubleshoot a slow computer?".to_string(),
		"How to set up email on a new device?".to_string(),
	]
}
