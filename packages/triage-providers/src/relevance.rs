// std
use std::time::Duration;

// crates.io
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// One agent's corpus entry in the oracle wire format. The field names are
/// the oracle's contract, capitalization included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCandidate {
	#[serde(rename = "userId")]
	pub user_id: String,
	pub expertise_domain: String,
	#[serde(rename = "Solved queries")]
	pub solved_queries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceEntry {
	#[serde(rename = "userId")]
	pub user_id: String,
	pub relevance_score: f64,
	pub reasoning: String,
	pub matching_queries: Vec<String>,
	pub total_solved_queries: i64,
}

/// The oracle's ranked verdict. Decoded strictly: a 2xx payload without a
/// well-formed `priority_users` list is malformed, not "zero results".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceReport {
	pub priority_users: Vec<RelevanceEntry>,
}

pub async fn score_candidates(
	cfg: &triage_config::ProviderConfig,
	question: &str,
	top_n: u32,
	candidates: &[AgentCandidate],
) -> Result<RelevanceReport> {
	let client = Client::builder()
		.timeout(Duration::from_millis(cfg.timeout_ms))
		.build()
		.map_err(Error::unavailable)?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"question": question,
		"top_n": top_n,
		"users": candidates,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(cfg.api_key.as_deref(), &cfg.default_headers)?)
		.json(&body)
		.send()
		.await
		.map_err(Error::unavailable)?
		.error_for_status()
		.map_err(Error::unavailable)?;
	let raw = res.text().await.map_err(Error::unavailable)?;
	let payload: Value = serde_json::from_str(&raw).map_err(|err| Error::MalformedResponse {
		message: format!("Relevance response is not valid JSON: {err}."),
	})?;

	parse_relevance_response(payload)
}

fn parse_relevance_response(payload: Value) -> Result<RelevanceReport> {
	serde_json::from_value(payload).map_err(|err| Error::MalformedResponse {
		message: format!("Relevance response did not match the expected shape: {err}."),
	})
}
