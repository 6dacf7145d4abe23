use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};

pub async fn summarize(cfg: &triage_config::ProviderConfig, text: &str) -> Result<String> {
	let client = Client::builder()
		.timeout(Duration::from_millis(cfg.timeout_ms))
		.build()
		.map_err(Error::unavailable)?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({ "text": text });
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
		message: format!("Summary response is not valid JSON: {err}."),
	})?;

	parse_summary_response(payload)
}

fn parse_summary_response(payload: Value) -> Result<String> {
	payload
		.get("summary")
		.and_then(Value::as_str)
		.map(|summary| summary.to_string())
		.ok_or_else(|| Error::MalformedResponse {
			message: "Summary response is missing summary text.".to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_summary_text() {
		let payload = serde_json::json!({ "summary": "Printer is out of toner." });

		assert_eq!(
			parse_summary_response(payload).expect("Expected summary to parse."),
			"Printer is out of toner."
		);
	}

	#[test]
	fn missing_summary_is_malformed() {
		let payload = serde_json::json!({ "error": "quota exceeded" });
		let err = parse_summary_response(payload).expect_err("Expected malformed error.");

		assert!(matches!(err, Error::MalformedResponse { .. }));
	}
}
