use reqwest::header::AUTHORIZATION;
use serde_json::Map;

#[test]
fn builds_bearer_auth_header_when_key_is_present() {
	let headers = triage_providers::auth_headers(Some("secret"), &Map::new())
		.expect("Failed to build headers.");
	let value = headers.get(AUTHORIZATION).expect("Missing authorization header.");

	assert_eq!(value, "Bearer secret");
}

#[test]
fn omits_auth_header_without_a_key() {
	let headers =
		triage_providers::auth_headers(None, &Map::new()).expect("Failed to build headers.");

	assert!(headers.get(AUTHORIZATION).is_none());
}

#[test]
fn passes_default_headers_through() {
	let mut defaults = Map::new();

	defaults.insert("x-oracle-tenant".to_string(), serde_json::json!("helpdesk"));

	let headers =
		triage_providers::auth_headers(None, &defaults).expect("Failed to build headers.");

	assert_eq!(headers.get("x-oracle-tenant").expect("Missing default header."), "helpdesk");
}

#[test]
fn rejects_non_string_default_header_values() {
	let mut defaults = Map::new();

	defaults.insert("x-oracle-tenant".to_string(), serde_json::json!(42));

	let result = triage_providers::auth_headers(None, &defaults);

	assert!(matches!(result, Err(triage_providers::Error::InvalidConfig { .. })));
}
