use triage_config::Matching;
use triage_domain::{corpus, question};

fn policy() -> Matching {
	Matching::default()
}

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn explicit_queries_override_derived_history() {
	let explicit = strings(&["fix printer", "fix printer", "fix printer"]);
	let derived = strings(&["replace toner: cartridge empty", "vpn down: cannot connect"]);
	let resolved = corpus::resolve_solved_queries(&explicit, &derived, &policy());

	assert_eq!(resolved, explicit);
}

#[test]
fn explicit_queries_are_truncated_to_the_cap() {
	let explicit: Vec<String> = (0..15).map(|i| format!("query {i}")).collect();
	let resolved = corpus::resolve_solved_queries(&explicit, &[], &policy());

	assert_eq!(resolved.len(), 10);
	assert_eq!(resolved, explicit[..10].to_vec());
}

#[test]
fn derived_history_is_used_when_no_explicit_list_exists() {
	let derived = strings(&["laptop battery: not charging", "screen flicker: loose cable"]);
	let resolved = corpus::resolve_solved_queries(&[], &derived, &policy());

	assert_eq!(resolved, derived);
}

#[test]
fn derived_history_keeps_the_first_ten_in_source_order() {
	let derived: Vec<String> = (0..12).map(|i| format!("ticket {i}: details")).collect();
	let resolved = corpus::resolve_solved_queries(&[], &derived, &policy());

	assert_eq!(resolved.len(), 10);
	assert_eq!(resolved[0], "ticket 0: details");
	assert_eq!(resolved[9], "ticket 9: details");
}

#[test]
fn fallback_triple_is_substituted_when_both_sources_are_empty() {
	let resolved = corpus::resolve_solved_queries(&[], &[], &policy());

	assert_eq!(resolved, policy().fallback_queries);
	assert_eq!(resolved.len(), 3);
}

#[test]
fn fallback_is_also_bounded_by_the_cap() {
	let mut policy = policy();

	policy.fallback_queries = (0..20).map(|i| format!("generic {i}")).collect();

	let resolved = corpus::resolve_solved_queries(&[], &[], &policy);

	assert_eq!(resolved.len(), 10);
}

#[test]
fn resolution_is_deterministic_for_fixed_inputs() {
	let derived = strings(&["a: b", "c: d"]);
	let first = corpus::resolve_solved_queries(&[], &derived, &policy());
	let second = corpus::resolve_solved_queries(&[], &derived, &policy());

	assert_eq!(first, second);
}

#[test]
fn explicit_domain_field_wins_over_tags() {
	let label = corpus::resolve_expertise_label(
		Some("Network Infrastructure"),
		&strings(&["Printers"]),
		&strings(&["Cabling"]),
		&policy(),
	);

	assert_eq!(label, "Network Infrastructure");
}

#[test]
fn blank_domain_field_falls_through_to_tags() {
	let label = corpus::resolve_expertise_label(
		Some("   "),
		&strings(&["", "Printers"]),
		&[],
		&policy(),
	);

	assert_eq!(label, "Printers");
}

#[test]
fn skills_are_consulted_after_expertise_tags() {
	let label = corpus::resolve_expertise_label(None, &[], &strings(&["Cabling"]), &policy());

	assert_eq!(label, "Cabling");
}

#[test]
fn label_defaults_when_profile_has_no_expertise_information() {
	let label = corpus::resolve_expertise_label(None, &[], &[], &policy());

	assert_eq!(label, policy().default_expertise_domain);
}

#[test]
fn whitespace_question_normalizes_to_none() {
	assert_eq!(question::normalize_question("   "), None);
	assert_eq!(question::normalize_question(""), None);
}

#[test]
fn question_is_trimmed() {
	assert_eq!(
		question::normalize_question("  printer jams  ").as_deref(),
		Some("printer jams")
	);
}

#[test]
fn ticket_question_joins_title_and_description() {
	assert_eq!(
		question::ticket_question("VPN down", "cannot reach intranet"),
		"VPN down: cannot reach intranet"
	);
}

#[test]
fn non_positive_top_n_means_use_the_default() {
	assert_eq!(question::effective_top_n(None, 5), 5);
	assert_eq!(question::effective_top_n(Some(0), 5), 5);
	assert_eq!(question::effective_top_n(Some(-3), 5), 5);
	assert_eq!(question::effective_top_n(Some(2), 5), 2);
}
