use triage_config::Matching;

/// Picks the solved-query list submitted to the oracle for one agent.
///
/// An explicit non-empty profile list wins outright; ticket-derived history is
/// discarded for that agent, never merged. With neither source the fallback
/// list is substituted. Whatever source wins is truncated to the configured
/// cap, keeping the first entries in source order.
pub fn resolve_solved_queries(
	explicit: &[String],
	derived: &[String],
	policy: &Matching,
) -> Vec<String> {
	let source = if !explicit.is_empty() {
		explicit
	} else if !derived.is_empty() {
		derived
	} else {
		policy.fallback_queries.as_slice()
	};

	source.iter().take(policy.max_solved_queries).cloned().collect()
}

/// Resolves an agent's expertise label: the explicit domain field, else the
/// first non-blank expertise tag, else the first non-blank skill tag, else the
/// configured default.
pub fn resolve_expertise_label(
	domain: Option<&str>,
	expertise: &[String],
	skills: &[String],
	policy: &Matching,
) -> String {
	if let Some(domain) = domain.map(str::trim).filter(|value| !value.is_empty()) {
		return domain.to_string();
	}

	expertise
		.iter()
		.chain(skills.iter())
		.map(|tag| tag.trim())
		.find(|tag| !tag.is_empty())
		.map(|tag| tag.to_string())
		.unwrap_or_else(|| policy.default_expertise_domain.clone())
}
