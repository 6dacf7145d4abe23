/// Trims the question text. `None` means the caller sent nothing usable.
pub fn normalize_question(raw: &str) -> Option<String> {
	let trimmed = raw.trim();

	if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// The `"<title>: <description>"` join used both for ticket-derived history
/// entries and for per-ticket scoring questions.
pub fn ticket_question(title: &str, description: &str) -> String {
	format!("{title}: {description}")
}

/// A missing or non-positive `top_n` means "use the default", never "return
/// zero results".
pub fn effective_top_n(requested: Option<i64>, default_top_n: u32) -> u32 {
	match requested {
		Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
		_ => default_top_n,
	}
}
