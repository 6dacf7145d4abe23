pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_agents.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_agents.sql")),
				"tables/002_tickets.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_tickets.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expands_all_table_includes() {
		let schema = render_schema();

		assert!(schema.contains("CREATE TABLE IF NOT EXISTS agents"));
		assert!(schema.contains("CREATE TABLE IF NOT EXISTS tickets"));
		assert!(!schema.contains("\\ir "));
	}
}
