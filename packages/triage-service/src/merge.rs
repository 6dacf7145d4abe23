use std::{cmp::Ordering, collections::HashMap};

use triage_providers::relevance::RelevanceEntry;

/// Sentinel for oracle entries whose agent id has no directory match.
pub const UNRESOLVED_AGENT_EMAIL: &str = "unknown@unresolved.invalid";

#[derive(Debug, Clone)]
pub struct AgentIdentity {
	pub name: String,
	pub email: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Recommendation {
	pub agent_id: String,
	pub name: String,
	pub email: String,
	pub relevance_score: f64,
	pub reasoning: String,
	pub matching_queries: Vec<String>,
	pub total_solved_queries: i64,
}

/// Joins oracle entries with agent identities and re-sorts by descending
/// score. The oracle's delivered order is never trusted, and an entry whose
/// id misses the directory gets a placeholder identity instead of being
/// dropped: the recommendation list must never silently shrink.
pub fn merge_recommendations(
	entries: Vec<RelevanceEntry>,
	directory: &HashMap<String, AgentIdentity>,
) -> Vec<Recommendation> {
	let mut merged: Vec<Recommendation> = entries
		.into_iter()
		.map(|entry| match directory.get(&entry.user_id) {
			Some(identity) => Recommendation {
				agent_id: entry.user_id,
				name: identity.name.clone(),
				email: identity.email.clone(),
				relevance_score: entry.relevance_score,
				reasoning: entry.reasoning,
				matching_queries: entry.matching_queries,
				total_solved_queries: entry.total_solved_queries,
			},
			None => {
				tracing::warn!(
					agent_id = %entry.user_id,
					"Oracle referenced an agent missing from the directory.",
				);

				Recommendation {
					name: format!("Unknown agent ({})", entry.user_id),
					email: UNRESOLVED_AGENT_EMAIL.to_string(),
					agent_id: entry.user_id,
					relevance_score: entry.relevance_score,
					reasoning: entry.reasoning,
					matching_queries: entry.matching_queries,
					total_solved_queries: entry.total_solved_queries,
				}
			},
		})
		.collect();

	// sort_by is stable, so equal scores keep their delivered relative order.
	merged.sort_by(|a, b| {
		b.relevance_score.partial_cmp(&a.relevance_score).unwrap_or(Ordering::Equal)
	});

	merged
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(user_id: &str, score: f64, reasoning: &str) -> RelevanceEntry {
		RelevanceEntry {
			user_id: user_id.to_string(),
			relevance_score: score,
			reasoning: reasoning.to_string(),
			matching_queries: vec![],
			total_solved_queries: 0,
		}
	}

	fn directory(pairs: &[(&str, &str, &str)]) -> HashMap<String, AgentIdentity> {
		pairs
			.iter()
			.map(|(id, name, email)| {
				(
					id.to_string(),
					AgentIdentity { name: name.to_string(), email: email.to_string() },
				)
			})
			.collect()
	}

	#[test]
	fn resolves_identities_by_agent_id() {
		let dir = directory(&[("a1", "Ada", "ada@example.test")]);
		let merged = merge_recommendations(vec![entry("a1", 8.0, "strong match")], &dir);

		assert_eq!(merged.len(), 1);
		assert_eq!(merged[0].name, "Ada");
		assert_eq!(merged[0].email, "ada@example.test");
		assert_eq!(merged[0].reasoning, "strong match");
	}

	#[test]
	fn re_sorts_shuffled_oracle_output_by_descending_score() {
		let dir = directory(&[
			("a1", "Ada", "ada@example.test"),
			("a2", "Ben", "ben@example.test"),
			("a3", "Cam", "cam@example.test"),
		]);
		let merged = merge_recommendations(
			vec![entry("a2", 3.0, ""), entry("a1", 9.0, ""), entry("a3", 6.0, "")],
			&dir,
		);
		let ids: Vec<&str> = merged.iter().map(|r| r.agent_id.as_str()).collect();

		assert_eq!(ids, vec!["a1", "a3", "a2"]);
	}

	#[test]
	fn equal_scores_keep_their_delivered_order() {
		let dir = directory(&[
			("a1", "Ada", "ada@example.test"),
			("a2", "Ben", "ben@example.test"),
			("a3", "Cam", "cam@example.test"),
		]);
		let merged = merge_recommendations(
			vec![entry("a3", 5.0, ""), entry("a1", 5.0, ""), entry("a2", 7.0, "")],
			&dir,
		);
		let ids: Vec<&str> = merged.iter().map(|r| r.agent_id.as_str()).collect();

		assert_eq!(ids, vec!["a2", "a3", "a1"]);
	}

	#[test]
	fn directory_miss_yields_a_placeholder_not_a_drop() {
		let merged = merge_recommendations(vec![entry("x9", 7.0, "stale id")], &HashMap::new());

		assert_eq!(merged.len(), 1);
		assert_eq!(merged[0].agent_id, "x9");
		assert_eq!(merged[0].name, "Unknown agent (x9)");
		assert_eq!(merged[0].email, UNRESOLVED_AGENT_EMAIL);
	}

	#[test]
	fn duplicate_ids_are_all_preserved() {
		let dir = directory(&[("a1", "Ada", "ada@example.test")]);
		let merged = merge_recommendations(
			vec![entry("a1", 4.0, "first"), entry("a1", 8.0, "second")],
			&dir,
		);

		assert_eq!(merged.len(), 2);
		assert_eq!(merged[0].reasoning, "second");
		assert_eq!(merged[1].reasoning, "first");
	}

	#[test]
	fn merge_is_deterministic_for_fixed_inputs() {
		let dir = directory(&[("a1", "Ada", "ada@example.test")]);
		let entries = vec![entry("a1", 4.0, ""), entry("x9", 8.0, "")];
		let first = merge_recommendations(entries.clone(), &dir);
		let second = merge_recommendations(entries, &dir);

		assert_eq!(first, second);
	}
}
