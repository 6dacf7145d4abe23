use std::collections::HashMap;

use uuid::Uuid;

use triage_domain::{corpus, question};
use triage_providers::relevance::AgentCandidate;
use triage_storage::queries;

use crate::{AgentIdentity, ServiceError, ServiceResult, TriageService};

/// The candidate set for one scoring request, plus the identity directory
/// reused by the merge stage. Both come from the same fetch, so corpus and
/// merge agree on which agents exist within a request.
#[derive(Debug, Clone)]
pub struct CorpusSnapshot {
	pub entries: Vec<AgentCandidate>,
	pub directory: HashMap<String, AgentIdentity>,
}

impl TriageService {
	/// Assembles one corpus entry per support agent: an explicit profile list
	/// wins outright, otherwise history is derived from resolved tickets in
	/// fetch order, otherwise the fallback list is substituted.
	pub async fn build_corpus(&self) -> ServiceResult<CorpusSnapshot> {
		let agents = queries::agents_by_role(&self.db, &self.cfg.matching.agent_role).await?;

		if agents.is_empty() {
			return Err(ServiceError::NoAgentsAvailable);
		}

		let tickets = queries::resolved_tickets(&self.db).await?;
		let mut history: HashMap<Uuid, Vec<String>> = HashMap::new();

		for ticket in &tickets {
			let Some(agent_id) = ticket.assigned_to else {
				continue;
			};

			history
				.entry(agent_id)
				.or_default()
				.push(question::ticket_question(&ticket.title, &ticket.description));
		}

		let mut entries = Vec::with_capacity(agents.len());
		let mut directory = HashMap::with_capacity(agents.len());

		for agent in agents {
			let derived = history.get(&agent.agent_id).map(Vec::as_slice).unwrap_or(&[]);
			let solved_queries =
				corpus::resolve_solved_queries(&agent.solved_queries, derived, &self.cfg.matching);
			let expertise_domain = corpus::resolve_expertise_label(
				agent.expertise_domain.as_deref(),
				&agent.expertise,
				&agent.skills,
				&self.cfg.matching,
			);

			entries.push(AgentCandidate {
				user_id: agent.agent_id.to_string(),
				expertise_domain,
				solved_queries,
			});
			directory.insert(
				agent.agent_id.to_string(),
				AgentIdentity { name: agent.name, email: agent.email },
			);
		}

		Ok(CorpusSnapshot { entries, directory })
	}
}
