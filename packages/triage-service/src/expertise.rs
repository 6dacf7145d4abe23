use triage_providers::relevance::AgentCandidate;

use crate::{ServiceResult, TriageService};

/// The corpus exactly as it would be submitted to the oracle. Useful for
/// inspection and for testing the oracle service by hand.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExpertiseResponse {
	pub users: Vec<AgentCandidate>,
}

impl TriageService {
	pub async fn expertise_corpus(&self) -> ServiceResult<ExpertiseResponse> {
		let snapshot = self.build_corpus().await?;

		Ok(ExpertiseResponse { users: snapshot.entries })
	}
}
