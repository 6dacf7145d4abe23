use uuid::Uuid;

use triage_domain::question;
use triage_providers::relevance::RelevanceReport;
use triage_storage::queries;

use crate::{Recommendation, ServiceError, ServiceResult, TriageService, merge, oracle_error};

/// The ranked result for one scoring request. `oracle` is the verdict as
/// delivered, kept for audit; `recommendations` is the identity-resolved,
/// re-sorted, truncated list assignment workflows consume.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Analysis {
	pub question: String,
	pub recommendations: Vec<Recommendation>,
	pub oracle: RelevanceReport,
}

impl TriageService {
	pub async fn recommend_agents(
		&self,
		question: &str,
		top_n: Option<i64>,
	) -> ServiceResult<Analysis> {
		let Some(question) = question::normalize_question(question) else {
			return Err(ServiceError::InvalidQuery {
				message: "Question text must be non-empty.".to_string(),
			});
		};
		let top_n = question::effective_top_n(top_n, self.cfg.matching.default_top_n);
		let snapshot = self.build_corpus().await?;
		let report = match self
			.oracles
			.relevance
			.score(&self.cfg.providers.relevance, &question, top_n, &snapshot.entries)
			.await
		{
			Ok(report) => report,
			Err(err) => return Err(oracle_error(err, snapshot.entries)),
		};
		let mut recommendations =
			merge::merge_recommendations(report.priority_users.clone(), &snapshot.directory);

		// The oracle was asked for top_n entries; enforce the limit ourselves
		// in case it did not honor the request parameter.
		recommendations.truncate(top_n as usize);

		Ok(Analysis { question, recommendations, oracle: report })
	}

	pub async fn recommend_for_ticket(
		&self,
		ticket_id: Uuid,
		top_n: Option<i64>,
	) -> ServiceResult<Analysis> {
		let ticket = queries::ticket_by_id(&self.db, ticket_id)
			.await?
			.ok_or(ServiceError::TicketNotFound { ticket_id })?;
		let question = question::ticket_question(&ticket.title, &ticket.description);

		self.recommend_agents(&question, top_n).await
	}
}
