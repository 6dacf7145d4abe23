use uuid::Uuid;

use triage_storage::queries;

use crate::{ServiceError, ServiceResult, TriageService, oracle_error};

#[derive(Debug, Clone, serde::Serialize)]
pub struct TicketSummary {
	pub ticket_id: Uuid,
	pub summary: String,
}

impl TriageService {
	pub async fn ticket_summary(&self, ticket_id: Uuid) -> ServiceResult<TicketSummary> {
		let ticket = queries::ticket_by_id(&self.db, ticket_id)
			.await?
			.ok_or(ServiceError::TicketNotFound { ticket_id })?;
		let text = format!(
			"Title: {}\nDescription: {}\nStatus: {}",
			ticket.title, ticket.description, ticket.status,
		);
		let summary = self
			.oracles
			.summary
			.summarize(&self.cfg.providers.summary, &text)
			.await
			.map_err(|err| oracle_error(err, vec![]))?;

		Ok(TicketSummary { ticket_id, summary })
	}
}
