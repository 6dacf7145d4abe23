use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{AgentRecord, TicketRecord, TicketStatus},
};

const AGENT_COLUMNS: &str = "\
agent_id, name, email, role, expertise, skills, expertise_domain, solved_queries, created_at";

const TICKET_COLUMNS: &str = "\
ticket_id, title, description, status, assigned_to, created_at";

/// Profiles carrying the given role, newest first.
pub async fn agents_by_role(db: &Db, role: &str) -> Result<Vec<AgentRecord>> {
	let agents = sqlx::query_as::<_, AgentRecord>(&format!(
		"SELECT {AGENT_COLUMNS} FROM agents WHERE role = $1 ORDER BY created_at DESC"
	))
	.bind(role)
	.fetch_all(&db.pool)
	.await?;

	Ok(agents)
}

pub async fn agent_by_id(db: &Db, agent_id: Uuid) -> Result<Option<AgentRecord>> {
	let agent = sqlx::query_as::<_, AgentRecord>(&format!(
		"SELECT {AGENT_COLUMNS} FROM agents WHERE agent_id = $1"
	))
	.bind(agent_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(agent)
}

/// Resolved tickets that still reference an agent, oldest first. The fetch
/// order feeds corpus derivation, so it must be stable across calls.
pub async fn resolved_tickets(db: &Db) -> Result<Vec<TicketRecord>> {
	let tickets = sqlx::query_as::<_, TicketRecord>(&format!(
		"SELECT {TICKET_COLUMNS} FROM tickets \
		 WHERE status = $1 AND assigned_to IS NOT NULL \
		 ORDER BY created_at, ticket_id"
	))
	.bind(TicketStatus::Resolved.as_str())
	.fetch_all(&db.pool)
	.await?;

	Ok(tickets)
}

pub async fn ticket_by_id(db: &Db, ticket_id: Uuid) -> Result<Option<TicketRecord>> {
	let ticket = sqlx::query_as::<_, TicketRecord>(&format!(
		"SELECT {TICKET_COLUMNS} FROM tickets WHERE ticket_id = $1"
	))
	.bind(ticket_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(ticket)
}
