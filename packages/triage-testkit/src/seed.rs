use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::Result;

/// Row builder for the agents table. `agent()` yields a support agent with no
/// expertise information; tests fill in what they exercise.
#[derive(Debug, Clone)]
pub struct AgentSeed {
	pub agent_id: Uuid,
	pub name: String,
	pub email: String,
	pub role: String,
	pub expertise: Vec<String>,
	pub skills: Vec<String>,
	pub expertise_domain: Option<String>,
	pub solved_queries: Vec<String>,
	pub created_at: OffsetDateTime,
}
impl AgentSeed {
	pub fn agent(name: &str) -> Self {
		Self {
			agent_id: Uuid::new_v4(),
			name: name.to_string(),
			email: format!("{}@example.test", name.to_lowercase().replace(' ', ".")),
			role: "Agent".to_string(),
			expertise: vec![],
			skills: vec![],
			expertise_domain: None,
			solved_queries: vec![],
			created_at: OffsetDateTime::now_utc(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct TicketSeed {
	pub ticket_id: Uuid,
	pub title: String,
	pub description: String,
	pub status: String,
	pub assigned_to: Option<Uuid>,
	pub created_at: OffsetDateTime,
}
impl TicketSeed {
	pub fn resolved(title: &str, description: &str, assigned_to: Uuid) -> Self {
		Self {
			ticket_id: Uuid::new_v4(),
			title: title.to_string(),
			description: description.to_string(),
			status: "Resolved".to_string(),
			assigned_to: Some(assigned_to),
			created_at: OffsetDateTime::now_utc(),
		}
	}
}

pub async fn seed_agent(pool: &PgPool, seed: &AgentSeed) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO agents (
	agent_id,
	name,
	email,
	role,
	expertise,
	skills,
	expertise_domain,
	solved_queries,
	created_at
)
VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)",
	)
	.bind(seed.agent_id)
	.bind(seed.name.as_str())
	.bind(seed.email.as_str())
	.bind(seed.role.as_str())
	.bind(seed.expertise.as_slice())
	.bind(seed.skills.as_slice())
	.bind(seed.expertise_domain.as_deref())
	.bind(seed.solved_queries.as_slice())
	.bind(seed.created_at)
	.execute(pool)
	.await?;

	Ok(())
}

pub async fn seed_ticket(pool: &PgPool, seed: &TicketSeed) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO tickets (
	ticket_id,
	title,
	description,
	status,
	assigned_to,
	created_at
)
VALUES ($1,$2,$3,$4,$5,$6)",
	)
	.bind(seed.ticket_id)
	.bind(seed.title.as_str())
	.bind(seed.description.as_str())
	.bind(seed.status.as_str())
	.bind(seed.assigned_to)
	.bind(seed.created_at)
	.execute(pool)
	.await?;

	Ok(())
}
