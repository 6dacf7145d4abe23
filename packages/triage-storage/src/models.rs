use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AgentRecord {
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

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TicketRecord {
	pub ticket_id: Uuid,
	pub title: String,
	pub description: String,
	pub status: String,
	pub assigned_to: Option<Uuid>,
	pub created_at: OffsetDateTime,
}

/// Ticket lifecycle states. Stored as their display strings, matching the
/// values the helpdesk writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
	Open,
	InProgress,
	Resolved,
	Closed,
}
impl TicketStatus {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Open => "Open",
			Self::InProgress => "In Progress",
			Self::Resolved => "Resolved",
			Self::Closed => "Closed",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"Open" => Some(Self::Open),
			"In Progress" => Some(Self::InProgress),
			"Resolved" => Some(Self::Resolved),
			"Closed" => Some(Self::Closed),
			_ => None,
		}
	}
}
