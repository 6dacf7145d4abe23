pub mod corpus;
pub mod expertise;
pub mod merge;
pub mod recommend;
pub mod summary;

use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

pub use corpus::CorpusSnapshot;
pub use expertise::ExpertiseResponse;
pub use merge::{AgentIdentity, Recommendation};
pub use recommend::Analysis;
pub use summary::TicketSummary;

use triage_config::{Config, ProviderConfig};
use triage_providers::relevance::{AgentCandidate, RelevanceReport};
use triage_storage::db::Db;

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait RelevanceOracle
where
	Self: Send + Sync,
{
	fn score<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		question: &'a str,
		top_n: u32,
		candidates: &'a [AgentCandidate],
	) -> BoxFuture<'a, triage_providers::Result<RelevanceReport>>;
}

pub trait SummaryOracle
where
	Self: Send + Sync,
{
	fn summarize<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, triage_providers::Result<String>>;
}

#[derive(Debug)]
pub enum ServiceError {
	NoAgentsAvailable,
	InvalidQuery { message: String },
	TicketNotFound { ticket_id: Uuid },
	OracleUnavailable { message: String, corpus: Vec<AgentCandidate> },
	OracleResponseMalformed { message: String, corpus: Vec<AgentCandidate> },
	Storage { message: String },
}

#[derive(Clone)]
pub struct Oracles {
	pub relevance: Arc<dyn RelevanceOracle>,
	pub summary: Arc<dyn SummaryOracle>,
}

pub struct TriageService {
	pub cfg: Config,
	pub db: Db,
	pub oracles: Oracles,
}

struct DefaultOracles;

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NoAgentsAvailable => {
				write!(f, "No support agents are available to recommend.")
			},
			Self::InvalidQuery { message } => write!(f, "Invalid query: {message}"),
			Self::TicketNotFound { ticket_id } => write!(f, "Ticket {ticket_id} was not found."),
			Self::OracleUnavailable { message, .. } => {
				write!(f, "Relevance oracle unavailable: {message}")
			},
			Self::OracleResponseMalformed { message, .. } => {
				write!(f, "Relevance oracle returned a malformed response: {message}")
			},
			Self::Storage { message } => write!(f, "Storage error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<triage_storage::Error> for ServiceError {
	fn from(err: triage_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl RelevanceOracle for DefaultOracles {
	fn score<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		question: &'a str,
		top_n: u32,
		candidates: &'a [AgentCandidate],
	) -> BoxFuture<'a, triage_providers::Result<RelevanceReport>> {
		Box::pin(triage_providers::relevance::score_candidates(cfg, question, top_n, candidates))
	}
}

impl SummaryOracle for DefaultOracles {
	fn summarize<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, triage_providers::Result<String>> {
		Box::pin(triage_providers::summary::summarize(cfg, text))
	}
}

impl Oracles {
	pub fn new(relevance: Arc<dyn RelevanceOracle>, summary: Arc<dyn SummaryOracle>) -> Self {
		Self { relevance, summary }
	}
}

impl Default for Oracles {
	fn default() -> Self {
		let oracle = Arc::new(DefaultOracles);

		Self { relevance: oracle.clone(), summary: oracle }
	}
}

impl TriageService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db, oracles: Oracles::default() }
	}

	pub fn with_oracles(cfg: Config, db: Db, oracles: Oracles) -> Self {
		Self { cfg, db, oracles }
	}
}

/// Oracle failures carry the corpus that was about to be scored.
pub(crate) fn oracle_error(
	err: triage_providers::Error,
	corpus: Vec<AgentCandidate>,
) -> ServiceError {
	match err {
		triage_providers::Error::MalformedResponse { message } => {
			ServiceError::OracleResponseMalformed { message, corpus }
		},
		err => ServiceError::OracleUnavailable { message: err.to_string(), corpus },
	}
}
