use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use triage_providers::relevance::AgentCandidate;
use triage_service::{Analysis, ExpertiseResponse, ServiceError, TicketSummary};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/agents/expertise", post(expertise))
		.route("/v1/agents/priority-analysis", post(priority_analysis))
		.route("/v1/tickets/{ticket_id}/recommendations", get(ticket_recommendations))
		.route("/v1/tickets/{ticket_id}/summary", get(ticket_summary))
		.with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct PriorityAnalysisRequest {
	#[serde(default)]
	pub question: String,
	#[serde(default)]
	pub top_n: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TopNQuery {
	pub top_n: Option<i64>,
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn expertise(State(state): State<AppState>) -> Result<Json<ExpertiseResponse>, ApiError> {
	let response = state.service.expertise_corpus().await?;

	Ok(Json(response))
}

async fn priority_analysis(
	State(state): State<AppState>,
	Json(payload): Json<PriorityAnalysisRequest>,
) -> Result<Json<Analysis>, ApiError> {
	let analysis = state.service.recommend_agents(&payload.question, payload.top_n).await?;

	Ok(Json(analysis))
}

async fn ticket_recommendations(
	State(state): State<AppState>,
	Path(ticket_id): Path<Uuid>,
	Query(query): Query<TopNQuery>,
) -> Result<Json<Analysis>, ApiError> {
	let analysis = state.service.recommend_for_ticket(ticket_id, query.top_n).await?;

	Ok(Json(analysis))
}

async fn ticket_summary(
	State(state): State<AppState>,
	Path(ticket_id): Path<Uuid>,
) -> Result<Json<TicketSummary>, ApiError> {
	let summary = state.service.ticket_summary(ticket_id).await?;

	Ok(Json(summary))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	/// Populated on oracle failures with the corpus that was about to be
	/// scored; the assignment UI falls back to manual selection from it.
	available_agents: Option<Vec<AgentCandidate>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	available_agents: Option<Vec<AgentCandidate>>,
}

impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		available_agents: Option<Vec<AgentCandidate>>,
	) -> Self {
		Self {
			status,
			error_code: error_code.into(),
			message: message.into(),
			available_agents,
		}
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let message = err.to_string();

		match err {
			ServiceError::NoAgentsAvailable => {
				ApiError::new(StatusCode::NOT_FOUND, "no_agents_available", message, None)
			},
			ServiceError::InvalidQuery { .. } => {
				ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_query", message, None)
			},
			ServiceError::TicketNotFound { .. } => {
				ApiError::new(StatusCode::NOT_FOUND, "ticket_not_found", message, None)
			},
			ServiceError::OracleUnavailable { corpus, .. } => ApiError::new(
				StatusCode::BAD_GATEWAY,
				"oracle_unavailable",
				message,
				Some(corpus),
			),
			ServiceError::OracleResponseMalformed { corpus, .. } => ApiError::new(
				StatusCode::BAD_GATEWAY,
				"oracle_response_malformed",
				message,
				Some(corpus),
			),
			ServiceError::Storage { .. } => {
				ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "storage", message, None)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody {
			error_code: self.error_code,
			message: self.message,
			available_agents: self.available_agents,
		};

		(self.status, Json(body)).into_response()
	}
}
