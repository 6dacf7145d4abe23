use std::sync::Arc;

use triage_service::TriageService;
use triage_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<TriageService>,
}
impl AppState {
	pub async fn new(config: triage_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = TriageService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
