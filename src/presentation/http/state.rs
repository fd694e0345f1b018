use crate::{config::Config, domain::suggestion::repository::SuggestionRepository};
use sqlx::MySqlPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub config: Config,
    pub suggestions: Arc<dyn SuggestionRepository>,
}
