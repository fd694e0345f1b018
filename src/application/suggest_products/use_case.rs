use super::dto::SuggestionRequest;
use crate::domain::suggestion::{
    errors::DomainError, repository::SuggestionRepository, value_objects::SearchTerm,
};
use std::sync::Arc;

/// Maximum number of suggestions returned per request.
pub const SUGGESTIONS_LIMIT: i64 = 10;

pub struct SuggestProductsUseCase {
    repository: Arc<dyn SuggestionRepository>,
}

impl SuggestProductsUseCase {
    pub fn new(repository: Arc<dyn SuggestionRepository>) -> Self {
        Self { repository }
    }

    /// Produce suggestions for a raw query string.
    ///
    /// Input that does not survive sanitization (empty after trim, outside
    /// the length bounds, or operators only) is answered with an empty list
    /// without touching the repository. Repository failures propagate to the
    /// caller.
    pub async fn execute(&self, request: SuggestionRequest) -> Result<Vec<String>, DomainError> {
        let Some(term) = SearchTerm::parse(&request.query) else {
            return Ok(Vec::new());
        };
        self.repository.suggest(&term, SUGGESTIONS_LIMIT).await
    }
}
