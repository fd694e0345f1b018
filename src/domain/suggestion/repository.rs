use super::errors::DomainError;
use super::value_objects::SearchTerm;
use async_trait::async_trait;

#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    /// Return up to `limit` product names matching the term, ordered
    /// ascending by name.
    async fn suggest(&self, term: &SearchTerm, limit: i64) -> Result<Vec<String>, DomainError>;
}
