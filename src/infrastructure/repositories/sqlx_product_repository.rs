use crate::domain::suggestion::{
    errors::DomainError, repository::SuggestionRepository, value_objects::SearchTerm,
};
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

/// MySQL-backed suggestion lookup over the externally owned `products` table.
///
/// The table carries a full-text index on `name`; the query runs in boolean
/// mode so the trailing wildcard on the term requests prefix matches. Both
/// the term and the row limit are bound parameters.
pub struct SqlxProductRepository {
    pool: MySqlPool,
}

impl SqlxProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SuggestionRepository for SqlxProductRepository {
    async fn suggest(&self, term: &SearchTerm, limit: i64) -> Result<Vec<String>, DomainError> {
        let fulltext_term = term.fulltext_term();
        debug!("Running boolean mode suggestion query for '{}'", fulltext_term);

        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT name
               FROM products
               WHERE MATCH(name) AGAINST(? IN BOOLEAN MODE)
               ORDER BY name ASC
               LIMIT ?"#,
        )
        .bind(&fulltext_term)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        Ok(names)
    }
}
