use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::{
    application::suggest_products::{dto::SuggestionRequest, use_case::SuggestProductsUseCase},
    presentation::http::{errors::AppError, state::AppState},
};

#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    query: Option<String>,
}

/// `GET /api/search/autocomplete?query=...`
///
/// A missing or structurally invalid `query` parameter (duplicated keys,
/// array syntax) is a 400 with a fixed body. Queries that are merely too
/// short, too long, or operator-only come back as `200 []`; the distinction
/// keeps client UX quiet while the user is still typing.
pub async fn autocomplete(
    State(state): State<AppState>,
    params: Result<Query<AutocompleteParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let query = params
        .ok()
        .and_then(|Query(p)| p.query)
        .ok_or_else(|| AppError::BadRequest("Invalid search query provided.".into()))?;

    let use_case = SuggestProductsUseCase::new(state.suggestions.clone());
    let suggestions = use_case.execute(SuggestionRequest { query }).await?;
    Ok(Json(suggestions))
}
