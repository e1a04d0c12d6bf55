use axum::{
    extract::{Extension, Query},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::domains::places::listings;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Free-text place search backing the search page. A missing or blank
/// query returns an empty list rather than an error.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let places = listings::search_places(state.store.as_ref(), &query).await;
    Json(places).into_response()
}
