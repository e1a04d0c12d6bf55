use axum::{
    extract::{Extension, Path, Query},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::domains::places::{listings, resolver};
use crate::server::app::AppState;

use super::not_found;

/// Query parameters for the featured listing.
#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<i64>,
    pub category: Option<String>,
}

const DEFAULT_FEATURED_LIMIT: i64 = 12;
const MAX_FEATURED_LIMIT: i64 = 100;

/// Top-rated places, optionally within one category.
pub async fn featured_places_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Response {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
        .clamp(1, MAX_FEATURED_LIMIT);
    let places =
        listings::list_featured_places(state.store.as_ref(), limit, params.category.as_deref())
            .await;
    Json(places).into_response()
}

/// Fully assembled place detail via the fallback-chain resolver; 404 body
/// after all stages miss.
pub async fn get_place_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match resolver::resolve_place(state.store.as_ref(), &slug).await {
        Some(details) => Json(details).into_response(),
        None => not_found("Place").into_response(),
    }
}
