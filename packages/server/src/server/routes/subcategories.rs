use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};

use crate::domains::categories::resolver;
use crate::domains::places::listings;
use crate::server::app::AppState;

use super::not_found;

/// Single subcategory by slug with denormalized parent fields.
pub async fn get_subcategory_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match resolver::resolve_subcategory(state.store.as_ref(), &slug).await {
        Some(subcategory) => Json(subcategory).into_response(),
        None => not_found("Subcategory").into_response(),
    }
}

/// Places under a subcategory, rating descending.
pub async fn list_subcategory_places_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let places = listings::list_places_by_subcategory(state.store.as_ref(), &slug).await;
    Json(places).into_response()
}
