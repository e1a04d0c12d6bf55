use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};

use crate::domains::categories::resolver;
use crate::domains::places::listings;
use crate::server::app::AppState;

use super::not_found;

/// All categories with place counts, for navigation and the home grid.
pub async fn list_categories_handler(Extension(state): Extension<AppState>) -> Response {
    let categories = resolver::list_categories(state.store.as_ref()).await;
    Json(categories).into_response()
}

/// Single category by slug; 404 body when no row matches.
pub async fn get_category_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match resolver::resolve_category(state.store.as_ref(), &slug).await {
        Some(category) => Json(category).into_response(),
        None => not_found("Category").into_response(),
    }
}

/// Subcategories of one category. Unknown category yields an empty list,
/// matching the listing-layer contract ("no results" and "not found" look
/// the same on grids).
pub async fn list_category_subcategories_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let subcategories =
        resolver::list_subcategories_by_category(state.store.as_ref(), &slug).await;
    Json(subcategories).into_response()
}

/// Places under a category, rating descending.
pub async fn list_category_places_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let places = listings::list_places_by_category(state.store.as_ref(), &slug).await;
    Json(places).into_response()
}
