pub mod categories;
pub mod health;
pub mod places;
pub mod search;
pub mod sitemap;
pub mod subcategories;

pub use categories::{
    get_category_handler, list_categories_handler, list_category_places_handler,
    list_category_subcategories_handler,
};
pub use health::health_handler;
pub use places::{featured_places_handler, get_place_handler};
pub use search::search_handler;
pub use sitemap::sitemap_handler;
pub use subcategories::{get_subcategory_handler, list_subcategory_places_handler};

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Uniform 404 body for single-entity misses. The resolver layer already
/// logged anything diagnostic; this is purely presentation.
pub(crate) fn not_found(what: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": format!("{what} not found") })))
}
