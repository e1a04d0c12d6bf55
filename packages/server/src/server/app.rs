//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::Method,
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::{BaseContentStore, PgContentStore};
use crate::server::routes::{
    featured_places_handler, get_category_handler, get_place_handler, get_subcategory_handler,
    health_handler, list_categories_handler, list_category_places_handler,
    list_category_subcategories_handler, list_subcategory_places_handler, search_handler,
    sitemap_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub store: Arc<dyn BaseContentStore>,
    pub site_base_url: String,
}

/// Build the Axum application router.
///
/// The content store is constructed here and injected as a trait object so
/// route handlers (and tests) never touch the pool directly except for the
/// health check.
pub fn build_app(pool: PgPool, site_base_url: String) -> Router {
    let store: Arc<dyn BaseContentStore> = Arc::new(PgContentStore::new(pool.clone()));
    let state = AppState {
        db_pool: pool,
        store,
        site_base_url,
    };

    // Public read-only API: GET only, open CORS.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/categories", get(list_categories_handler))
        .route("/api/categories/:slug", get(get_category_handler))
        .route(
            "/api/categories/:slug/subcategories",
            get(list_category_subcategories_handler),
        )
        .route(
            "/api/categories/:slug/places",
            get(list_category_places_handler),
        )
        .route("/api/subcategories/:slug", get(get_subcategory_handler))
        .route(
            "/api/subcategories/:slug/places",
            get(list_subcategory_places_handler),
        )
        .route("/api/places/featured", get(featured_places_handler))
        .route("/api/places/:slug", get(get_place_handler))
        .route("/api/search", get(search_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .layer(Extension(state))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
