use axum::{
    extract::Extension,
    http::header,
    response::{IntoResponse, Response},
};

use crate::domains::places::listings;
use crate::server::app::AppState;

/// Static URL list for crawlers, built from every routable slug path the
/// listing layer can produce.
pub async fn sitemap_handler(Extension(state): Extension<AppState>) -> Response {
    let paths = listings::routable_paths(state.store.as_ref()).await;
    let base = state.site_base_url.trim_end_matches('/');

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    xml.push_str(&format!("  <url><loc>{base}/</loc></url>\n"));
    for path in paths {
        xml.push_str(&format!("  <url><loc>{base}{path}</loc></url>\n"));
    }
    xml.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}
