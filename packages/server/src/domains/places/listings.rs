//! Listing assemblers: collections of places normalized into the uniform
//! [`Place`] shape.
//!
//! Whatever join path produced the rows, every returned item carries a
//! non-empty `slug` (and non-empty `category_slug`/`subcategory_slug`
//! whenever the parent chain is intact) - downstream link-building assumes
//! it. Store errors are logged and produce an empty list: at this layer "no
//! results" and "query failed" are deliberately indistinguishable, since a
//! blank grid beats an error page on a listing view.

use std::collections::HashSet;

use crate::kernel::{degrade_to_empty, BaseContentStore};

use super::models::{Place, PlaceRow};

/// All places under a category, rating descending, unrated last.
pub async fn list_places_by_category(store: &dyn BaseContentStore, slug: &str) -> Vec<Place> {
    to_places(degrade_to_empty(
        "places_in_category",
        slug,
        store.places_in_category(slug).await,
    ))
}

/// All places under a subcategory, rating descending, unrated last.
pub async fn list_places_by_subcategory(store: &dyn BaseContentStore, slug: &str) -> Vec<Place> {
    to_places(degrade_to_empty(
        "places_in_subcategory",
        slug,
        store.places_in_subcategory(slug).await,
    ))
}

/// Top-rated places, optionally restricted to a category.
pub async fn list_featured_places(
    store: &dyn BaseContentStore,
    limit: i64,
    category_slug: Option<&str>,
) -> Vec<Place> {
    to_places(degrade_to_empty(
        "featured_places",
        category_slug.unwrap_or(""),
        store.featured_places(limit, category_slug).await,
    ))
}

/// Free-text search over place names and descriptions. Whitespace-only
/// queries short-circuit to an empty result.
pub async fn search_places(store: &dyn BaseContentStore, query: &str) -> Vec<Place> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    to_places(degrade_to_empty(
        "search_places",
        query,
        store.search_places(query).await,
    ))
}

/// Every routable path on the site, for the sitemap:
/// `/{category}`, `/{category}/{subcategory}`, and
/// `/{category}/{subcategory}/{place}`.
///
/// Entries with a broken parent chain are skipped (they have no routable
/// URL), and duplicates collapse while preserving first-seen order.
pub async fn routable_paths(store: &dyn BaseContentStore) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut push = |path: String, paths: &mut Vec<String>| {
        if seen.insert(path.clone()) {
            paths.push(path);
        }
    };

    for row in degrade_to_empty("list_categories", "", store.list_categories().await) {
        let category = crate::domains::categories::models::Category::from_row(row.category, row.count);
        push(format!("/{}", category.slug), &mut paths);
    }

    for row in degrade_to_empty("list_subcategories", "", store.list_subcategories().await) {
        let subcategory = crate::domains::categories::models::Subcategory::from_row(row, 0);
        if subcategory.category_slug.is_empty() {
            continue;
        }
        push(
            format!("/{}/{}", subcategory.category_slug, subcategory.slug),
            &mut paths,
        );
    }

    for row in degrade_to_empty("all_places", "", store.all_places().await) {
        let place = Place::from(row);
        if place.category_slug.is_empty() || place.subcategory_slug.is_empty() {
            continue;
        }
        push(
            format!(
                "/{}/{}/{}",
                place.category_slug, place.subcategory_slug, place.slug
            ),
            &mut paths,
        );
    }

    paths
}

fn to_places(rows: Vec<PlaceRow>) -> Vec<Place> {
    rows.into_iter().map(Place::from).collect()
}
