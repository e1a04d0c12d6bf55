//! Category and subcategory resolution.
//!
//! Exact slug lookups only - the permissive fallback chain exists solely for
//! places, whose stored slugs are unreliable. A miss here is a normal
//! `None`, rendered by the caller as a not-found page; a store failure is
//! logged and degrades to the same `None`.

use crate::kernel::{degrade_to_empty, BaseContentStore};

use super::models::{Category, Subcategory};

/// Exact slug lookup, then a second query for the transitive place count.
///
/// A failed count query degrades to zero rather than failing the whole
/// resolution.
pub async fn resolve_category(store: &dyn BaseContentStore, slug: &str) -> Option<Category> {
    let row = degrade_to_empty("category_by_slug", slug, store.category_by_slug(slug).await)?;
    let count = degrade_to_empty(
        "count_places_in_category",
        slug,
        store.count_places_in_category(row.id).await,
    );
    Some(Category::from_row(row, count))
}

/// Exact slug lookup with the parent category joined for the denormalized
/// display fields.
pub async fn resolve_subcategory(store: &dyn BaseContentStore, slug: &str) -> Option<Subcategory> {
    let row = degrade_to_empty(
        "subcategory_by_slug",
        slug,
        store.subcategory_by_slug(slug).await,
    )?;
    let count = degrade_to_empty(
        "count_places_in_subcategory",
        slug,
        store.count_places_in_subcategory(row.id).await,
    );
    Some(Subcategory::from_row(row, count))
}

/// All categories with place counts, in display order, for navigation and
/// the home grid. Store failure yields an empty list.
pub async fn list_categories(store: &dyn BaseContentStore) -> Vec<Category> {
    degrade_to_empty("list_categories", "", store.list_categories().await)
        .into_iter()
        .map(|row| Category::from_row(row.category, row.count))
        .collect()
}

/// Subcategories of one category with place counts, in display order.
pub async fn list_subcategories_by_category(
    store: &dyn BaseContentStore,
    category_slug: &str,
) -> Vec<Subcategory> {
    degrade_to_empty(
        "subcategories_by_category",
        category_slug,
        store.subcategories_by_category(category_slug).await,
    )
    .into_iter()
    .map(|row| Subcategory::from_row(row.subcategory, row.count))
    .collect()
}
