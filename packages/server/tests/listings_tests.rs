//! Integration tests for the list assemblers over the in-memory store:
//! ordering, slug invariants, search, sitemap paths, and degradation.

mod common;

use crate::common::{category, dining_store, place, rated_place, subcategory};
use directory_core::domains::categories::resolver::{
    list_categories, list_subcategories_by_category,
};
use directory_core::domains::places::listings::{
    list_featured_places, list_places_by_category, list_places_by_subcategory, routable_paths,
    search_places,
};
use directory_core::kernel::InMemoryContentStore;

// =============================================================================
// Ordering
// =============================================================================

/// Featured listing returns the top N by rating, descending.
#[tokio::test]
async fn featured_returns_top_rated_descending() {
    let store = dining_store()
        .with_place(rated_place(1, 10, "One Star", Some("one-star"), 1.0))
        .with_place(rated_place(2, 10, "Five Star", Some("five-star"), 5.0))
        .with_place(rated_place(3, 10, "Three Star", Some("three-star"), 3.0))
        .with_place(rated_place(4, 10, "Four Star", Some("four-star"), 4.0))
        .with_place(rated_place(5, 10, "Two Star", Some("two-star"), 2.0));

    let top = list_featured_places(&store, 3, None).await;
    let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Five Star", "Four Star", "Three Star"]);
}

/// Rating ties keep their original relative order (stable sort).
#[tokio::test]
async fn featured_is_stable_on_rating_ties() {
    let store = dining_store()
        .with_place(rated_place(1, 10, "First Added", Some("first-added"), 4.0))
        .with_place(rated_place(2, 10, "Second Added", Some("second-added"), 4.0))
        .with_place(rated_place(3, 10, "Third Added", Some("third-added"), 4.0));

    let top = list_featured_places(&store, 3, None).await;
    let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First Added", "Second Added", "Third Added"]);
}

/// Unrated places sort after all rated ones, not as rating zero.
#[tokio::test]
async fn unrated_places_sort_last() {
    let store = dining_store()
        .with_place(place(1, 10, "No Rating", Some("no-rating")))
        .with_place(rated_place(2, 10, "Low Rating", Some("low-rating"), 0.5));

    let places = list_places_by_category(&store, "dining").await;
    let names: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Low Rating", "No Rating"]);
}

/// The category restriction on the featured listing filters by slug.
#[tokio::test]
async fn featured_respects_category_restriction() {
    let store = dining_store()
        .with_category(category(2, "Attractions", "attractions"))
        .with_subcategory(subcategory(20, 2, "Museums", "museums"))
        .with_place(rated_place(1, 10, "A Restaurant", Some("a-restaurant"), 4.0))
        .with_place(rated_place(2, 20, "A Museum", Some("a-museum"), 5.0));

    let featured = list_featured_places(&store, 10, Some("dining")).await;
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].name, "A Restaurant");
}

// =============================================================================
// Slug invariants
// =============================================================================

/// Every item from every listing operation carries non-empty, routable
/// slugs, even when storage holds NULL or exporter junk.
#[tokio::test]
async fn listing_slugs_are_always_routable() {
    let store = dining_store()
        .with_place(place(1, 10, "Missing Slug Diner", None))
        .with_place(place(2, 10, "Junk Slug Cafe", Some("undefined")))
        .with_place(place(3, 10, "Null Slug Bar", Some("null")))
        .with_place(rated_place(4, 10, "Fine Place", Some("fine-place"), 4.2));

    let by_category = list_places_by_category(&store, "dining").await;
    let by_subcategory = list_places_by_subcategory(&store, "american").await;
    let featured = list_featured_places(&store, 10, None).await;

    for place in by_category.iter().chain(&by_subcategory).chain(&featured) {
        for slug in [&place.slug, &place.category_slug, &place.subcategory_slug] {
            assert!(!slug.is_empty(), "{} has an empty slug", place.name);
            assert!(
                !slug.contains("undefined") && !slug.contains("null"),
                "{} has junk slug {slug}",
                place.name
            );
        }
    }

    // the regenerated slugs are deterministic re-slugifications of the name
    assert_eq!(by_category.iter().find(|p| p.name == "Junk Slug Cafe").unwrap().slug, "junk-slug-cafe");
    assert_eq!(by_category.iter().find(|p| p.name == "Missing Slug Diner").unwrap().slug, "missing-slug-diner");
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn search_matches_name_and_description() {
    let mut described = place(1, 10, "Quiet Corner", Some("quiet-corner"));
    described.description = Some("Best half-smoke sausage in the city".to_string());
    let store = dining_store()
        .with_place(described)
        .with_place(place(2, 10, "Half-Smoke House", Some("half-smoke-house")));

    let by_name = search_places(&store, "half-smoke").await;
    assert_eq!(by_name.len(), 2);

    let by_description = search_places(&store, "sausage").await;
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "Quiet Corner");
}

#[tokio::test]
async fn search_trims_and_rejects_blank_queries() {
    let store = dining_store().with_place(place(1, 10, "Old Ebbitt Grill", Some("old-ebbitt-grill")));

    assert!(search_places(&store, "").await.is_empty());
    assert!(search_places(&store, "   ").await.is_empty());

    let trimmed = search_places(&store, "  ebbitt  ").await;
    assert_eq!(trimmed.len(), 1);
}

// =============================================================================
// Category listings
// =============================================================================

#[tokio::test]
async fn lists_categories_with_counts() {
    let store = dining_store()
        .with_category(category(2, "Attractions", "attractions"))
        .with_subcategory(subcategory(20, 2, "Museums", "museums"))
        .with_place(place(1, 10, "A Restaurant", Some("a-restaurant")))
        .with_place(place(2, 10, "Another Restaurant", Some("another-restaurant")))
        .with_place(place(3, 20, "A Museum", Some("a-museum")));

    let categories = list_categories(&store).await;
    assert_eq!(categories.len(), 2);
    let dining = categories.iter().find(|c| c.slug == "dining").unwrap();
    assert_eq!(dining.count, 2);
    let attractions = categories.iter().find(|c| c.slug == "attractions").unwrap();
    assert_eq!(attractions.count, 1);
}

#[tokio::test]
async fn lists_subcategories_with_parent_fields() {
    let store = dining_store()
        .with_subcategory(subcategory(11, 1, "Seafood", "seafood"))
        .with_place(place(1, 11, "Hank's Oyster Bar", Some("hanks-oyster-bar")));

    let subs = list_subcategories_by_category(&store, "dining").await;
    assert_eq!(subs.len(), 2);
    for sub in &subs {
        assert_eq!(sub.category_name, "Dining");
        assert_eq!(sub.category_slug, "dining");
    }
    let seafood = subs.iter().find(|s| s.slug == "seafood").unwrap();
    assert_eq!(seafood.count, 1);
}

// =============================================================================
// Sitemap paths
// =============================================================================

#[tokio::test]
async fn routable_paths_cover_the_full_hierarchy() {
    let store = dining_store()
        .with_place(place(1, 10, "Old Ebbitt Grill", Some("old-ebbitt-grill")))
        // broken chain: no routable URL, skipped
        .with_place(place(2, 999, "Orphaned Diner", Some("orphaned-diner")));

    let paths = routable_paths(&store).await;
    assert!(paths.contains(&"/dining".to_string()));
    assert!(paths.contains(&"/dining/american".to_string()));
    assert!(paths.contains(&"/dining/american/old-ebbitt-grill".to_string()));
    assert!(!paths.iter().any(|p| p.contains("orphaned-diner")));

    // no duplicates
    let mut deduped = paths.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), paths.len());
}

// =============================================================================
// Degradation
// =============================================================================

/// Store failures produce empty lists: a listing view renders an empty
/// grid, never an error page.
#[tokio::test]
async fn failing_store_yields_empty_lists() {
    let store = InMemoryContentStore::new().failing();

    assert!(list_places_by_category(&store, "dining").await.is_empty());
    assert!(list_places_by_subcategory(&store, "american").await.is_empty());
    assert!(list_featured_places(&store, 5, None).await.is_empty());
    assert!(search_places(&store, "grill").await.is_empty());
    assert!(list_categories(&store).await.is_empty());
    assert!(list_subcategories_by_category(&store, "dining").await.is_empty());
    assert!(routable_paths(&store).await.is_empty());
}
