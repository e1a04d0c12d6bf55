// InMemoryContentStore - Vec-backed store implementation for testing
//
// Implements BaseContentStore over plain tables so the resolver and list
// assemblers can be exercised without Postgres. Supports scripted failures
// (every call errors) for degradation tests and records the sequence of
// store calls so tests can assert fallback-stage ordering.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::common::{AmenityId, CategoryId, PlaceId, SubcategoryId};
use crate::domains::categories::models::{
    CategoryCountRow, CategoryRow, SubcategoryCountRow, SubcategoryRow,
};
use crate::domains::places::models::{Amenity, PlaceImage, PlaceRow, Review};
use crate::kernel::error::{StoreError, StoreResult};
use crate::kernel::traits::BaseContentStore;

#[derive(Default)]
struct Tables {
    categories: Vec<CategoryRow>,
    subcategories: Vec<SubcategoryRow>,
    places: Vec<PlaceRow>,
    images: Vec<PlaceImage>,
    amenities: Vec<Amenity>,
    place_amenities: Vec<(PlaceId, AmenityId)>,
    reviews: Vec<Review>,
}

/// In-memory content store for tests.
///
/// Rows are added through the `with_*` builder methods; join columns on
/// added `SubcategoryRow`/`PlaceRow` values (parent names/slugs, card
/// image, amenity names) are ignored and recomputed at query time from the
/// tables, matching what the SQL implementation produces.
#[derive(Default)]
pub struct InMemoryContentStore {
    tables: Mutex<Tables>,
    calls: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, row: CategoryRow) -> Self {
        self.tables.lock().unwrap().categories.push(row);
        self
    }

    pub fn with_subcategory(self, row: SubcategoryRow) -> Self {
        self.tables.lock().unwrap().subcategories.push(row);
        self
    }

    pub fn with_place(self, row: PlaceRow) -> Self {
        self.tables.lock().unwrap().places.push(row);
        self
    }

    pub fn with_image(self, row: PlaceImage) -> Self {
        self.tables.lock().unwrap().images.push(row);
        self
    }

    pub fn with_amenity(self, row: Amenity) -> Self {
        self.tables.lock().unwrap().amenities.push(row);
        self
    }

    pub fn with_place_amenity(self, place_id: PlaceId, amenity_id: AmenityId) -> Self {
        self.tables
            .lock()
            .unwrap()
            .place_amenities
            .push((place_id, amenity_id));
        self
    }

    pub fn with_review(self, row: Review) -> Self {
        self.tables.lock().unwrap().reviews.push(row);
        self
    }

    /// Script every subsequent store call to fail.
    pub fn failing(self) -> Self {
        self.fail.store(true, AtomicOrdering::SeqCst);
        self
    }

    /// Store method names in invocation order, for asserting the fallback
    /// chain's stage sequence.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn guard(&self, operation: &str) -> StoreResult<()> {
        self.calls.lock().unwrap().push(operation.to_string());
        if self.fail.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "scripted failure in {operation}"
            )));
        }
        Ok(())
    }

    /// Recompute the joined columns for a place row, the way PLACE_SELECT
    /// does in SQL.
    fn joined_place(tables: &Tables, place: &PlaceRow) -> PlaceRow {
        let sub = tables
            .subcategories
            .iter()
            .find(|s| s.id == place.subcategory_id);
        let cat = sub.and_then(|s| tables.categories.iter().find(|c| c.id == s.category_id));

        let mut row = place.clone();
        row.subcategory_name = sub.map(|s| s.name.clone());
        row.subcategory_slug = sub.map(|s| s.slug.clone());
        row.category_name = cat.map(|c| c.name.clone());
        row.category_slug = cat.map(|c| c.slug.clone());
        row.image_url = tables
            .images
            .iter()
            .filter(|i| i.place_id == place.id)
            .min_by_key(|i| {
                (
                    std::cmp::Reverse(i.is_main),
                    i.order_index.unwrap_or(i32::MAX),
                    i.id.as_i64(),
                )
            })
            .map(|i| i.image_url.clone());
        let mut names: Vec<String> = tables
            .place_amenities
            .iter()
            .filter(|(place_id, _)| *place_id == place.id)
            .filter_map(|(_, amenity_id)| {
                tables
                    .amenities
                    .iter()
                    .find(|a| a.id == *amenity_id)
                    .map(|a| a.name.clone())
            })
            .collect();
        names.sort();
        row.amenity_names = names;
        row
    }

    fn joined_subcategory(tables: &Tables, sub: &SubcategoryRow) -> SubcategoryRow {
        let cat = tables.categories.iter().find(|c| c.id == sub.category_id);
        let mut row = sub.clone();
        row.category_name = cat.map(|c| c.name.clone());
        row.category_slug = cat.map(|c| c.slug.clone());
        row
    }

    fn place_count_for_subcategory(tables: &Tables, id: SubcategoryId) -> i64 {
        tables
            .places
            .iter()
            .filter(|p| p.subcategory_id == id)
            .count() as i64
    }
}

/// Rating descending, unrated after all rated, ties in input order (stable
/// sort).
fn sort_by_rating_desc(rows: &mut [PlaceRow]) {
    rows.sort_by(|a, b| match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl BaseContentStore for InMemoryContentStore {
    async fn category_by_slug(&self, slug: &str) -> StoreResult<Option<CategoryRow>> {
        self.guard("category_by_slug")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn list_categories(&self) -> StoreResult<Vec<CategoryCountRow>> {
        self.guard("list_categories")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<CategoryCountRow> = tables
            .categories
            .iter()
            .map(|c| {
                let count = tables
                    .subcategories
                    .iter()
                    .filter(|s| s.category_id == c.id)
                    .map(|s| Self::place_count_for_subcategory(&tables, s.id))
                    .sum();
                CategoryCountRow {
                    category: c.clone(),
                    count,
                }
            })
            .collect();
        rows.sort_by_key(|r| {
            (
                r.category.order_index.unwrap_or(i32::MAX),
                r.category.name.clone(),
            )
        });
        Ok(rows)
    }

    async fn count_places_in_category(&self, id: CategoryId) -> StoreResult<i64> {
        self.guard("count_places_in_category")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .subcategories
            .iter()
            .filter(|s| s.category_id == id)
            .map(|s| Self::place_count_for_subcategory(&tables, s.id))
            .sum())
    }

    async fn subcategory_by_slug(&self, slug: &str) -> StoreResult<Option<SubcategoryRow>> {
        self.guard("subcategory_by_slug")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .subcategories
            .iter()
            .find(|s| s.slug == slug)
            .map(|s| Self::joined_subcategory(&tables, s)))
    }

    async fn subcategories_by_category(
        &self,
        category_slug: &str,
    ) -> StoreResult<Vec<SubcategoryCountRow>> {
        self.guard("subcategories_by_category")?;
        let tables = self.tables.lock().unwrap();
        let Some(category) = tables.categories.iter().find(|c| c.slug == category_slug) else {
            return Ok(vec![]);
        };
        let mut rows: Vec<SubcategoryCountRow> = tables
            .subcategories
            .iter()
            .filter(|s| s.category_id == category.id)
            .map(|s| SubcategoryCountRow {
                count: Self::place_count_for_subcategory(&tables, s.id),
                subcategory: Self::joined_subcategory(&tables, s),
            })
            .collect();
        rows.sort_by_key(|r| {
            (
                r.subcategory.order_index.unwrap_or(i32::MAX),
                r.subcategory.name.clone(),
            )
        });
        Ok(rows)
    }

    async fn list_subcategories(&self) -> StoreResult<Vec<SubcategoryRow>> {
        self.guard("list_subcategories")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .subcategories
            .iter()
            .map(|s| Self::joined_subcategory(&tables, s))
            .collect())
    }

    async fn count_places_in_subcategory(&self, id: SubcategoryId) -> StoreResult<i64> {
        self.guard("count_places_in_subcategory")?;
        let tables = self.tables.lock().unwrap();
        Ok(Self::place_count_for_subcategory(&tables, id))
    }

    async fn place_by_slug(&self, slug: &str) -> StoreResult<Option<PlaceRow>> {
        self.guard("place_by_slug")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .places
            .iter()
            .find(|p| p.slug.as_deref() == Some(slug))
            .map(|p| Self::joined_place(&tables, p)))
    }

    async fn place_by_name_exact(&self, candidates: &[String]) -> StoreResult<Option<PlaceRow>> {
        self.guard("place_by_name_exact")?;
        let tables = self.tables.lock().unwrap();
        let mut matches: Vec<&PlaceRow> = tables
            .places
            .iter()
            .filter(|p| {
                candidates
                    .iter()
                    .any(|c| p.name.to_lowercase() == c.to_lowercase())
            })
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches.first().map(|p| Self::joined_place(&tables, p)))
    }

    async fn fuzzy_name_search(&self, variants: &[String]) -> StoreResult<Vec<PlaceRow>> {
        self.guard("fuzzy_name_search")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<PlaceRow> = tables
            .places
            .iter()
            .filter(|p| variants.iter().any(|v| contains_ci(&p.name, v)))
            .map(|p| Self::joined_place(&tables, p))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn token_name_search(&self, tokens: &[String]) -> StoreResult<Vec<PlaceRow>> {
        self.guard("token_name_search")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<PlaceRow> = tables
            .places
            .iter()
            .filter(|p| tokens.iter().any(|t| contains_ci(&p.name, t)))
            .map(|p| Self::joined_place(&tables, p))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn places_in_category(&self, category_slug: &str) -> StoreResult<Vec<PlaceRow>> {
        self.guard("places_in_category")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<PlaceRow> = tables
            .places
            .iter()
            .map(|p| Self::joined_place(&tables, p))
            .filter(|p| p.category_slug.as_deref() == Some(category_slug))
            .collect();
        sort_by_rating_desc(&mut rows);
        Ok(rows)
    }

    async fn places_in_subcategory(&self, subcategory_slug: &str) -> StoreResult<Vec<PlaceRow>> {
        self.guard("places_in_subcategory")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<PlaceRow> = tables
            .places
            .iter()
            .map(|p| Self::joined_place(&tables, p))
            .filter(|p| p.subcategory_slug.as_deref() == Some(subcategory_slug))
            .collect();
        sort_by_rating_desc(&mut rows);
        Ok(rows)
    }

    async fn featured_places(
        &self,
        limit: i64,
        category_slug: Option<&str>,
    ) -> StoreResult<Vec<PlaceRow>> {
        self.guard("featured_places")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<PlaceRow> = tables
            .places
            .iter()
            .map(|p| Self::joined_place(&tables, p))
            .filter(|p| match category_slug {
                Some(slug) => p.category_slug.as_deref() == Some(slug),
                None => true,
            })
            .collect();
        sort_by_rating_desc(&mut rows);
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn search_places(&self, query: &str) -> StoreResult<Vec<PlaceRow>> {
        self.guard("search_places")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<PlaceRow> = tables
            .places
            .iter()
            .filter(|p| {
                contains_ci(&p.name, query)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| contains_ci(d, query))
            })
            .map(|p| Self::joined_place(&tables, p))
            .collect();
        sort_by_rating_desc(&mut rows);
        rows.truncate(50);
        Ok(rows)
    }

    async fn all_places(&self) -> StoreResult<Vec<PlaceRow>> {
        self.guard("all_places")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .places
            .iter()
            .map(|p| Self::joined_place(&tables, p))
            .collect())
    }

    async fn images_for_place(&self, id: PlaceId) -> StoreResult<Vec<PlaceImage>> {
        self.guard("images_for_place")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<PlaceImage> = tables
            .images
            .iter()
            .filter(|i| i.place_id == id)
            .cloned()
            .collect();
        rows.sort_by_key(|i| {
            (
                std::cmp::Reverse(i.is_main),
                i.order_index.unwrap_or(i32::MAX),
                i.id.as_i64(),
            )
        });
        Ok(rows)
    }

    async fn amenities_for_place(&self, id: PlaceId) -> StoreResult<Vec<Amenity>> {
        self.guard("amenities_for_place")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Amenity> = tables
            .place_amenities
            .iter()
            .filter(|(place_id, _)| *place_id == id)
            .filter_map(|(_, amenity_id)| {
                tables.amenities.iter().find(|a| a.id == *amenity_id).cloned()
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn reviews_for_place(&self, id: PlaceId) -> StoreResult<Vec<Review>> {
        self.guard("reviews_for_place")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Review> = tables
            .reviews
            .iter()
            .filter(|r| r.place_id == id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
