// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no resolution logic. The fallback
// chain, slug repair and view-model assembly live in the domain layer and
// compose these row-level reads.
//
// Naming convention: Base* for trait names (e.g., BaseContentStore)

use async_trait::async_trait;

use crate::common::{CategoryId, PlaceId, SubcategoryId};
use crate::domains::categories::models::{
    CategoryCountRow, CategoryRow, SubcategoryCountRow, SubcategoryRow,
};
use crate::domains::places::models::{Amenity, PlaceImage, PlaceRow, Review};
use crate::kernel::error::StoreResult;

/// Read-only access to the content schema.
///
/// One implementation talks to Postgres ([`super::PgContentStore`]); the
/// in-memory one ([`super::InMemoryContentStore`]) backs the test suites.
/// All methods return raw rows; slug repair and denormalization policy is
/// the caller's job.
#[async_trait]
pub trait BaseContentStore: Send + Sync {
    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// Exact slug lookup.
    async fn category_by_slug(&self, slug: &str) -> StoreResult<Option<CategoryRow>>;

    /// All categories with transitive place counts, in display order.
    async fn list_categories(&self) -> StoreResult<Vec<CategoryCountRow>>;

    /// Count places transitively under a category (via its subcategories).
    async fn count_places_in_category(&self, id: CategoryId) -> StoreResult<i64>;

    // ------------------------------------------------------------------
    // Subcategories
    // ------------------------------------------------------------------

    /// Exact slug lookup with the parent category joined in.
    async fn subcategory_by_slug(&self, slug: &str) -> StoreResult<Option<SubcategoryRow>>;

    /// Subcategories of one category with place counts, in display order.
    async fn subcategories_by_category(
        &self,
        category_slug: &str,
    ) -> StoreResult<Vec<SubcategoryCountRow>>;

    /// Every subcategory with its parent joined (sitemap traversal).
    async fn list_subcategories(&self) -> StoreResult<Vec<SubcategoryRow>>;

    /// Count places directly under a subcategory.
    async fn count_places_in_subcategory(&self, id: SubcategoryId) -> StoreResult<i64>;

    // ------------------------------------------------------------------
    // Places - fallback-chain lookups
    // ------------------------------------------------------------------

    /// Stage 1: exact stored-slug match.
    async fn place_by_slug(&self, slug: &str) -> StoreResult<Option<PlaceRow>>;

    /// Stage 2: case-insensitive exact name match against any candidate,
    /// first by name when several match.
    async fn place_by_name_exact(&self, candidates: &[String]) -> StoreResult<Option<PlaceRow>>;

    /// Stage 3 seam: rows whose name contains any variant as a
    /// case-insensitive substring, ordered by name. Isolated here so the
    /// matching strategy (substring vs. trigram similarity) can be swapped
    /// without touching the fallback control flow.
    async fn fuzzy_name_search(&self, variants: &[String]) -> StoreResult<Vec<PlaceRow>>;

    /// Stage 4 seam: rows whose name contains any single token, ordered by
    /// name.
    async fn token_name_search(&self, tokens: &[String]) -> StoreResult<Vec<PlaceRow>>;

    // ------------------------------------------------------------------
    // Places - listings
    // ------------------------------------------------------------------

    /// Places under a category, rating descending (unrated last).
    async fn places_in_category(&self, category_slug: &str) -> StoreResult<Vec<PlaceRow>>;

    /// Places under a subcategory, rating descending (unrated last).
    async fn places_in_subcategory(&self, subcategory_slug: &str) -> StoreResult<Vec<PlaceRow>>;

    /// Top-rated places, optionally restricted to one category.
    async fn featured_places(
        &self,
        limit: i64,
        category_slug: Option<&str>,
    ) -> StoreResult<Vec<PlaceRow>>;

    /// Free-text search over name and description.
    async fn search_places(&self, query: &str) -> StoreResult<Vec<PlaceRow>>;

    /// Every place with its parent chain joined (sitemap traversal).
    async fn all_places(&self) -> StoreResult<Vec<PlaceRow>>;

    // ------------------------------------------------------------------
    // Place children
    // ------------------------------------------------------------------

    /// Images for a place, main image first, then gallery order.
    async fn images_for_place(&self, id: PlaceId) -> StoreResult<Vec<PlaceImage>>;

    /// Amenities for a place via the join table, ordered by name.
    async fn amenities_for_place(&self, id: PlaceId) -> StoreResult<Vec<Amenity>>;

    /// Reviews for a place, newest first.
    async fn reviews_for_place(&self, id: PlaceId) -> StoreResult<Vec<Review>>;
}
