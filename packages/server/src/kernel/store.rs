//! Postgres implementation of the content store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{CategoryId, PlaceId, SubcategoryId};
use crate::domains::categories::models::{
    CategoryCountRow, CategoryRow, SubcategoryCountRow, SubcategoryRow,
};
use crate::domains::places::models::{Amenity, PlaceImage, PlaceRow, Review};
use crate::kernel::error::StoreResult;
use crate::kernel::traits::BaseContentStore;

/// Shared SELECT for place rows: parent chain LEFT JOINed (so a broken
/// chain decodes as NULLs instead of dropping the row), card image and
/// amenity names pulled in alongside.
const PLACE_SELECT: &str = r#"
    SELECT p.id, p.name, p.description, p.address, p.phone, p.website,
           p.rating, p.reviews_count, p.price_range, p.gps_coordinates,
           p.subcategory_id, p.slug,
           p.hours_monday, p.hours_tuesday, p.hours_wednesday,
           p.hours_thursday, p.hours_friday, p.hours_saturday, p.hours_sunday,
           s.name AS subcategory_name, s.slug AS subcategory_slug,
           c.name AS category_name, c.slug AS category_slug,
           (SELECT pi.image_url FROM place_images pi
             WHERE pi.place_id = p.id
             ORDER BY pi.is_main DESC, pi.order_index NULLS LAST, pi.id
             LIMIT 1) AS image_url,
           ARRAY(SELECT a.name FROM amenities a
                  JOIN place_amenities pa ON pa.amenity_id = a.id
                 WHERE pa.place_id = p.id
                 ORDER BY a.name) AS amenity_names
      FROM places p
      LEFT JOIN subcategories s ON s.id = p.subcategory_id
      LEFT JOIN categories c ON c.id = s.category_id
"#;

/// Content store backed by the Postgres schema in `migrations/`.
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn place_rows(&self, where_order: &str) -> StoreResult<Vec<PlaceRow>> {
        let sql = format!("{PLACE_SELECT} {where_order}");
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl BaseContentStore for PgContentStore {
    async fn category_by_slug(&self, slug: &str) -> StoreResult<Option<CategoryRow>> {
        Ok(sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description, slug, image_url, order_index
               FROM categories WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_categories(&self) -> StoreResult<Vec<CategoryCountRow>> {
        Ok(sqlx::query_as::<_, CategoryCountRow>(
            r#"
            SELECT c.id, c.name, c.description, c.slug, c.image_url, c.order_index,
                   COALESCE(cnt.count, 0) AS count
              FROM categories c
              LEFT JOIN (
                    SELECT s.category_id, COUNT(*) AS count
                      FROM places p
                      JOIN subcategories s ON s.id = p.subcategory_id
                     GROUP BY s.category_id
                   ) cnt ON cnt.category_id = c.id
             ORDER BY c.order_index NULLS LAST, c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn count_places_in_category(&self, id: CategoryId) -> StoreResult<i64> {
        Ok(sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
              FROM places p
              JOIN subcategories s ON s.id = p.subcategory_id
             WHERE s.category_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn subcategory_by_slug(&self, slug: &str) -> StoreResult<Option<SubcategoryRow>> {
        Ok(sqlx::query_as::<_, SubcategoryRow>(
            r#"
            SELECT s.id, s.name, s.description, s.category_id, s.slug,
                   s.image_url, s.order_index,
                   c.name AS category_name, c.slug AS category_slug
              FROM subcategories s
              LEFT JOIN categories c ON c.id = s.category_id
             WHERE s.slug = $1
             LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn subcategories_by_category(
        &self,
        category_slug: &str,
    ) -> StoreResult<Vec<SubcategoryCountRow>> {
        Ok(sqlx::query_as::<_, SubcategoryCountRow>(
            r#"
            SELECT s.id, s.name, s.description, s.category_id, s.slug,
                   s.image_url, s.order_index,
                   c.name AS category_name, c.slug AS category_slug,
                   COALESCE(cnt.count, 0) AS count
              FROM subcategories s
              JOIN categories c ON c.id = s.category_id
              LEFT JOIN (
                    SELECT subcategory_id, COUNT(*) AS count
                      FROM places GROUP BY subcategory_id
                   ) cnt ON cnt.subcategory_id = s.id
             WHERE c.slug = $1
             ORDER BY s.order_index NULLS LAST, s.name
            "#,
        )
        .bind(category_slug)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_subcategories(&self) -> StoreResult<Vec<SubcategoryRow>> {
        Ok(sqlx::query_as::<_, SubcategoryRow>(
            r#"
            SELECT s.id, s.name, s.description, s.category_id, s.slug,
                   s.image_url, s.order_index,
                   c.name AS category_name, c.slug AS category_slug
              FROM subcategories s
              LEFT JOIN categories c ON c.id = s.category_id
             ORDER BY s.category_id, s.order_index NULLS LAST, s.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn count_places_in_subcategory(&self, id: SubcategoryId) -> StoreResult<i64> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM places WHERE subcategory_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?,
        )
    }

    async fn place_by_slug(&self, slug: &str) -> StoreResult<Option<PlaceRow>> {
        let sql = format!("{PLACE_SELECT} WHERE p.slug = $1 LIMIT 1");
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn place_by_name_exact(&self, candidates: &[String]) -> StoreResult<Option<PlaceRow>> {
        let lowered: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();
        let sql = format!("{PLACE_SELECT} WHERE lower(p.name) = ANY($1) ORDER BY p.name LIMIT 1");
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(&lowered)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn fuzzy_name_search(&self, variants: &[String]) -> StoreResult<Vec<PlaceRow>> {
        let patterns: Vec<String> = variants.iter().map(|v| format!("%{v}%")).collect();
        let sql = format!("{PLACE_SELECT} WHERE p.name ILIKE ANY($1) ORDER BY p.name");
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(&patterns)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn token_name_search(&self, tokens: &[String]) -> StoreResult<Vec<PlaceRow>> {
        let patterns: Vec<String> = tokens.iter().map(|t| format!("%{t}%")).collect();
        let sql = format!("{PLACE_SELECT} WHERE p.name ILIKE ANY($1) ORDER BY p.name");
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(&patterns)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn places_in_category(&self, category_slug: &str) -> StoreResult<Vec<PlaceRow>> {
        let sql = format!(
            "{PLACE_SELECT} WHERE c.slug = $1 ORDER BY p.rating DESC NULLS LAST, p.id"
        );
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(category_slug)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn places_in_subcategory(&self, subcategory_slug: &str) -> StoreResult<Vec<PlaceRow>> {
        let sql = format!(
            "{PLACE_SELECT} WHERE s.slug = $1 ORDER BY p.rating DESC NULLS LAST, p.id"
        );
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(subcategory_slug)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn featured_places(
        &self,
        limit: i64,
        category_slug: Option<&str>,
    ) -> StoreResult<Vec<PlaceRow>> {
        let sql = format!(
            "{PLACE_SELECT}
             WHERE ($2::text IS NULL OR c.slug = $2)
             ORDER BY p.rating DESC NULLS LAST, p.id
             LIMIT $1"
        );
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(limit)
            .bind(category_slug)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn search_places(&self, query: &str) -> StoreResult<Vec<PlaceRow>> {
        let sql = format!(
            "{PLACE_SELECT}
             WHERE p.name ILIKE $1 OR p.description ILIKE $1
             ORDER BY p.rating DESC NULLS LAST, p.name
             LIMIT 50"
        );
        Ok(sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(format!("%{query}%"))
            .fetch_all(&self.pool)
            .await?)
    }

    async fn all_places(&self) -> StoreResult<Vec<PlaceRow>> {
        self.place_rows("ORDER BY p.id").await
    }

    async fn images_for_place(&self, id: PlaceId) -> StoreResult<Vec<PlaceImage>> {
        Ok(sqlx::query_as::<_, PlaceImage>(
            r#"
            SELECT id, place_id, image_url, alt_text, is_main, order_index
              FROM place_images
             WHERE place_id = $1
             ORDER BY is_main DESC, order_index NULLS LAST, id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn amenities_for_place(&self, id: PlaceId) -> StoreResult<Vec<Amenity>> {
        Ok(sqlx::query_as::<_, Amenity>(
            r#"
            SELECT a.id, a.name, a.icon
              FROM amenities a
              JOIN place_amenities pa ON pa.amenity_id = a.id
             WHERE pa.place_id = $1
             ORDER BY a.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn reviews_for_place(&self, id: PlaceId) -> StoreResult<Vec<Review>> {
        Ok(sqlx::query_as::<_, Review>(
            r#"
            SELECT id, place_id, rating, content, author, created_at
              FROM reviews
             WHERE place_id = $1
             ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?)
    }
}
