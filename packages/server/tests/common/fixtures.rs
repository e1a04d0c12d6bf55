//! Row fixtures for driving the in-memory content store.
//!
//! Joined columns (parent names/slugs, card image, amenity names) are left
//! unset; the store recomputes them at query time.

use chrono::{TimeZone, Utc};
use directory_core::common::{
    AmenityId, CategoryId, ImageId, PlaceId, ReviewId, SubcategoryId,
};
use directory_core::domains::categories::models::{CategoryRow, SubcategoryRow};
use directory_core::domains::places::models::{Amenity, PlaceImage, PlaceRow, Review};
use directory_core::kernel::InMemoryContentStore;

pub fn category(id: i64, name: &str, slug: &str) -> CategoryRow {
    CategoryRow {
        id: CategoryId::from_i64(id),
        name: name.to_string(),
        description: None,
        slug: slug.to_string(),
        image_url: None,
        order_index: None,
    }
}

pub fn subcategory(id: i64, category_id: i64, name: &str, slug: &str) -> SubcategoryRow {
    SubcategoryRow {
        id: SubcategoryId::from_i64(id),
        name: name.to_string(),
        description: None,
        category_id: CategoryId::from_i64(category_id),
        slug: slug.to_string(),
        image_url: None,
        order_index: None,
        category_name: None,
        category_slug: None,
    }
}

pub fn place(id: i64, subcategory_id: i64, name: &str, slug: Option<&str>) -> PlaceRow {
    PlaceRow {
        id: PlaceId::from_i64(id),
        name: name.to_string(),
        description: None,
        address: None,
        phone: None,
        website: None,
        rating: None,
        reviews_count: None,
        price_range: None,
        gps_coordinates: None,
        subcategory_id: SubcategoryId::from_i64(subcategory_id),
        slug: slug.map(str::to_string),
        hours_monday: None,
        hours_tuesday: None,
        hours_wednesday: None,
        hours_thursday: None,
        hours_friday: None,
        hours_saturday: None,
        hours_sunday: None,
        subcategory_name: None,
        subcategory_slug: None,
        category_name: None,
        category_slug: None,
        image_url: None,
        amenity_names: vec![],
    }
}

pub fn rated_place(
    id: i64,
    subcategory_id: i64,
    name: &str,
    slug: Option<&str>,
    rating: f64,
) -> PlaceRow {
    let mut row = place(id, subcategory_id, name, slug);
    row.rating = Some(rating);
    row
}

pub fn image(id: i64, place_id: i64, url: &str, is_main: bool, order_index: i32) -> PlaceImage {
    PlaceImage {
        id: ImageId::from_i64(id),
        place_id: PlaceId::from_i64(place_id),
        image_url: url.to_string(),
        alt_text: None,
        is_main,
        order_index: Some(order_index),
    }
}

pub fn amenity(id: i64, name: &str, icon: &str) -> Amenity {
    Amenity {
        id: AmenityId::from_i64(id),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

pub fn review(id: i64, place_id: i64, rating: f64, content: &str, day: u32) -> Review {
    Review {
        id: ReviewId::from_i64(id),
        place_id: PlaceId::from_i64(place_id),
        rating,
        content: content.to_string(),
        author: None,
        created_at: Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
    }
}

/// A store seeded with a minimal dining hierarchy:
/// Dining (id 1, slug `dining`) -> American (id 10, slug `american`).
pub fn dining_store() -> InMemoryContentStore {
    InMemoryContentStore::new()
        .with_category(category(1, "Dining", "dining"))
        .with_subcategory(subcategory(10, 1, "American", "american"))
}
