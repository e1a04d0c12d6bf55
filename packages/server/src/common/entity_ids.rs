//! Typed ID definitions for all content entities.
//!
//! This module defines type aliases for each entity in the content schema,
//! providing compile-time type safety for ID usage throughout the
//! application.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::common::{CategoryId, PlaceId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let category_id: CategoryId = CategoryId::from_i64(1);
//! let place_id: PlaceId = PlaceId::from_i64(1);
//!
//! // This would be a compile error:
//! // let wrong: PlaceId = category_id;
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Category entities.
pub struct Category;

/// Marker type for Subcategory entities.
pub struct Subcategory;

/// Marker type for Place entities.
pub struct Place;

/// Marker type for PlaceImage entities.
pub struct PlaceImage;

/// Marker type for Amenity entities.
pub struct Amenity;

/// Marker type for Review entities.
pub struct Review;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Category entities.
pub type CategoryId = Id<Category>;

/// Typed ID for Subcategory entities.
pub type SubcategoryId = Id<Subcategory>;

/// Typed ID for Place entities.
pub type PlaceId = Id<Place>;

/// Typed ID for PlaceImage entities.
pub type ImageId = Id<PlaceImage>;

/// Typed ID for Amenity entities.
pub type AmenityId = Id<Amenity>;

/// Typed ID for Review entities.
pub type ReviewId = Id<Review>;
