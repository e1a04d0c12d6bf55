//! Typed bigint wrappers for compile-time type safety.
//!
//! This module provides `Id<T>`, a typed wrapper around the `bigint` primary
//! keys used by the content schema. It prevents accidentally mixing up
//! different ID types (e.g., passing a `CategoryId` where a `PlaceId` was
//! expected).
//!
//! # Example
//!
//! ```rust
//! use directory_core::common::Id;
//!
//! // Define entity marker types
//! pub struct Place;
//! pub struct Category;
//!
//! // Create type aliases
//! pub type PlaceId = Id<Place>;
//! pub type CategoryId = Id<Category>;
//!
//! // These are now incompatible types:
//! let place_id = PlaceId::from_i64(1);
//! let category_id = CategoryId::from_i64(1);
//!
//! // This would be a compile error:
//! // let wrong: CategoryId = place_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

/// A typed wrapper around an `i64` row ID.
///
/// The type parameter `T` represents the entity type this ID belongs to.
/// IDs are minted by the database (`BIGSERIAL`), so there is no constructor
/// that invents a fresh value; use [`Id::from_i64`] when loading rows or
/// parsing route parameters.
#[repr(transparent)]
pub struct Id<T>(i64, PhantomData<fn() -> T>);

impl<T> Id<T> {
    /// Creates an `Id` from a raw `i64`.
    #[inline]
    pub fn from_i64(id: i64) -> Self {
        Self(id, PhantomData)
    }

    /// Returns the inner `i64`.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Parses an `Id` from a string (route parameters, query strings).
    #[inline]
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?, PhantomData))
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<i64> for Id<T> {
    #[inline]
    fn from(id: i64) -> Self {
        Self::from_i64(id)
    }
}

impl<T> From<Id<T>> for i64 {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Id<T> {
    type Err = ParseIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_i64)
    }
}

// ============================================================================
// sqlx support (always enabled)
// ============================================================================

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

impl<T> Type<Postgres> for Id<T> {
    fn type_info() -> PgTypeInfo {
        <i64 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i64 as Type<Postgres>>::compatible(ty)
    }
}

impl<T> PgHasArrayType for Id<T> {
    fn array_type_info() -> PgTypeInfo {
        <i64 as PgHasArrayType>::array_type_info()
    }
}

impl<T> Encode<'_, Postgres> for Id<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<T> Decode<'_, Postgres> for Id<T> {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        <i64 as Decode<Postgres>>::decode(value).map(Self::from_i64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Category;
    struct Place;

    #[test]
    fn ids_round_trip_through_i64() {
        let id: Id<Place> = Id::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn ids_parse_from_strings() {
        let id: Id<Category> = "17".parse().unwrap();
        assert_eq!(id.as_i64(), 17);
        assert!(Id::<Category>::parse("not-a-number").is_err());
    }

    #[test]
    fn ids_compare_by_value() {
        let a: Id<Place> = Id::from_i64(1);
        let b: Id<Place> = Id::from_i64(2);
        assert!(a < b);
        assert_eq!(a, Id::from_i64(1));
    }

    #[test]
    fn ids_serialize_as_plain_integers() {
        let id: Id<Place> = Id::from_i64(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: Id<Place> = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
