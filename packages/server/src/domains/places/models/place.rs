use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::common::slug::{is_routable_slug, slugify};
use crate::common::{PlaceId, SubcategoryId};

use super::{Amenity, PlaceImage, Review};

/// Price tier for a place (`$` through `$$$$`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// Dollar-sign symbol as stored in the `price_range` column.
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Upscale => "$$$",
            PriceRange::Luxury => "$$$$",
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for PriceRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "$" => Ok(PriceRange::Budget),
            "$$" => Ok(PriceRange::Moderate),
            "$$$" => Ok(PriceRange::Upscale),
            "$$$$" => Ok(PriceRange::Luxury),
            _ => Err(anyhow::anyhow!("Invalid price range: {}", s)),
        }
    }
}

/// Raw place row as selected from the store, with the parent chain LEFT
/// JOINed in.
///
/// The parent columns are `Option` because legacy rows can reference a
/// deleted subcategory; the view-model conversion turns a broken chain into
/// empty strings rather than failing. `slug` is `Option` for the same
/// historical reason.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlaceRow {
    pub id: PlaceId,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub reviews_count: Option<i32>,
    pub price_range: Option<String>,
    pub gps_coordinates: Option<String>,
    pub subcategory_id: SubcategoryId,
    pub slug: Option<String>,
    pub hours_monday: Option<String>,
    pub hours_tuesday: Option<String>,
    pub hours_wednesday: Option<String>,
    pub hours_thursday: Option<String>,
    pub hours_friday: Option<String>,
    pub hours_saturday: Option<String>,
    pub hours_sunday: Option<String>,
    pub subcategory_name: Option<String>,
    pub subcategory_slug: Option<String>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub image_url: Option<String>,
    pub amenity_names: Vec<String>,
}

/// Opening hours keyed by weekday. Values are either a time range
/// ("11:00 AM - 10:00 PM") or the literal "Closed"; absent means unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hours {
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
}

impl Hours {
    /// Assemble the weekday map from the seven per-day columns.
    pub fn from_row(row: &PlaceRow) -> Self {
        Hours {
            monday: row.hours_monday.clone(),
            tuesday: row.hours_tuesday.clone(),
            wednesday: row.hours_wednesday.clone(),
            thursday: row.hours_thursday.clone(),
            friday: row.hours_friday.clone(),
            saturday: row.hours_saturday.clone(),
            sunday: row.hours_sunday.clone(),
        }
    }
}

/// Uniform place shape handed to the presentation layer by every listing
/// and resolution operation.
///
/// `slug`, and - whenever the parent chain is intact - `category_slug` and
/// `subcategory_slug`, are guaranteed non-empty and routable; downstream
/// link-building depends on that. A broken parent chain yields empty-string
/// denormalized fields, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub reviews_count: Option<i32>,
    pub price_range: Option<PriceRange>,
    pub gps_coordinates: Option<String>,
    pub image_url: Option<String>,
    pub slug: String,
    pub category: String,
    pub category_slug: String,
    pub subcategory: String,
    pub subcategory_slug: String,
    /// Amenity names, used by the client filter engine. Empty on the detail
    /// shape, where [`PlaceDetails::amenities`] carries the full objects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        let slug = derive_slug(row.slug.as_deref(), &row.name);
        let (subcategory, subcategory_slug) =
            derive_parent(row.subcategory_name.as_deref(), row.subcategory_slug.as_deref());
        let (category, category_slug) =
            derive_parent(row.category_name.as_deref(), row.category_slug.as_deref());

        // Unknown tier strings degrade to "no price info" rather than
        // failing the whole row.
        let price_range = row.price_range.as_deref().and_then(|s| s.parse().ok());

        Place {
            id: row.id,
            name: row.name,
            description: row.description,
            address: row.address,
            phone: row.phone,
            website: row.website,
            rating: row.rating,
            reviews_count: row.reviews_count,
            price_range,
            gps_coordinates: row.gps_coordinates,
            image_url: row.image_url,
            slug,
            category,
            category_slug,
            subcategory,
            subcategory_slug,
            amenities: row.amenity_names,
        }
    }
}

/// Fully assembled detail shape for a place page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    #[serde(flatten)]
    pub place: Place,
    pub hours: Hours,
    pub images: Vec<PlaceImage>,
    pub amenities: Vec<Amenity>,
    pub reviews: Vec<Review>,
}

/// Stored slug if routable, otherwise deterministically regenerated from
/// the name.
fn derive_slug(stored: Option<&str>, name: &str) -> String {
    match stored {
        Some(s) if is_routable_slug(s) => s.to_string(),
        _ => slugify(name),
    }
}

/// Denormalized (name, slug) for a joined parent. Missing parent means a
/// broken chain: both fields become empty strings.
fn derive_parent(name: Option<&str>, stored_slug: Option<&str>) -> (String, String) {
    match name {
        Some(name) => {
            let slug = derive_slug(stored_slug, name);
            (name.to_string(), slug)
        }
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_row() -> PlaceRow {
        PlaceRow {
            id: PlaceId::from_i64(1),
            name: "Old Ebbitt Grill".to_string(),
            description: None,
            address: None,
            phone: None,
            website: None,
            rating: Some(4.5),
            reviews_count: Some(120),
            price_range: Some("$$".to_string()),
            gps_coordinates: None,
            subcategory_id: SubcategoryId::from_i64(10),
            slug: Some("old-ebbitt-grill".to_string()),
            hours_monday: Some("11:00 AM - 10:00 PM".to_string()),
            hours_tuesday: None,
            hours_wednesday: None,
            hours_thursday: None,
            hours_friday: None,
            hours_saturday: None,
            hours_sunday: Some("Closed".to_string()),
            subcategory_name: Some("American".to_string()),
            subcategory_slug: Some("american".to_string()),
            category_name: Some("Dining".to_string()),
            category_slug: Some("dining".to_string()),
            image_url: None,
            amenity_names: vec![],
        }
    }

    #[test]
    fn stored_slug_used_when_routable() {
        let place = Place::from(base_row());
        assert_eq!(place.slug, "old-ebbitt-grill");
        assert_eq!(place.category_slug, "dining");
        assert_eq!(place.subcategory_slug, "american");
    }

    #[test]
    fn missing_slug_regenerated_from_name() {
        let mut row = base_row();
        row.slug = None;
        assert_eq!(Place::from(row).slug, "old-ebbitt-grill");

        let mut row = base_row();
        row.slug = Some("undefined".to_string());
        assert_eq!(Place::from(row).slug, "old-ebbitt-grill");
    }

    #[test]
    fn broken_parent_chain_yields_empty_strings() {
        let mut row = base_row();
        row.subcategory_name = None;
        row.subcategory_slug = None;
        row.category_name = None;
        row.category_slug = None;
        let place = Place::from(row);
        assert_eq!(place.category, "");
        assert_eq!(place.category_slug, "");
        assert_eq!(place.subcategory, "");
        assert_eq!(place.subcategory_slug, "");
    }

    #[test]
    fn unknown_price_tier_degrades_to_none() {
        let mut row = base_row();
        row.price_range = Some("cheap".to_string());
        assert_eq!(Place::from(row).price_range, None);

        let mut row = base_row();
        row.price_range = Some("$$$".to_string());
        assert_eq!(Place::from(row).price_range, Some(PriceRange::Upscale));
    }

    #[test]
    fn hours_map_keeps_closed_literal() {
        let hours = Hours::from_row(&base_row());
        assert_eq!(hours.sunday.as_deref(), Some("Closed"));
        assert_eq!(hours.monday.as_deref(), Some("11:00 AM - 10:00 PM"));
        assert_eq!(hours.tuesday, None);
    }
}
