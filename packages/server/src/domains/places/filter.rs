//! Client-side filter engine.
//!
//! Pure, synchronous narrowing of an already-fetched place collection. No
//! I/O, no dependency on any UI framework's state primitives: the event
//! layer calls this with the current filter spec on every interaction.

use serde::Deserialize;

use super::models::{Place, PriceRange};

/// Filter specification for a place collection. Empty/None components are
/// inactive; active components compose conjunctively.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSpec {
    /// Accepted price tiers. Empty means "any price".
    #[serde(default)]
    pub price: Vec<PriceRange>,
    /// Minimum rating. Places without a rating are excluded by any
    /// non-null minimum, including 0.0 - absence is not zero.
    pub rating: Option<f64>,
    /// Required amenity names: every one must be present (logical AND),
    /// matched case-sensitively.
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Filter a place collection against a spec.
///
/// Deterministic and stable: surviving elements keep their relative input
/// order, and calling twice with the same inputs yields the same output.
pub fn filter_places(places: &[Place], spec: &FilterSpec) -> Vec<Place> {
    places
        .iter()
        .filter(|place| matches(place, spec))
        .cloned()
        .collect()
}

fn matches(place: &Place, spec: &FilterSpec) -> bool {
    if !spec.price.is_empty() {
        match place.price_range {
            Some(tier) if spec.price.contains(&tier) => {}
            _ => return false,
        }
    }

    if let Some(minimum) = spec.rating {
        match place.rating {
            Some(rating) if rating >= minimum => {}
            _ => return false,
        }
    }

    if !spec.amenities.is_empty() {
        let has_all = spec
            .amenities
            .iter()
            .all(|wanted| place.amenities.iter().any(|have| have == wanted));
        if !has_all {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PlaceId;

    fn place(
        id: i64,
        name: &str,
        price: Option<PriceRange>,
        rating: Option<f64>,
        amenities: &[&str],
    ) -> Place {
        Place {
            id: PlaceId::from_i64(id),
            name: name.to_string(),
            description: None,
            address: None,
            phone: None,
            website: None,
            rating,
            reviews_count: None,
            price_range: price,
            gps_coordinates: None,
            image_url: None,
            slug: crate::common::slug::slugify(name),
            category: "Dining".to_string(),
            category_slug: "dining".to_string(),
            subcategory: "American".to_string(),
            subcategory_slug: "american".to_string(),
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn empty_spec_keeps_everything_in_order() {
        let places = vec![
            place(1, "A", None, None, &[]),
            place(2, "B", Some(PriceRange::Luxury), Some(1.0), &[]),
        ];
        let result = filter_places(&places, &FilterSpec::default());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "A");
        assert_eq!(result[1].name, "B");
    }

    #[test]
    fn filters_compose_conjunctively() {
        let a = place(
            1,
            "A",
            Some(PriceRange::Moderate),
            Some(4.5),
            &["WiFi", "Parking"],
        );
        let b = place(2, "B", Some(PriceRange::Moderate), Some(3.0), &["WiFi"]);
        let spec = FilterSpec {
            price: vec![PriceRange::Moderate],
            rating: Some(4.0),
            amenities: vec!["WiFi".to_string(), "Parking".to_string()],
        };
        let result = filter_places(&[a, b], &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "A");
    }

    #[test]
    fn absent_rating_excluded_by_any_minimum() {
        let unrated = place(1, "Unrated", None, None, &[]);
        let spec = FilterSpec {
            rating: Some(0.0),
            ..Default::default()
        };
        assert!(filter_places(&[unrated], &spec).is_empty());
    }

    #[test]
    fn absent_price_excluded_when_price_filter_active() {
        let no_price = place(1, "NoPrice", None, Some(5.0), &[]);
        let spec = FilterSpec {
            price: vec![PriceRange::Budget],
            ..Default::default()
        };
        assert!(filter_places(&[no_price], &spec).is_empty());
    }

    #[test]
    fn amenity_match_is_case_sensitive_and_requires_all() {
        let p = place(1, "P", None, None, &["WiFi", "Parking"]);

        let wrong_case = FilterSpec {
            amenities: vec!["wifi".to_string()],
            ..Default::default()
        };
        assert!(filter_places(std::slice::from_ref(&p), &wrong_case).is_empty());

        let missing_one = FilterSpec {
            amenities: vec!["WiFi".to_string(), "Patio".to_string()],
            ..Default::default()
        };
        assert!(filter_places(std::slice::from_ref(&p), &missing_one).is_empty());

        let all_present = FilterSpec {
            amenities: vec!["Parking".to_string(), "WiFi".to_string()],
            ..Default::default()
        };
        assert_eq!(filter_places(&[p], &all_present).len(), 1);
    }

    #[test]
    fn surviving_order_is_stable() {
        let places = vec![
            place(1, "First", Some(PriceRange::Budget), Some(3.0), &[]),
            place(2, "Skip", Some(PriceRange::Luxury), Some(5.0), &[]),
            place(3, "Second", Some(PriceRange::Budget), Some(4.0), &[]),
        ];
        let spec = FilterSpec {
            price: vec![PriceRange::Budget],
            ..Default::default()
        };
        let result = filter_places(&places, &spec);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
