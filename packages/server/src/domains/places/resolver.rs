//! Place resolution: the four-stage fallback chain.
//!
//! The stored `places.slug` column is not reliably populated (legacy rows
//! carry NULL or exporter junk), so resolution does not assume a clean key.
//! Each stage is strictly more permissive and more expensive than the one
//! before, and runs only if the previous stage produced nothing:
//!
//! 1. direct match on the re-slugified input (the expected fast path);
//! 2. case-insensitive exact name match against a title-cased guess and its
//!    normalized / `&`-swapped variants;
//! 3. fuzzy substring match over the same variants, first row by name;
//! 4. lenient token match (any token longer than 2 chars, at least two
//!    required), first row by name.
//!
//! The stage ordering is load-bearing: reordering would change which result
//! wins when multiple candidates match. A failed store query at any stage
//! is logged and treated as a miss at that stage; the public contract is
//! always "entity or None", never an error.

use crate::common::slug::{normalize_for_compare, slugify, title_case_from_slug};
use crate::kernel::{degrade_to_empty, BaseContentStore};

use super::models::{Hours, Place, PlaceDetails, PlaceRow};

/// Resolve a routing slug to a fully assembled place, or `None` after all
/// four stages miss.
pub async fn resolve_place(store: &dyn BaseContentStore, slug: &str) -> Option<PlaceDetails> {
    let row = find_place_row(store, slug).await?;

    let images = degrade_to_empty("images_for_place", slug, store.images_for_place(row.id).await);
    let amenities = degrade_to_empty(
        "amenities_for_place",
        slug,
        store.amenities_for_place(row.id).await,
    );
    let reviews = degrade_to_empty(
        "reviews_for_place",
        slug,
        store.reviews_for_place(row.id).await,
    );

    let hours = Hours::from_row(&row);
    let mut place = Place::from(row);
    // The detail shape carries full amenity objects; drop the bare name
    // list so the serialized output has a single `amenities` key.
    place.amenities = Vec::new();

    Some(PlaceDetails {
        place,
        hours,
        images,
        amenities,
        reviews,
    })
}

/// Run the fallback chain and return the winning row, if any.
async fn find_place_row(store: &dyn BaseContentStore, slug: &str) -> Option<PlaceRow> {
    // Stage 1: regenerate-normalize the incoming slug exactly the way
    // stored slugs are generated, then exact match.
    let normalized = slugify(slug);
    if normalized.is_empty() {
        return None;
    }
    if let Some(row) = degrade_to_empty(
        "place_by_slug",
        slug,
        store.place_by_slug(&normalized).await,
    ) {
        return Some(row);
    }

    // Stage 2: guess the name back from the slug and try exact
    // (case-insensitive) name equality against all variants.
    let guess = title_case_from_slug(&normalized);
    let variants = name_variants(&guess);
    if let Some(row) = degrade_to_empty(
        "place_by_name_exact",
        slug,
        store.place_by_name_exact(&variants).await,
    ) {
        tracing::debug!(slug = %slug, name = %row.name, "resolved place via exact name match");
        return Some(row);
    }

    // Stage 3: substring match over the same variants.
    let rows = degrade_to_empty(
        "fuzzy_name_search",
        slug,
        store.fuzzy_name_search(&variants).await,
    );
    if rows.len() > 1 {
        // First-by-name is a documented heuristic; log ties so wrong-location
        // resolutions can be audited.
        tracing::debug!(slug = %slug, matches = rows.len(), "fuzzy name search matched multiple places; taking first by name");
    }
    if let Some(row) = rows.into_iter().next() {
        tracing::debug!(slug = %slug, name = %row.name, "resolved place via fuzzy name search");
        return Some(row);
    }

    // Stage 4: token match. Requires at least two meaningful tokens so a
    // single generic word ("the", "cafe") cannot resolve to an arbitrary
    // place.
    let tokens: Vec<String> = normalize_for_compare(&guess)
        .split_whitespace()
        .filter(|token| token.len() > 2)
        .map(str::to_string)
        .collect();
    if tokens.len() < 2 {
        return None;
    }
    let rows = degrade_to_empty(
        "token_name_search",
        slug,
        store.token_name_search(&tokens).await,
    );
    if rows.len() > 1 {
        tracing::debug!(slug = %slug, matches = rows.len(), "token name search matched multiple places; taking first by name");
    }
    let row = rows.into_iter().next()?;
    tracing::debug!(slug = %slug, name = %row.name, "resolved place via token name search");
    Some(row)
}

/// Textual variants of the slug-derived name guess, used by stages 2 and 3:
/// the raw title-cased guess, its normalized form, and the normalized form
/// with `and`/`&` swapped both ways. Order matters only for readability;
/// duplicates are dropped.
fn name_variants(guess: &str) -> Vec<String> {
    let normalized = normalize_for_compare(guess);
    let candidates = [
        guess.to_string(),
        normalized.replace(" and ", " & "),
        normalized.replace(" & ", " and "),
        normalized,
    ];
    let mut variants: Vec<String> = Vec::new();
    for candidate in candidates {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_variants_cover_ampersand_spellings() {
        let variants = name_variants("Fish And Chips");
        assert!(variants.contains(&"Fish And Chips".to_string()));
        assert!(variants.contains(&"fish and chips".to_string()));
        assert!(variants.contains(&"fish & chips".to_string()));
    }

    #[test]
    fn name_variants_deduplicate() {
        let variants = name_variants("Lincoln Memorial");
        // raw guess plus normalized form; the &-swaps change nothing here
        assert_eq!(
            variants,
            vec!["Lincoln Memorial".to_string(), "lincoln memorial".to_string()]
        );
    }

    #[test]
    fn name_variants_of_empty_guess_is_empty() {
        assert!(name_variants("").is_empty());
    }
}
