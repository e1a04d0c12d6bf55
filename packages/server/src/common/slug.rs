//! Slug derivation and comparison helpers.
//!
//! Stored slugs in the content schema are not reliably populated (a chunk of
//! legacy rows carry NULL or junk), so every layer that builds a URL derives
//! the slug through [`slugify`] and every layer that compares free text
//! against a slug-derived guess goes through [`normalize_for_compare`]. All
//! functions here are total over string input: empty in, empty out.

/// Normalize free text into a URL-safe slug.
///
/// Lowercases, strips everything outside `[a-z0-9\s-]` (ampersands and other
/// punctuation removed), collapses whitespace/hyphen runs into single
/// hyphens, and trims leading/trailing hyphens.
///
/// Idempotent: `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
        // everything else is dropped without becoming a separator
    }
    out
}

/// Best-effort inverse of [`slugify`]: `old-ebbitt-grill` -> `Old Ebbitt
/// Grill`.
///
/// Lossy ("&" and casing of interior letters cannot be recovered), so this
/// is only ever used as a search seed for the place fallback chain, never as
/// a source of truth.
pub fn title_case_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize text for comparing a stored name against a slug-derived guess.
///
/// Lowercases, strips punctuation except `&`, collapses whitespace. Cosmetic
/// differences (apostrophes, double spaces, trailing periods) disappear;
/// `&` survives because "Fish & Chips" vs "Fish and Chips" is a real variant
/// the caller wants to handle explicitly.
pub fn normalize_for_compare(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '&' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else if c.is_whitespace() {
            pending_space = true;
        }
    }
    out
}

/// Whether a stored slug is usable in a routable URL as-is.
///
/// Legacy imports left some slug columns NULL and others containing literal
/// `undefined`/`null` fragments from the upstream exporter; those must be
/// regenerated from the name instead of being linked.
pub fn is_routable_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains("undefined") && !slug.contains("null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Old Ebbitt Grill"), "old-ebbitt-grill");
        assert_eq!(slugify("Ben's Chili Bowl"), "bens-chili-bowl");
        assert_eq!(slugify("Fish & Chips"), "fish-chips");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("  National   Mall  "), "national-mall");
        assert_eq!(slugify("a--b - -c"), "a-b-c");
        assert_eq!(slugify("--leading and trailing--"), "leading-and-trailing");
    }

    #[test]
    fn slugify_is_total() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("&&&"), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        let inputs = [
            "Old Ebbitt Grill",
            "Ben's Chili Bowl",
            "Fish & Chips",
            "  spaced   out  ",
            "already-a-slug",
            "100% Juice Bar!",
            "",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn title_case_from_slug_round() {
        assert_eq!(title_case_from_slug("old-ebbitt-grill"), "Old Ebbitt Grill");
        assert_eq!(title_case_from_slug("lincoln_memorial"), "Lincoln Memorial");
        assert_eq!(title_case_from_slug(""), "");
        assert_eq!(title_case_from_slug("--x--"), "X");
    }

    #[test]
    fn normalize_for_compare_strips_cosmetics_keeps_ampersand() {
        assert_eq!(normalize_for_compare("Ben's  Chili Bowl!"), "bens chili bowl");
        assert_eq!(normalize_for_compare("Fish & Chips"), "fish & chips");
        assert_eq!(normalize_for_compare("  "), "");
    }

    #[test]
    fn routable_slug_rejects_exporter_artifacts() {
        assert!(is_routable_slug("old-ebbitt-grill"));
        assert!(!is_routable_slug(""));
        assert!(!is_routable_slug("undefined"));
        assert!(!is_routable_slug("null-island-cafe"));
        assert!(!is_routable_slug("place-undefined-2"));
    }
}
