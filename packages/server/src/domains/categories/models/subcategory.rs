use serde::{Deserialize, Serialize};

use crate::common::slug::{is_routable_slug, slugify};
use crate::common::{CategoryId, SubcategoryId};

/// Raw subcategory row with the parent category LEFT JOINed in. Parent
/// columns are `Option` so a missing parent degrades instead of failing a
/// row decode.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubcategoryRow {
    pub id: SubcategoryId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub slug: String,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

/// Subcategory row paired with its place count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubcategoryCountRow {
    #[sqlx(flatten)]
    pub subcategory: SubcategoryRow,
    pub count: i64,
}

/// Subcategory view model ("Museums" under "Attractions"). Carries the
/// parent's name/slug denormalized for display and link-building; both are
/// empty strings when the parent is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub slug: String,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
    pub category_name: String,
    pub category_slug: String,
    pub count: i64,
}

impl Subcategory {
    pub fn from_row(row: SubcategoryRow, count: i64) -> Self {
        let slug = if is_routable_slug(&row.slug) {
            row.slug
        } else {
            slugify(&row.name)
        };
        let (category_name, category_slug) = match row.category_name {
            Some(name) => {
                let parent_slug = match row.category_slug {
                    Some(s) if is_routable_slug(&s) => s,
                    _ => slugify(&name),
                };
                (name, parent_slug)
            }
            None => (String::new(), String::new()),
        };
        Subcategory {
            id: row.id,
            name: row.name,
            description: row.description,
            category_id: row.category_id,
            slug,
            image_url: row.image_url,
            order_index: row.order_index,
            category_name,
            category_slug,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SubcategoryRow {
        SubcategoryRow {
            id: SubcategoryId::from_i64(5),
            name: "Rooftop Bars".to_string(),
            description: None,
            category_id: CategoryId::from_i64(2),
            slug: "rooftop-bars".to_string(),
            image_url: None,
            order_index: Some(1),
            category_name: Some("Entertainment".to_string()),
            category_slug: Some("entertainment".to_string()),
        }
    }

    #[test]
    fn denormalizes_parent_fields() {
        let sub = Subcategory::from_row(row(), 12);
        assert_eq!(sub.category_name, "Entertainment");
        assert_eq!(sub.category_slug, "entertainment");
        assert_eq!(sub.count, 12);
    }

    #[test]
    fn missing_parent_degrades_to_empty_strings() {
        let mut r = row();
        r.category_name = None;
        r.category_slug = None;
        let sub = Subcategory::from_row(r, 0);
        assert_eq!(sub.category_name, "");
        assert_eq!(sub.category_slug, "");
    }

    #[test]
    fn unroutable_slugs_regenerated() {
        let mut r = row();
        r.slug = "null".to_string();
        r.category_slug = Some(String::new());
        let sub = Subcategory::from_row(r, 0);
        assert_eq!(sub.slug, "rooftop-bars");
        assert_eq!(sub.category_slug, "entertainment");
    }
}
