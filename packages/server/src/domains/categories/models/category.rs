use serde::{Deserialize, Serialize};

use crate::common::slug::{is_routable_slug, slugify};
use crate::common::CategoryId;

/// Raw category row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
}

/// Category row paired with its transitive place count, for listing queries
/// that aggregate in one round trip.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryCountRow {
    #[sqlx(flatten)]
    pub category: CategoryRow,
    pub count: i64,
}

/// Category view model: top level of the browsing hierarchy ("Attractions",
/// "Dining", ...). `count` is the number of places transitively under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
    pub count: i64,
}

impl Category {
    /// Build the view model, repairing an unroutable stored slug from the
    /// name.
    pub fn from_row(row: CategoryRow, count: i64) -> Self {
        let slug = if is_routable_slug(&row.slug) {
            row.slug
        } else {
            slugify(&row.name)
        };
        Category {
            id: row.id,
            name: row.name,
            description: row.description,
            slug,
            image_url: row.image_url,
            order_index: row.order_index,
            count,
        }
    }
}
