use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{PlaceId, ReviewId};

/// Visitor review for a place. Read-only here, like everything else in the
/// content schema.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub rating: f64,
    pub content: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}
