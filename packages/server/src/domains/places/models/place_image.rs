use serde::{Deserialize, Serialize};

use crate::common::{ImageId, PlaceId};

/// Gallery image attached to a place. `is_main` marks the card/hero image;
/// `order_index` drives gallery ordering.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlaceImage {
    pub id: ImageId,
    pub place_id: PlaceId,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub is_main: bool,
    pub order_index: Option<i32>,
}
