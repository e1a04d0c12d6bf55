use serde::{Deserialize, Serialize};

use crate::common::AmenityId;

/// Named amenity tag ("WiFi", "Parking", ...) with a symbolic icon key.
/// Many-to-many with places via the `place_amenities` join table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub icon: String,
}
