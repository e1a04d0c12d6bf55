pub mod amenity;
pub mod place;
pub mod place_image;
pub mod review;

pub use amenity::Amenity;
pub use place::{Hours, Place, PlaceDetails, PlaceRow, PriceRange};
pub use place_image::PlaceImage;
pub use review::Review;
