pub mod filter;
pub mod listings;
pub mod models;
pub mod resolver;

pub use filter::{filter_places, FilterSpec};
pub use listings::{
    list_featured_places, list_places_by_category, list_places_by_subcategory, routable_paths,
    search_places,
};
pub use models::{Place, PlaceDetails};
pub use resolver::resolve_place;
