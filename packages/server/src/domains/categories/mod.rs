pub mod models;
pub mod resolver;

pub use models::{Category, Subcategory};
pub use resolver::{
    list_categories, list_subcategories_by_category, resolve_category, resolve_subcategory,
};
