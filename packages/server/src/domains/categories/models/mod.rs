pub mod category;
pub mod subcategory;

pub use category::{Category, CategoryCountRow, CategoryRow};
pub use subcategory::{Subcategory, SubcategoryCountRow, SubcategoryRow};
