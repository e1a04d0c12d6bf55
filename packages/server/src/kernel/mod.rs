// Infrastructure: store trait, implementations, error taxonomy

pub mod error;
pub mod store;
pub mod test_dependencies;
pub mod traits;

pub use error::{degrade_to_empty, StoreError, StoreResult};
pub use store::PgContentStore;
pub use test_dependencies::InMemoryContentStore;
pub use traits::BaseContentStore;
