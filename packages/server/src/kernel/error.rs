use thiserror::Error;

/// Failure at the store boundary.
///
/// Everything above the store seam degrades these to "no result" (None or an
/// empty list) - the public resolver/listing contract never surfaces an
/// error to the presentation layer. The taxonomy exists for log fidelity;
/// both variants degrade identically.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying query failed (transport, malformed SQL, row decode).
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store-boundary operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Degrade a failed store query to an empty result, logging enough context
/// (operation name, input, underlying error) to diagnose later.
///
/// Used by the resolver and list assemblers so that a transient store
/// failure renders as a "not found" page or empty grid instead of an error
/// page.
pub fn degrade_to_empty<T: Default>(
    operation: &'static str,
    input: &str,
    result: StoreResult<T>,
) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                operation,
                input = %input,
                error = %error,
                "store query failed; treating as no result"
            );
            T::default()
        }
    }
}
