use thiserror::Error;

/// A document that produced no indexable terms. It is not assigned an id
/// and leaves the builder untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document '{source_id}' has no indexable terms")]
pub struct Skipped {
    pub source_id: String,
}
