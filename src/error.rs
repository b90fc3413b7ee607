use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the records and singletons in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field was read before anything was assigned to it.
    #[error("field `{field}` was read before it was assigned")]
    UninitializedField { field: &'static str },

    /// A singleton constructor reported a failure. Nothing is cached.
    #[error("failed to construct {type_name}: {reason}")]
    Construction {
        type_name: &'static str,
        reason: String,
    },
}

impl Error {
    /// Build a `Construction` error for `T`.
    pub fn construction<T>(reason: impl Into<String>) -> Self {
        Error::Construction {
            type_name: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }
}
