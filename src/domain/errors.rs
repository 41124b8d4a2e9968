// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure kinds surfaced by the domain layer. Every kind is a distinct
/// variant so transport code can map it to a wire status without inspecting
/// messages.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed cursor '{value}'")]
    MalformedCursor { value: String },

    /// An id-filter entry failed to decode. Carries the offending raw value
    /// and the decode failure that caused it.
    #[error("invalid id filter entry '{value}'")]
    InvalidFilter {
        value: String,
        #[source]
        source: Box<DomainError>,
    },

    /// A stored document could not be decoded into the entity shape.
    /// `id` is the encoded identifier of the failing document when known.
    #[error("failed to decode stored document: {message}")]
    Decode { id: Option<String>, message: String },

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("user already exists: {0}")]
    AlreadyExists(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store's count or fetch call failed during a search.
    #[error("search failed")]
    SearchFailed {
        #[source]
        source: Box<DomainError>,
    },

    #[error("operation cancelled")]
    Cancelled,
}
