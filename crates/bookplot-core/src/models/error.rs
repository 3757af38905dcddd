use thiserror::Error;

/// Hard failures surfaced to the caller. Malformed prices and missing markup
/// substructure are not errors; they become `None` values or omitted records.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CoreError {
    #[error("retrieval of '{url}' failed: {message}")]
    Retrieval { url: String, message: String },

    #[error("favorites store '{operation}' failed: {message}")]
    Storage { operation: String, message: String },

    #[error("chart rendering failed: {message}")]
    Render { message: String },
}
