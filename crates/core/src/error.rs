/// Errors produced by the pure domain layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A draft failed the required-field check before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),
}
