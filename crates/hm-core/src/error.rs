/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in the core data model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A section name did not match any known roster bucket.
    #[error("unknown section: \"{0}\"")]
    UnknownSection(String),

    /// A message catalog failed to parse.
    #[error("invalid message catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
