use thiserror::Error;

/// Errors that can occur while assembling or processing billing and
/// banking records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KontorError {
    /// Builder encountered invalid or missing input.
    #[error("builder error: {0}")]
    Builder(String),

    /// An invoice item failed its pre-save checks.
    #[error("item error: {0}")]
    Item(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Configuration rejected by validation.
    #[error("config error: {0}")]
    Config(String),

    /// Statement export error.
    #[error("export error: {0}")]
    Export(String),
}
