use thiserror::Error;

/// Engine-level error type.
///
/// Data-quality problems are never errors: an extractor that finds nothing
/// returns an empty field. These variants cover the two environment-level
/// failures the engine can actually hit.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The upstream document decoder could not produce text.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// The pattern registry failed to compile or load.
    #[error("Extraction error: {0}")]
    Extraction(String),
}
