//! Upstream document-decoding boundary. Turns an uploaded PDF into raw text
//! for the extraction core; the core itself never sees bytes. A document
//! that cannot be decoded is a hard stop, so partially-decoded garbage is
//! never fed into the heuristics.

use std::path::Path;

use tracing::debug;

use crate::errors::EngineError;

/// Extracts text from in-memory PDF bytes.
pub fn decode_pdf_bytes(bytes: &[u8]) -> Result<String, EngineError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| EngineError::Decoding(format!("failed to extract text from PDF: {e}")))?;
    debug!(chars = text.len(), "decoded PDF document");
    Ok(text)
}

/// Reads and decodes a PDF from disk. Only `.pdf` files are accepted; the
/// gate is on the filename, before any bytes are read.
pub fn decode_pdf_file(path: &Path) -> Result<String, EngineError> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(EngineError::Decoding(format!(
            "only PDF files are supported, got '{}'",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| EngineError::Decoding(format!("failed to read '{}': {e}", path.display())))?;
    decode_pdf_bytes(&bytes)
}
