//! Conversion errors.

use std::fmt;
use std::str::Utf8Error;

/// Error returned by [`convert`](crate::convert) and
/// [`UnicodeRenderer::render`](crate::UnicodeRenderer::render).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input bytes are not valid UTF-8.
    #[error("failed to convert markdown: input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// The output sink rejected a write.
    #[error("failed to convert markdown: write failed")]
    Write(#[from] fmt::Error),
}
