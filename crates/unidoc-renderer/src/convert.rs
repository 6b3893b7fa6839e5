//! Bytes-in, text-out conversion entry point.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::RenderConfig;
use crate::error::ConvertError;
use crate::renderer::UnicodeRenderer;
use crate::tree::parse_document;

/// Three or more consecutive newlines.
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse every run of three or more newlines into exactly two.
///
/// Applying it twice gives the same result as applying it once.
#[must_use]
pub fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    BLANK_LINES_RE.replace_all(text, "\n\n")
}

/// Convert UTF-8 markdown into styled Unicode text.
///
/// The output contains no trailing newline and never more than one blank
/// line in a row. Empty or whitespace-only input yields an empty string.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidUtf8`] if `input` is not valid UTF-8.
///
/// # Example
///
/// ```
/// use unidoc_renderer::{RenderConfig, convert};
///
/// let text = convert(b"# Hello", &RenderConfig::default()).unwrap();
/// assert!(text.starts_with("█ 𝗛𝗲𝗹𝗹𝗼\n═"));
/// ```
pub fn convert(input: &[u8], config: &RenderConfig) -> Result<String, ConvertError> {
    let source = std::str::from_utf8(input)?;
    let tree = parse_document(source);
    let output = UnicodeRenderer::new(*config).render(&tree)?;
    tracing::debug!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        "Converted markdown"
    );
    Ok(output)
}
