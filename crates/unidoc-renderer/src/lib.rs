//! Markdown to plain Unicode text renderer.
//!
//! Markdown is parsed with pulldown-cmark into an owned [`Node`] tree, which
//! [`UnicodeRenderer`] walks to produce text that keeps the document's
//! visual structure without any markup:
//!
//! - headings and emphasis use Mathematical Alphanumeric Symbols
//!   (`𝗯𝗼𝗹𝗱`, `𝘪𝘵𝘢𝘭𝘪𝘤`, `𝒮𝒸𝓇𝒾𝓅𝓉`), configurable via [`RenderConfig`]
//! - ordered lists use per-level numbering (`①`, `⑴`, `🅐`, `ⅰ`, `Ⅰ`)
//! - unordered lists cycle through six bullet glyphs
//! - blockquotes are prefixed with `┃`
//! - code blocks are drawn inside a fixed-width box
//!
//! # Example
//!
//! ```
//! use unidoc_renderer::{ItalicStyle, RenderConfig, convert};
//!
//! let config = RenderConfig::default().with_italic_style(ItalicStyle::Markers);
//! let text = convert(b"*Hello* -- **world**", &config).unwrap();
//! assert_eq!(text, "*Hello* – 𝘄𝗼𝗿𝗹𝗱");
//! ```

mod config;
mod convert;
mod error;
mod markers;
mod punctuation;
mod renderer;
mod state;
mod style;
mod tree;

pub use config::{ItalicStyle, RenderConfig, StrongStyle, StyleError};
pub use convert::{collapse_blank_lines, convert};
pub use error::ConvertError;
pub use markers::{bullet, ordered_marker};
pub use punctuation::smart_dashes;
pub use renderer::UnicodeRenderer;
pub use style::{ActiveSpans, BOLD_SANS_SERIF, SCRIPT, SLANTED_SANS_SERIF, StyleTable, Styling};
pub use tree::{LineBreak, Node, NodeKind, parse_document};
