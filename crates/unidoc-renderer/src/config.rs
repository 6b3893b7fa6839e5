//! Presentation style selectors for emphasized text.
//!
//! Selectors are parsed from their canonical names (`slanted-sans-serif`,
//! `bold-sans-serif`, ...). Parsing fails with [`StyleError`] before any
//! rendering happens, so a [`RenderConfig`] is always valid.

use std::fmt;
use std::str::FromStr;

/// How italic (`*text*`) spans are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItalicStyle {
    /// Leave the text untouched.
    Plain,
    /// Wrap the text in single asterisks.
    Markers,
    /// Mathematical script letters.
    Script,
    /// Mathematical sans-serif italic letters.
    #[default]
    SlantedSansSerif,
}

impl ItalicStyle {
    /// All selectors, in help-text order.
    pub const ALL: [Self; 4] = [
        Self::Plain,
        Self::Markers,
        Self::Script,
        Self::SlantedSansSerif,
    ];

    /// Canonical selector name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markers => "markers",
            Self::Script => "script",
            Self::SlantedSansSerif => "slanted-sans-serif",
        }
    }
}

impl FromStr for ItalicStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| StyleError::Italic(s.to_owned()))
    }
}

impl fmt::Display for ItalicStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strong (`**text**`) spans are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrongStyle {
    /// Leave the text untouched.
    Plain,
    /// Wrap the text in double asterisks.
    Markers,
    /// Mathematical sans-serif bold letters and digits.
    #[default]
    BoldSansSerif,
}

impl StrongStyle {
    /// All selectors, in help-text order.
    pub const ALL: [Self; 3] = [Self::Plain, Self::Markers, Self::BoldSansSerif];

    /// Canonical selector name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markers => "markers",
            Self::BoldSansSerif => "bold-sans-serif",
        }
    }
}

impl FromStr for StrongStyle {
    type Err = StyleError;

    /// Strong selectors are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StyleError::Strong(s.to_owned()))
    }
}

impl fmt::Display for StrongStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized style selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("invalid italic style: {0}")]
    Italic(String),
    #[error("invalid strong style: {0}")]
    Strong(String),
}

/// Configuration for one rendering call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Presentation of italic spans.
    pub italic_style: ItalicStyle,
    /// Presentation of strong spans.
    pub strong_style: StrongStyle,
}

impl RenderConfig {
    /// Set the italic style.
    #[must_use]
    pub fn with_italic_style(mut self, style: ItalicStyle) -> Self {
        self.italic_style = style;
        self
    }

    /// Set the strong style.
    #[must_use]
    pub fn with_strong_style(mut self, style: StrongStyle) -> Self {
        self.strong_style = style;
        self
    }
}
