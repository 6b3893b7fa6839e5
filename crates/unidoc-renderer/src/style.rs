//! Character substitution tables for styled text.
//!
//! Each table maps ASCII Latin letters (and, for bold sans-serif, digits) to
//! a single code point in the Mathematical Alphanumeric Symbols block. Every
//! other character passes through, so applying a table never changes the
//! number of characters in a string.

use std::borrow::Cow;

use crate::config::{ItalicStyle, RenderConfig, StrongStyle};

/// Fixed character-to-glyph mapping for one presentation style.
#[derive(Debug)]
pub struct StyleTable {
    upper: [char; 26],
    lower: [char; 26],
    digits: Option<[char; 10]>,
}

/// Build a table row from a run of consecutive code points.
const fn contiguous<const N: usize>(first: u32) -> [char; N] {
    let mut row = ['\0'; N];
    let mut offset = 0;
    while offset < N {
        #[allow(clippy::cast_possible_truncation)]
        let code = first + offset as u32;
        row[offset] = match char::from_u32(code) {
            Some(c) => c,
            None => panic!("style table entry is not a scalar value"),
        };
        offset += 1;
    }
    row
}

/// Mathematical sans-serif bold (𝗔𝗯𝟬).
pub static BOLD_SANS_SERIF: StyleTable = StyleTable {
    upper: contiguous(0x1D5D4),
    lower: contiguous(0x1D5EE),
    digits: Some(contiguous(0x1D7EC)),
};

/// Mathematical sans-serif italic (𝘈𝘣).
pub static SLANTED_SANS_SERIF: StyleTable = StyleTable {
    upper: contiguous(0x1D608),
    lower: contiguous(0x1D622),
    digits: None,
};

/// Mathematical script (𝒜𝒷).
///
/// The script range has holes for letters that were encoded earlier in the
/// Letterlike Symbols block, so this table is spelled out.
pub static SCRIPT: StyleTable = StyleTable {
    upper: [
        '\u{1D49C}', '\u{212C}', '\u{1D49E}', '\u{1D49F}', '\u{2130}', '\u{2131}', '\u{1D4A2}',
        '\u{210B}', '\u{2110}', '\u{1D4A5}', '\u{1D4A6}', '\u{2112}', '\u{2133}', '\u{1D4A9}',
        '\u{1D4AA}', '\u{1D4AB}', '\u{1D4AC}', '\u{211B}', '\u{1D4AE}', '\u{1D4AF}', '\u{1D4B0}',
        '\u{1D4B1}', '\u{1D4B2}', '\u{1D4B3}', '\u{1D4B4}', '\u{1D4B5}',
    ],
    lower: [
        '\u{1D4B6}', '\u{1D4B7}', '\u{1D4B8}', '\u{1D4B9}', '\u{212F}', '\u{1D4BB}', '\u{210A}',
        '\u{1D4BD}', '\u{1D4BE}', '\u{1D4BF}', '\u{1D4C0}', '\u{1D4C1}', '\u{1D4C2}', '\u{1D4C3}',
        '\u{2134}', '\u{1D4C5}', '\u{1D4C6}', '\u{1D4C7}', '\u{1D4C8}', '\u{1D4C9}', '\u{1D4CA}',
        '\u{1D4CB}', '\u{1D4CC}', '\u{1D4CD}', '\u{1D4CE}', '\u{1D4CF}',
    ],
    digits: None,
};

impl StyleTable {
    /// Look up the styled glyph for `c`, or return `c` when it has none.
    #[must_use]
    pub fn map_char(&self, c: char) -> char {
        let index = |base: char| (u32::from(c) - u32::from(base)) as usize;
        match c {
            'A'..='Z' => self.upper[index('A')],
            'a'..='z' => self.lower[index('a')],
            '0'..='9' => self.digits.map_or(c, |digits| digits[index('0')]),
            _ => c,
        }
    }

    /// Apply the table to every character of `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.map_char(c)).collect()
    }
}

/// Emphasis spans open around the text being rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSpans {
    pub heading: bool,
    pub strong: bool,
    pub italic: bool,
}

/// The single styling pass applied to a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Styling {
    /// Heading text, always bold sans-serif.
    Heading,
    Strong(StrongStyle),
    Italic(ItalicStyle),
    Plain,
}

impl Styling {
    /// Pick the styling for a text run.
    ///
    /// Precedence, highest first: heading, strong, italic. Only one styling
    /// is ever applied, so bold-italic text renders as bold.
    #[must_use]
    pub fn resolve(spans: ActiveSpans, config: &RenderConfig) -> Self {
        let precedence = [
            (spans.heading, Self::Heading),
            (spans.strong, Self::Strong(config.strong_style)),
            (spans.italic, Self::Italic(config.italic_style)),
        ];
        precedence
            .into_iter()
            .find_map(|(active, styling)| active.then_some(styling))
            .unwrap_or(Self::Plain)
    }

    /// Apply this styling to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Heading | Self::Strong(StrongStyle::BoldSansSerif) => {
                Cow::Owned(BOLD_SANS_SERIF.apply(text))
            }
            Self::Strong(StrongStyle::Markers) => Cow::Owned(format!("**{text}**")),
            Self::Italic(ItalicStyle::Markers) => Cow::Owned(format!("*{text}*")),
            Self::Italic(ItalicStyle::Script) => Cow::Owned(SCRIPT.apply(text)),
            Self::Italic(ItalicStyle::SlantedSansSerif) => {
                Cow::Owned(SLANTED_SANS_SERIF.apply(text))
            }
            Self::Strong(StrongStyle::Plain) | Self::Italic(ItalicStyle::Plain) | Self::Plain => {
                Cow::Borrowed(text)
            }
        }
    }
}
