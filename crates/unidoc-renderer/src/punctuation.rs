//! Typographic dash substitution.

use std::borrow::Cow;

const EM_DASH: &str = "\u{2014}";
const EN_DASH: &str = "\u{2013}";

/// Replace `---` with an em dash, then any remaining `--` with an en dash.
///
/// Triple hyphens are consumed first so `---` never turns into an en dash
/// followed by a stray hyphen.
#[must_use]
pub fn smart_dashes(text: &str) -> Cow<'_, str> {
    if !text.contains("--") {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("---", EM_DASH).replace("--", EN_DASH))
}
