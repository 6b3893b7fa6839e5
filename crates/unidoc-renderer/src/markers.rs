//! List item markers.
//!
//! Ordered lists pick a numbering scheme by nesting level. The fallbacks for
//! numbers past the end of a scheme (`⓪21`, `(21)`, `🅐·2`, `ⅻ+1`, `ⅻ·51`)
//! are placeholders rather than a real extended numbering.

const CIRCLED_NUMBERS: [&str; 20] = [
    "①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩", "⑪", "⑫", "⑬", "⑭", "⑮", "⑯", "⑰", "⑱",
    "⑲", "⑳",
];

const PARENTHESIZED_NUMBERS: [&str; 20] = [
    "⑴", "⑵", "⑶", "⑷", "⑸", "⑹", "⑺", "⑻", "⑼", "⑽", "⑾", "⑿", "⒀", "⒁", "⒂", "⒃", "⒄", "⒅",
    "⒆", "⒇",
];

const CIRCLED_LETTERS: [&str; 26] = [
    "🅐", "🅑", "🅒", "🅓", "🅔", "🅕", "🅖", "🅗", "🅘", "🅙", "🅚", "🅛", "🅜", "🅝", "🅞", "🅟", "🅠", "🅡",
    "🅢", "🅣", "🅤", "🅥", "🅦", "🅧", "🅨", "🅩",
];

const LOWER_ROMAN: [&str; 12] = [
    "ⅰ", "ⅱ", "ⅲ", "ⅳ", "ⅴ", "ⅵ", "ⅶ", "ⅷ", "ⅸ", "ⅹ", "ⅺ", "ⅻ",
];

const UPPER_ROMAN: [&str; 12] = [
    "Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ", "Ⅷ", "Ⅸ", "Ⅹ", "Ⅺ", "Ⅻ",
];

/// Bullets for unordered lists, cycled by nesting depth.
const BULLETS: [&str; 6] = ["•", "◦", "▪", "▫", "‣", "⁃"];

/// Largest number rendered in Roman numerals.
const ROMAN_LIMIT: u64 = 50;

/// One-based lookup that never panics.
fn nth(table: &[&'static str], number: u64) -> Option<&'static str> {
    let index = usize::try_from(number.checked_sub(1)?).ok()?;
    table.get(index).copied()
}

/// Marker for item `number` of an ordered list at nesting `level` (1-based).
#[must_use]
pub fn ordered_marker(number: u64, level: usize) -> String {
    match level {
        1 => circled_number(number),
        2 => parenthesized_number(number),
        3 => circled_letter(number),
        4 => roman_numeral(number, false),
        5 => roman_numeral(number, true),
        _ => format!("⟨{number}⟩"),
    }
}

/// Bullet for an unordered list at nesting `depth` (1-based).
#[must_use]
pub fn bullet(depth: usize) -> &'static str {
    BULLETS[depth.saturating_sub(1) % BULLETS.len()]
}

fn circled_number(number: u64) -> String {
    nth(&CIRCLED_NUMBERS, number).map_or_else(|| format!("⓪{number}"), str::to_owned)
}

fn parenthesized_number(number: u64) -> String {
    nth(&PARENTHESIZED_NUMBERS, number).map_or_else(|| format!("({number})"), str::to_owned)
}

/// Letters repeat after Z with a cycle suffix: 27 is `🅐·2`.
fn circled_letter(number: u64) -> String {
    let Some(index) = number.checked_sub(1) else {
        return format!("⟨{number}⟩");
    };
    let letters = CIRCLED_LETTERS.len() as u64;
    let letter = nth(&CIRCLED_LETTERS, index % letters + 1).unwrap_or("🅐");
    match index / letters + 1 {
        1 => letter.to_owned(),
        cycle => format!("{letter}·{cycle}"),
    }
}

fn roman_numeral(number: u64, uppercase: bool) -> String {
    let (table, last) = if uppercase {
        (&UPPER_ROMAN, "Ⅻ")
    } else {
        (&LOWER_ROMAN, "ⅻ")
    };
    if number == 0 || number > ROMAN_LIMIT {
        return format!("{last}·{number}");
    }
    nth(table, number).map_or_else(
        || format!("{last}+{}", number - table.len() as u64),
        str::to_owned,
    )
}
