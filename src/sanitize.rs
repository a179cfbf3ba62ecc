//! Reduction of arbitrary text to the printable ASCII range that the built-in
//! font can show without an embedded encoding.

/// Typographic characters with a close plain-ASCII spelling. Anything not in
/// this table and outside ASCII becomes [`REPLACEMENT`].
pub const REPLACEMENTS: &[(char, &str)] = &[
    // double quotes
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    ('\u{201F}', "\""),
    // single quotes
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201A}', "'"),
    ('\u{201B}', "'"),
    // dashes
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
    ('\u{2212}', "-"),
    // bullets and arrows
    ('\u{2022}', "-"),
    ('\u{00B7}', "-"),
    ('\u{25BA}', ">"),
    ('\u{2192}', "->"),
    ('\u{2190}', "<-"),
    ('\u{2713}', "[ok]"),
    ('\u{2026}', "..."),
    // spaces
    ('\u{00A0}', " "),
    ('\u{2002}', " "),
    ('\u{2003}', " "),
    ('\u{2009}', " "),
    ('\u{202F}', " "),
];

/// Stand-in for any character outside ASCII without a table entry.
pub const REPLACEMENT: char = '?';

/// Maps `text` onto printable ASCII (`0x20..=0x7E`).
///
/// Table entries are substituted first; any remaining code point at or above
/// 128 becomes `?`. ASCII control characters (tabs included) become a space,
/// so the result can be embedded in a content stream string as is.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some((_, replacement)) = REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
            out.push_str(replacement);
        } else if ch.is_ascii_control() {
            out.push(' ');
        } else if ch.is_ascii() {
            out.push(ch);
        } else {
            out.push(REPLACEMENT);
        }
    }
    out
}
