//! Removal of lightweight markup markers from logical lines.
//!
//! Only leading markers are removed; the same characters in the middle of a
//! line are kept as literal text. Backticks are the exception: they only ever
//! delimit inline code and are dropped wherever they occur.

/// Leading marker classes, stripped in this order. Each pass removes the
/// leading run of its marker together with any interleaved spaces.
const LEADING_MARKERS: [char; 4] = ['#', '*', '-', '>'];

/// Splits `text` into logical lines at `\n`, `\r\n` or a lone `\r`.
///
/// Every line ending separates two lines, so a trailing line ending leaves a
/// blank last line. Only empty text has no lines at all.
pub fn logical_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines.push(rest);
    lines
}

/// Strips heading, bullet and blockquote markers from the start of `line`,
/// drops every backtick and trims trailing whitespace.
///
/// An empty result is meaningful: it stands for a blank line and is kept as
/// a paragraph break further down the pipeline.
pub fn strip_markup(line: &str) -> String {
    let line: String = line.chars().filter(|&ch| ch != '`').collect();
    let mut stripped = line.trim_end();
    for marker in LEADING_MARKERS {
        stripped = stripped.trim_start_matches(|ch: char| ch == marker || ch == ' ');
    }
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings() {
        assert_eq!(strip_markup("# Hello"), "Hello");
        assert_eq!(strip_markup("### Deep heading"), "Deep heading");
    }

    #[test]
    fn bullets_and_quotes() {
        assert_eq!(strip_markup("- item"), "item");
        assert_eq!(strip_markup("* item"), "item");
        assert_eq!(strip_markup("> quoted"), "quoted");
        assert_eq!(strip_markup("  - indented item"), "indented item");
    }

    #[test]
    fn mid_line_markers_are_literal() {
        assert_eq!(strip_markup("a - b # c > d * e"), "a - b # c > d * e");
        assert_eq!(strip_markup("# C# > Java"), "C# > Java");
    }

    #[test]
    fn backticks_are_removed_anywhere() {
        assert_eq!(strip_markup("run `cargo build` now"), "run cargo build now");
        assert_eq!(strip_markup("```"), "");
    }

    #[test]
    fn marker_only_lines_become_blank() {
        assert_eq!(strip_markup("#"), "");
        assert_eq!(strip_markup("-   "), "");
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn line_endings_are_normalized() {
        assert_eq!(logical_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert!(logical_lines("").is_empty());
        assert_eq!(logical_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(logical_lines("a\n"), vec!["a", ""]);
        assert_eq!(logical_lines("a\r\n\r\n"), vec!["a", "", ""]);
        assert_eq!(logical_lines("\n"), vec!["", ""]);
    }
}
