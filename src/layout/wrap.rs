/// Wraps a single logical line into physical lines of at most `max_chars`
/// characters, breaking only at whitespace. Widths are counted in
/// characters, not bytes.
///
/// Words are packed greedily, joined by a single space. A word longer than
/// `max_chars` is never split; it sits alone on its own overflowing line. A
/// blank input yields exactly one empty line so paragraph breaks survive.
pub fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in line.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_is_untouched() {
        assert_eq!(wrap_line("Hello world", 90), vec!["Hello world"]);
    }

    #[test]
    fn blank_line_is_preserved() {
        assert_eq!(wrap_line("", 90), vec![""]);
        assert_eq!(wrap_line("   ", 90), vec![""]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_line("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn exact_fit_stays_on_one_line() {
        assert_eq!(wrap_line("aaaa bbbbb", 10), vec!["aaaa bbbbb"]);
        assert_eq!(wrap_line("aaaa bbbbbb", 10), vec!["aaaa", "bbbbbb"]);
    }

    #[test]
    fn long_token_is_not_split() {
        let url = "https://example.com/a/very/long/path/that/does/not/fit";
        assert_eq!(
            wrap_line(&format!("see {url} here"), 20),
            vec!["see".to_string(), url.to_string(), "here".to_string()]
        );
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        // each word is 4 characters but 8 bytes
        assert_eq!(
            wrap_line("\u{e9}\u{e9}\u{e9}\u{e9} \u{e9}\u{e9}\u{e9}\u{e9}", 9),
            vec!["\u{e9}\u{e9}\u{e9}\u{e9} \u{e9}\u{e9}\u{e9}\u{e9}"]
        );
        assert_eq!(wrap_line("\u{e9}\u{e9} \u{e9}\u{e9}", 4).len(), 2);
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        assert_eq!(wrap_line("a   b \t c", 90), vec!["a b c"]);
    }

    #[test]
    fn every_line_fits_unless_single_token() {
        let text = lipsum::lipsum(400);
        for width in [1, 7, 20, 90] {
            for line in wrap_line(&text, width) {
                assert!(
                    line.len() <= width || !line.contains(' '),
                    "{line:?} exceeds {width}"
                );
            }
        }
    }
}
