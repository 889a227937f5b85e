//! Splitting raw lyric text into stanzas, lines and words.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching a stanza break: a newline, optional whitespace, a newline.
///
/// `\s*` also consumes further newlines, so any run of blank lines is one break.
#[allow(clippy::expect_used)]
static RE_STANZA_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n").expect("valid regex: RE_STANZA_BREAK")
});

/// Regex matching the whitespace between words.
#[allow(clippy::expect_used)]
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("valid regex: RE_WHITESPACE")
});

/// Convert `\r\n` and lone `\r` to `\n` and trim the whole text.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Split normalized text into stanzas.
///
/// Always yields at least one (possibly empty) stanza.
pub fn stanzas(text: &str) -> Vec<&str> {
    RE_STANZA_BREAK.split(text).collect()
}

/// Split a stanza into its lines.
pub fn lines(stanza: &str) -> Vec<&str> {
    stanza.trim().split('\n').collect()
}

/// Split a line into words, dropping empty tokens.
pub fn words(line: &str) -> Vec<&str> {
    RE_WHITESPACE
        .split(line.trim())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn normalizes_every_newline_convention() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc");
        assert_eq!(normalize_newlines("  \n a \n "), "a");
    }

    #[test]
    fn blank_line_runs_are_one_stanza_break() {
        assert_eq!(stanzas("a\n\nb"), vec!["a", "b"]);
        assert_eq!(stanzas("a\n\n\n\nb"), vec!["a", "b"]);
        assert_eq!(stanzas("a\n  \t\n \nb"), vec!["a", "b"]);
    }

    #[test]
    fn single_newline_is_not_a_stanza_break() {
        assert_eq!(stanzas("a\nb"), vec!["a\nb"]);
        assert_eq!(lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn empty_text_is_one_empty_stanza() {
        assert_eq!(stanzas(""), vec![""]);
        assert_eq!(lines(""), vec![""]);
        assert!(words("").is_empty());
    }

    #[test]
    fn consecutive_whitespace_does_not_create_words() {
        assert_eq!(words("a    b"), vec!["a", "b"]);
        assert_eq!(words("\t kissa \u{a0} koira  "), vec!["kissa", "koira"]);
    }
}
