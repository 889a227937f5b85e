//! Treatment of delimiter characters that occur inside words.
//!
//! Lyrics carry natural punctuation (`Hei, sinä.`) that collides with the
//! structural delimiters. The policy decides whether that punctuation is kept
//! as-is, removed, or backslash-escaped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::delimiters;
use crate::error::{Error, Result};

/// How literal `.`, `,`, `;` and `-` inside words are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterPolicy {
    /// Emit words unchanged. Punctuation stays ambiguous to the consumer.
    #[default]
    Passthrough,
    /// Remove delimiter characters from words before hyphenation.
    Strip,
    /// Prefix delimiter characters (and the escape character) with `\`.
    Escape,
}

impl DelimiterPolicy {
    /// Returns all policies in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Passthrough, Self::Strip, Self::Escape]
    }

    /// Returns the name used on the command line and in the environment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Strip => "strip",
            Self::Escape => "escape",
        }
    }

    /// Prepare a raw word for hyphenation.
    ///
    /// Only `Strip` changes the word; an empty result means the word vanished.
    pub fn prepare_word(self, word: &str) -> String {
        match self {
            Self::Strip => word.chars().filter(|c| !is_delimiter(*c)).collect(),
            Self::Passthrough | Self::Escape => word.to_string(),
        }
    }

    /// Encode one syllable for output.
    pub fn encode_syllable(self, syllable: &str) -> String {
        match self {
            Self::Escape => escape(syllable),
            Self::Passthrough | Self::Strip => syllable.to_string(),
        }
    }
}

impl fmt::Display for DelimiterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DelimiterPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|policy| policy.name() == wanted)
            .ok_or_else(|| {
                Error::config(
                    format!("Unknown delimiter policy '{}'", s.trim()),
                    "Use 'passthrough', 'strip' or 'escape'",
                )
            })
    }
}

/// Whether `c` is one of the four structural delimiters.
pub fn is_delimiter(c: char) -> bool {
    delimiters::ALL.contains(&c)
}

/// Backslash-escape delimiters and the escape character itself.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_delimiter(c) || c == delimiters::ESCAPE {
            out.push(delimiters::ESCAPE);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn strip_removes_only_delimiters() {
        assert_eq!(DelimiterPolicy::Strip.prepare_word("Hei,"), "Hei");
        assert_eq!(DelimiterPolicy::Strip.prepare_word("jo-kin!"), "jokin!");
        assert_eq!(DelimiterPolicy::Strip.prepare_word("--"), "");
    }

    #[test]
    fn passthrough_and_escape_keep_words_for_hyphenation() {
        assert_eq!(DelimiterPolicy::Passthrough.prepare_word("Hei,"), "Hei,");
        assert_eq!(DelimiterPolicy::Escape.prepare_word("Hei,"), "Hei,");
    }

    #[test]
    fn escape_prefixes_delimiters_and_backslash() {
        assert_eq!(escape("a.b,c;d-e"), r"a\.b\,c\;d\-e");
        assert_eq!(escape(r"x\y"), r"x\\y");
        assert_eq!(escape("kissa"), "kissa");
    }

    #[test]
    fn only_escape_policy_changes_syllables() {
        assert_eq!(DelimiterPolicy::Escape.encode_syllable("sa,"), r"sa\,");
        assert_eq!(DelimiterPolicy::Passthrough.encode_syllable("sa,"), "sa,");
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("Escape".parse::<DelimiterPolicy>().unwrap(), DelimiterPolicy::Escape);
        assert_eq!(" strip ".parse::<DelimiterPolicy>().unwrap(), DelimiterPolicy::Strip);
        assert!("quote".parse::<DelimiterPolicy>().is_err());
    }
}
