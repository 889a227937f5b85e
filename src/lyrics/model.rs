//! Typed lyric tree: lyrics, stanzas, lines, words and syllables.

use serde::{Deserialize, Serialize};

/// One hyphenation unit of a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Syllable(pub String);

impl Syllable {
    /// Create a new syllable.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the syllable text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Syllable {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A whitespace-delimited token split into syllables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Word {
    /// Syllables in reading order.
    pub syllables: Vec<Syllable>,
}

impl Word {
    /// Build a word from its syllables.
    pub fn new<I, S>(syllables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Syllable>,
    {
        Self {
            syllables: syllables.into_iter().map(Into::into).collect(),
        }
    }

    /// The word without syllable boundaries.
    pub fn text(&self) -> String {
        self.syllables.iter().map(Syllable::as_str).collect()
    }

    /// Number of syllables.
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// The final syllable, which carries the rhyme.
    pub fn last_syllable(&self) -> Option<&Syllable> {
        self.syllables.last()
    }
}

/// A single line of lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    /// Words in reading order.
    pub words: Vec<Word>,
}

impl Line {
    /// Total syllables on the line.
    pub fn syllable_count(&self) -> usize {
        self.words.iter().map(Word::syllable_count).sum()
    }
}

/// A block of lines separated from its neighbours by blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stanza {
    /// Lines in reading order.
    pub lines: Vec<Line>,
}

impl Stanza {
    /// Total syllables in the stanza.
    pub fn syllable_count(&self) -> usize {
        self.lines.iter().map(Line::syllable_count).sum()
    }

    /// All words of the stanza in order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|line| line.words.iter())
    }
}

/// The whole text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lyrics {
    /// Stanzas in reading order.
    pub stanzas: Vec<Stanza>,
}

impl Lyrics {
    /// Total syllables in the lyrics.
    pub fn syllable_count(&self) -> usize {
        self.stanzas.iter().map(Stanza::syllable_count).sum()
    }

    /// All words of the lyrics in order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.stanzas.iter().flat_map(Stanza::words)
    }

    /// Number of lines across all stanzas.
    pub fn line_count(&self) -> usize {
        self.stanzas.iter().map(|s| s.lines.len()).sum()
    }

    /// Whether there are no words at all.
    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn sample() -> Lyrics {
        Lyrics {
            stanzas: vec![
                Stanza {
                    lines: vec![
                        Line { words: vec![Word::new(["kis", "sa"]), Word::new(["koi", "ra"])] },
                        Line { words: vec![Word::new(["juok", "see"])] },
                    ],
                },
                Stanza {
                    lines: vec![Line { words: vec![Word::new(["hauk", "kuu"])] }],
                },
            ],
        }
    }

    #[test]
    fn counts_syllables_at_every_level() {
        let lyrics = sample();
        assert_eq!(lyrics.stanzas[0].lines[0].syllable_count(), 4);
        assert_eq!(lyrics.stanzas[0].syllable_count(), 6);
        assert_eq!(lyrics.syllable_count(), 8);
        assert_eq!(lyrics.line_count(), 3);
    }

    #[test]
    fn words_flatten_in_reading_order() {
        let texts: Vec<String> = sample().words().map(Word::text).collect();
        assert_eq!(texts, vec!["kissa", "koira", "juoksee", "haukkuu"]);
        assert_eq!(sample().words().last().unwrap().last_syllable().unwrap().as_str(), "kuu");
    }

    #[test]
    fn serializes_syllables_as_plain_strings() {
        let json = serde_json::to_string(&Word::new(["kis", "sa"])).unwrap();
        assert_eq!(json, r#"{"syllables":["kis","sa"]}"#);
    }

    #[test]
    fn default_lyrics_are_empty() {
        assert!(Lyrics::default().is_empty());
        assert!(!sample().is_empty());
    }
}
