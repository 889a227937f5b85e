//! Hierarchical text encoder.
//!
//! Hyphenates every word of a lyric text and flattens the result into one
//! string: stanzas joined by `.`, lines by `,`, words by `;` and syllables by
//! `-`. Hyphenation failures never abort encoding; the word is kept whole.

use crate::constants::delimiters;
use crate::hyphenator::{Hyphenate, HyphenationError};

use super::escape::DelimiterPolicy;
use super::model::{Line, Lyrics, Stanza, Syllable, Word};
use super::split;

/// A word the hyphenator could not split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFailure {
    /// The word as handed to the hyphenator.
    pub word: String,
    /// Zero-based stanza index.
    pub stanza: usize,
    /// Zero-based line index within the stanza.
    pub line: usize,
    /// What the hyphenator reported.
    pub error: HyphenationError,
}

/// Everything produced by one encoding run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodeReport {
    /// The flat delimited string.
    pub output: String,
    /// The hyphenated tree the output was rendered from.
    pub lyrics: Lyrics,
    /// Words that passed through unsplit because hyphenation failed.
    pub failures: Vec<WordFailure>,
}

/// Encodes lyric text using an injected hyphenator.
pub struct Encoder<'h> {
    hyphenator: &'h dyn Hyphenate,
    policy: DelimiterPolicy,
}

impl<'h> Encoder<'h> {
    /// Create an encoder with the default (passthrough) delimiter policy.
    pub fn new(hyphenator: &'h dyn Hyphenate) -> Self {
        Self {
            hyphenator,
            policy: DelimiterPolicy::default(),
        }
    }

    /// Use a different delimiter policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: DelimiterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The delimiter policy in effect.
    pub const fn policy(&self) -> DelimiterPolicy {
        self.policy
    }

    /// Encode `text` into the flat delimited form.
    pub fn encode(&self, text: &str) -> String {
        self.encode_report(text).output
    }

    /// Encode `text`, keeping the hyphenated tree and per-word failures.
    pub fn encode_report(&self, text: &str) -> EncodeReport {
        let normalized = split::normalize_newlines(text);
        let mut failures = Vec::new();

        let mut lyrics = Lyrics::default();
        for (stanza_idx, stanza_text) in split::stanzas(&normalized).into_iter().enumerate() {
            let mut stanza = Stanza::default();
            for (line_idx, line_text) in split::lines(stanza_text).into_iter().enumerate() {
                let words = split::words(line_text)
                    .into_iter()
                    .filter_map(|word| self.hyphenate_word(word, stanza_idx, line_idx, &mut failures))
                    .collect();
                let line = Line { words };
                if !line.words.is_empty() {
                    stanza.lines.push(line);
                }
            }
            if !stanza.lines.is_empty() {
                lyrics.stanzas.push(stanza);
            }
        }

        let output = render(&lyrics, self.policy);

        tracing::debug!(
            "Encoded {} stanzas, {} lines, {} syllables ({} hyphenation failures)",
            lyrics.stanzas.len(),
            lyrics.line_count(),
            lyrics.syllable_count(),
            failures.len()
        );

        EncodeReport { output, lyrics, failures }
    }

    /// Hyphenate one word; `None` when the delimiter policy removed all of it.
    fn hyphenate_word(
        &self,
        raw: &str,
        stanza: usize,
        line: usize,
        failures: &mut Vec<WordFailure>,
    ) -> Option<Word> {
        let word = self.policy.prepare_word(raw);
        if word.is_empty() {
            return None;
        }

        match self.hyphenator.hyphenate(&word) {
            Ok(syllables) if !syllables.is_empty() => {
                Some(Word::new(syllables.into_iter().map(Syllable)))
            }
            Ok(_) => Some(Word::new([word.as_str()])),
            Err(error) => {
                tracing::warn!("Hyphenation failed for word '{word}': {error}");
                let whole = Word::new([word.as_str()]);
                failures.push(WordFailure { word, stanza, line, error });
                Some(whole)
            }
        }
    }
}

/// Encode `text` with the default delimiter policy.
pub fn encode(text: &str, hyphenator: &dyn Hyphenate) -> String {
    Encoder::new(hyphenator).encode(text)
}

/// Flatten a lyric tree into the delimited form.
pub fn render(lyrics: &Lyrics, policy: DelimiterPolicy) -> String {
    let stanzas: Vec<String> = lyrics
        .stanzas
        .iter()
        .map(|stanza| {
            let lines: Vec<String> = stanza
                .lines
                .iter()
                .map(|line| {
                    let words: Vec<String> =
                        line.words.iter().map(|word| render_word(word, policy)).collect();
                    join(&words, delimiters::WORD)
                })
                .collect();
            join(&lines, delimiters::LINE)
        })
        .collect();
    join(&stanzas, delimiters::STANZA)
}

fn render_word(word: &Word, policy: DelimiterPolicy) -> String {
    let syllables: Vec<String> = word
        .syllables
        .iter()
        .map(|s| policy.encode_syllable(s.as_str()))
        .collect();
    join(&syllables, delimiters::SYLLABLE)
}

fn join(parts: &[String], separator: char) -> String {
    let mut buf = [0; 4];
    parts.join(&*separator.encode_utf8(&mut buf))
}
