//! Decoder for the flat lyric encoding.
//!
//! Rebuilds the stanza/line/word/syllable tree by splitting on `.`, then `,`,
//! then `;`, then `-`. Empty entries are dropped at every level, so stray
//! delimiters never produce empty stanzas, lines, words or syllables.

use crate::constants::delimiters;
use crate::error::{Error, Result};

use super::escape::DelimiterPolicy;
use super::model::{Line, Lyrics, Stanza, Syllable, Word};

/// Accumulates the tree while scanning the encoded string.
#[derive(Default)]
struct TreeBuilder {
    lyrics: Lyrics,
    stanza: Stanza,
    line: Line,
    word: Word,
    syllable: String,
}

impl TreeBuilder {
    fn push_char(&mut self, c: char) {
        self.syllable.push(c);
    }

    fn end_syllable(&mut self) {
        if !self.syllable.is_empty() {
            let text = std::mem::take(&mut self.syllable);
            self.word.syllables.push(Syllable(text));
        }
    }

    fn end_word(&mut self) {
        self.end_syllable();
        if !self.word.syllables.is_empty() {
            self.line.words.push(std::mem::take(&mut self.word));
        }
    }

    fn end_line(&mut self) {
        self.end_word();
        if !self.line.words.is_empty() {
            self.stanza.lines.push(std::mem::take(&mut self.line));
        }
    }

    fn end_stanza(&mut self) {
        self.end_line();
        if !self.stanza.lines.is_empty() {
            self.lyrics.stanzas.push(std::mem::take(&mut self.stanza));
        }
    }

    fn finish(mut self) -> Lyrics {
        self.end_stanza();
        self.lyrics
    }
}

/// Decode an encoded lyric string produced under `policy`.
///
/// Only the `Escape` policy can fail, on a trailing unpaired `\`.
pub fn decode(encoded: &str, policy: DelimiterPolicy) -> Result<Lyrics> {
    let escapes = policy == DelimiterPolicy::Escape;
    let mut builder = TreeBuilder::default();
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        match c {
            delimiters::ESCAPE if escapes => {
                let escaped = chars.next().ok_or_else(|| {
                    Error::Parse("encoded lyrics end with an unpaired escape character".into())
                })?;
                builder.push_char(escaped);
            }
            delimiters::STANZA => builder.end_stanza(),
            delimiters::LINE => builder.end_line(),
            delimiters::WORD => builder.end_word(),
            delimiters::SYLLABLE => builder.end_syllable(),
            other => builder.push_char(other),
        }
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn texts(lyrics: &Lyrics) -> Vec<Vec<Vec<String>>> {
        lyrics
            .stanzas
            .iter()
            .map(|s| {
                s.lines
                    .iter()
                    .map(|l| l.words.iter().map(Word::text).collect())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn decodes_full_hierarchy() {
        let lyrics = decode("kis-sa;koi-ra,juok-see.hauk-kuu", DelimiterPolicy::Passthrough).unwrap();
        assert_eq!(
            texts(&lyrics),
            vec![
                vec![vec!["kissa", "koira"], vec!["juoksee"]],
                vec![vec!["haukkuu"]],
            ]
        );
        assert_eq!(lyrics.stanzas[0].lines[0].words[0].syllable_count(), 2);
        assert_eq!(lyrics.syllable_count(), 8);
    }

    #[test]
    fn empty_input_has_no_stanzas() {
        assert!(decode("", DelimiterPolicy::Passthrough).unwrap().stanzas.is_empty());
    }

    #[test]
    fn empty_entries_are_removed() {
        let lyrics = decode("a;;b,,c..d-", DelimiterPolicy::Passthrough).unwrap();
        assert_eq!(
            texts(&lyrics),
            vec![vec![vec!["a", "b"], vec!["c"]], vec![vec!["d"]]]
        );
    }

    #[test]
    fn escaped_delimiters_stay_inside_syllables() {
        let lyrics = decode(r"Hei\,;kis-sa\.\\", DelimiterPolicy::Escape).unwrap();
        let words: Vec<String> = lyrics.words().map(Word::text).collect();
        assert_eq!(words, vec!["Hei,", r"kissa.\"]);
        assert_eq!(lyrics.stanzas.len(), 1);
    }

    #[test]
    fn backslash_is_literal_without_escape_policy() {
        let lyrics = decode(r"a\b", DelimiterPolicy::Passthrough).unwrap();
        assert_eq!(lyrics.words().next().unwrap().text(), r"a\b");
    }

    #[test]
    fn unpaired_escape_is_a_parse_error() {
        let err = decode(r"kissa\", DelimiterPolicy::Escape).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
