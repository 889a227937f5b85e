//! Hyphenation capability.
//!
//! The encoder never hyphenates on its own; it asks a [`Hyphenate`]
//! implementation for the syllables of one word at a time. Production code
//! uses [`DictionaryHyphenator`], tests inject deterministic fakes.

pub mod dictionary;

pub use dictionary::{DictionaryHyphenator, SUPPORTED_LANGUAGES};

use thiserror::Error;

/// Failure to hyphenate a single word.
///
/// Never fatal: the encoder passes the word through unsplit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HyphenationError {
    /// The word had no content to hyphenate.
    #[error("word is empty")]
    EmptyWord,

    /// The backend rejected the word.
    #[error("hyphenator rejected word: {0}")]
    Rejected(String),
}

/// Splits a word into its syllables.
pub trait Hyphenate {
    /// Returns the syllables of `word` in order.
    ///
    /// An empty vector means the backend had nothing to offer; callers treat
    /// that like a single unsplit syllable.
    fn hyphenate(&self, word: &str) -> Result<Vec<String>, HyphenationError>;
}

impl<T: Hyphenate + ?Sized> Hyphenate for &T {
    fn hyphenate(&self, word: &str) -> Result<Vec<String>, HyphenationError> {
        (**self).hyphenate(word)
    }
}

impl<T: Hyphenate + ?Sized> Hyphenate for Box<T> {
    fn hyphenate(&self, word: &str) -> Result<Vec<String>, HyphenationError> {
        (**self).hyphenate(word)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    struct Halves;

    impl Hyphenate for Halves {
        fn hyphenate(&self, word: &str) -> Result<Vec<String>, HyphenationError> {
            if word.is_empty() {
                return Err(HyphenationError::EmptyWord);
            }
            let mid = word.len() / 2;
            Ok(vec![word[..mid].to_string(), word[mid..].to_string()])
        }
    }

    #[test]
    fn boxed_and_borrowed_hyphenators_delegate() {
        let boxed: Box<dyn Hyphenate> = Box::new(Halves);
        assert_eq!(boxed.hyphenate("kissa").unwrap(), vec!["ki", "ssa"]);

        let borrowed = &Halves;
        assert_eq!(borrowed.hyphenate("").unwrap_err(), HyphenationError::EmptyWord);
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(HyphenationError::EmptyWord.to_string(), "word is empty");
        assert_eq!(
            HyphenationError::Rejected("digits".into()).to_string(),
            "hyphenator rejected word: digits"
        );
    }
}
