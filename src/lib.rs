//! `lyric-syllables` - hyphenated lyrics in a flat delimited encoding.
//!
//! This crate hyphenates lyric text word by word and encodes stanzas, lines,
//! words and syllables into a single string that a consumer can split apart
//! again without a structured document format.

pub mod config;
pub mod constants;
pub mod error;
pub mod hyphenator;
pub mod lyrics;

pub use error::{Error, Result};
pub use hyphenator::{DictionaryHyphenator, Hyphenate, HyphenationError};
pub use lyrics::{decode, encode, DelimiterPolicy, EncodeReport, Encoder, Lyrics};
