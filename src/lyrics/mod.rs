//! Lyrics processing module.
//!
//! Turns raw lyric text into hyphenated stanzas, lines, words and syllables,
//! and converts that tree to and from the flat delimited encoding:
//!
//! ```text
//! kis-sa;koi-ra,juok-see;hauk-kuu.seu-raa-va
//! ```
//!
//! `.` separates stanzas, `,` lines, `;` words and `-` syllables.

pub mod decoder;
pub mod encoder;
pub mod escape;
pub mod model;
pub mod rhyme;
pub mod split;

pub use decoder::decode;
pub use encoder::{encode, render, EncodeReport, Encoder, WordFailure};
pub use escape::DelimiterPolicy;
pub use model::{Line, Lyrics, Stanza, Syllable, Word};
pub use rhyme::{group_rhymes, rhyme_type, RhymeGroup, RhymeType};
