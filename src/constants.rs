//! Application constants.
//!
//! Centralizes delimiter characters and configuration defaults.

/// Delimiters of the flat lyric encoding, from outermost to innermost.
pub mod delimiters {
    /// Joins stanzas.
    pub const STANZA: char = '.';

    /// Joins lines within a stanza.
    pub const LINE: char = ',';

    /// Joins words within a line.
    pub const WORD: char = ';';

    /// Joins syllables within a word.
    pub const SYLLABLE: char = '-';

    /// Escape prefix used by the `escape` delimiter policy.
    pub const ESCAPE: char = '\\';

    /// All four structural delimiters in precedence order.
    pub const ALL: [char; 4] = [STANZA, LINE, WORD, SYLLABLE];
}

/// Hyphenation dictionary constants.
pub mod dictionary {
    /// Language used when none is configured.
    pub const DEFAULT_LANGUAGE: &str = "fi";

    /// File name suffix of a pattern dictionary under the resource root.
    pub const FILE_SUFFIX: &str = ".standard.bincode";
}

/// Environment variable names read by `Config::load`.
pub mod env {
    /// Hyphenation language code.
    pub const LANGUAGE: &str = "LYRIC_SYLLABLES_LANGUAGE";

    /// Delimiter policy (`passthrough`, `strip`, `escape`).
    pub const DELIMITERS: &str = "LYRIC_SYLLABLES_DELIMITERS";

    /// Output format (`encoded`, `json`).
    pub const FORMAT: &str = "LYRIC_SYLLABLES_FORMAT";
}

/// Process exit codes.
pub mod exit {
    /// Wrong command line usage.
    pub const USAGE: u8 = 1;

    /// The hyphenator could not be initialized.
    pub const STARTUP: u8 = 2;

    /// Any other failure after startup, e.g. writing the output.
    pub const RUNTIME: u8 = 3;
}
