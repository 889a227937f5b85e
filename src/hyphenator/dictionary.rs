//! Pattern-dictionary hyphenator.
//!
//! Loads a Knuth-Liang pattern dictionary (`<code>.standard.bincode`) from a
//! resource root once at startup and hyphenates words against it.

use std::fmt;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use hyphenation::{Hyphenator, Iter, Language, Load, Standard};

use super::{Hyphenate, HyphenationError};
use crate::constants;
use crate::error::{Error, Result};

/// Language codes accepted by [`DictionaryHyphenator::load`], with the
/// dictionary file stem each one resolves to.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("fi", "fi"),
    ("en", "en-us"),
    ("en-us", "en-us"),
    ("en-gb", "en-gb"),
    ("sv", "sv"),
    ("et", "et"),
    ("da", "da"),
    ("nb", "nb"),
    ("nn", "nn"),
    ("de", "de-1996"),
    ("de-1996", "de-1996"),
    ("nl", "nl"),
    ("fr", "fr"),
    ("es", "es"),
    ("it", "it"),
    ("pt", "pt"),
    ("pl", "pl"),
    ("hu", "hu"),
    ("ru", "ru"),
];

const UNSUPPORTED_LANGUAGE_HINT: &str =
    "Supported languages: fi, en, en-us, en-gb, sv, et, da, nb, nn, de, nl, fr, es, it, pt, pl, hu, ru";

/// Map a dictionary file stem to the pattern set it holds.
fn language_for_stem(stem: &str) -> Option<Language> {
    let language = match stem {
        "fi" => Language::Finnish,
        "en-us" => Language::EnglishUS,
        "en-gb" => Language::EnglishGB,
        "sv" => Language::Swedish,
        "et" => Language::Estonian,
        "da" => Language::Danish,
        "nb" => Language::NorwegianBokmal,
        "nn" => Language::NorwegianNynorsk,
        "de-1996" => Language::German1996,
        "nl" => Language::Dutch,
        "fr" => Language::French,
        "es" => Language::Spanish,
        "it" => Language::Italian,
        "pt" => Language::Portuguese,
        "pl" => Language::Polish,
        "hu" => Language::Hungarian,
        "ru" => Language::Russian,
        _ => return None,
    };
    Some(language)
}

/// Resolve a user supplied language code to its dictionary file stem.
fn dictionary_stem(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_lowercase().replace('_', "-");
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, stem)| *stem)
}

fn unsupported_language(code: &str) -> Error {
    Error::config(
        format!("Unsupported hyphenation language '{code}'"),
        UNSUPPORTED_LANGUAGE_HINT,
    )
}

/// Path of the dictionary for `code` under `root`, after `~` expansion.
pub fn dictionary_path(code: &str, root: &Path) -> Result<PathBuf> {
    let stem = dictionary_stem(code).ok_or_else(|| unsupported_language(code))?;
    let root = root.to_str().map_or_else(
        || root.to_path_buf(),
        |utf8| PathBuf::from(shellexpand::tilde(utf8).into_owned()),
    );
    Ok(root.join(format!("{stem}{}", constants::dictionary::FILE_SUFFIX)))
}

/// Hyphenator backed by a loaded pattern dictionary.
pub struct DictionaryHyphenator {
    language: String,
    dictionary: Standard,
}

impl fmt::Debug for DictionaryHyphenator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryHyphenator")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl DictionaryHyphenator {
    /// Load the dictionary for `language` from `resource_root`.
    ///
    /// Any failure here is a startup error: an unknown language code, a
    /// missing or unreadable file, or a file holding patterns for another
    /// language.
    pub fn load(language: &str, resource_root: impl AsRef<Path>) -> Result<Self> {
        let stem = dictionary_stem(language).ok_or_else(|| unsupported_language(language))?;
        let lang = language_for_stem(stem).ok_or_else(|| unsupported_language(language))?;
        let path = dictionary_path(language, resource_root.as_ref())?;

        let file = fs_err::File::open(&path).map_err(|e| Error::dictionary(stem, &path, &e))?;
        let mut reader = BufReader::new(file);
        let dictionary = Standard::from_reader(lang, &mut reader).map_err(|e| {
            let io = std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string());
            Error::dictionary(stem, &path, &io)
        })?;

        tracing::info!("Loaded {stem} hyphenation dictionary from {}", path.display());

        Ok(Self {
            language: stem.to_string(),
            dictionary,
        })
    }
}

impl Hyphenate for DictionaryHyphenator {
    fn hyphenate(&self, word: &str) -> std::result::Result<Vec<String>, HyphenationError> {
        if word.trim().is_empty() {
            return Err(HyphenationError::EmptyWord);
        }

        let hyphenated = self.dictionary.hyphenate(word);
        let syllables: Vec<String> = hyphenated.iter().segments().map(String::from).collect();
        tracing::debug!("Hyphenated '{word}' into {} syllables", syllables.len());

        Ok(syllables)
    }
}
