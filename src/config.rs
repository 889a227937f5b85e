//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Command line flags take precedence over anything loaded here.

use std::env;
use std::fmt;
use std::str::FromStr;

use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{Error, Result};
use crate::lyrics::DelimiterPolicy;

/// How the binary prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The flat delimited string.
    #[default]
    Encoded,
    /// The decoded stanza/line/word/syllable tree as JSON.
    Json,
}

impl OutputFormat {
    /// Returns the name used on the command line and in the environment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Encoded => "encoded",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encoded" => Ok(Self::Encoded),
            "json" => Ok(Self::Json),
            other => Err(Error::config(
                format!("Unknown output format '{other}'"),
                "Use 'encoded' or 'json'",
            )),
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Hyphenation language code, e.g. `fi`
    pub language: String,
    /// Treatment of literal delimiter characters inside words
    pub delimiter_policy: DelimiterPolicy,
    /// Output format of the binary
    pub format: OutputFormat,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            language: constants::dictionary::DEFAULT_LANGUAGE.to_string(),
            delimiter_policy: DelimiterPolicy::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults; malformed values are errors.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(language) = var(constants::env::LANGUAGE) {
            config.language = language.trim().to_ascii_lowercase();
        }

        if let Some(policy) = var(constants::env::DELIMITERS) {
            config.delimiter_policy = policy.parse()?;
        }

        if let Some(format) = var(constants::env::FORMAT) {
            config.format = format.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.language, "fi");
        assert_eq!(config.delimiter_policy, DelimiterPolicy::Passthrough);
        assert_eq!(config.format, OutputFormat::Encoded);
        assert_eq!(config.app_name(), "lyric-syllables");
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_vars(vars(&[
            ("LYRIC_SYLLABLES_LANGUAGE", " EN-US "),
            ("LYRIC_SYLLABLES_DELIMITERS", "escape"),
            ("LYRIC_SYLLABLES_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.language, "en-us");
        assert_eq!(config.delimiter_policy, DelimiterPolicy::Escape);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = Config::from_vars(vars(&[("LYRIC_SYLLABLES_LANGUAGE", "  ")])).unwrap();
        assert_eq!(config.language, "fi");
    }

    #[test]
    fn malformed_policy_is_a_config_error() {
        let err = Config::from_vars(vars(&[("LYRIC_SYLLABLES_DELIMITERS", "quote")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn output_format_round_trips_through_name() {
        for format in [OutputFormat::Encoded, OutputFormat::Json] {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
