//! `lyric-syllables` - hyphenate lyrics and print the flat delimited encoding.
//!
//! Usage: `lyric-syllables <LYRICS> <HYPHENATOR_ROOT>`
//!
//! Prints the encoded lyrics to stdout. Hyphenation diagnostics go to stderr.
//! Exit code 1 on wrong usage, 2 when the hyphenator cannot be initialized,
//! 3 on any other failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lyric_syllables::config::{Config, OutputFormat};
use lyric_syllables::constants;
use lyric_syllables::lyrics::{
    group_rhymes, DelimiterPolicy, EncodeReport, Encoder, Lyrics, RhymeGroup,
};
use lyric_syllables::{DictionaryHyphenator, Error};

#[derive(Parser, Debug)]
#[command(
    name = "lyric-syllables",
    version,
    about = "Hyphenate lyrics into a stanza.line,word;syllable-syllable encoding",
    long_about = "Hyphenates every word of the given lyrics and prints one string where\n\
                  '.' separates stanzas, ',' lines, ';' words and '-' syllables.\n\
                  Stanzas are separated by blank lines in the input."
)]
struct Args {
    /// Lyrics text to hyphenate.
    #[arg(allow_hyphen_values = true)]
    lyrics: String,

    /// Directory containing `<language>.standard.bincode` hyphenation dictionaries.
    hyphenator_root: PathBuf,

    /// Hyphenation language code ("fi", "en-us", "sv", ...).
    #[arg(long)]
    language: Option<String>,

    /// How '.', ',', ';' and '-' inside words are handled: passthrough, strip or escape.
    #[arg(long)]
    delimiters: Option<DelimiterPolicy>,

    /// Output format: encoded or json.
    #[arg(long)]
    format: Option<OutputFormat>,
}

/// JSON rendering of one run.
#[derive(Serialize)]
struct JsonOutput<'a> {
    encoded: &'a str,
    delimiters: DelimiterPolicy,
    syllables: usize,
    lyrics: &'a Lyrics,
    /// Rhyme groups by last syllable, one list per stanza.
    rhymes: Vec<Vec<RhymeGroup>>,
    failed_words: Vec<&'a str>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if let Err(write_err) = e.print() {
                tracing::error!("Failed to print usage: {write_err}");
            }
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(constants::exit::USAGE),
            };
        }
    };

    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            if let Some(e @ Error::Dictionary { .. }) = err.downcast_ref::<Error>() {
                if let Some(hint) = e.hint() {
                    eprintln!("hint: {hint}");
                }
            }
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Process exit code for an error returned by [`run`].
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_startup() => constants::exit::STARTUP,
        _ => constants::exit::RUNTIME,
    }
}

fn run(args: Args) -> anyhow::Result<String> {
    let mut config = Config::load()?;
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(policy) = args.delimiters {
        config.delimiter_policy = policy;
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    tracing::debug!(
        "{} {}: language={}, delimiters={}, format={}",
        config.app_name(),
        config.app_version(),
        config.language,
        config.delimiter_policy,
        config.format
    );

    let hyphenator = DictionaryHyphenator::load(&config.language, &args.hyphenator_root)?;
    let encoder = Encoder::new(&hyphenator).with_policy(config.delimiter_policy);
    let report = encoder.encode_report(&args.lyrics);

    match config.format {
        OutputFormat::Encoded => Ok(report.output),
        OutputFormat::Json => render_json(&report, config.delimiter_policy),
    }
}

fn render_json(report: &EncodeReport, delimiters: DelimiterPolicy) -> anyhow::Result<String> {
    let output = JsonOutput {
        encoded: &report.output,
        delimiters,
        syllables: report.lyrics.syllable_count(),
        lyrics: &report.lyrics,
        rhymes: report
            .lyrics
            .stanzas
            .iter()
            .map(|stanza| group_rhymes(stanza, false))
            .collect(),
        failed_words: report.failures.iter().map(|f| f.word.as_str()).collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
