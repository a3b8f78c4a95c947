//! passgen CLI
//!
//! Command-line front end: parses flags, resolves defaults from an
//! optional TOML config, loads custom word lists and prints one
//! generated secret per line on stdout.

use clap::{ArgGroup, Args, Parser, Subcommand};
use passgen::{
    charset::{default_words, CharsetOptions},
    universe::read_word_list_file,
    Casing, ConfigError, FileConfig, Generator, PassphraseRequest, PasswordRequest,
};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Exit status for usage and generation errors.
const EXIT_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "passgen", version, about = "Generate passwords and passphrases")]
struct Cli {
    /// TOML file with limits and defaults
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate passwords
    #[command(visible_aliases = ["pw", "word"])]
    Password(PasswordArgs),
    /// Generate passphrases
    #[command(visible_aliases = ["pp", "phrase"])]
    Passphrase(PassphraseArgs),
}

#[derive(Debug, Args)]
struct PasswordArgs {
    /// Password length in characters
    length: Option<usize>,

    /// Number of passwords to generate
    count: Option<usize>,

    /// Allow lowercase letters in passwords
    #[arg(short, long)]
    lowercase: bool,

    /// Allow uppercase letters in passwords
    #[arg(short, long)]
    uppercase: bool,

    /// Allow numeric characters in passwords
    #[arg(short, long)]
    numeric: bool,

    /// Allow special characters in passwords
    #[arg(short, long)]
    special: bool,

    /// Allow ambiguous characters in passwords
    #[arg(short, long)]
    ambiguous: bool,

    /// Alphabet to use for password generation (supersedes other flags)
    #[arg(long)]
    alphabet: Option<String>,
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("casing").args(["lowercase", "uppercase", "title_case", "no_casing"])
))]
struct PassphraseArgs {
    /// Passphrase length in words
    word_count: Option<usize>,

    /// Number of passphrases to generate
    count: Option<usize>,

    /// Passphrase word separator (a single character)
    #[arg(short, long)]
    separator: Option<char>,

    /// Generate lowercase passphrases
    #[arg(short, long)]
    lowercase: bool,

    /// Generate uppercase passphrases
    #[arg(short, long)]
    uppercase: bool,

    /// Generate title-case passphrases
    #[arg(short, long)]
    title_case: bool,

    /// Generate passphrases without applying any case transformation
    #[arg(short, long)]
    no_casing: bool,

    /// File containing a newline-delimited word list
    #[arg(short, long, value_name = "FILE")]
    word_list: Option<PathBuf>,
}

impl PassphraseArgs {
    fn casing(&self) -> Option<Casing> {
        if self.lowercase {
            Some(Casing::Lower)
        } else if self.uppercase {
            Some(Casing::Upper)
        } else if self.title_case {
            Some(Casing::Title)
        } else if self.no_casing {
            Some(Casing::None)
        } else {
            None
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] passgen::Error),
    #[error("failed to read word list {}: {source}", .path.display())]
    WordList { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stdout carries only generated secrets
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    debug!("passgen v{}", passgen::VERSION);

    let mut generator = Generator::new().with_limits(config.limits);

    let artifacts = match &cli.command {
        Command::Password(args) => {
            let request = password_request(args, &config);
            generator.passwords(&request)?
        }
        Command::Passphrase(args) => {
            let request = passphrase_request(args, &config)?;
            generator.passphrases(&request)?
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for artifact in &artifacts {
        writeln!(out, "{}", artifact)?;
    }
    out.flush()?;

    Ok(())
}

fn password_request(args: &PasswordArgs, config: &FileConfig) -> PasswordRequest {
    let options = CharsetOptions {
        lowercase: args.lowercase,
        uppercase: args.uppercase,
        numeric: args.numeric,
        special: args.special,
        ambiguous: args.ambiguous,
    };

    let alphabet = match (&args.alphabet, &config.password.alphabet) {
        (Some(alphabet), _) => alphabet.clone(),
        (None, Some(alphabet)) if options == CharsetOptions::default() => alphabet.clone(),
        _ => options.build(),
    };

    PasswordRequest::new(
        args.count.unwrap_or(config.password.count),
        args.length.unwrap_or(config.password.length),
        alphabet,
    )
}

fn passphrase_request(
    args: &PassphraseArgs,
    config: &FileConfig,
) -> Result<PassphraseRequest, CliError> {
    let defaults = &config.passphrase;

    let words: Vec<String> = match args.word_list.as_ref().or(defaults.word_list.as_ref()) {
        Some(path) => read_word_list_file(path).map_err(|source| CliError::WordList {
            path: path.clone(),
            source,
        })?,
        None => default_words().map(String::from).collect(),
    };

    Ok(PassphraseRequest::new(
        args.count.unwrap_or(defaults.count),
        args.word_count.unwrap_or(defaults.word_count),
        args.separator.unwrap_or(defaults.separator),
        args.casing().unwrap_or(defaults.casing),
        words,
    ))
}
