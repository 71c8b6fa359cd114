//! textcalc - command-line front end
//!
//! Exposes each library operation as a subcommand:
//! - arithmetic: `add`, `subtract`, `multiply`, `divide`, `power`, `factorial`
//! - text: `reverse`, `palindrome`, `vowels`, `capitalize`, `inspect`
//! - `config` to locate, show or initialize the settings file
//!
//! Numeric output honors `precision` from the config file unless
//! `--precision` is given. Logging goes to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use textcalc::config::{Config, DEFAULT_LOG_LEVEL};
use textcalc::utils::formatting::{format_number, render_report, TextReport};
use textcalc::{
    add, capitalize_words, count_vowels, divide, factorial, is_palindrome, multiply, power,
    reverse_string, subtract, TextProcessor,
};
use tracing::{debug, info, warn};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Decimal places for numeric output (overrides the config file)
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Use this config file instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add two numbers
    Add(BinaryArgs),
    /// Subtract B from A
    Subtract(BinaryArgs),
    /// Multiply two numbers
    Multiply(BinaryArgs),
    /// Divide A by B
    Divide(BinaryArgs),
    /// Raise A to the power B
    Power(BinaryArgs),
    /// Compute N!
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Reverse the characters of TEXT
    Reverse { text: String },
    /// Check whether TEXT is a palindrome (ignoring spaces and case)
    Palindrome { text: String },
    /// Count the vowels in TEXT
    Vowels { text: String },
    /// Capitalize every word of TEXT
    Capitalize { text: String },
    /// Print length, word count, case forms and more for TEXT
    Inspect {
        text: String,
        /// Emit JSON instead of aligned text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
struct BinaryArgs {
    #[arg(allow_negative_numbers = true)]
    a: f64,
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration as YAML
    Show,
    /// Write a default config file if none exists
    Init,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let output = execute(args)?;
    println!("{}", output);

    Ok(())
}

/// Resolves config and logging, then runs the command
///
/// `config path` and `config init` never read the config file, so they keep
/// working when that file is broken. An unknown `log_level` falls back to
/// the default with a warning instead of failing the command.
fn execute(args: Args) -> Result<String> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    let reads_file = !matches!(
        args.command,
        Command::Config {
            action: ConfigAction::Path | ConfigAction::Init
        }
    );
    let config = if reads_file {
        Config::load_from(&config_path)?
    } else {
        Config::default()
    };

    let (level, invalid_level) = match config.log_level() {
        Ok(level) => (level, None),
        Err(err) => (tracing::Level::WARN, Some(err)),
    };
    init_logging(if args.verbose {
        tracing::Level::DEBUG
    } else {
        level
    });

    if let Some(err) = invalid_level {
        warn!("{}; using '{}'", err, DEFAULT_LOG_LEVEL);
    }
    debug!("Loaded config from {:?}: {:?}", config_path, config);

    let precision = args.precision.or(config.precision);
    run(args.command, precision, &config, &config_path)
}

fn init_logging(level: tracing::Level) {
    // a second call only happens under test, where the first subscriber stays
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Executes one subcommand and returns the text to print
fn run(
    command: Command,
    precision: Option<usize>,
    config: &Config,
    config_path: &Path,
) -> Result<String> {
    debug!("Dispatching {:?}", command);

    let number = |value: f64| format_number(value, precision);

    let output = match command {
        Command::Add(BinaryArgs { a, b }) => number(add(a, b)),
        Command::Subtract(BinaryArgs { a, b }) => number(subtract(a, b)),
        Command::Multiply(BinaryArgs { a, b }) => number(multiply(a, b)),
        Command::Divide(BinaryArgs { a, b }) => number(divide(a, b)?),
        Command::Power(BinaryArgs { a, b }) => number(power(a, b)),
        Command::Factorial { n } => factorial(n)?.to_string(),
        Command::Reverse { text } => reverse_string(&text),
        Command::Palindrome { text } => is_palindrome(&text).to_string(),
        Command::Vowels { text } => count_vowels(&text).to_string(),
        Command::Capitalize { text } => capitalize_words(&text),
        Command::Inspect { text, json } => {
            let report = TextReport::from(&TextProcessor::new(text));
            if json {
                serde_json::to_string_pretty(&report)?
            } else {
                render_report(&report).trim_end().to_string()
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Path => config_path.display().to_string(),
            ConfigAction::Show => serde_yaml::to_string(config)?.trim_end().to_string(),
            ConfigAction::Init => {
                if config_path.exists() {
                    format!("Config already exists at {}", config_path.display())
                } else {
                    Config::default()
                        .save_to(config_path)
                        .with_context(|| "Failed to initialize config")?;
                    info!("Created config at {:?}", config_path);
                    format!("Wrote default config to {}", config_path.display())
                }
            }
        },
    };

    Ok(output)
}
