//! Cryptan CLI
//!
//! Breaks Vigenère ciphertext from the command line.

mod report;
mod sink;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cryptan_config::{CryptanConfig, Estimator, KEY_LENGTH_LIMIT};
use cryptan_core::LATIN;
use cryptan_vigenere::friedman::best_score;
use cryptan_vigenere::sample::EXERCISE_CIPHERTEXT;
use cryptan_vigenere::{
    decrypt, decrypt_rows, examine, key_with_frequency_analysis, score_key_lengths, split_columns,
    split_rows, validate_key, Cryptanalyst, LetterFrequencies, FRIEDMAN_FALLBACK,
};

use sink::TracingSink;

#[derive(Parser)]
#[command(name = "cryptan")]
#[command(about = "Cryptan - Vigenère cryptanalysis: Kasiski, Friedman, frequency analysis")]
#[command(version)]
struct Cli {
    /// Config file (YAML, or JSON by extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the ciphertext comes from
#[derive(Args)]
struct Input {
    /// Ciphertext (reads --file, then stdin, when omitted)
    text: Option<String>,

    /// Read ciphertext from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Drop everything but letters before analysis
    #[arg(long)]
    strip: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the key length, derive the key and decrypt
    Break {
        #[command(flatten)]
        input: Input,

        /// Key-length estimate to accept (friedman, kasiski)
        #[arg(short, long)]
        estimator: Option<Estimator>,

        /// Skip estimation and use this key length
        #[arg(short = 'k', long)]
        key_length: Option<usize>,

        /// Upper bound (exclusive) of the Friedman sweep
        #[arg(short, long)]
        max_key_length: Option<usize>,

        /// Length of the words Kasiski looks for
        #[arg(short = 'n', long)]
        min_word_length: Option<usize>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Kasiski examination: recurring words, distances, GCD
    Kasiski {
        #[command(flatten)]
        input: Input,

        /// Length of the words to look for
        #[arg(short = 'n', long)]
        min_word_length: Option<usize>,

        /// Number of recurring words to list
        #[arg(short, long)]
        top: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Friedman test: average column IC per candidate key length
    Friedman {
        #[command(flatten)]
        input: Input,

        /// Upper bound (exclusive) of the sweep
        #[arg(short, long)]
        max_key_length: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Index of Coincidence and letter counts
    Ic {
        #[command(flatten)]
        input: Input,

        /// Draw a frequency chart
        #[arg(long)]
        chart: bool,
    },

    /// Split ciphertext into key-length columns
    Columns {
        #[command(flatten)]
        input: Input,

        #[arg(short = 'k', long)]
        key_length: usize,

        /// Consecutive blocks instead of interleaved columns
        #[arg(long)]
        rows: bool,
    },

    /// Derive a key of the given length by frequency analysis
    Key {
        #[command(flatten)]
        input: Input,

        #[arg(short = 'k', long)]
        key_length: usize,
    },

    /// Decrypt with a known key ('?' leaves a position as is)
    Decrypt {
        #[command(flatten)]
        input: Input,

        #[arg(short, long)]
        key: String,

        /// Decrypt block by block
        #[arg(long)]
        blockwise: bool,
    },

    /// Break the bundled exercise ciphertext
    Demo {
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "cryptan_cli=debug" } else { "cryptan_cli=info" };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config = CryptanConfig::load(cli.config.as_deref()).context("loading configuration")?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Break {
            input,
            estimator,
            key_length,
            max_key_length,
            min_word_length,
            json,
        } => {
            let mut config = config;
            if let Some(estimator) = estimator {
                config.analysis.estimator = estimator;
            }
            if key_length.is_some() {
                config.analysis.key_length = key_length;
            }
            if let Some(max) = max_key_length {
                config.analysis.max_key_length = max;
            }
            if let Some(min) = min_word_length {
                config.analysis.min_word_length = min;
            }
            config.output.json |= json;
            cmd_break(&read_input(&input)?, &config)
        }
        Commands::Kasiski { input, min_word_length, top, json } => {
            let min = min_word_length.unwrap_or(config.analysis.min_word_length);
            let top = top.unwrap_or(config.analysis.top_words);
            cmd_kasiski(&read_input(&input)?, min, top, json || config.output.json)
        }
        Commands::Friedman { input, max_key_length, json } => {
            let max = max_key_length.unwrap_or(config.analysis.max_key_length);
            cmd_friedman(&read_input(&input)?, max, config.analysis.english_ic, json || config.output.json)
        }
        Commands::Ic { input, chart } => cmd_ic(&read_input(&input)?, chart),
        Commands::Columns { input, key_length, rows } => cmd_columns(&read_input(&input)?, key_length, rows),
        Commands::Key { input, key_length } => cmd_key(&read_input(&input)?, key_length),
        Commands::Decrypt { input, key, blockwise } => cmd_decrypt(&read_input(&input)?, &key, blockwise),
        Commands::Demo { json } => {
            let mut config = config;
            config.output.json |= json;
            cmd_break(EXERCISE_CIPHERTEXT, &config)
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

fn read_input(input: &Input) -> Result<String> {
    let text = match (&input.text, &input.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let text = text.trim_end_matches(['\r', '\n']);
    Ok(if input.strip { LATIN.retain(text) } else { text.to_string() })
}

/// A key length must leave every column at least one character
fn check_key_length(message: &str, key_length: usize) -> Result<()> {
    let len = message.chars().count();
    if key_length == 0 {
        anyhow::bail!("Key length must be at least 1");
    }
    if key_length > len {
        anyhow::bail!("Key length {} exceeds the {} characters of the message", key_length, len);
    }
    Ok(())
}

fn cmd_break(message: &str, config: &CryptanConfig) -> Result<()> {
    config.validate()?;
    if let Some(key_length) = config.analysis.key_length {
        check_key_length(message, key_length)?;
    }
    let analysis = Cryptanalyst::new(config.analysis.clone()).analyze(message, &TracingSink);

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("\n{}\n", report::analysis_report(&analysis, config.output.preview_chars));
    }
    Ok(())
}

fn cmd_kasiski(message: &str, min_word_length: usize, top: usize, json: bool) -> Result<()> {
    if min_word_length == 0 {
        anyhow::bail!("Word length must be at least 1");
    }

    let examination = examine(message, min_word_length, top);
    if json {
        println!("{}", serde_json::to_string_pretty(&examination)?);
    } else {
        println!("\n{}\n", report::kasiski_report(&examination));
    }
    Ok(())
}

fn cmd_friedman(message: &str, max_key_length: usize, baseline: f64, json: bool) -> Result<()> {
    if max_key_length > KEY_LENGTH_LIMIT + 1 {
        anyhow::bail!("Max key length must be at most {}", KEY_LENGTH_LIMIT + 1);
    }

    let scores = score_key_lengths(message, max_key_length, baseline);
    let key_length = best_score(&scores).map_or(FRIEDMAN_FALLBACK, |s| s.key_length);

    if json {
        let value = serde_json::json!({
            "baseline": baseline,
            "scores": scores,
            "key_length": key_length,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("\n{}\n", report::friedman_report(&scores, key_length, baseline));
    }
    Ok(())
}

fn cmd_ic(message: &str, chart: bool) -> Result<()> {
    let freq = LetterFrequencies::count(message);

    if chart {
        println!("\n{}\n", freq.render_ascii());
        return Ok(());
    }

    println!("\n  INDEX OF COINCIDENCE");
    println!("  ====================\n");
    println!("  Letters: {}", freq.total());
    println!("  IC:      {:.5}", freq.index_of_coincidence());
    println!("\n  MOST FREQUENT:");
    for (c, count) in freq.top(6) {
        println!("  {}  {:>6}  {:5.2}%", c, count, freq.percent(c));
    }
    println!();
    Ok(())
}

fn cmd_columns(message: &str, key_length: usize, rows: bool) -> Result<()> {
    check_key_length(message, key_length)?;

    let parts = if rows {
        split_rows(message, key_length)
    } else {
        split_columns(message, key_length)
    };
    for (i, part) in parts.iter().enumerate() {
        println!("{:>3}: {}", i, part);
    }
    Ok(())
}

fn cmd_key(message: &str, key_length: usize) -> Result<()> {
    check_key_length(message, key_length)?;
    println!("{}", key_with_frequency_analysis(message, key_length));
    Ok(())
}

fn cmd_decrypt(message: &str, key: &str, blockwise: bool) -> Result<()> {
    validate_key(key)?;
    let plaintext = if blockwise {
        decrypt_rows(message, key)
    } else {
        decrypt(message, key)
    };
    println!("{}", plaintext);
    Ok(())
}
