// Major Mnemonic CLI Tool
// Command-line interface for number ↔ word conversion

use clap::{Parser, Subcommand};
use major_mnemonic::{split_digits, MnemonicConfig, MnemonicSearch, Part, MAX_WINDOW};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mnemonic Tool - turn numbers into words and words into numbers
#[derive(Parser, Debug)]
#[command(name = "mnemonic")]
#[command(about = "Convert between digits and words with the phonetic major system", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find dictionary words for digit groups
    Find {
        /// Digit groups, e.g. "3141 5926"
        #[arg(value_name = "DIGITS", required = true)]
        digits: Vec<String>,

        /// Newline-delimited word list
        #[arg(short, long, env = "MNEMONIC_DICTIONARY")]
        dict: PathBuf,

        /// Treat "w" and "c" as filler letters
        #[arg(long, env = "MNEMONIC_INCLUDE_WC")]
        include_wc: bool,

        /// Largest number of digits matched by one word
        #[arg(long, default_value_t = MAX_WINDOW)]
        max_window: usize,

        /// Maximum number of words shown per window
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the digits encoded by words
    Encode {
        /// Words to convert
        #[arg(value_name = "WORDS", required = true)]
        words: Vec<String>,

        /// Do not treat "w" and "c" as filler letters
        #[arg(long)]
        no_wc: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Regroup digits into fixed-length chunks
    Split {
        /// Digits to regroup
        #[arg(value_name = "DIGITS", required = true)]
        digits: Vec<String>,

        /// Chunk length
        #[arg(short, long, default_value = "3")]
        length: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Find {
            digits,
            dict,
            include_wc,
            max_window,
            limit,
            json,
        } => {
            let config = MnemonicConfig::default()
                .with_include_wc(include_wc)
                .with_max_window(max_window);
            let search = MnemonicSearch::from_path(&dict, config)?;

            let text = digits.join(" ");
            let mut found = 0;
            let results = search.find_with_progress(&text, |result| {
                found += 1;
                if json {
                    match serde_json::to_string(result) {
                        Ok(line) => println!("{}", line),
                        Err(e) => tracing::error!("failed to serialize result: {}", e),
                    }
                } else {
                    println!("{}", format_window(result.digits_as_string(), result.words(), limit));
                }
            })?;

            if !json {
                if found == 0 {
                    println!("❌ No matches found.");
                } else {
                    let consumed: usize = results.iter().map(|r| r.digits().len()).sum();
                    let requested = text.chars().filter(|c| c.is_ascii_digit()).count();
                    if consumed < requested {
                        println!("⚠️  Dictionary covered {} of {} digits.", consumed, requested);
                    }
                }
            }
        }

        Command::Encode { words, no_wc, json } => {
            let config = MnemonicConfig::default().with_codec_include_wc(!no_wc);
            let search = MnemonicSearch::new(Vec::new(), config);
            let encodings = search.encode_words(&words.join(" "));

            if json {
                println!("{}", serde_json::to_string_pretty(&encodings)?);
            } else {
                for encoding in encodings {
                    println!(
                        "{:<20} {:<10} {}",
                        encoding.word,
                        encoding.digits,
                        render_parts(&encoding.parts)
                    );
                }
            }
        }

        Command::Split { digits, length } => {
            let groups = split_digits(&digits.join(" "), length)?;
            println!("{}", groups.join(" "));
        }
    }

    Ok(())
}

/// One output line for a matched window
fn format_window(digits: String, words: &[String], limit: usize) -> String {
    let mut line = format!("[{}] → ", digits);
    let shown: Vec<&str> = words.iter().take(limit).map(String::as_str).collect();
    line.push_str(&shown.join(", "));
    if words.len() > limit {
        line.push_str(&format!(" (+{} more)", words.len() - limit));
    }
    line
}

/// Render segments with phonemes bracketed, e.g. "[m:3]o[t:1]"
fn render_parts(parts: &[Part]) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            Part::Phoneme { value, digit } => out.push_str(&format!("[{}:{}]", value, digit)),
            Part::Filler { value } => out.push_str(value),
        }
    }
    out
}
