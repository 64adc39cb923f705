// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Randgen - command line front end for randgen-core
//!
//! Prints random strings, integers, floats, booleans, bytes, unique collections and UUIDs.
//! Pseudo-random output comes from one `Generator` seeded from configuration (fixed seed) or
//! the clock; bytes and UUIDs come from the operating system's secure source.
//!
//! Configuration is read from a YAML file given with `--config`, or from `RANDGEN_*`
//! environment variables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use randgen_core::{
    config::GeneratorConfig,
    secure::{encode_base64, encode_hex},
    Generator, ALL_CHARS, LETTERS, LOWER_LETTERS, NUMERAL, SYMBOL_CHARS, UPPER_LETTERS,
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "randgen")]
#[command(
    about = "Randgen - Generates random strings, numbers, bytes and UUIDs",
    long_about = None
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// YAML configuration file (defaults to RANDGEN_* environment variables)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Strings drawn from a named or custom alphabet
    String {
        #[arg(short, long, default_value = "16")]
        length: usize,

        #[arg(short, long, default_value = "1")]
        count: usize,

        #[arg(short, long, value_enum, default_value = "letters")]
        kind: Charset,

        /// Custom alphabet (overrides --kind)
        #[arg(long)]
        charset: Option<String>,
    },

    /// Integers in [min, max)
    Int {
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        min: i64,

        #[arg(long, default_value = "100", allow_negative_numbers = true)]
        max: i64,

        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Floats in [min, max)
    Float {
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        min: f64,

        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        max: f64,

        /// Fractional digits (defaults to configured float_precision)
        #[arg(short, long)]
        precision: Option<u32>,

        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Booleans
    Bool {
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Secure random bytes
    Bytes {
        #[arg(short, long, default_value = "32")]
        length: usize,

        #[arg(short, long, value_enum, default_value = "hex")]
        encoding: Encoding,
    },

    /// Version 4 UUIDs from the secure source
    Uuid {
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Distinct integers in [min, max)
    Unique {
        #[arg(short, long, default_value = "5")]
        count: usize,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        min: i64,

        #[arg(long, default_value = "100", allow_negative_numbers = true)]
        max: i64,
    },

    /// Numbers with an exact count of decimal digits
    Number {
        #[arg(short, long, default_value = "6")]
        digits: u32,

        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Charset {
    Letters,
    Upper,
    Lower,
    Numeral,
    Alnum,
    Symbol,
    All,
}

impl Charset {
    fn alphabet(self) -> String {
        match self {
            Charset::Letters => LETTERS.to_string(),
            Charset::Upper => UPPER_LETTERS.to_string(),
            Charset::Lower => LOWER_LETTERS.to_string(),
            Charset::Numeral => NUMERAL.to_string(),
            Charset::Alnum => format!("{}{}", NUMERAL, LETTERS),
            Charset::Symbol => SYMBOL_CHARS.to_string(),
            Charset::All => ALL_CHARS.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Encoding {
    Hex,
    Base64,
}

/// Generate the values for one command
fn generate(
    command: &Command,
    config: &GeneratorConfig,
    generator: &mut Generator,
) -> Result<Vec<Value>> {
    let values = match command {
        Command::String { length, count, kind, charset } => {
            let length = config.check_length(*length)?;
            let count = config.check_length(*count)?;
            let alphabet = charset.clone().unwrap_or_else(|| kind.alphabet());
            debug!(symbols = alphabet.chars().count(), length, count, "Sampling strings");
            generator
                .rand_string_slice(&alphabet, count, length)
                .into_iter()
                .map(Value::from)
                .collect()
        }
        Command::Int { min, max, count } => {
            let count = config.check_length(*count)?;
            generator
                .rand_int_slice(count, *min, *max)
                .into_iter()
                .map(Value::from)
                .collect()
        }
        Command::Float { min, max, precision, count } => {
            let count = config.check_length(*count)?;
            let precision = config.check_precision(precision.unwrap_or(config.float_precision))?;
            (0..count)
                .map(|_| Value::from(generator.rand_float(*min, *max, precision)))
                .collect()
        }
        Command::Bool { count } => {
            let count = config.check_length(*count)?;
            generator
                .rand_bool_slice(count)
                .into_iter()
                .map(Value::from)
                .collect()
        }
        Command::Bytes { length, encoding } => {
            let length = config.check_length(*length)?;
            let bytes = randgen_core::rand_bytes(length).context("Failed to read secure bytes")?;
            let encoded = match encoding {
                Encoding::Hex => encode_hex(&bytes),
                Encoding::Base64 => encode_base64(&bytes),
            };
            vec![Value::from(encoded)]
        }
        Command::Uuid { count } => {
            let count = config.check_length(*count)?;
            (0..count)
                .map(|_| {
                    randgen_core::uuid_v4()
                        .map(Value::from)
                        .context("Failed to generate UUID")
                })
                .collect::<Result<Vec<_>>>()?
        }
        Command::Unique { count, min, max } => {
            let count = config.check_length(*count)?;
            generator
                .unique_ints(count, *min, *max)
                .into_iter()
                .map(Value::from)
                .collect()
        }
        Command::Number { digits, count } => {
            let count = config.check_length(*count)?;
            (0..count)
                .map(|_| Value::from(generator.rand_number_of_length(*digits)))
                .collect()
        }
    };

    Ok(values)
}

fn print_values(values: &[Value], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(values).context("Failed to serialize output")?);
        return Ok(());
    }

    for value in values {
        match value {
            Value::String(s) => println!("{}", s),
            other => println!("{}", other),
        }
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GeneratorConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))
        }
        None => {
            info!("Loading configuration from environment variables");
            GeneratorConfig::from_env().context("Failed to load configuration from environment")
        }
    }
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    let log_level = args
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Randgen v{}", randgen_core::VERSION);

    let config = load_config(args.config.as_ref())?;
    let mut generator = Generator::from_config(&config);

    let values = generate(&args.command, &config, &mut generator)?;
    print_values(&values, args.json)?;

    let stats = generator.stats();
    debug!(
        words_drawn = stats.words_drawn,
        symbols_accepted = stats.symbols_accepted,
        symbols_rejected = stats.symbols_rejected,
        reseeds = stats.reseeds,
        "Generator statistics"
    );

    Ok(())
}
