// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Randgen Core Library
//!
//! This crate generates uniformly distributed random primitives: booleans, bounded integers
//! and floats, byte sequences, alphabet-constrained strings, unique collections and RFC 4122
//! version 4 identifiers.
//!
//! # Architecture
//!
//! The library is organized into modules representing core concerns:
//! - `capacity`: Power-of-two rounding used to size bit budgets
//! - `generator`: Explicit, caller-owned pseudo-random entropy handle
//! - `alphabet`: Bit-budget alphabet sampler (strings over arbitrary alphabets)
//! - `scalar`: Bounded scalar generators (bool, int, float, digit-length numbers)
//! - `unique`: Rejection-sampling unique collection generator
//! - `secure`: OS-backed secure bytes and UUID v4
//! - `rounding`: Decimal rounding helpers consumed by the float generator
//! - `config`: Configuration management with validation
//! - `error`: Unified error types
//!
//! # Design Principles
//!
//! 1. **No hidden globals**: every pseudo-random draw goes through a `Generator` the caller owns
//! 2. **Degenerate input is not an error**: empty alphabets, zero lengths and inverted ranges
//!    resolve to empty or single-bound results
//! 3. **Secure paths stay secure**: OS entropy failures surface as errors, never as a fallback
//! 4. **Testability**: the generator is generic over `rand::RngCore`, so tests can inject sources

pub mod alphabet;
pub mod capacity;
pub mod config;
pub mod error;
pub mod generator;
pub mod rounding;
pub mod scalar;
pub mod secure;
pub mod unique;

pub use alphabet::BitBudget;
pub use capacity::nearest_power_of_two;
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{with_thread_generator, Generator, GeneratorStats, SharedGenerator};
pub use rounding::DecimalGrid;
pub use secure::{rand_bytes, uuid_v4};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest capacity the power-of-two rounder will return (2^30)
pub const MAXIMUM_CAPACITY: usize = 1 << 30;

/// Largest number of fractional digits the float generators honour
pub const MAX_FLOAT_PRECISION: u32 = 15;

/// Usable bits per entropy word; the sign bit of a 64-bit draw is discarded
pub const WORD_BITS: u32 = 63;

/// Decimal digits
pub const NUMERAL: &str = "0123456789";

/// Lower-case ASCII letters
pub const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Upper-case ASCII letters
pub const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lower- and upper-case ASCII letters
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Printable ASCII punctuation used for symbol strings
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?";

/// Digits, letters and symbols combined
pub const ALL_CHARS: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!@#$%^&*()_+-=[]{}|;':\",./<>?"
);
