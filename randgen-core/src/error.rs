// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Error types for randgen
//!
//! Only the secure entropy path can fail during generation. Degenerate inputs (zero lengths,
//! empty alphabets, inverted ranges) are resolved locally and never produce an `Error`.

pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for randgen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Secure entropy source was unreadable or returned fewer bytes than requested
    #[error("Entropy read error: {0}")]
    EntropyRead(String),

    /// Configuration parsing or validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error originates from the secure entropy source
    pub fn is_entropy_error(&self) -> bool {
        matches!(self, Error::EntropyRead(_))
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Error::EntropyRead(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
