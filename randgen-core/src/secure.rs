// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Secure bytes and RFC 4122 version 4 identifiers
//!
//! These paths read from the operating system's CSPRNG and never touch a [`crate::Generator`].
//! A failed or short read is surfaced as [`Error::EntropyRead`]; there is no fallback to
//! pseudo-random bytes.

use crate::{Error, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::warn;
use uuid::Uuid;

/// UUID length in bytes
pub const UUID_BYTES: usize = 16;

/// Source of cryptographically secure bytes
pub trait SecureEntropy {
    /// Fill `buf` completely or fail
    fn read_secure_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<R: RngCore + CryptoRng> SecureEntropy for R {
    fn read_secure_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(buf).map_err(|e| {
            warn!("Secure entropy read of {} bytes failed: {}", buf.len(), e);
            Error::from(e)
        })
    }
}

/// `length` secure random bytes from the OS; empty for a zero length
pub fn rand_bytes(length: usize) -> Result<Vec<u8>> {
    rand_bytes_from(&mut OsRng, length)
}

/// `length` secure random bytes from an explicit source
pub fn rand_bytes_from<S: SecureEntropy + ?Sized>(
    source: &mut S,
    length: usize,
) -> Result<Vec<u8>> {
    if length == 0 {
        return Ok(Vec::new());
    }
    let mut bytes = vec![0u8; length];
    source.read_secure_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Random version 4 UUID in lower-case `8-4-4-4-12` form
pub fn uuid_v4() -> Result<String> {
    uuid_v4_from(&mut OsRng)
}

/// Random version 4 UUID from an explicit source
pub fn uuid_v4_from<S: SecureEntropy + ?Sized>(source: &mut S) -> Result<String> {
    let mut bytes = [0u8; UUID_BYTES];
    source.read_secure_bytes(&mut bytes)?;

    // Set version (4) and variant (RFC 4122)
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Ok(Uuid::from_bytes(bytes).hyphenated().to_string())
}

/// Encode bytes to hexadecimal string
pub fn encode_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Encode bytes to base64 string
pub fn encode_base64(data: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(data)
}
