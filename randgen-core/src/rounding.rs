// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Decimal rounding to a fixed number of fractional digits
//!
//! Digit counts above [`MAX_FLOAT_PRECISION`] are clamped, and values too large to scale are
//! returned unchanged. [`DecimalGrid`] enumerates the values a float generator may return.

use crate::MAX_FLOAT_PRECISION;
use rand::Rng;

/// Scaled magnitude below which neighbouring grid points stay distinct `f64` values
const GRID_LIMIT: f64 = (1u64 << 51) as f64;

fn scale(digits: u32) -> f64 {
    10f64.powi(digits.min(MAX_FLOAT_PRECISION) as i32)
}

fn rescale(value: f64, digits: u32, op: fn(f64) -> f64) -> f64 {
    let factor = scale(digits);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    op(scaled) / factor
}

/// Round half away from zero at `digits` fractional digits
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    rescale(value, digits, f64::round)
}

/// Round toward negative infinity at `digits` fractional digits
pub fn floor_to_precision(value: f64, digits: u32) -> f64 {
    rescale(value, digits, f64::floor)
}

/// Round toward positive infinity at `digits` fractional digits
pub fn ceil_to_precision(value: f64, digits: u32) -> f64 {
    rescale(value, digits, f64::ceil)
}

/// Drop everything past `digits` fractional digits
pub fn truncate_to_precision(value: f64, digits: u32) -> f64 {
    rescale(value, digits, f64::trunc)
}

/// The values `k / 10^digits` that lie inside a half-open range `[min, max)`
///
/// Grid indices are exact integers, so the number of values is counted without floating-point
/// error and every index maps to a distinct `f64`. When the bounds are too large for `digits`
/// fractional digits to stay distinct, the grid coarsens one decimal digit at a time (down to
/// steps of a power of ten above one) until they do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalGrid {
    digits: i32,
    scale: f64,
    first: i64,
    end: i64,
}

impl DecimalGrid {
    /// Grid for `[min, max)`, or `None` when either bound is NaN or infinite
    pub fn within(min: f64, max: f64, digits: u32) -> Option<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }

        let magnitude = min.abs().max(max.abs());
        let mut digits = digits.min(MAX_FLOAT_PRECISION) as i32;
        let mut scale = 10f64.powi(digits);
        while magnitude * scale >= GRID_LIMIT {
            digits -= 1;
            scale = 10f64.powi(digits);
        }

        let first = first_index_at_or_above(min, scale);
        let end = first_index_at_or_above(max, scale).max(first);
        Some(Self { digits, scale, first, end })
    }

    /// Fractional digits actually carried; negative once the grid steps above one
    pub fn digits(&self) -> i32 {
        self.digits
    }

    /// Number of grid values inside the range
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.first)
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.first
    }

    /// The `offset`-th value counting up from the lowest, if the grid has that many
    pub fn value(&self, offset: u64) -> Option<f64> {
        if offset >= self.len() {
            return None;
        }
        Some(self.value_at(self.first + offset as i64))
    }

    /// A uniformly chosen grid value; `None` for an empty grid
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.value_at(rng.gen_range(self.first..self.end)))
    }

    fn value_at(&self, index: i64) -> f64 {
        index as f64 / self.scale
    }
}

/// Smallest `k` with `k / scale >= bound`
fn first_index_at_or_above(bound: f64, scale: f64) -> i64 {
    let mut index = (bound * scale).ceil() as i64;
    while (index as f64) / scale < bound {
        index += 1;
    }
    while ((index - 1) as f64) / scale >= bound {
        index -= 1;
    }
    index
}
