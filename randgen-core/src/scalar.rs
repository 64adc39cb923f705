// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Bounded scalar generators
//!
//! All ranges are half-open `[min, max)`. A degenerate range (`min == max`) yields `min`, and
//! inverted bounds are swapped before sampling.

use crate::generator::Generator;
use crate::rounding::DecimalGrid;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;

/// Widest digit count whose full range fits in `u64`
pub const MAX_NUMBER_DIGITS: u32 = 19;

impl<R: RngCore> Generator<R> {
    pub fn rand_bool(&mut self) -> bool {
        self.rng_mut().gen()
    }

    pub fn rand_bool_slice(&mut self, length: usize) -> Vec<bool> {
        (0..length).map(|_| self.rand_bool()).collect()
    }

    /// Uniform integer in `[min, max)`
    pub fn rand_int(&mut self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }
        let (min, max) = if max < min { (max, min) } else { (min, max) };

        if min == i64::MIN && max == i64::MAX {
            // Full domain: any 64-bit word except the excluded upper bound
            loop {
                let value = self.rng_mut().next_u64() as i64;
                if value != i64::MAX {
                    return value;
                }
            }
        }

        self.rng_mut().gen_range(min..max)
    }

    /// `length` integers in `[min, max)`; empty when `min > max`
    pub fn rand_int_slice(&mut self, length: usize, min: i64, max: i64) -> Vec<i64> {
        if length == 0 || min > max {
            return Vec::new();
        }
        (0..length).map(|_| self.rand_int(min, max)).collect()
    }

    /// Uniform float in `[min, max)` carrying at most `precision` fractional digits
    ///
    /// The result is drawn uniformly from the [`DecimalGrid`] of the range, so it never reaches
    /// `max` and never drops below `min`. When no value with that many digits fits inside the
    /// range, or a bound is not finite, `min` is returned as is.
    pub fn rand_float(&mut self, min: f64, max: f64, precision: u32) -> f64 {
        if min == max {
            return min;
        }
        let (min, max) = if max < min { (max, min) } else { (min, max) };

        let Some(grid) = DecimalGrid::within(min, max, precision) else {
            debug!(min, max, "Float bounds are not finite");
            return min;
        };
        match grid.pick(self.rng_mut()) {
            Some(value) => value,
            None => {
                debug!(min, max, precision, "No value at this precision inside range");
                min
            }
        }
    }

    /// Uniform integer with exactly `digits` decimal digits, `[10^(digits-1), 10^digits - 1]`
    ///
    /// Zero digits yields 0; widths above [`MAX_NUMBER_DIGITS`] are clamped.
    pub fn rand_number_of_length(&mut self, digits: u32) -> u64 {
        if digits == 0 {
            return 0;
        }
        if digits > MAX_NUMBER_DIGITS {
            debug!(digits, max = MAX_NUMBER_DIGITS, "Clamping digit count");
        }
        let digits = digits.min(MAX_NUMBER_DIGITS);

        let low = 10u64.pow(digits - 1);
        let high = 10u64.pow(digits - 1) * 10 - 1;
        self.rng_mut().gen_range(low..=high)
    }

    /// One element of `slice`, or `None` when it is empty
    pub fn rand_from_given_slice<T: Clone>(&mut self, slice: &[T]) -> Option<T> {
        slice.choose(self.rng_mut()).cloned()
    }

    /// `num` elements picked from `slice`
    ///
    /// With `repeatable` the picks are independent. Without it `num` is clamped to the slice
    /// length and the picks come from a shuffled copy. `num == 0` or an empty slice returns the
    /// input unchanged.
    pub fn rand_slice_from_given_slice<T: Clone>(
        &mut self,
        slice: &[T],
        num: usize,
        repeatable: bool,
    ) -> Vec<T> {
        if num == 0 || slice.is_empty() {
            return slice.to_vec();
        }

        if repeatable {
            return (0..num)
                .filter_map(|_| slice.choose(self.rng_mut()).cloned())
                .collect();
        }

        let mut shuffled = slice.to_vec();
        shuffled.shuffle(self.rng_mut());
        shuffled.truncate(num);
        shuffled
    }
}
