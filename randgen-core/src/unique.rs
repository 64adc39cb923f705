// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Rejection-sampling unique collection generator
//!
//! Draws bounded scalars and discards repeats until the requested number of distinct values
//! is collected. The requested count is clamped to the number of values the range can hold,
//! which is what guarantees termination.

use crate::generator::Generator;
use crate::rounding::DecimalGrid;
use rand::{Rng, RngCore};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Most slots reserved up front; larger collections grow as values arrive
const PREALLOCATION_LIMIT: usize = 1 << 16;

impl<R: RngCore> Generator<R> {
    /// Collect `count` distinct values from `draw`, redrawing on collision
    ///
    /// The caller must ensure `draw` can produce at least `count` distinct values.
    pub fn unique_by<T, F>(&mut self, count: usize, mut draw: F) -> Vec<T>
    where
        T: Hash + Eq + Clone,
        F: FnMut(&mut Self) -> T,
    {
        let reserve = count.min(PREALLOCATION_LIMIT);
        let mut seen = HashSet::with_capacity(reserve);
        let mut values = Vec::with_capacity(reserve);
        let mut collisions = 0u64;

        while values.len() < count {
            let value = draw(self);
            if seen.insert(value.clone()) {
                values.push(value);
            } else {
                collisions += 1;
            }
        }

        if collisions > 0 {
            debug!(count, collisions, "Unique collection redraws");
        }
        values
    }

    /// `count` pairwise-distinct integers in `[min, max)`
    ///
    /// Empty when `min > max`; `count` is clamped to `max - min`.
    pub fn unique_ints(&mut self, count: usize, min: i64, max: i64) -> Vec<i64> {
        if min > max {
            return Vec::new();
        }

        let span = max.abs_diff(min);
        let count = clamp_count(count, span);
        self.unique_by(count, |generator| generator.rand_int(min, max))
    }

    /// `count` pairwise-distinct floats in `[min, max)` at `precision` fractional digits
    ///
    /// Empty when `min >= max` or either bound is NaN or infinite. Values are distinct points
    /// of the range's [`DecimalGrid`], and `count` is clamped to the number of grid points.
    pub fn unique_floats(&mut self, count: usize, min: f64, max: f64, precision: u32) -> Vec<f64> {
        if min.is_nan() || max.is_nan() || min >= max {
            return Vec::new();
        }
        let Some(grid) = DecimalGrid::within(min, max, precision) else {
            return Vec::new();
        };

        let span = grid.len();
        let count = clamp_count(count, span);
        self.unique_by(count, |generator| generator.rng_mut().gen_range(0..span))
            .into_iter()
            .filter_map(|offset| grid.value(offset))
            .collect()
    }
}

fn clamp_count(count: usize, capacity: u64) -> usize {
    if count as u64 > capacity {
        debug!(requested = count, capacity, "Clamping unique count to range size");
        capacity as usize
    } else {
        count
    }
}
