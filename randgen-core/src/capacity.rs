// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Power-of-two rounding for bit-budget sizing
//!
//! Integer-only so that exact powers of two never round up because of floating-point error.

use crate::MAXIMUM_CAPACITY;

/// Smallest power of two `>= cap`, clamped to [`MAXIMUM_CAPACITY`]
///
/// Uses the bit-smear technique: decrement, OR the value with itself shifted right by
/// 1, 2, 4, 8 and 16 so every bit below the highest set bit becomes 1, then increment.
/// Inputs `<= 1` smear to a negative value and yield 1.
pub fn nearest_power_of_two(cap: usize) -> usize {
    let mut n = isize::try_from(cap).unwrap_or(isize::MAX) - 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;

    if n < 0 {
        1
    } else if n as usize >= MAXIMUM_CAPACITY {
        MAXIMUM_CAPACITY
    } else {
        n as usize + 1
    }
}

/// Exact base-2 logarithm of a power of two
pub fn bits_for_capacity(power_of_two: usize) -> u32 {
    debug_assert!(power_of_two.is_power_of_two());
    power_of_two.trailing_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_values() {
        assert_eq!(nearest_power_of_two(0), 1);
        assert_eq!(nearest_power_of_two(1), 1);
        assert_eq!(nearest_power_of_two(2), 2);
        assert_eq!(nearest_power_of_two(3), 4);
        assert_eq!(nearest_power_of_two(5), 8);
        assert_eq!(nearest_power_of_two(62), 64);
        assert_eq!(nearest_power_of_two(64), 64);
        assert_eq!(nearest_power_of_two(65), 128);
    }

    #[test]
    fn test_clamped_to_maximum() {
        assert_eq!(nearest_power_of_two(MAXIMUM_CAPACITY), MAXIMUM_CAPACITY);
        assert_eq!(nearest_power_of_two(MAXIMUM_CAPACITY + 1), MAXIMUM_CAPACITY);
        assert_eq!(nearest_power_of_two(usize::MAX), MAXIMUM_CAPACITY);
    }

    #[test]
    fn test_bits_for_capacity() {
        assert_eq!(bits_for_capacity(1), 0);
        assert_eq!(bits_for_capacity(2), 1);
        assert_eq!(bits_for_capacity(64), 6);
        assert_eq!(bits_for_capacity(MAXIMUM_CAPACITY), 30);
    }

    proptest! {
        #[test]
        fn prop_idempotent(x in 0usize..(1 << 32)) {
            let p = nearest_power_of_two(x);
            prop_assert_eq!(nearest_power_of_two(p), p);
        }

        #[test]
        fn prop_smallest_power_at_or_above(x in 2usize..=MAXIMUM_CAPACITY) {
            let p = nearest_power_of_two(x);
            prop_assert!(p.is_power_of_two());
            prop_assert!(p >= x);
            prop_assert!(p / 2 < x);
        }
    }
}
