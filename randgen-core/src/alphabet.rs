// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Bit-budget alphabet sampler
//!
//! Draws symbols uniformly from an alphabet of any size while spending as few entropy words
//! as possible. Each 63-bit word is cut into `draws_per_word` slices of `bits_per_symbol`
//! bits; a slice that indexes past the end of the alphabet is rejected and the next slice is
//! tried, so accepted indices stay uniform over `[0, len)`.
//!
//! # Termination
//!
//! `bits_per_symbol` is the width of the smallest power of two `>= len`, so at least half of
//! all slice values are valid indices. Every slice is accepted with probability `> 1/2` and
//! the loop ends after a finite number of words with probability one.

use crate::capacity::{bits_for_capacity, nearest_power_of_two};
use crate::generator::Generator;
use crate::{
    LETTERS, LOWER_LETTERS, MAXIMUM_CAPACITY, NUMERAL, SYMBOL_CHARS, UPPER_LETTERS, WORD_BITS,
};
use rand::{Rng, RngCore};
use tracing::debug;

/// Digits followed by letters
const NUMERAL_OR_LETTER: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
);

/// Per-alphabet bit accounting, recomputed on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitBudget {
    /// Bits consumed per candidate index
    pub bits_per_symbol: u32,
    /// `(1 << bits_per_symbol) - 1`
    pub mask: u64,
    /// Candidate indices one word supplies
    pub draws_per_word: u32,
}

impl BitBudget {
    /// Budget for an alphabet of `len` symbols (at least one bit per symbol)
    pub fn for_len(len: usize) -> Self {
        let bits_per_symbol = bits_for_capacity(nearest_power_of_two(len)).max(1);
        Self {
            bits_per_symbol,
            mask: (1u64 << bits_per_symbol) - 1,
            draws_per_word: WORD_BITS / bits_per_symbol,
        }
    }
}

impl<R: RngCore> Generator<R> {
    /// Sample `length` symbols uniformly from `alphabet`
    ///
    /// Returns an empty vector for an empty alphabet or a zero length. A one-symbol alphabet is
    /// repeated without consuming entropy.
    pub fn sample<T: Clone>(&mut self, alphabet: &[T], length: usize) -> Vec<T> {
        if length == 0 || alphabet.is_empty() {
            return Vec::new();
        }
        if alphabet.len() == 1 {
            return vec![alphabet[0].clone(); length];
        }

        self.prepare_sampling();

        let len = alphabet.len();
        if len > MAXIMUM_CAPACITY {
            debug!(len, "Alphabet exceeds bit-budget capacity, drawing bounded indices");
            return (0..length)
                .map(|_| alphabet[self.rng_mut().gen_range(0..len)].clone())
                .collect();
        }

        let budget = BitBudget::for_len(len);
        let mut output = vec![alphabet[0].clone(); length];
        let mut slot = length;
        let mut word = 0u64;
        let mut remaining = 0u32;

        while slot > 0 {
            if remaining == 0 {
                word = self.next_word();
                remaining = budget.draws_per_word;
            }

            let index = (word & budget.mask) as usize;
            let accepted = index < len;
            if accepted {
                slot -= 1;
                output[slot] = alphabet[index].clone();
            }
            self.record_index(accepted);

            word >>= budget.bits_per_symbol;
            remaining -= 1;
        }

        output
    }

    /// Sample a string of `length` characters drawn from the characters of `alphabet`
    pub fn sample_str(&mut self, alphabet: &str, length: usize) -> String {
        let symbols: Vec<char> = alphabet.chars().collect();
        self.sample(&symbols, length).into_iter().collect()
    }

    /// Random ASCII letters
    pub fn rand_string(&mut self, length: usize) -> String {
        self.sample_str(LETTERS, length)
    }

    /// Random upper-case ASCII letters
    pub fn rand_upper(&mut self, length: usize) -> String {
        self.sample_str(UPPER_LETTERS, length)
    }

    /// Random lower-case ASCII letters
    pub fn rand_lower(&mut self, length: usize) -> String {
        self.sample_str(LOWER_LETTERS, length)
    }

    /// Random decimal digits (leading zeros allowed)
    pub fn rand_numeral(&mut self, length: usize) -> String {
        self.sample_str(NUMERAL, length)
    }

    pub fn rand_numeral_or_letter(&mut self, length: usize) -> String {
        self.sample_str(NUMERAL_OR_LETTER, length)
    }

    pub fn rand_symbol_char(&mut self, length: usize) -> String {
        self.sample_str(SYMBOL_CHARS, length)
    }

    /// `slice_len` strings of `str_len` characters each, drawn from `charset`
    pub fn rand_string_slice(
        &mut self,
        charset: &str,
        slice_len: usize,
        str_len: usize,
    ) -> Vec<String> {
        if slice_len == 0 || str_len == 0 {
            return Vec::new();
        }
        let symbols: Vec<char> = charset.chars().collect();
        (0..slice_len)
            .map(|_| self.sample(&symbols, str_len).into_iter().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_CHARS;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;

    fn seeded() -> Generator {
        Generator::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_bit_budget() {
        assert_eq!(
            BitBudget::for_len(2),
            BitBudget { bits_per_symbol: 1, mask: 1, draws_per_word: 63 }
        );
        assert_eq!(
            BitBudget::for_len(3),
            BitBudget { bits_per_symbol: 2, mask: 3, draws_per_word: 31 }
        );
        assert_eq!(
            BitBudget::for_len(62),
            BitBudget { bits_per_symbol: 6, mask: 63, draws_per_word: 10 }
        );
        assert_eq!(BitBudget::for_len(1).bits_per_symbol, 1);
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut generator = seeded();
        assert!(generator.sample::<char>(&[], 10).is_empty());
        assert!(generator.sample(&['a', 'b'], 0).is_empty());
        assert_eq!(generator.sample_str("", 5), "");
        assert_eq!(generator.stats().words_drawn, 0);
    }

    #[test]
    fn test_single_symbol_consumes_no_entropy() {
        let mut generator = seeded();
        assert_eq!(generator.sample_str("z", 6), "zzzzzz");
        assert_eq!(generator.stats().words_drawn, 0);
    }

    #[test]
    fn test_rejection_skips_out_of_range_indices() {
        // Word slices, low bits first: 3 (rejected), 1, 0, 2
        let word: u64 = 3 | (1 << 2) | (0 << 4) | (2 << 6);
        let mut generator = Generator::new(StepRng::new(word << 1, 0));

        // Slots fill from the end
        assert_eq!(generator.sample_str("abc", 3), "cab");

        let stats = generator.stats();
        assert_eq!(stats.words_drawn, 1);
        assert_eq!(stats.symbols_accepted, 3);
        assert_eq!(stats.symbols_rejected, 1);
    }

    #[test]
    fn test_words_drawn_for_power_of_two_alphabets() {
        let mut generator = seeded();
        let output = generator.sample(&[0u8, 1], 630);
        assert_eq!(output.len(), 630);
        assert_eq!(generator.stats().words_drawn, 10);

        let mut generator = seeded();
        let alphabet: Vec<u8> = (0..64).collect();
        generator.sample(&alphabet, 100);
        assert_eq!(generator.stats().words_drawn, 10);
        assert_eq!(generator.stats().symbols_rejected, 0);
    }

    #[test]
    fn test_fewer_words_than_symbols() {
        let mut generator = seeded();
        generator.sample_str(ALL_CHARS, 1000);
        assert!(generator.stats().words_drawn < 1000);
    }

    #[test]
    fn test_terminates_for_every_alphabet_size() {
        let mut generator = seeded();
        for size in 1..=300u16 {
            let alphabet: Vec<u16> = (0..size).collect();
            let output = generator.sample(&alphabet, 64);
            assert_eq!(output.len(), 64, "alphabet size {}", size);
            assert!(output.iter().all(|s| *s < size));
        }
    }

    #[test]
    fn test_two_symbol_scenario() {
        let mut generator = seeded();
        let output = generator.sample_str("ab", 1000);
        assert_eq!(output.len(), 1000);
        assert!(output.chars().all(|c| c == 'a' || c == 'b'));
        assert!(output.contains('a'));
        assert!(output.contains('b'));
    }

    #[test]
    fn test_uniform_single_symbol_draws() {
        let mut generator = seeded();
        let alphabet = ['v', 'w', 'x', 'y', 'z'];
        let trials = 20_000;
        let mut counts = [0usize; 5];

        for _ in 0..trials {
            let symbol = generator.sample(&alphabet, 1)[0];
            let position = alphabet.iter().position(|c| *c == symbol).unwrap();
            counts[position] += 1;
        }

        let expected = trials / alphabet.len();
        for count in counts {
            assert!(
                count.abs_diff(expected) < 400,
                "counts {:?} too far from {}",
                counts,
                expected
            );
        }
    }

    #[test]
    fn test_multibyte_alphabet() {
        let mut generator = seeded();
        let output = generator.sample_str("αβγ", 50);
        assert_eq!(output.chars().count(), 50);
        assert!(output.chars().all(|c| "αβγ".contains(c)));
    }

    #[test]
    fn test_named_charsets() {
        let mut generator = seeded();
        assert!(generator.rand_upper(32).chars().all(|c| c.is_ascii_uppercase()));
        assert!(generator.rand_lower(32).chars().all(|c| c.is_ascii_lowercase()));
        assert!(generator.rand_numeral(32).chars().all(|c| c.is_ascii_digit()));
        assert!(generator.rand_string(32).chars().all(|c| c.is_ascii_alphabetic()));
        assert!(generator
            .rand_numeral_or_letter(32)
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
        assert!(generator
            .rand_symbol_char(32)
            .chars()
            .all(|c| SYMBOL_CHARS.contains(c)));
    }

    #[test]
    fn test_string_slice() {
        let mut generator = seeded();
        let strings = generator.rand_string_slice(LETTERS, 3, 5);
        assert_eq!(strings.len(), 3);
        assert!(strings.iter().all(|s| s.len() == 5));
        assert!(generator.rand_string_slice(LETTERS, 0, 5).is_empty());
        assert!(generator.rand_string_slice(LETTERS, 3, 0).is_empty());
    }

    #[test]
    fn test_reseeding_still_samples() {
        let mut generator = seeded();
        generator.set_reseed_before_sampling(true);
        assert_eq!(generator.rand_lower(20).len(), 20);
        assert_eq!(generator.stats().reseeds, 1);
    }

    proptest! {
        #[test]
        fn prop_exact_length_and_membership(
            alphabet in prop::collection::vec(any::<char>(), 1..80),
            length in 0usize..300,
            seed in any::<u64>(),
        ) {
            let mut generator: Generator = Generator::seed_from_u64(seed);
            let output = generator.sample(&alphabet, length);
            prop_assert_eq!(output.len(), length);
            prop_assert!(output.iter().all(|c| alphabet.contains(c)));
        }
    }
}
