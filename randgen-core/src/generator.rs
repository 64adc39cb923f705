// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Pseudo-random entropy handle
//!
//! Every pseudo-random operation in this crate is a method on [`Generator`], an explicit
//! handle the caller owns and seeds. There is no process-wide mutable state:
//!
//! - Callers that want reproducibility construct a handle with [`Generator::seed_from_u64`].
//! - Callers that want independence per thread use [`with_thread_generator`].
//! - Callers that must share one stream across threads wrap it in a [`SharedGenerator`],
//!   which serializes access with a mutex.

use crate::config::GeneratorConfig;
use crate::WORD_BITS;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sha2::{Digest, Sha256};
use std::cell::RefCell;
use std::sync::Arc;
use tracing::debug;

/// Counters describing how much entropy a generator has consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorStats {
    /// 63-bit words drawn through [`Generator::next_word`]
    pub words_drawn: u64,
    /// Alphabet indices accepted by the sampler
    pub symbols_accepted: u64,
    /// Alphabet indices rejected because they fell outside the alphabet
    pub symbols_rejected: u64,
    /// Reseeds performed before sampling calls
    pub reseeds: u64,
}

/// Caller-owned pseudo-random generator
///
/// Generic over any [`RngCore`] so tests can inject scripted sources; the default is
/// [`StdRng`]. Not a CSPRNG contract: secure bytes come from [`crate::secure`].
pub struct Generator<R = StdRng> {
    rng: R,
    reseeder: Option<fn(&mut R)>,
    stats: GeneratorStats,
}

impl<R: RngCore> Generator<R> {
    /// Wrap an already seeded source
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            reseeder: None,
            stats: GeneratorStats::default(),
        }
    }

    /// Draw one word with [`WORD_BITS`] usable bits (the top bit is always zero)
    pub fn next_word(&mut self) -> u64 {
        self.stats.words_drawn += 1;
        self.rng.next_u64() >> (64 - WORD_BITS)
    }

    /// Direct access to the underlying source for bounded draws
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Entropy consumption counters
    pub fn stats(&self) -> GeneratorStats {
        self.stats
    }

    /// Whether the handle reseeds itself before every sampling call
    pub fn reseeds_before_sampling(&self) -> bool {
        self.reseeder.is_some()
    }

    pub(crate) fn record_index(&mut self, accepted: bool) {
        if accepted {
            self.stats.symbols_accepted += 1;
        } else {
            self.stats.symbols_rejected += 1;
        }
    }

    /// Run the opt-in reseed hook ahead of an alphabet-sampling call
    pub(crate) fn prepare_sampling(&mut self) {
        if let Some(reseed) = self.reseeder {
            reseed(&mut self.rng);
            self.stats.reseeds += 1;
            debug!("Reseeded generator from process id and clock");
        }
    }
}

impl<R: RngCore + SeedableRng> Generator<R> {
    /// Reproducible generator from a fixed seed
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(R::from_entropy())
    }

    /// Generator seeded from the wall clock (nanoseconds since the Unix epoch)
    pub fn from_clock() -> Self {
        Self::seed_from_u64(clock_nanos())
    }

    /// Generator built from configuration: fixed seed if present, clock otherwise
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut generator = match config.seed {
            Some(seed) => {
                debug!(seed, "Seeding generator from configuration");
                Self::seed_from_u64(seed)
            }
            None => Self::from_clock(),
        };
        generator.set_reseed_before_sampling(config.reseed_before_sampling);
        generator
    }

    /// Replace the current state with one derived from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }

    /// Replace the current state with one derived from process id and wall clock
    pub fn reseed_from_process(&mut self) {
        self.rng = R::from_seed(process_seed());
    }

    /// Enable or disable reseeding from process id and clock before each sampling call
    ///
    /// Disabled by default: it defeats reproducible seeding.
    pub fn set_reseed_before_sampling(&mut self, enabled: bool) {
        let reseed: fn(&mut R) = |rng| *rng = R::from_seed(process_seed());
        self.reseeder = enabled.then_some(reseed);
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::from_clock()
    }
}

fn clock_nanos() -> u64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

/// Full-width seed from SHA-256 over (process id || clock nanos)
fn process_seed<S: AsMut<[u8]> + Default>() -> S {
    let mut hasher = Sha256::new();
    hasher.update(std::process::id().to_be_bytes());
    hasher.update(clock_nanos().to_be_bytes());
    let digest = hasher.finalize();

    let mut seed = S::default();
    for (byte, d) in seed.as_mut().iter_mut().zip(digest.iter().cycle()) {
        *byte = *d;
    }
    seed
}

thread_local! {
    static THREAD_GENERATOR: RefCell<Generator> = RefCell::new(Generator::from_entropy());
}

/// Run `f` with this thread's own generator, seeded lazily from the OS on first use
///
/// Panics if called re-entrantly from inside `f`.
pub fn with_thread_generator<T>(f: impl FnOnce(&mut Generator) -> T) -> T {
    THREAD_GENERATOR.with(|generator| f(&mut generator.borrow_mut()))
}

/// One generator shared between threads, serialized by a mutex
#[derive(Clone)]
pub struct SharedGenerator {
    inner: Arc<Mutex<Generator>>,
}

impl SharedGenerator {
    pub fn new(generator: Generator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Run `f` while holding the lock
    pub fn with<T>(&self, f: impl FnOnce(&mut Generator) -> T) -> T {
        let mut generator = self.inner.lock();
        f(&mut generator)
    }

    pub fn stats(&self) -> GeneratorStats {
        self.inner.lock().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::Rng;

    #[test]
    fn test_next_word_clears_sign_bit() {
        let mut generator = Generator::new(StepRng::new(u64::MAX, 0));
        assert_eq!(generator.next_word(), u64::MAX >> 1);
        assert_eq!(generator.stats().words_drawn, 1);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let mut a: Generator = Generator::seed_from_u64(42);
        let mut b: Generator = Generator::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn test_reseed_from_process_leaves_fixed_stream() {
        let mut fixed: Generator = Generator::seed_from_u64(42);
        let mut reseeded: Generator = Generator::seed_from_u64(42);
        reseeded.reseed_from_process();

        let expected: Vec<u64> = (0..4).map(|_| fixed.next_word()).collect();
        let actual: Vec<u64> = (0..4).map(|_| reseeded.next_word()).collect();
        assert_ne!(actual, expected);
        assert!(actual.iter().all(|word| word >> 63 == 0));
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut generator: Generator = Generator::seed_from_u64(7);
        let first = generator.next_word();
        generator.next_word();
        generator.reseed(7);
        assert_eq!(generator.next_word(), first);
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = GeneratorConfig {
            seed: Some(99),
            ..Default::default()
        };
        let mut a: Generator = Generator::from_config(&config);
        let mut b: Generator = Generator::seed_from_u64(99);
        assert_eq!(a.rng_mut().gen::<u64>(), b.rng_mut().gen::<u64>());
        assert!(!a.reseeds_before_sampling());
    }

    #[test]
    fn test_reseed_hook_counts() {
        let mut generator: Generator = Generator::seed_from_u64(1);
        generator.prepare_sampling();
        assert_eq!(generator.stats().reseeds, 0);

        generator.set_reseed_before_sampling(true);
        generator.prepare_sampling();
        generator.prepare_sampling();
        assert_eq!(generator.stats().reseeds, 2);
    }

    #[test]
    fn test_thread_generators_are_independent() {
        let here = with_thread_generator(|g| g.next_word());
        let there = std::thread::spawn(|| with_thread_generator(|g| g.next_word()))
            .join()
            .unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_shared_generator_across_threads() {
        let shared = SharedGenerator::new(Generator::seed_from_u64(5));
        crossbeam::thread::scope(|s| {
            for _ in 0..4 {
                let shared = shared.clone();
                s.spawn(move |_| {
                    for _ in 0..100 {
                        shared.with(|g| g.next_word());
                    }
                });
            }
        })
        .unwrap();
        assert_eq!(shared.stats().words_drawn, 400);
    }
}
