//! Core Generator trait, the bounded integer sampler and the sign draw.

use crate::rng::Mulberry32;
use serde::Serialize;
use std::marker::PhantomData;

/// Core trait for all data generators.
///
/// Generators are pure descriptions; all state lives in the `Mulberry32`
/// passed in, so the order in which generators are invoked fixes the output.
pub trait Generator<T>: Send + Sync {
    /// Generate a single value, consuming draws from `rng`.
    fn generate(&self, rng: &mut Mulberry32) -> T;

    /// Generate N values into a Vec.
    fn generate_n(&self, rng: &mut Mulberry32, n: usize) -> Vec<T> {
        (0..n).map(|_| self.generate(rng)).collect()
    }
}

/// Extension trait providing combinator methods for generators.
pub trait GeneratorExt<T>: Generator<T> + Sized {
    /// Map the output to a different type.
    fn map<U, F: Fn(T) -> U + Send + Sync>(self, f: F) -> Map<Self, F, T> {
        Map {
            inner: self,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, G: Generator<T> + Sized> GeneratorExt<T> for G {}

/// Map combinator - transforms generator output.
pub struct Map<G, F, T> {
    inner: G,
    f: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, U, G: Generator<T>, F: Fn(T) -> U + Send + Sync> Generator<U> for Map<G, F, T> {
    fn generate(&self, rng: &mut Mulberry32) -> U {
        (self.f)(self.inner.generate(rng))
    }
}

/// Round to the nearest integer with ties going toward positive infinity.
///
/// `f64::round` sends ties away from zero, which disagrees for negative
/// halves (`-2.5` must become `-2`).
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Largest bound magnitude `Pick` accepts: every integer up to here is exact
/// as an `f64`.
pub const MAX_BOUND: i64 = (1 << 53) - 1;

/// Bounded integer sampler: one draw mapped onto the closed range
/// `[min, max]`.
///
/// Both bounds are reachable through rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    min: i64,
    max: i64,
}

impl Pick {
    /// # Panics
    ///
    /// Panics when `min > max` or either bound exceeds `MAX_BOUND` in
    /// magnitude.
    pub fn new(min: i64, max: i64) -> Self {
        assert!(
            min <= max,
            "pick requires min <= max (got min={}, max={})",
            min,
            max
        );
        assert!(
            is_exact_bound(min) && is_exact_bound(max),
            "pick bounds must lie within +/-{} (got min={}, max={})",
            MAX_BOUND,
            min,
            max
        );
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Whether `value` lies within the bounds `Pick` accepts.
pub fn is_exact_bound(value: i64) -> bool {
    (-MAX_BOUND..=MAX_BOUND).contains(&value)
}

impl Generator<i64> for Pick {
    fn generate(&self, rng: &mut Mulberry32) -> i64 {
        // Spans near 2^54 round in f64; clamp keeps the result inside
        let span = (i128::from(self.max) - i128::from(self.min)) as f64;
        let value = round_half_up(self.min as f64 + span * rng.next_f64()) as i64;
        value.clamp(self.min, self.max)
    }
}

/// Draw one integer in `[min, max]`.
///
/// # Panics
///
/// Panics when `min > max`.
pub fn pick(rng: &mut Mulberry32, min: i64, max: i64) -> i64 {
    Pick::new(min, max).generate(rng)
}

/// Direction of a signed contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn factor(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Sign draw: `Positive` when the draw is strictly above `threshold`.
///
/// With a uniform draw the probability of `Negative` is `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chance {
    threshold: f64,
}

impl Chance {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Generator<Sign> for Chance {
    fn generate(&self, rng: &mut Mulberry32) -> Sign {
        if rng.next_f64() > self.threshold {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
