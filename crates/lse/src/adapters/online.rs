//! Online adapter for incremental log-sum-exp.
//!
//! ## Purpose
//!
//! This module provides a running log-sum-exp over values that arrive one at
//! a time, without retaining them in a buffer.
//!
//! ## Design notes
//!
//! * **Storage**: Two scalars (running maximum and shifted sum) plus a count.
//! * **Rescaling**: When a larger value arrives, the shifted sum is rescaled by
//!   `exp(old_max - new_max)` before the new term is added.
//! * **Mergeable**: Two accumulators combine into one, so chunks can be
//!   reduced independently and merged.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `acc = sum(exp(x_i - max))` over all non `-inf` values seen so far.
//! * `acc >= 1` once any finite value has been pushed (the maximum contributes `1`).
//! * An accumulator that has seen nothing but `-inf` reports `-inf`.
//!
//! ## Non-goals
//!
//! * This adapter does not sort, so summation order is arrival order.
//! * This adapter does not reject NaN; it propagates.

// External dependencies
use num_traits::Float;

// ============================================================================
// Online Accumulator
// ============================================================================

/// Running log-sum-exp accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnlineLse<T: Float> {
    /// Largest value seen so far.
    max: T,

    /// Sum of `exp(x - max)` over the values seen so far.
    acc: T,

    /// Number of values pushed, including `-inf`.
    count: usize,
}

impl<T: Float> Default for OnlineLse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineLse<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            max: T::neg_infinity(),
            acc: T::zero(),
            count: 0,
        }
    }

    /// Add one log-domain value.
    pub fn push(&mut self, x: T) {
        self.count += 1;

        if x == T::neg_infinity() {
            return;
        }

        if x > self.max {
            self.acc = self.acc * (self.max - x).exp() + T::one();
            self.max = x;
        } else {
            self.acc = self.acc + (x - self.max).exp();
        }
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        let count = self.count + other.count;

        if other.max == T::neg_infinity() {
            self.count = count;
            return;
        }
        if self.max == T::neg_infinity() {
            *self = *other;
            self.count = count;
            return;
        }

        let (hi, lo) = if other.max > self.max {
            (*other, *self)
        } else {
            (*self, *other)
        };
        // hi.acc already carries its own maximum
        self.acc = hi.acc + lo.acc * (lo.max - hi.max).exp();
        self.max = hi.max;
        self.count = count;
    }

    /// Current log-sum-exp of everything pushed so far.
    pub fn value(&self) -> T {
        if self.max == T::neg_infinity() {
            return T::neg_infinity();
        }
        self.max + self.acc.ln()
    }

    /// Number of values pushed.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clear the accumulator.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<T: Float> Extend<T> for OnlineLse<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<'a, T: Float + 'a> Extend<&'a T> for OnlineLse<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Float> FromIterator<T> for OnlineLse<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl<'a, T: Float + 'a> FromIterator<&'a T> for OnlineLse<T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
