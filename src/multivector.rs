// src/multivector.rs
//! Sparse multivectors keyed by canonical blade index.
//!
//! A `Multivector` does not own a reference to its algebra; keys are canonical
//! indices into the algebra that produced it, so iteration always follows the
//! canonical blade order. Coefficients that are exactly zero are never stored.

use std::collections::BTreeMap;

use crate::types::Scalar;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Multivector {
    terms: BTreeMap<usize, Scalar>,
}

impl Multivector {
    /// The zero multivector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Single-term multivector `coefficient · blade[index]`.
    pub fn term(index: usize, coefficient: Scalar) -> Self {
        let mut mv = Self::zero();
        mv.accumulate(index, coefficient);
        mv
    }

    /// Sum of `(index, coefficient)` pairs; repeated indices accumulate.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (usize, Scalar)>,
    {
        let mut mv = Self::zero();
        for (index, coefficient) in terms {
            mv.accumulate(index, coefficient);
        }
        mv
    }

    /// Add `value` to the coefficient at `index`, dropping the entry if the
    /// sum is exactly zero.
    pub(crate) fn accumulate(&mut self, index: usize, value: Scalar) {
        if value == 0.0 {
            return;
        }
        let slot = self.terms.entry(index).or_insert(0.0);
        *slot += value;
        if *slot == 0.0 {
            self.terms.remove(&index);
        }
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of stored (non-zero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient at a canonical index (zero if absent).
    pub fn get(&self, index: usize) -> Scalar {
        self.terms.get(&index).copied().unwrap_or(0.0)
    }

    /// Terms in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Scalar)> + '_ {
        self.terms.iter().map(|(&i, &c)| (i, c))
    }

    /// Largest canonical index present, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.terms.keys().next_back().copied()
    }

    /// Apply `f(index, coefficient)` to every term, pruning exact zeros.
    pub fn map_terms<F>(&self, mut f: F) -> Multivector
    where
        F: FnMut(usize, Scalar) -> Scalar,
    {
        Multivector::from_terms(self.iter().map(|(i, c)| (i, f(i, c))))
    }

    /// Keep the terms whose index satisfies `keep`.
    pub fn filter_terms<F>(&self, mut keep: F) -> Multivector
    where
        F: FnMut(usize) -> bool,
    {
        Multivector {
            terms: self
                .terms
                .iter()
                .filter(|(i, _)| keep(**i))
                .map(|(&i, &c)| (i, c))
                .collect(),
        }
    }

    /// Largest absolute coefficient difference to `other`.
    pub fn max_abs_diff(&self, other: &Multivector) -> Scalar {
        let mut worst: Scalar = 0.0;
        for (i, c) in self.iter() {
            worst = worst.max((c - other.get(i)).abs());
        }
        for (i, c) in other.iter() {
            if !self.terms.contains_key(&i) {
                worst = worst.max(c.abs());
            }
        }
        worst
    }
}

impl FromIterator<(usize, Scalar)> for Multivector {
    fn from_iter<I: IntoIterator<Item = (usize, Scalar)>>(iter: I) -> Self {
        Multivector::from_terms(iter)
    }
}
