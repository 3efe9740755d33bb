// src/basis.rs
//! Basis-blade enumeration and the bitmask ⇄ canonical-index maps.
//!
//! Every blade is identified by the bitmask of the vector positions it contains.
//! The canonical order lists blades by grade, and within a grade by comparing
//! their position sequences lexicographically:
//!
//! ```text
//! n = 3:  e, e1, e2, e3, e12, e13, e23, e123
//! masks:  0, 1,  2,  4,  3,   5,   6,   7
//! ```
//!
//! Nothing here looks at labels, so the order cannot drift when subscripts are
//! not single ASCII digits.

use std::ops::Range;

use crate::signature::Signature;
use crate::types::Bitmask;

/// A basis blade, identified by its bitmask over vector positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasisBlade(Bitmask);

impl BasisBlade {
    /// The grade-0 blade.
    pub const SCALAR: BasisBlade = BasisBlade(0);

    #[inline(always)]
    pub const fn from_mask(mask: Bitmask) -> Self {
        BasisBlade(mask)
    }

    #[inline(always)]
    pub const fn mask(self) -> Bitmask {
        self.0
    }

    /// Number of vectors in the blade.
    #[inline(always)]
    pub const fn grade(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn contains(self, position: usize) -> bool {
        (self.0 >> position) & 1 == 1
    }

    /// Included vector positions in ascending order.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        let mask = self.0;
        (0..Bitmask::BITS as usize).filter(move |&i| (mask >> i) & 1 == 1)
    }

    /// Split off the lowest vector: `self = e_first ∧ rest`.
    ///
    /// Returns `None` for the scalar blade.
    pub fn split_first(self) -> Option<(usize, BasisBlade)> {
        if self.0 == 0 {
            return None;
        }
        let first = self.0.trailing_zeros() as usize;
        Some((first, BasisBlade(self.0 & !(1 << first))))
    }
}

/// The ordered blade set of an n-dimensional algebra.
#[derive(Clone, Debug)]
pub struct BasisSet {
    dimension: usize,
    /// Blades in canonical order.
    blades: Vec<BasisBlade>,
    /// Dense bitmask → canonical index map (length 2ⁿ).
    index_of_mask: Vec<usize>,
    /// `grade_offsets[k]..grade_offsets[k + 1]` is the index range of grade k.
    grade_offsets: Vec<usize>,
}

impl BasisSet {
    /// Enumerate all 2ⁿ blades of the signature in canonical order.
    pub fn build(signature: &Signature) -> Self {
        let dimension = signature.dimension();
        let count = 1usize << dimension;

        let mut blades: Vec<BasisBlade> =
            (0..count).map(|m| BasisBlade(m as Bitmask)).collect();
        blades.sort_by(|a, b| {
            a.grade()
                .cmp(&b.grade())
                .then_with(|| a.positions().cmp(b.positions()))
        });

        let mut index_of_mask = vec![0usize; count];
        for (index, blade) in blades.iter().enumerate() {
            index_of_mask[blade.mask() as usize] = index;
        }

        let mut grade_offsets = vec![0usize; dimension + 2];
        for blade in &blades {
            grade_offsets[blade.grade() + 1] += 1;
        }
        for k in 1..grade_offsets.len() {
            grade_offsets[k] += grade_offsets[k - 1];
        }

        Self {
            dimension,
            blades,
            index_of_mask,
            grade_offsets,
        }
    }

    #[inline(always)]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of blades, 2ⁿ.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.blades.len()
    }

    /// Always false: even the zero-dimensional algebra has the scalar blade.
    pub fn is_empty(&self) -> bool {
        self.blades.is_empty()
    }

    pub fn blades(&self) -> &[BasisBlade] {
        &self.blades
    }

    /// Blade at a canonical index.
    #[inline(always)]
    pub fn blade(&self, index: usize) -> BasisBlade {
        self.blades[index]
    }

    /// Canonical index of a blade.
    #[inline(always)]
    pub fn index_of(&self, blade: BasisBlade) -> usize {
        self.index_of_mask[blade.mask() as usize]
    }

    /// Canonical index range of the grade-k blades.
    pub fn grade_range(&self, grade: usize) -> Range<usize> {
        self.grade_offsets[grade]..self.grade_offsets[grade + 1]
    }

    pub fn grade_blades(&self, grade: usize) -> &[BasisBlade] {
        &self.blades[self.grade_range(grade)]
    }

    /// Position of a blade among the blades of its own grade.
    #[inline(always)]
    pub fn index_in_grade(&self, blade: BasisBlade) -> usize {
        self.index_of(blade) - self.grade_offsets[blade.grade()]
    }

    #[inline(always)]
    pub fn pseudoscalar(&self) -> BasisBlade {
        BasisBlade(((1u64 << self.dimension) - 1) as Bitmask)
    }
}
