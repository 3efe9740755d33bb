// src/signature.rs
//! Metric signatures: the ordered basis vectors an algebra is built over.
//!
//! The declared order of the vectors is authoritative. Bit `i` of every blade
//! bitmask refers to the `i`-th declared vector, and all permutation signs are
//! computed against that order, never against the label text.

use std::collections::HashSet;

use crate::error::ConstructionError;
use crate::types::{Bitmask, Scalar};

/// Largest supported number of basis vectors (tables hold 4ⁿ entries).
pub const MAX_DIMENSION: usize = 12;

/// Prefix shared by every blade name: `e`, `e1`, `e12`, ...
pub const BLADE_PREFIX: &str = "e";

/// What a basis vector squares to under the geometric product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    Positive,
    Negative,
    Null,
}

impl Square {
    /// The scalar `e_i * e_i`.
    #[inline(always)]
    pub fn value(self) -> Scalar {
        match self {
            Square::Positive => 1.0,
            Square::Negative => -1.0,
            Square::Null => 0.0,
        }
    }

    /// Parse `+1`, `-1` or `0`; anything else is rejected.
    pub fn from_value(value: Scalar) -> Result<Self, ConstructionError> {
        if value == 1.0 {
            Ok(Square::Positive)
        } else if value == -1.0 {
            Ok(Square::Negative)
        } else if value == 0.0 {
            Ok(Square::Null)
        } else {
            Err(ConstructionError::InvalidSquare(value))
        }
    }
}

/// One declared basis vector: its square and its subscript label.
///
/// The label is the subscript only; the blade built from this vector alone is
/// displayed as `e<label>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasisVector {
    pub square: Square,
    pub label: String,
}

impl BasisVector {
    pub fn new(square: Square, label: impl Into<String>) -> Self {
        Self {
            square,
            label: label.into(),
        }
    }
}

/// A validated, ordered list of basis vectors.
///
/// The only way to obtain one is through [`Signature::new`] or
/// [`Signature::from_counts`], so every `Signature` in existence has unique,
/// non-empty labels and a bijective blade-name mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    vectors: Vec<BasisVector>,
}

impl Signature {
    /// Validate an explicit basis spec.
    ///
    /// # Errors
    ///
    /// - [`ConstructionError::DimensionTooLarge`] beyond [`MAX_DIMENSION`]
    /// - [`ConstructionError::EmptyLabel`] / [`ConstructionError::DuplicateLabel`]
    /// - [`ConstructionError::AmbiguousBladeName`] when two blades would be
    ///   displayed with the same name (e.g. subscripts `1`, `11`, `111`)
    ///
    /// # Examples
    ///
    /// ```
    /// use ga_algebra::signature::{BasisVector, Signature, Square};
    ///
    /// let sig = Signature::new(vec![
    ///     BasisVector::new(Square::Positive, "x"),
    ///     BasisVector::new(Square::Null, "o"),
    /// ])
    /// .unwrap();
    /// assert_eq!(sig.dimension(), 2);
    /// assert_eq!(sig.blade_name(0b11), "exo");
    /// ```
    pub fn new(vectors: Vec<BasisVector>) -> Result<Self, ConstructionError> {
        if vectors.len() > MAX_DIMENSION {
            return Err(ConstructionError::DimensionTooLarge {
                dimension: vectors.len(),
                max: MAX_DIMENSION,
            });
        }

        let mut seen = HashSet::with_capacity(vectors.len());
        for (position, v) in vectors.iter().enumerate() {
            if v.label.is_empty() {
                return Err(ConstructionError::EmptyLabel { position });
            }
            if !seen.insert(v.label.as_str()) {
                return Err(ConstructionError::DuplicateLabel(v.label.clone()));
            }
        }

        let sig = Self { vectors };
        sig.check_blade_names()?;
        Ok(sig)
    }

    /// Canonical signature: `positive` vectors squaring to +1, then `negative`
    /// squaring to -1, then `zero` null vectors, labelled `1`, `2`, ...
    ///
    /// If the plain subscripts would give two blades the same name (twelve
    /// vectors: `e1 ∧ e2` and `e12`), they are zero-padded to two digits
    /// instead (`01`, `02`, ..., `12`).
    pub fn from_counts(
        positive: usize,
        negative: usize,
        zero: usize,
    ) -> Result<Self, ConstructionError> {
        let squares: Vec<Square> = std::iter::repeat(Square::Positive)
            .take(positive)
            .chain(std::iter::repeat(Square::Negative).take(negative))
            .chain(std::iter::repeat(Square::Null).take(zero))
            .collect();

        let labelled = |label: fn(usize) -> String| {
            squares
                .iter()
                .enumerate()
                .map(|(i, &sq)| BasisVector::new(sq, label(i + 1)))
                .collect::<Vec<_>>()
        };
        match Self::new(labelled(|i| i.to_string())) {
            Err(ConstructionError::AmbiguousBladeName { .. }) => {
                Self::new(labelled(|i| format!("{i:02}")))
            }
            built => built,
        }
    }

    fn check_blade_names(&self) -> Result<(), ConstructionError> {
        let mut names = HashSet::with_capacity(1 << self.dimension());
        for mask in 0..=self.full_mask() {
            let name = self.blade_name(mask);
            if !names.insert(name.clone()) {
                return Err(ConstructionError::AmbiguousBladeName { name });
            }
        }
        Ok(())
    }

    /// Number of basis vectors.
    #[inline(always)]
    pub fn dimension(&self) -> usize {
        self.vectors.len()
    }

    pub fn vectors(&self) -> &[BasisVector] {
        &self.vectors
    }

    pub fn vector(&self, position: usize) -> &BasisVector {
        &self.vectors[position]
    }

    /// Square of the vector at `position`.
    #[inline(always)]
    pub fn square(&self, position: usize) -> Square {
        self.vectors[position].square
    }

    pub fn squares(&self) -> Vec<Square> {
        self.vectors.iter().map(|v| v.square).collect()
    }

    /// Declared position of the vector with this subscript.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.vectors.iter().position(|v| v.label == label)
    }

    /// Bitmask of the pseudoscalar (every vector included).
    #[inline(always)]
    pub fn full_mask(&self) -> Bitmask {
        ((1u64 << self.dimension()) - 1) as Bitmask
    }

    /// Display name of the blade with this bitmask: the prefix followed by the
    /// subscripts of its vectors in declared order.
    pub fn blade_name(&self, mask: Bitmask) -> String {
        let mut name = String::from(BLADE_PREFIX);
        for (i, v) in self.vectors.iter().enumerate() {
            if (mask >> i) & 1 == 1 {
                name.push_str(&v.label);
            }
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_expand_in_positive_negative_zero_order() {
        let sig = Signature::from_counts(2, 1, 1).unwrap();
        assert_eq!(sig.dimension(), 4);
        assert_eq!(
            sig.squares(),
            vec![Square::Positive, Square::Positive, Square::Negative, Square::Null]
        );
        assert_eq!(sig.vector(2).label, "3");
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let err = Signature::new(vec![
            BasisVector::new(Square::Positive, "a"),
            BasisVector::new(Square::Negative, "a"),
        ])
        .unwrap_err();
        assert_eq!(err, ConstructionError::DuplicateLabel("a".into()));
    }

    #[test]
    fn empty_label_is_rejected() {
        let err = Signature::new(vec![BasisVector::new(Square::Positive, "")]).unwrap_err();
        assert_eq!(err, ConstructionError::EmptyLabel { position: 0 });
    }

    #[test]
    fn colliding_blade_names_are_rejected() {
        let err = Signature::new(vec![
            BasisVector::new(Square::Positive, "1"),
            BasisVector::new(Square::Positive, "2"),
            BasisVector::new(Square::Positive, "12"),
        ])
        .unwrap_err();
        assert_eq!(err, ConstructionError::AmbiguousBladeName { name: "e12".into() });
    }

    #[test]
    fn default_labels_stay_plain_until_they_collide() {
        for n in [10, 11] {
            let sig = Signature::from_counts(n, 0, 0).unwrap();
            assert_eq!(sig.vector(0).label, "1");
            assert_eq!(sig.blade_name(0b11), "e12");
            assert_eq!(sig.blade_name(1 << 9), "e10");
        }

        let sig = Signature::from_counts(12, 0, 0).unwrap();
        assert_eq!(sig.blade_name(1 << 10), "e11");
        assert_eq!(sig.blade_name(0b1), "e01");
        assert_eq!(sig.blade_name(0b11), "e0102");
        assert_eq!(sig.blade_name(1 << 11), "e12");

        let small = Signature::from_counts(3, 0, 0).unwrap();
        assert_eq!(small.blade_name(0b101), "e13");
    }

    #[test]
    fn dimension_limit() {
        let err = Signature::from_counts(MAX_DIMENSION + 1, 0, 0).unwrap_err();
        assert!(matches!(err, ConstructionError::DimensionTooLarge { .. }));
    }

    #[test]
    fn square_values() {
        assert_eq!(Square::from_value(-1.0).unwrap(), Square::Negative);
        assert_eq!(Square::from_value(0.0).unwrap().value(), 0.0);
        assert!(Square::from_value(2.0).is_err());
    }

    #[test]
    fn names_follow_declared_order_not_label_text() {
        let sig = Signature::new(vec![
            BasisVector::new(Square::Positive, "z"),
            BasisVector::new(Square::Positive, "a"),
        ])
        .unwrap();
        assert_eq!(sig.blade_name(0b11), "eza");
    }
}
