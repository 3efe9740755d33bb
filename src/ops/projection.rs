// src/ops/projection.rs
//! Projection and rejection of multivectors onto blades.

use crate::algebra::Algebra;
use crate::error::AlgebraicError;
use crate::multivector::Multivector;

/// Projecting and rejecting against a blade `B` of the same algebra.
pub trait BladeProjection {
    /// `(x ⌋ B) · B⁻¹`.
    ///
    /// # Errors
    ///
    /// [`AlgebraicError::ZeroNormSquared`] when `B` is null.
    fn project_onto(&self, x: &Multivector, blade: &Multivector) -> Result<Multivector, AlgebraicError>;

    /// `x − project_onto(x, B)`, the part of `x` orthogonal to `B`.
    fn reject_from(&self, x: &Multivector, blade: &Multivector) -> Result<Multivector, AlgebraicError>;
}

impl BladeProjection for Algebra {
    fn project_onto(&self, x: &Multivector, blade: &Multivector) -> Result<Multivector, AlgebraicError> {
        let inv = self.inverse(blade)?;
        Ok(self.geometric_product(&self.left_contraction(x, blade), &inv))
    }

    fn reject_from(&self, x: &Multivector, blade: &Multivector) -> Result<Multivector, AlgebraicError> {
        let p = self.project_onto(x, blade)?;
        Ok(self.sub(x, &p))
    }
}

/// Free-function wrappers.
/// Project `x` onto `blade`.
pub fn project_onto(alg: &Algebra, x: &Multivector, blade: &Multivector) -> Result<Multivector, AlgebraicError> {
    alg.project_onto(x, blade)
}

/// Reject `x` from `blade`.
pub fn reject_from(alg: &Algebra, x: &Multivector, blade: &Multivector) -> Result<Multivector, AlgebraicError> {
    alg.reject_from(x, blade)
}
