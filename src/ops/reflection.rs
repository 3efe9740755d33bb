// src/ops/reflection.rs
//! Reflections as sandwich products with a vector.

use tracing::warn;

use crate::algebra::Algebra;
use crate::error::AlgebraicError;
use crate::multivector::Multivector;

pub trait Reflect {
    /// Reflect `x` in the hyperplane orthogonal to `n`: `n · x̂ · n⁻¹`, where
    /// `x̂` is the grade involution. On vectors this is `−n · x · n⁻¹`.
    fn reflect_along(&self, x: &Multivector, n: &Multivector) -> Result<Multivector, AlgebraicError>;

    /// Reflect `x` in the line spanned by `n`: `n · x · n⁻¹`.
    fn reflect_in_line(&self, x: &Multivector, n: &Multivector) -> Result<Multivector, AlgebraicError>;

    /// Reflect `x` in the hyperplane spanned by the grade n−1 blade `h`.
    ///
    /// The normal is `h ⌋ I⁻¹`, so the algebra must be non-degenerate.
    fn reflect_in_hyperplane(&self, x: &Multivector, h: &Multivector) -> Result<Multivector, AlgebraicError>;
}

impl Reflect for Algebra {
    fn reflect_along(&self, x: &Multivector, n: &Multivector) -> Result<Multivector, AlgebraicError> {
        let inv = self.inverse(n)?;
        let nx = self.geometric_product(n, &self.involute(x));
        Ok(self.geometric_product(&nx, &inv))
    }

    fn reflect_in_line(&self, x: &Multivector, n: &Multivector) -> Result<Multivector, AlgebraicError> {
        let inv = self.inverse(n)?;
        let nx = self.geometric_product(n, x);
        Ok(self.geometric_product(&nx, &inv))
    }

    fn reflect_in_hyperplane(&self, x: &Multivector, h: &Multivector) -> Result<Multivector, AlgebraicError> {
        let i_inv = self.inverse(&self.pseudoscalar()).map_err(|e| {
            warn!("hyperplane reflection needs an invertible pseudoscalar");
            e
        })?;
        let normal = self.left_contraction(h, &i_inv);
        self.reflect_along(x, &normal)
    }
}

/// Reflect `x` in the hyperplane orthogonal to `n`.
pub fn reflect_along(alg: &Algebra, x: &Multivector, n: &Multivector) -> Result<Multivector, AlgebraicError> {
    alg.reflect_along(x, n)
}

/// Reflect `x` in the line spanned by `n`.
pub fn reflect_in_line(alg: &Algebra, x: &Multivector, n: &Multivector) -> Result<Multivector, AlgebraicError> {
    alg.reflect_in_line(x, n)
}
