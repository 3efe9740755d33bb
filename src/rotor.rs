// src/rotor.rs
//! Rotors (unit even versors) for rotations in any algebra.

use crate::algebra::Algebra;
use crate::error::AlgebraicError;
use crate::multivector::Multivector;
use crate::types::Scalar;

/// Relative tolerance for deciding that a bivector squares to a scalar.
const PLANE_TOLERANCE: Scalar = 1e-12;

/// A rotor `R`, applied as `R · x · reverse(R)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotor {
    inner: Multivector,
}

impl Rotor {
    /// The identity rotor.
    pub fn identity(alg: &Algebra) -> Self {
        Rotor {
            inner: alg.scalar(1.0),
        }
    }

    /// Rotor taking the direction of `a` onto the direction of `b`:
    /// `R = normalize(1 + b̂ · â)`.
    ///
    /// # Errors
    ///
    /// [`AlgebraicError::ZeroNormSquared`] if either vector is null or they are
    /// antiparallel (the rotation plane is undetermined).
    ///
    /// # Examples
    ///
    /// ```
    /// use ga_algebra::{Algebra, rotor::Rotor};
    ///
    /// let alg = Algebra::from_counts(3, 0, 0).unwrap();
    /// let a = alg.vector(&[1.0, 0.0, 0.0]).unwrap();
    /// let b = alg.vector(&[0.0, 2.0, 0.0]).unwrap();
    /// let r = Rotor::from_vectors(&alg, &a, &b).unwrap();
    /// let turned = r.apply(&alg, &a);
    /// assert!((turned.get(2) - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_vectors(alg: &Algebra, a: &Multivector, b: &Multivector) -> Result<Self, AlgebraicError> {
        let a = alg.normalize(a)?;
        let b = alg.normalize(b)?;
        let r = alg.add(&alg.scalar(1.0), &alg.geometric_product(&b, &a));
        Ok(Rotor {
            inner: alg.normalize(&r)?,
        })
    }

    /// Rotation by `angle` in the plane `plane`: `cos(θ/2) − sin(θ/2) · B̂`.
    ///
    /// With `plane = e1 ∧ e2` a positive angle turns `e1` toward `e2`.
    ///
    /// # Errors
    ///
    /// [`AlgebraicError::NotARotationPlane`] unless `plane` is a pure bivector
    /// squaring to a negative scalar.
    pub fn from_bivector_angle(alg: &Algebra, plane: &Multivector, angle: Scalar) -> Result<Self, AlgebraicError> {
        if alg.grades(plane) != [2] {
            return Err(AlgebraicError::NotARotationPlane);
        }
        let square = alg.geometric_product(plane, plane);
        let s = alg.scalar_part(&square);
        let residue = square
            .iter()
            .filter(|&(i, _)| i != 0)
            .fold(0.0, |m: Scalar, (_, c)| m.max(c.abs()));
        if s >= 0.0 || residue > PLANE_TOLERANCE * s.abs() {
            return Err(AlgebraicError::NotARotationPlane);
        }
        let unit = alg.scale(1.0 / (-s).sqrt(), plane);
        let half = 0.5 * angle;
        Ok(Rotor {
            inner: alg.sub(&alg.scalar(half.cos()), &alg.scale(half.sin(), &unit)),
        })
    }

    /// Wrap an existing even versor without checking it.
    pub fn from_multivector(inner: Multivector) -> Self {
        Rotor { inner }
    }

    pub fn as_multivector(&self) -> &Multivector {
        &self.inner
    }

    /// `R · x · reverse(R)`.
    pub fn apply(&self, alg: &Algebra, x: &Multivector) -> Multivector {
        alg.sandwich(&self.inner, x)
    }

    /// Rotor applying `other` first, then `self`.
    pub fn compose(&self, alg: &Algebra, other: &Rotor) -> Rotor {
        Rotor {
            inner: alg.geometric_product(&self.inner, &other.inner),
        }
    }

    /// Inverse rotation.
    pub fn reverse(&self, alg: &Algebra) -> Rotor {
        Rotor {
            inner: alg.reverse(&self.inner),
        }
    }
}
