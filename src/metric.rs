// src/metric.rs
//! Per-grade metric tensors and the transform chain of child algebras.
//!
//! A root algebra is always declared over an orthogonal basis, so its grade-1
//! metric is `diag(squares)` and each higher-grade metric is diagonal with
//! entries multiplied through the blade decomposition `e_first ∧ rest`.
//!
//! A child algebra supplies `M[1]`, whose columns express its vectors in the
//! parent's vectors. Higher transforms are obtained by wedging, inside the
//! parent, the column of the blade's first vector with the `M[k-1]` column of
//! the remaining blade; the metric then follows by congruence:
//!
//! ```text
//! G[k] = M[k]ᵗ · G_parent[k] · M[k]
//! ```
//!
//! For blades this yields the Gram determinant of the spanning vectors, e.g. for
//! the conformal null pair `g(eo ∧ ei, eo ∧ ei) = g(eo,eo)·g(ei,ei) − g(eo,ei)² = −1`.

use tracing::trace;

use crate::algebra::Algebra;
use crate::basis::BasisSet;
use crate::error::ConstructionError;
use crate::matrix::Matrix;
use crate::signature::Signature;

/// Transforms `M[k]` and metrics `G[k]` for every grade `0..=n`.
#[derive(Clone, Debug)]
pub struct MetricChain {
    transforms: Vec<Matrix>,
    metrics: Vec<Matrix>,
}

impl MetricChain {
    /// Metrics of a parentless algebra; every transform is the identity.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::NonOrthogonalRoot`] if the grade-1 metric is not
    /// diagonal, since higher grades are only valid for an orthogonal basis.
    pub fn root(signature: &Signature, basis: &BasisSet) -> Result<Self, ConstructionError> {
        let n = signature.dimension();
        let squares: Vec<_> = signature.squares().iter().map(|s| s.value()).collect();
        let g1 = Matrix::diagonal(&squares);
        assert_orthogonal(&g1)?;

        let mut metrics = Vec::with_capacity(n + 1);
        metrics.push(Matrix::identity(1));
        if n >= 1 {
            metrics.push(g1);
        }
        for k in 2..=n {
            let blades = basis.grade_blades(k);
            let mut diag = Vec::with_capacity(blades.len());
            for &blade in blades {
                if let Some((first, rest)) = blade.split_first() {
                    let r = basis.index_in_grade(rest);
                    diag.push(metrics[1].get(first, first) * metrics[k - 1].get(r, r));
                }
            }
            trace!(grade = k, blades = diag.len(), "root metric");
            metrics.push(Matrix::diagonal(&diag));
        }

        let transforms = (0..=n)
            .map(|k| Matrix::identity(basis.grade_range(k).len()))
            .collect();

        Ok(Self {
            transforms,
            metrics,
        })
    }

    /// Metrics of an algebra defined as a basis change of `parent`.
    ///
    /// `transform` has one row per parent vector and one column per child
    /// vector.
    pub fn child(
        basis: &BasisSet,
        transform: &Matrix,
        parent: &Algebra,
    ) -> Result<Self, ConstructionError> {
        let n = basis.dimension();
        let pn = parent.dimension();
        if n > pn {
            return Err(ConstructionError::ChildExceedsParent {
                child: n,
                parent: pn,
            });
        }
        if transform.rows() != pn || transform.cols() != n {
            return Err(ConstructionError::TransformShape {
                rows: transform.rows(),
                cols: transform.cols(),
                expected_rows: pn,
                expected_cols: n,
            });
        }
        for r in 0..transform.rows() {
            for c in 0..transform.cols() {
                if !transform.get(r, c).is_finite() {
                    return Err(ConstructionError::NonFiniteTransform { row: r, col: c });
                }
            }
        }

        let mut transforms = Vec::with_capacity(n + 1);
        transforms.push(Matrix::identity(1));
        if n >= 1 {
            transforms.push(transform.clone());
        }
        for k in 2..=n {
            let child_blades = basis.grade_blades(k);
            let mut mk = Matrix::zeros(parent.basis().grade_range(k).len(), child_blades.len());
            for (col, &blade) in child_blades.iter().enumerate() {
                let Some((first, rest)) = blade.split_first() else {
                    continue;
                };
                let head = parent.grade_terms(1, &transforms[1].column(first));
                let tail = parent.grade_terms(
                    k - 1,
                    &transforms[k - 1].column(basis.index_in_grade(rest)),
                );
                let joined = parent.wedge(&head, &tail);
                for (row, value) in parent.grade_coefficients(&joined, k).into_iter().enumerate() {
                    mk.set(row, col, value);
                }
            }
            trace!(grade = k, rows = mk.rows(), cols = mk.cols(), "derived transform");
            transforms.push(mk);
        }

        let metrics = (0..=n)
            .map(|k| Matrix::congruence(&transforms[k], parent.metric_chain().metric(k)))
            .collect();

        Ok(Self {
            transforms,
            metrics,
        })
    }

    /// `G[k]`.
    pub fn metric(&self, grade: usize) -> &Matrix {
        &self.metrics[grade]
    }

    /// `M[k]`.
    pub fn transform(&self, grade: usize) -> &Matrix {
        &self.transforms[grade]
    }
}

/// Reject a grade-1 metric with any non-zero off-diagonal entry.
pub fn assert_orthogonal(g1: &Matrix) -> Result<(), ConstructionError> {
    match g1.first_off_diagonal() {
        Some((row, col)) => Err(ConstructionError::NonOrthogonalRoot { row, col }),
        None => Ok(()),
    }
}
