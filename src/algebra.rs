// src/algebra.rs
//! The `Algebra` facade: one-shot construction of every table, then pure
//! multivector arithmetic against them.
//!
//! # Construction
//!
//! ```text
//! Signature ─► BasisSet ─► wedge / geometric tables ─► dual tables ─► anti-wedge
//!                                   (parent, M[1]) ─► MetricChain
//! ```
//!
//! Every stage runs eagerly inside a single constructor call. Either the whole
//! pipeline succeeds or a [`ConstructionError`] is returned; a built algebra is
//! never mutated afterwards, so `&Algebra` can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use ga_algebra::Algebra;
//!
//! let alg = Algebra::from_counts(2, 0, 0).unwrap();
//! let e1 = alg.blade("e1").unwrap();
//! let e2 = alg.blade("e2").unwrap();
//!
//! let e12 = alg.wedge(&e1, &e2);
//! assert_eq!(alg.to_labeled(&e12), vec![("e12", 1.0)]);
//! assert_eq!(alg.to_labeled(&alg.geometric_product(&e12, &e12)), vec![("e", -1.0)]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, debug_span, warn};

use crate::basis::{BasisBlade, BasisSet};
use crate::duality::{build_anti_wedge, DualSide, DualTable};
use crate::error::{AlgebraicError, ConstructionError, Error, LookupError, ParseError};
use crate::labels::parse_blade_name;
use crate::matrix::Matrix;
use crate::metric::MetricChain;
use crate::multivector::Multivector;
use crate::signature::Signature;
use crate::table::{build_geometric, build_wedge, CayleyTable, ProductKind};
use crate::types::Scalar;

/// A fully built geometric algebra.
#[derive(Debug)]
pub struct Algebra {
    signature: Signature,
    basis: BasisSet,
    names: Vec<String>,
    name_index: HashMap<String, usize>,
    geometric: CayleyTable,
    wedge: CayleyTable,
    anti_wedge: CayleyTable,
    left_dual: DualTable,
    right_dual: DualTable,
    metrics: MetricChain,
    parent: Option<Arc<Algebra>>,
}

impl Algebra {
    /// Root algebra with `positive` + `negative` + `zero` vectors named
    /// `e1`, `e2`, ... in that order.
    pub fn from_counts(
        positive: usize,
        negative: usize,
        zero: usize,
    ) -> Result<Self, ConstructionError> {
        Self::from_basis_spec(Signature::from_counts(positive, negative, zero)?)
    }

    /// Root algebra over an explicit, orthogonal basis.
    pub fn from_basis_spec(signature: Signature) -> Result<Self, ConstructionError> {
        Self::build(signature, None)
    }

    /// Child algebra whose vectors are the columns of `transform` expressed in
    /// the parent's vectors.
    ///
    /// The child's product tables still follow its own declared squares; the
    /// parent only drives the metric chain `G[k] = M[k]ᵗ · G_parent[k] · M[k]`.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::TransformShape`] unless `transform` is
    /// `parent.dimension() × signature.dimension()`, plus every error of
    /// [`Signature::new`].
    pub fn from_basis_spec_with_parent(
        signature: Signature,
        parent: Arc<Algebra>,
        transform: Matrix,
    ) -> Result<Self, ConstructionError> {
        Self::build(signature, Some((parent, transform)))
    }

    fn build(
        signature: Signature,
        parent: Option<(Arc<Algebra>, Matrix)>,
    ) -> Result<Self, ConstructionError> {
        let span = debug_span!(
            "algebra",
            dim = signature.dimension(),
            child = parent.is_some()
        );
        let _guard = span.enter();

        let basis = BasisSet::build(&signature);
        let names: Vec<String> = basis
            .blades()
            .iter()
            .map(|b| signature.blade_name(b.mask()))
            .collect();
        let name_index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        debug!(blades = basis.len(), "enumerated basis");

        let wedge = build_wedge(&basis);
        let geometric = build_geometric(&signature, &basis);
        debug!(entries = geometric.len(), "built product tables");

        let left_dual = DualTable::build(DualSide::Left, &basis, &wedge);
        let right_dual = DualTable::build(DualSide::Right, &basis, &wedge);
        let anti_wedge = build_anti_wedge(&basis, &wedge, &left_dual, &right_dual);
        debug!("built duality and anti-wedge tables");

        let (metrics, parent) = match parent {
            None => (MetricChain::root(&signature, &basis)?, None),
            Some((parent, transform)) => {
                let chain = MetricChain::child(&basis, &transform, &parent)?;
                (chain, Some(parent))
            }
        };
        debug!(grades = signature.dimension() + 1, "propagated metrics");

        Ok(Self {
            signature,
            basis,
            names,
            name_index,
            geometric,
            wedge,
            anti_wedge,
            left_dual,
            right_dual,
            metrics,
            parent,
        })
    }

    // ---------------------------------------------------------------------
    // Structure
    // ---------------------------------------------------------------------

    #[inline(always)]
    pub fn dimension(&self) -> usize {
        self.signature.dimension()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn basis(&self) -> &BasisSet {
        &self.basis
    }

    pub fn parent(&self) -> Option<&Arc<Algebra>> {
        self.parent.as_ref()
    }

    /// Cayley table for one product kind.
    pub fn table(&self, kind: ProductKind) -> &CayleyTable {
        match kind {
            ProductKind::Geometric => &self.geometric,
            ProductKind::Wedge => &self.wedge,
            ProductKind::AntiWedge => &self.anti_wedge,
        }
    }

    pub fn dual_table(&self, side: DualSide) -> &DualTable {
        match side {
            DualSide::Left => &self.left_dual,
            DualSide::Right => &self.right_dual,
        }
    }

    /// Metric tensor `G[k]` over the grade-k blades.
    ///
    /// # Errors
    ///
    /// [`AlgebraicError::GradeOutOfRange`] if `grade > dimension()`.
    pub fn metric(&self, grade: usize) -> Result<&Matrix, AlgebraicError> {
        self.check_grade(grade)?;
        Ok(self.metrics.metric(grade))
    }

    /// Transform `M[k]` into the parent's grade-k blades (identity for a root).
    pub fn transform(&self, grade: usize) -> Result<&Matrix, AlgebraicError> {
        self.check_grade(grade)?;
        Ok(self.metrics.transform(grade))
    }

    pub(crate) fn metric_chain(&self) -> &MetricChain {
        &self.metrics
    }

    /// Grade of the blade at a canonical index.
    #[inline(always)]
    pub fn grade_of(&self, index: usize) -> usize {
        self.basis.blade(index).grade()
    }

    // ---------------------------------------------------------------------
    // Label boundary
    // ---------------------------------------------------------------------

    /// Blade names in canonical order.
    pub fn blade_labels(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Name of the blade at a canonical index.
    pub fn label(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Canonical index of a blade by its exact canonical name.
    pub fn blade_index(&self, name: &str) -> Result<usize, LookupError> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownBlade(name.to_string()))
    }

    /// Unit multivector for a canonical blade name.
    pub fn blade(&self, name: &str) -> Result<Multivector, LookupError> {
        Ok(Multivector::term(self.blade_index(name)?, 1.0))
    }

    /// Resolve any ordering of a blade's subscripts to `(index, sign)`.
    ///
    /// Exact canonical names win over alternative decompositions.
    pub fn parse_blade(&self, name: &str) -> Result<(usize, Scalar), ParseError> {
        if let Some(&index) = self.name_index.get(name) {
            return Ok((index, 1.0));
        }
        let (mask, sign) = parse_blade_name(&self.signature, name)?;
        Ok((self.basis.index_of(BasisBlade::from_mask(mask)), sign as Scalar))
    }

    /// Build a multivector from `(blade name, coefficient)` pairs.
    ///
    /// Repeated or permuted names accumulate with their permutation sign.
    pub fn multivector(&self, terms: &[(&str, Scalar)]) -> Result<Multivector, Error> {
        let mut mv = Multivector::zero();
        for &(name, coefficient) in terms {
            let (index, sign) = self.parse_blade(name)?;
            mv.accumulate(index, sign * coefficient);
        }
        Ok(mv)
    }

    /// Labeled terms in canonical order.
    pub fn to_labeled(&self, v: &Multivector) -> Vec<(&str, Scalar)> {
        v.iter().map(|(i, c)| (self.label(i), c)).collect()
    }

    /// Scalar multivector.
    pub fn scalar(&self, s: Scalar) -> Multivector {
        Multivector::term(0, s)
    }

    /// Grade-1 multivector from one coefficient per declared vector.
    pub fn vector(&self, coefficients: &[Scalar]) -> Result<Multivector, AlgebraicError> {
        self.from_grade_coefficients(1, coefficients)
    }

    /// The unit pseudoscalar.
    pub fn pseudoscalar(&self) -> Multivector {
        Multivector::term(self.basis.index_of(self.basis.pseudoscalar()), 1.0)
    }

    /// Grade-k multivector from coefficients in canonical grade-k order.
    pub fn from_grade_coefficients(
        &self,
        grade: usize,
        coefficients: &[Scalar],
    ) -> Result<Multivector, AlgebraicError> {
        self.check_grade(grade)?;
        let expected = self.basis.grade_range(grade).len();
        if coefficients.len() != expected {
            return Err(AlgebraicError::ComponentCount {
                expected,
                actual: coefficients.len(),
            });
        }
        Ok(self.grade_terms(grade, coefficients))
    }

    pub(crate) fn grade_terms(&self, grade: usize, coefficients: &[Scalar]) -> Multivector {
        let start = self.basis.grade_range(grade).start;
        coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| (start + i, c))
            .collect()
    }

    /// Dense grade-k coefficients of `v` in canonical grade-k order.
    pub fn grade_coefficients(&self, v: &Multivector, grade: usize) -> Vec<Scalar> {
        self.basis.grade_range(grade).map(|i| v.get(i)).collect()
    }

    /// Distinct grades present in `v`, ascending.
    pub fn grades(&self, v: &Multivector) -> Vec<usize> {
        let mut grades: Vec<usize> = v.iter().map(|(i, _)| self.grade_of(i)).collect();
        grades.sort_unstable();
        grades.dedup();
        grades
    }

    // ---------------------------------------------------------------------
    // Linear operations
    // ---------------------------------------------------------------------

    pub fn add(&self, a: &Multivector, b: &Multivector) -> Multivector {
        a.iter().chain(b.iter()).collect()
    }

    pub fn sub(&self, a: &Multivector, b: &Multivector) -> Multivector {
        a.iter().chain(b.iter().map(|(i, c)| (i, -c))).collect()
    }

    pub fn scale(&self, s: Scalar, v: &Multivector) -> Multivector {
        v.map_terms(|_, c| s * c)
    }

    /// Reversion: each grade-k blade picks up (−1)^(k(k−1)/2).
    pub fn reverse(&self, v: &Multivector) -> Multivector {
        v.map_terms(|i, c| {
            let k = self.grade_of(i);
            if (k * k.saturating_sub(1) / 2) % 2 == 0 {
                c
            } else {
                -c
            }
        })
    }

    /// Grade involution: each grade-k blade picks up (−1)^k.
    pub fn involute(&self, v: &Multivector) -> Multivector {
        v.map_terms(|i, c| if self.grade_of(i) % 2 == 0 { c } else { -c })
    }

    /// Keep only the grade-k part.
    pub fn grade_select(&self, v: &Multivector, grade: usize) -> Result<Multivector, AlgebraicError> {
        self.check_grade(grade)?;
        Ok(v.filter_terms(|i| self.grade_of(i) == grade))
    }

    /// Scalar part of `v`.
    #[inline(always)]
    pub fn scalar_part(&self, v: &Multivector) -> Scalar {
        v.get(0)
    }

    fn check_grade(&self, grade: usize) -> Result<(), AlgebraicError> {
        if grade > self.dimension() {
            return Err(AlgebraicError::GradeOutOfRange {
                grade,
                dimension: self.dimension(),
            });
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    /// Bilinear extension of a Cayley table over two sparse operands.
    fn bilinear(&self, table: &CayleyTable, a: &Multivector, b: &Multivector) -> Multivector {
        let mut out = Multivector::zero();
        for (ia, ca) in a.iter() {
            let ba = self.basis.blade(ia);
            for (ib, cb) in b.iter() {
                if let Some(p) = table.product(ba, self.basis.blade(ib)) {
                    out.accumulate(self.basis.index_of(p.blade), p.coefficient() * ca * cb);
                }
            }
        }
        out
    }

    pub fn geometric_product(&self, a: &Multivector, b: &Multivector) -> Multivector {
        self.bilinear(&self.geometric, a, b)
    }

    /// Outer product `a ∧ b`.
    pub fn wedge(&self, a: &Multivector, b: &Multivector) -> Multivector {
        self.bilinear(&self.wedge, a, b)
    }

    /// Regressive product `a ∨ b`.
    pub fn anti_wedge(&self, a: &Multivector, b: &Multivector) -> Multivector {
        self.bilinear(&self.anti_wedge, a, b)
    }

    /// Left contraction `a ⌋ b`: for each blade pair of grades r ≤ s, the
    /// grade s − r part of their geometric product.
    pub fn left_contraction(&self, a: &Multivector, b: &Multivector) -> Multivector {
        let mut out = Multivector::zero();
        for (ia, ca) in a.iter() {
            let ba = self.basis.blade(ia);
            for (ib, cb) in b.iter() {
                let bb = self.basis.blade(ib);
                if bb.grade() < ba.grade() {
                    continue;
                }
                if let Some(p) = self.geometric.product(ba, bb) {
                    if p.blade.grade() == bb.grade() - ba.grade() {
                        out.accumulate(self.basis.index_of(p.blade), p.coefficient() * ca * cb);
                    }
                }
            }
        }
        out
    }

    /// Scalar part of the geometric product.
    pub fn scalar_product(&self, a: &Multivector, b: &Multivector) -> Scalar {
        let mut sum = 0.0;
        for (ia, ca) in a.iter() {
            let ba = self.basis.blade(ia);
            for (ib, cb) in b.iter() {
                if let Some(p) = self.geometric.product(ba, self.basis.blade(ib)) {
                    if p.blade == BasisBlade::SCALAR {
                        sum += p.coefficient() * ca * cb;
                    }
                }
            }
        }
        sum
    }

    // ---------------------------------------------------------------------
    // Duality
    // ---------------------------------------------------------------------

    fn apply_dual(&self, table: &DualTable, v: &Multivector) -> Multivector {
        let mut out = Multivector::zero();
        for (i, c) in v.iter() {
            let d = table.dual(self.basis.blade(i));
            out.accumulate(self.basis.index_of(d.blade), d.coefficient() * c);
        }
        out
    }

    /// Right complement: `A ∧ dual(A) = I` for every basis blade.
    pub fn dual(&self, v: &Multivector) -> Multivector {
        self.apply_dual(&self.right_dual, v)
    }

    /// Left complement, the inverse of [`Algebra::dual`].
    pub fn undual(&self, v: &Multivector) -> Multivector {
        self.apply_dual(&self.left_dual, v)
    }

    // ---------------------------------------------------------------------
    // Norms and versors
    // ---------------------------------------------------------------------

    /// Scalar part of `v · reverse(v)`.
    pub fn norm_squared(&self, v: &Multivector) -> Scalar {
        self.scalar_product(v, &self.reverse(v))
    }

    /// `v / sqrt(|norm²|)`.
    pub fn normalize(&self, v: &Multivector) -> Result<Multivector, AlgebraicError> {
        let n2 = self.norm_squared(v);
        if n2 == 0.0 {
            warn!("normalize of a multivector with zero norm squared");
            return Err(AlgebraicError::ZeroNormSquared {
                operation: "normalize",
            });
        }
        Ok(self.scale(1.0 / n2.abs().sqrt(), v))
    }

    /// `reverse(v) / norm²`; exact for versors only.
    pub fn inverse(&self, v: &Multivector) -> Result<Multivector, AlgebraicError> {
        let n2 = self.norm_squared(v);
        if n2 == 0.0 {
            warn!("inverse of a multivector with zero norm squared");
            return Err(AlgebraicError::ZeroNormSquared {
                operation: "inverse",
            });
        }
        Ok(self.scale(1.0 / n2, &self.reverse(v)))
    }

    /// `r · x · reverse(r)`.
    pub fn sandwich(&self, r: &Multivector, x: &Multivector) -> Multivector {
        let rx = self.geometric_product(r, x);
        self.geometric_product(&rx, &self.reverse(r))
    }

    // ---------------------------------------------------------------------
    // Metric views
    // ---------------------------------------------------------------------

    /// Σₖ aₖᵗ · G[k] · bₖ over the grade-wise metric tensors.
    pub fn metric_inner(&self, a: &Multivector, b: &Multivector) -> Scalar {
        let mut sum = 0.0;
        for (ia, ca) in a.iter() {
            let ba = self.basis.blade(ia);
            let g = self.metrics.metric(ba.grade());
            let ra = self.basis.index_in_grade(ba);
            for (ib, cb) in b.iter() {
                let bb = self.basis.blade(ib);
                if bb.grade() == ba.grade() {
                    sum += ca * g.get(ra, self.basis.index_in_grade(bb)) * cb;
                }
            }
        }
        sum
    }

    /// Express `v` in the parent algebra's blades through `M[k]`.
    ///
    /// A root algebra is its own frame, so `v` comes back unchanged.
    pub fn to_parent(&self, v: &Multivector) -> Multivector {
        let Some(parent) = self.parent.as_ref() else {
            return v.clone();
        };
        let mut out = Multivector::zero();
        for k in self.grades(v) {
            let mapped = self.metrics.transform(k).apply(&self.grade_coefficients(v, k));
            let start = parent.basis().grade_range(k).start;
            for (i, c) in mapped.into_iter().enumerate() {
                out.accumulate(start + i, c);
            }
        }
        out
    }
}
