// src/table.rs
//! Cayley tables for the blade-level products.
//!
//! Each table is a dense 2ⁿ × 2ⁿ array addressed by the two operand bitmasks,
//! so lookups never depend on where a blade sits in the canonical list.
//! Entries store the result blade and a sign; a sign of zero marks a product
//! that vanishes (shared vector in a wedge, or a null vector squared).

use crate::basis::{BasisBlade, BasisSet};
use crate::signature::{Signature, Square};
use crate::types::{Bitmask, Scalar};

/// Which product a table encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Geometric,
    Wedge,
    AntiWedge,
}

impl ProductKind {
    pub fn name(self) -> &'static str {
        match self {
            ProductKind::Geometric => "geometric",
            ProductKind::Wedge => "wedge",
            ProductKind::AntiWedge => "anti-wedge",
        }
    }
}

/// A blade together with a ±1 orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedBlade {
    pub blade: BasisBlade,
    pub sign: i8,
}

impl SignedBlade {
    #[inline(always)]
    pub fn new(blade: BasisBlade, sign: i8) -> Self {
        Self { blade, sign }
    }

    #[inline(always)]
    pub fn coefficient(self) -> Scalar {
        self.sign as Scalar
    }
}

const VANISHED: SignedBlade = SignedBlade {
    blade: BasisBlade::SCALAR,
    sign: 0,
};

/// Immutable blade × blade → signed blade table.
#[derive(Clone, Debug)]
pub struct CayleyTable {
    kind: ProductKind,
    dimension: usize,
    entries: Vec<SignedBlade>,
}

impl CayleyTable {
    /// Assemble a table by evaluating `entry` for every ordered blade pair.
    pub(crate) fn from_fn<F>(kind: ProductKind, basis: &BasisSet, mut entry: F) -> Self
    where
        F: FnMut(BasisBlade, BasisBlade) -> Option<SignedBlade>,
    {
        let dimension = basis.dimension();
        let size = basis.len();
        let mut entries = vec![VANISHED; size * size];
        for &a in basis.blades() {
            for &b in basis.blades() {
                if let Some(p) = entry(a, b) {
                    entries[((a.mask() as usize) << dimension) | b.mask() as usize] = p;
                }
            }
        }
        Self {
            kind,
            dimension,
            entries,
        }
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Number of entries, (2ⁿ)².
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `a ∘ b` for this table's product, or `None` when it vanishes.
    #[inline(always)]
    pub fn product(&self, a: BasisBlade, b: BasisBlade) -> Option<SignedBlade> {
        let e = self.entries[((a.mask() as usize) << self.dimension) | b.mask() as usize];
        (e.sign != 0).then_some(e)
    }
}

/// Parity of the adjacent swaps needed to sort the concatenation of `a`'s and
/// `b`'s index sequences into ascending order.
///
/// Every vector in `a` must hop over each lower-indexed vector of `b`, so the
/// swap count is the sum over the bits of `a` of the number of lower bits set
/// in `b`. Equal indices are never swapped past each other.
#[inline(always)]
pub const fn reorder_sign(a: Bitmask, b: Bitmask) -> i8 {
    let mut swaps = 0u32;
    let mut rest = a;
    while rest != 0 {
        let bit = rest.trailing_zeros();
        swaps += (b & ((1 << bit) - 1)).count_ones();
        rest &= rest - 1;
    }
    if swaps & 1 == 1 {
        -1
    } else {
        1
    }
}

/// Wedge product of two blades: zero when they share a vector.
#[inline(always)]
pub fn wedge_entry(a: BasisBlade, b: BasisBlade) -> Option<SignedBlade> {
    if a.mask() & b.mask() != 0 {
        return None;
    }
    Some(SignedBlade::new(
        BasisBlade::from_mask(a.mask() | b.mask()),
        reorder_sign(a.mask(), b.mask()),
    ))
}

/// Geometric product of two blades under the declared squares.
///
/// Each shared vector collapses: a null square kills the product, a negative
/// square flips the sign once, a positive square cancels silently.
pub fn geometric_entry(a: BasisBlade, b: BasisBlade, squares: &[Square]) -> Option<SignedBlade> {
    let shared = a.mask() & b.mask();
    let mut sign = reorder_sign(a.mask(), b.mask());

    let mut rest = shared;
    while rest != 0 {
        let position = rest.trailing_zeros() as usize;
        match squares[position] {
            Square::Null => return None,
            Square::Negative => sign = -sign,
            Square::Positive => {}
        }
        rest &= rest - 1;
    }

    Some(SignedBlade::new(
        BasisBlade::from_mask(a.mask() ^ b.mask()),
        sign,
    ))
}

/// Build the geometric-product table from the signature's squares.
pub fn build_geometric(signature: &Signature, basis: &BasisSet) -> CayleyTable {
    let squares = signature.squares();
    CayleyTable::from_fn(ProductKind::Geometric, basis, |a, b| {
        geometric_entry(a, b, &squares)
    })
}

/// Build the wedge-product table.
pub fn build_wedge(basis: &BasisSet) -> CayleyTable {
    CayleyTable::from_fn(ProductKind::Wedge, basis, wedge_entry)
}
