// src/duality.rs
//! Left/right complement tables and the anti-wedge (regressive) product.
//!
//! The complement of a blade is the blade whose bitmask is the XOR of its own
//! bitmask with the pseudoscalar bitmask. Its orientation is read off the wedge
//! table so that
//!
//! ```text
//! left(A)  ∧ A         = +I
//! A        ∧ right(A)  = +I
//! ```
//!
//! With these conventions the left complement undoes the right one, and the
//! anti-wedge `A ∨ B = right(left(A) ∧ left(B))` has the pseudoscalar as its
//! identity.

use crate::basis::{BasisBlade, BasisSet};
use crate::table::{CayleyTable, ProductKind, SignedBlade};

/// Which side of the wedge the complement sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DualSide {
    Left,
    Right,
}

/// Blade → signed complement.
#[derive(Clone, Debug)]
pub struct DualTable {
    side: DualSide,
    entries: Vec<SignedBlade>,
}

impl DualTable {
    /// Build the complement table for one side.
    ///
    /// A blade and its complement are disjoint, so their wedge is always the
    /// signed pseudoscalar.
    pub fn build(side: DualSide, basis: &BasisSet, wedge: &CayleyTable) -> Self {
        debug_assert_eq!(wedge.kind(), ProductKind::Wedge);
        let full = basis.pseudoscalar().mask();

        let mut entries = vec![SignedBlade::new(BasisBlade::SCALAR, 0); basis.len()];
        for &blade in basis.blades() {
            let complement = basis.blade(basis.index_of(BasisBlade::from_mask(blade.mask() ^ full)));
            let joined = match side {
                DualSide::Left => wedge.product(complement, blade),
                DualSide::Right => wedge.product(blade, complement),
            };
            debug_assert!(
                joined.is_some_and(|p| p.blade.mask() == full),
                "blade and its complement must wedge to the pseudoscalar"
            );
            let sign = joined.map_or(0, |p| p.sign);
            entries[blade.mask() as usize] = SignedBlade::new(complement, sign);
        }

        Self { side, entries }
    }

    pub fn side(&self) -> DualSide {
        self.side
    }

    /// Signed complement of `blade`.
    #[inline(always)]
    pub fn dual(&self, blade: BasisBlade) -> SignedBlade {
        self.entries[blade.mask() as usize]
    }
}

/// Anti-wedge of two blades through the complement tables.
pub fn anti_wedge_entry(
    a: BasisBlade,
    b: BasisBlade,
    wedge: &CayleyTable,
    left: &DualTable,
    right: &DualTable,
) -> Option<SignedBlade> {
    let la = left.dual(a);
    let lb = left.dual(b);
    let joined = wedge.product(la.blade, lb.blade)?;
    let back = right.dual(joined.blade);
    Some(SignedBlade::new(
        back.blade,
        la.sign * lb.sign * joined.sign * back.sign,
    ))
}

/// Build the anti-wedge table from the wedge table and both complement tables.
pub fn build_anti_wedge(
    basis: &BasisSet,
    wedge: &CayleyTable,
    left: &DualTable,
    right: &DualTable,
) -> CayleyTable {
    debug_assert_eq!(left.side(), DualSide::Left);
    debug_assert_eq!(right.side(), DualSide::Right);
    CayleyTable::from_fn(ProductKind::AntiWedge, basis, |a, b| {
        anti_wedge_entry(a, b, wedge, left, right)
    })
}
