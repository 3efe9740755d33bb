//! # ga_algebra
//!
//! Construction engine for real Clifford (geometric) algebras of arbitrary
//! signature. Given a list of basis vectors and their squares, an [`Algebra`]
//! precomputes dense Cayley tables for the geometric, outer (wedge) and
//! regressive (anti-wedge) products, the left/right complement tables, and a
//! per-grade metric tensor for every grade. Child algebras, such as the
//! conformal null basis `{eo, ei}`, are declared as a basis change of a parent
//! and inherit their metric through the transform chain.
//!
//! ```
//! use ga_algebra::prelude::*;
//!
//! let sta = Algebra::from_counts(3, 1, 0).unwrap();
//! let e4 = sta.blade("e4").unwrap();
//! assert_eq!(sta.to_labeled(&sta.geometric_product(&e4, &e4)), vec![("e", -1.0)]);
//!
//! // any ordering of subscripts parses, with its permutation sign
//! let v = sta.multivector(&[("e21", 1.0)]).unwrap();
//! assert_eq!(sta.to_labeled(&v), vec![("e12", -1.0)]);
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod algebra;
pub mod basis;
pub mod config;
pub mod duality;
pub mod error;
pub mod inspect;
pub mod labels;
pub mod matrix;
pub mod metric;
pub mod multivector;
pub mod ops;
pub mod prelude;
pub mod rotor;
pub mod signature;
pub mod table;
pub mod types;

pub use algebra::Algebra;
pub use error::{AlgebraicError, ConstructionError, Error, LookupError, ParseError, Result};
pub use multivector::Multivector;
pub use signature::{BasisVector, Signature, Square};
