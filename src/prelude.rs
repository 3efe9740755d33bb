//! Common imports: `use ga_algebra::prelude::*;`

pub use crate::algebra::Algebra;
pub use crate::config::AlgebraConfig;
pub use crate::error::{AlgebraicError, ConstructionError, Error, LookupError, ParseError};
pub use crate::inspect::Inspector;
pub use crate::matrix::Matrix;
pub use crate::multivector::Multivector;
pub use crate::ops::projection::BladeProjection;
pub use crate::ops::reflection::Reflect;
pub use crate::rotor::Rotor;
pub use crate::signature::{BasisVector, Signature, Square};
pub use crate::table::ProductKind;
