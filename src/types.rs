//! Primitive numeric aliases shared by every table and multivector.

/// Coefficient type for multivectors and metric tensors.
pub type Scalar = f64;

/// Set of basis-vector positions; bit `i` marks the `i`-th declared vector.
pub type Bitmask = u32;
