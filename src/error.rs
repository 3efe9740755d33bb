//! Error types for algebra construction, label parsing and multivector operations.

use thiserror::Error;

/// Result type alias for operations that can fail in more than one way.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid signature, basis spec, parent/transform pairing or configuration.
///
/// Construction is all-or-nothing: when one of these is returned no algebra exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// A basis vector was declared without a label
    #[error("basis vector at position {position} has an empty label")]
    EmptyLabel { position: usize },

    /// Two basis vectors share a label
    #[error("duplicate basis vector label {0:?}")]
    DuplicateLabel(String),

    /// Two different blades compose to the same display name
    #[error("blade name {name:?} is produced by more than one blade")]
    AmbiguousBladeName { name: String },

    /// Dense tables for this many vectors are not supported
    #[error("dimension {dimension} exceeds the supported maximum of {max}")]
    DimensionTooLarge { dimension: usize, max: usize },

    /// A vector square outside {-1, 0, 1}
    #[error("basis vector square must be -1, 0 or 1, got {0}")]
    InvalidSquare(f64),

    /// Matrix rows of unequal length
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    RaggedMatrix { row: usize, len: usize, expected: usize },

    /// Transform shape does not match parent x child dimensions
    #[error("transform is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    TransformShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    /// NaN or infinity inside the transform
    #[error("transform entry ({row}, {col}) is not finite")]
    NonFiniteTransform { row: usize, col: usize },

    /// A child algebra cannot have more vectors than its parent
    #[error("child algebra of dimension {child} cannot be expressed in a parent of dimension {parent}")]
    ChildExceedsParent { child: usize, parent: usize },

    /// The root metric must be diagonal for grade propagation
    #[error("root metric is not diagonal at ({row}, {col})")]
    NonOrthogonalRoot { row: usize, col: usize },

    /// Malformed declarative configuration
    #[error("invalid algebra configuration: {0}")]
    InvalidConfig(String),
}

/// A blade name that cannot be decomposed into declared subscripts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("blade name {name:?} does not start with the blade prefix")]
    MissingPrefix { name: String },

    #[error("blade name {name:?} has no declared subscript matching {remainder:?}")]
    UnknownSubscript { name: String, remainder: String },

    #[error("blade name {name:?} repeats basis vector {label:?}")]
    RepeatedVector { name: String, label: String },

    #[error("blade name {name:?} decomposes into more than one distinct blade")]
    Ambiguous { name: String },
}

/// An operation that is undefined for the operand it was given.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraicError {
    /// normalize/inverse of a multivector whose norm² is exactly zero
    #[error("{operation} is undefined: norm squared is zero")]
    ZeroNormSquared { operation: &'static str },

    #[error("grade {grade} is outside 0..={dimension}")]
    GradeOutOfRange { grade: usize, dimension: usize },

    #[error("expected {expected} components, got {actual}")]
    ComponentCount { expected: usize, actual: usize },

    /// Rotor construction from a plane that does not square to a negative scalar
    #[error("multivector is not a rotation plane (must be a bivector with negative square)")]
    NotARotationPlane,
}

/// Reference to a blade name the algebra does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown blade {0:?}")]
    UnknownBlade(String),
}

/// Any error surfaced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Algebraic(#[from] AlgebraicError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
