// src/config.rs
//! Declarative algebra descriptions.
//!
//! An [`AlgebraConfig`] is plain data that round-trips through JSON. Building it
//! runs the same constructors as the programmatic API, recursively building any
//! parent first.
//!
//! ```
//! use ga_algebra::config::AlgebraConfig;
//!
//! let cfg = AlgebraConfig::from_json_str(
//!     r#"{ "kind": "counts", "positive": 3, "negative": 1 }"#,
//! ).unwrap();
//! let alg = cfg.build().unwrap();
//! assert_eq!(alg.dimension(), 4);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::algebra::Algebra;
use crate::error::ConstructionError;
use crate::matrix::Matrix;
use crate::signature::{BasisVector, Signature, Square};
use crate::types::Scalar;

/// One declared basis vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Must be exactly -1, 0 or 1.
    pub square: Scalar,
    pub label: String,
}

/// Parent algebra plus the `M[1]` transform, one row per parent vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParentConfig {
    pub algebra: Box<AlgebraConfig>,
    pub transform: Vec<Vec<Scalar>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgebraConfig {
    /// Orthogonal root algebra with default `1..n` labels.
    Counts {
        #[serde(default)]
        positive: usize,
        #[serde(default)]
        negative: usize,
        #[serde(default)]
        zero: usize,
    },
    /// Explicit basis, optionally expressed in a parent algebra.
    Basis {
        vectors: Vec<VectorConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent: Option<ParentConfig>,
    },
}

impl AlgebraConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConstructionError> {
        serde_json::from_str(json).map_err(|e| ConstructionError::InvalidConfig(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, ConstructionError> {
        serde_json::to_string_pretty(self).map_err(|e| ConstructionError::InvalidConfig(e.to_string()))
    }

    /// Validate the declared signature without building any tables.
    pub fn signature(&self) -> Result<Signature, ConstructionError> {
        match self {
            AlgebraConfig::Counts {
                positive,
                negative,
                zero,
            } => Signature::from_counts(*positive, *negative, *zero),
            AlgebraConfig::Basis { vectors, .. } => {
                let declared = vectors
                    .iter()
                    .map(|v| Ok(BasisVector::new(Square::from_value(v.square)?, v.label.as_str())))
                    .collect::<Result<Vec<_>, ConstructionError>>()?;
                Signature::new(declared)
            }
        }
    }

    /// Build the algebra, constructing parents first.
    pub fn build(&self) -> Result<Algebra, ConstructionError> {
        let signature = self.signature()?;
        match self {
            AlgebraConfig::Basis {
                parent: Some(parent),
                ..
            } => {
                let base = Arc::new(parent.algebra.build()?);
                let transform = Matrix::from_rows(parent.transform.clone())?;
                Algebra::from_basis_spec_with_parent(signature, base, transform)
            }
            _ => Algebra::from_basis_spec(signature),
        }
    }
}
