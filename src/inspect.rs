// src/inspect.rs
//! Read-only, labeled views of a built algebra's tables.
//!
//! Reports are plain `Serialize` structs, so they can be dumped as JSON for
//! diffing against other GA packages, or printed as aligned text grids.

use std::fmt;

use serde::Serialize;

use crate::algebra::Algebra;
use crate::duality::DualSide;
use crate::error::AlgebraicError;
use crate::table::{ProductKind, SignedBlade};
use crate::types::Scalar;

/// Borrowing inspector over one algebra.
#[derive(Clone, Copy, Debug)]
pub struct Inspector<'a> {
    algebra: &'a Algebra,
}

/// Overview of the basis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryReport {
    pub dimension: usize,
    pub blades: usize,
    pub squares: Vec<Scalar>,
    pub labels: Vec<String>,
    pub has_parent: bool,
}

/// Labeled Cayley table; `cells[i][j]` is `labels[i] ∘ labels[j]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableReport {
    pub product: String,
    pub labels: Vec<String>,
    pub cells: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DualEntry {
    pub blade: String,
    pub dual: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DualReport {
    pub side: String,
    pub entries: Vec<DualEntry>,
}

/// `G[k]` with its grade-k labels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricReport {
    pub grade: usize,
    pub labels: Vec<String>,
    pub rows: Vec<Vec<Scalar>>,
}

impl<'a> Inspector<'a> {
    pub fn new(algebra: &'a Algebra) -> Self {
        Self { algebra }
    }

    pub fn summary(&self) -> SummaryReport {
        let alg = self.algebra;
        SummaryReport {
            dimension: alg.dimension(),
            blades: alg.basis().len(),
            squares: alg.signature().squares().iter().map(|s| s.value()).collect(),
            labels: self.labels(),
            has_parent: alg.parent().is_some(),
        }
    }

    pub fn cayley(&self, kind: ProductKind) -> TableReport {
        let alg = self.algebra;
        let table = alg.table(kind);
        let blades = alg.basis().blades();
        let cells = blades
            .iter()
            .map(|&a| {
                blades
                    .iter()
                    .map(|&b| self.signed_label(table.product(a, b)))
                    .collect()
            })
            .collect();
        TableReport {
            product: kind.name().to_string(),
            labels: self.labels(),
            cells,
        }
    }

    pub fn duals(&self, side: DualSide) -> DualReport {
        let alg = self.algebra;
        let table = alg.dual_table(side);
        let entries = alg
            .basis()
            .blades()
            .iter()
            .enumerate()
            .map(|(i, &blade)| DualEntry {
                blade: alg.label(i).to_string(),
                dual: self.signed_label(Some(table.dual(blade))),
            })
            .collect();
        DualReport {
            side: match side {
                DualSide::Left => "left",
                DualSide::Right => "right",
            }
            .to_string(),
            entries,
        }
    }

    pub fn metric(&self, grade: usize) -> Result<MetricReport, AlgebraicError> {
        let alg = self.algebra;
        let rows = alg.metric(grade)?.to_rows();
        Ok(MetricReport {
            grade,
            labels: alg
                .basis()
                .grade_range(grade)
                .map(|i| alg.label(i).to_string())
                .collect(),
            rows,
        })
    }

    fn labels(&self) -> Vec<String> {
        self.algebra
            .blade_labels()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn signed_label(&self, entry: Option<SignedBlade>) -> String {
        match entry {
            None => "0".to_string(),
            Some(p) => {
                let label = self.algebra.label(self.algebra.basis().index_of(p.blade));
                if p.sign < 0 {
                    format!("-{label}")
                } else {
                    label.to_string()
                }
            }
        }
    }
}

macro_rules! json_report {
    ($($report:ty),*) => {
        $(
            impl $report {
                pub fn to_json(&self) -> Result<String, serde_json::Error> {
                    serde_json::to_string_pretty(self)
                }
            }
        )*
    };
}

json_report!(SummaryReport, TableReport, DualReport, MetricReport);

fn write_grid(f: &mut fmt::Formatter<'_>, header: &[String], rows: &[Vec<String>]) -> fmt::Result {
    let width = header
        .iter()
        .chain(rows.iter().flatten())
        .map(String::len)
        .max()
        .unwrap_or(1);
    for (i, row) in rows.iter().enumerate() {
        write!(f, "{:>width$} |", header[i])?;
        for cell in row {
            write!(f, " {cell:>width$}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} product", self.product)?;
        write_grid(f, &self.labels, &self.cells)
    }
}

impl fmt::Display for DualReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} dual", self.side)?;
        for e in &self.entries {
            writeln!(f, "{} -> {}", e.blade, e.dual)?;
        }
        Ok(())
    }
}

impl fmt::Display for MetricReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "grade {} metric", self.grade)?;
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.iter().map(|v| format!("{v}")).collect())
            .collect();
        write_grid(f, &self.labels, &cells)
    }
}
