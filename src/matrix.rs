//! Small dense row-major matrices for transforms and metric tensors.

use crate::error::ConstructionError;
use crate::types::Scalar;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    pub fn diagonal(values: &[Scalar]) -> Self {
        let mut m = Self::zeros(values.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            m.set(i, i, v);
        }
        m
    }

    /// Build from nested rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga_algebra::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    /// assert!(Matrix::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self, ConstructionError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(ConstructionError::RaggedMatrix {
                    row,
                    len: values.len(),
                    expected: cols,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Scalar {
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: Scalar) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[Scalar] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> Vec<Scalar> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<Scalar>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                t.set(c, r, self.get(r, c));
            }
        }
        t
    }

    /// Matrix product `self · other`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    pub fn mul(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.cols, other.rows, "inner dimensions must agree");
        let mut out = Matrix::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(r, k);
                if a == 0.0 {
                    continue;
                }
                for c in 0..other.cols {
                    out.data[r * other.cols + c] += a * other.get(k, c);
                }
            }
        }
        out
    }

    /// Matrix-vector product `self · v`.
    pub fn apply(&self, v: &[Scalar]) -> Vec<Scalar> {
        assert_eq!(self.cols, v.len(), "vector length must equal column count");
        (0..self.rows)
            .map(|r| self.row(r).iter().zip(v).map(|(a, b)| a * b).sum())
            .collect()
    }

    /// Congruence `mᵗ · g · m`, evaluated on the upper triangle and mirrored so
    /// the result is exactly symmetric whenever `g` is.
    pub fn congruence(m: &Matrix, g: &Matrix) -> Matrix {
        assert_eq!(g.rows, g.cols, "metric must be square");
        assert_eq!(m.rows, g.rows, "transform rows must match metric size");
        let gm = g.mul(m);
        let n = m.cols;
        let mut out = Matrix::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                let v: Scalar = (0..m.rows).map(|r| m.get(r, i) * gm.get(r, j)).sum();
                out.set(i, j, v);
                out.set(j, i, v);
            }
        }
        out
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// First off-diagonal entry that is not exactly zero.
    pub fn first_off_diagonal(&self) -> Option<(usize, usize)> {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if r != c && self.get(r, c) != 0.0 {
                    return Some((r, c));
                }
            }
        }
        None
    }
}
