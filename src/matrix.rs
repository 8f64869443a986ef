use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixOp::Add => "addition",
            MatrixOp::Sub => "subtraction",
            MatrixOp::Mul => "multiplication",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix dimensions do not match for {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: MatrixOp,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("integer overflow in matrix {op}")]
    Overflow { op: MatrixOp },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Dense integer matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl IntMatrix {
    pub fn new(rows: usize, cols: usize, initial: i32) -> Self {
        Self {
            rows,
            cols,
            data: vec![initial; rows * cols],
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, 0)
    }

    /// Builds a matrix from row literals, e.g. `vec![vec![1, 2], vec![3, 4]]`.
    /// Every row must have the same length as the first.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[i32] {
        assert!(row < self.rows, "matrix row {} out of bounds", row);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Element-wise sum. Fails on mismatched dimensions or `i32` overflow.
    pub fn checked_add(&self, other: &IntMatrix) -> Result<IntMatrix, MatrixError> {
        self.zip_with(other, MatrixOp::Add, i32::checked_add)
    }

    pub fn checked_sub(&self, other: &IntMatrix) -> Result<IntMatrix, MatrixError> {
        self.zip_with(other, MatrixOp::Sub, i32::checked_sub)
    }

    /// Matrix product. Fails when `self.cols() != other.rows()` or on `i32`
    /// overflow of any product or partial sum.
    pub fn checked_mul(&self, other: &IntMatrix) -> Result<IntMatrix, MatrixError> {
        if self.cols != other.rows {
            return Err(self.mismatch(other, MatrixOp::Mul));
        }
        let mut result = IntMatrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0i32;
                for k in 0..self.cols {
                    acc = self[(i, k)]
                        .checked_mul(other[(k, j)])
                        .and_then(|p| acc.checked_add(p))
                        .ok_or(MatrixError::Overflow { op: MatrixOp::Mul })?;
                }
                result[(i, j)] = acc;
            }
        }
        Ok(result)
    }

    fn zip_with(
        &self,
        other: &IntMatrix,
        op: MatrixOp,
        f: impl Fn(i32, i32) -> Option<i32>,
    ) -> Result<IntMatrix, MatrixError> {
        if self.dims() != other.dims() {
            return Err(self.mismatch(other, op));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect::<Option<Vec<i32>>>()
            .ok_or(MatrixError::Overflow { op })?;
        Ok(IntMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn mismatch(&self, other: &IntMatrix, op: MatrixOp) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            lhs: self.dims(),
            rhs: other.dims(),
        }
    }
}

impl Index<(usize, usize)> for IntMatrix {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds",
            row,
            col
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for IntMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i32 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds",
            row,
            col
        );
        &mut self.data[row * self.cols + col]
    }
}

impl Add for &IntMatrix {
    type Output = Result<IntMatrix, MatrixError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for &IntMatrix {
    type Output = Result<IntMatrix, MatrixError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul for &IntMatrix {
    type Output = Result<IntMatrix, MatrixError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
    }
}

/// One row per line, each element followed by a space.
impl fmt::Display for IntMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for value in self.row(r) {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
