// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Matrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::ValidationError;
use crate::validate::{validate, Shape};

impl Shape {
    /// `None` when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        (rows > 0 && cols > 0).then_some(Shape { rows, cols })
    }

    pub fn square(n: usize) -> Option<Self> {
        Self::new(n, n)
    }

    pub fn transposed(self) -> Self {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Shape of `self · other` (rows of self, cols of other).
    pub fn product(self, other: Shape) -> Self {
        Shape {
            rows: self.rows,
            cols: other.cols,
        }
    }
}

/// Dense row-major matrix of `f64`, at least 1x1.
///
/// Immutable once built; operations produce new values. Serializes as a
/// JSON array of rows, matching the wire and history formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    data: Array2<f64>,
}

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct MatrixRepr(#[serde(with = "crate::scalar::nested")] Vec<Vec<f64>>);

impl Matrix {
    /// Build from rows, validating structure. `label` names the operand in errors.
    pub fn new(rows: Vec<Vec<f64>>, label: &str) -> Result<Self, ValidationError> {
        let shape = validate(&rows, label)?;
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        // Length is rows * cols by construction.
        let data = Array2::from_shape_vec((shape.rows, shape.cols), flat).map_err(|_| {
            ValidationError::EmptyMatrix {
                label: label.to_string(),
            }
        })?;
        Ok(Matrix { data })
    }

    /// Build from an owned array; zero-sized arrays are rejected.
    pub fn from_array(data: Array2<f64>) -> Result<Self, ValidationError> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(ValidationError::EmptyMatrix {
                label: "result".to_string(),
            });
        }
        Ok(Matrix { data })
    }

    /// Build a matrix of `shape` with `f(row, col)` in every cell.
    pub fn from_shape_fn<F>(shape: Shape, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        Matrix {
            data: Array2::from_shape_fn((shape.rows, shape.cols), |(i, j)| f(i, j)),
        }
    }

    pub fn identity(n: usize) -> Option<Self> {
        Shape::square(n).map(|s| Self::from_shape_fn(s, |i, j| if i == j { 1.0 } else { 0.0 }))
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Elementwise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[[row, col]]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::new(rows, "matrix")
    }
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = ValidationError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        Matrix::new(repr.0, "matrix")
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(m: Matrix) -> Self {
        MatrixRepr(m.to_rows())
    }
}
