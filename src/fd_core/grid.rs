extern crate nalgebra as na;

use std::ops::{Index, IndexMut};

use crate::error::{AdvectionError, Result};

pub type Vector = na::DVector<f64>;

/// Scalar field sampled on a space-time grid.
///
/// Row `n` holds the time level `t_n`, column `i` the spatial point `x_i`.
/// The shape is fixed when the grid is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: na::DMatrix<f64>,
}

impl Grid {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Grid {
            data: na::DMatrix::zeros(rows, cols),
        }
    }

    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        Grid {
            data: na::DMatrix::from_fn(rows, cols, f),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    pub fn get(&self, n: usize, i: usize) -> f64 {
        self.data[(n, i)]
    }

    pub fn set(&mut self, n: usize, i: usize, value: f64) {
        self.data[(n, i)] = value;
    }

    /// Copy of time level `n`.
    pub fn row(&self, n: usize) -> Vector {
        self.data.row(n).transpose()
    }

    /// Copy of the time history at spatial point `i`.
    pub fn column(&self, i: usize) -> Vector {
        self.data.column(i).into_owned()
    }

    /// Elementwise `self - other`.
    pub fn difference(&self, other: &Grid) -> Result<Grid> {
        if self.shape() != other.shape() {
            return Err(AdvectionError::shape(
                "grid difference",
                self.shape(),
                other.shape(),
            ));
        }
        Ok(Grid {
            data: &self.data - &other.data,
        })
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.data[index]
    }
}
