use std::fmt::{Debug, Formatter, Result};

use crate::matrix::Matrix;
use crate::storage::{Scalar, Storage};

struct Row<'a, T, const R: usize, const C: usize, S> {
    matrix: &'a Matrix<T, R, C, S>,
    row: usize,
}

impl<T: Scalar, const R: usize, const C: usize, S: Storage<T, R, C>> Debug for Row<'_, T, R, C, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries((0..C).map(|j| self.matrix[[self.row, j]])).finish()
    }
}

impl<T: Scalar, const R: usize, const C: usize, S: Storage<T, R, C>> Debug for Matrix<T, R, C, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries((0..R).map(|i| Row { matrix: self, row: i })).finish()
    }
}
