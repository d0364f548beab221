use std::fmt::Debug;

/// Memory layout of matrix elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Major {
    /// Row-major layout, with elements of a row stored contiguously.
    Row,

    /// Column-major layout, with elements of a column stored contiguously.
    Col,
}

/// Element order trait, mapping logical indices to buffer offsets.
///
/// The order also defines the natural traversal of a storage, which visits
/// buffer elements sequentially regardless of the logical orientation.
pub trait Order: Copy + Debug + Default + 'static {
    /// Memory layout of the element order.
    const MAJOR: Major;

    /// Returns the buffer offset for the specified indices.
    fn offset(row: usize, col: usize, rows: usize, cols: usize) -> usize;

    /// Calls a closure for each index pair in natural traversal order.
    fn traverse<F: FnMut(usize, usize)>(rows: usize, cols: usize, f: F);
}

/// Row-major element order type.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RowMajor;

/// Column-major element order type.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ColMajor;

impl Order for RowMajor {
    const MAJOR: Major = Major::Row;

    #[inline]
    fn offset(row: usize, col: usize, _rows: usize, cols: usize) -> usize {
        row * cols + col
    }

    fn traverse<F: FnMut(usize, usize)>(rows: usize, cols: usize, mut f: F) {
        for i in 0..rows {
            for j in 0..cols {
                f(i, j);
            }
        }
    }
}

impl Order for ColMajor {
    const MAJOR: Major = Major::Col;

    #[inline]
    fn offset(row: usize, col: usize, rows: usize, _cols: usize) -> usize {
        col * rows + row
    }

    fn traverse<F: FnMut(usize, usize)>(rows: usize, cols: usize, mut f: F) {
        for j in 0..cols {
            for i in 0..rows {
                f(i, j);
            }
        }
    }
}
