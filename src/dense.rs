use std::marker::PhantomData;

use crate::order::{Order, RowMajor};
use crate::storage::{Mode, Scalar, Storage};

/// Dense matrix storage type, owning a buffer of exactly `R * C` elements.
///
/// Elements are laid out according to the element order, so that the natural
/// traversal visits the buffer sequentially.
#[derive(Clone, Debug)]
pub struct DenseStorage<T, const R: usize, const C: usize, O = RowMajor> {
    data: Box<[T]>,
    marker: PhantomData<O>,
}

impl<T: Scalar, const R: usize, const C: usize, O: Order> Storage<T, R, C>
    for DenseStorage<T, R, C, O>
{
    type Order = O;

    type Rebind<U: Scalar, const R2: usize, const C2: usize> = DenseStorage<U, R2, C2, O>;

    const MODE: Mode = Mode::Dense;

    fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        const { assert!(R > 0 && C > 0, "matrix dimensions must be positive") };

        let mut data = Vec::with_capacity(R * C);

        O::traverse(R, C, |i, j| data.push(f(i, j)));

        Self { data: data.into_boxed_slice(), marker: PhantomData }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        assert!(row < R && col < C, "index out of bounds");

        &self.data[O::offset(row, col, R, C)]
    }

    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert!(row < R && col < C, "index out of bounds");

        &mut self.data[O::offset(row, col, R, C)]
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
