use std::fmt::Debug;

use num_traits::Zero;

use crate::order::Order;

/// Backing storage category of a matrix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Dense storage, with one buffer slot per element.
    Dense,

    /// Sparse storage, reserved for compressed backends.
    Sparse,
}

/// Trait for matrix element types.
///
/// The trait is blanket-implemented for all copyable types with equality and
/// a zero value. Numeric behavior such as overflow or loss of precision is
/// not checked by the matrix engine and remains the caller's responsibility.
pub trait Scalar: Copy + Debug + PartialEq + Zero {}

impl<T: Copy + Debug + PartialEq + Zero> Scalar for T {}

/// Matrix storage trait, owning a buffer of `R * C` elements.
///
/// The trait is the contract a storage type must satisfy to participate in
/// the matrix engine: the shape is part of the type, elements are reachable
/// by logical indices through the element order, the whole buffer is exposed
/// as a slice in physical order, and the storage can be rebound to a sibling
/// type with a new element type or shape. A type that does not satisfy the
/// contract is rejected by the compiler at the point of use.
pub trait Storage<T: Scalar, const R: usize, const C: usize>: Clone + Debug {
    /// Element order of the storage.
    type Order: Order;

    /// Sibling storage type with a new element type and shape, and the same
    /// element order. Rebinding to the same element type and shape must give
    /// the storage type itself.
    type Rebind<U: Scalar, const R2: usize, const C2: usize>: Storage<U, R2, C2, Order = Self::Order>;

    /// Backing storage category.
    const MODE: Mode;

    /// Creates a new storage, with elements returned by the specified closure.
    ///
    /// The closure is called once per index pair, in natural traversal order.
    fn from_fn<F: FnMut(usize, usize) -> T>(f: F) -> Self;

    /// Returns a reference to the element at the specified indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    fn get(&self, row: usize, col: usize) -> &T;

    /// Returns a mutable reference to the element at the specified indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Returns a slice of all elements in physical order.
    fn as_slice(&self) -> &[T];

    /// Returns a mutable slice of all elements in physical order.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Creates a new, zero-initialized storage.
    fn zeros() -> Self {
        Self::from_fn(|_, _| T::zero())
    }
}
