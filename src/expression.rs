use crate::expr::{Transpose, Unary};
use crate::matrix::Matrix;
use crate::storage::{Scalar, Storage};

/// Expression trait, for lazily evaluated matrix computations.
///
/// An expression is a pending computation with a fixed result shape. Leaf
/// expressions are references to concrete matrices; composite expressions
/// are built from unary and binary operation nodes. No element is computed
/// until the expression is materialized into a matrix.
///
/// The `Output` storage type is the materialization target. Every operation
/// derives it from its first operand, rebound to the result shape where the
/// operation changes the shape, so the leftmost concrete matrix in an
/// expression decides the storage of the result.
///
/// Expressions borrow the matrices they reference and are meant to be
/// evaluated within the statement that builds them; an expression cannot
/// outlive its operands.
pub trait Expression<const R: usize, const C: usize>: Sized {
    /// Element type produced by the expression.
    type Elem: Scalar;

    /// Storage type of the materialized result.
    type Output: Storage<Self::Elem, R, C>;

    /// Returns the element value at the specified indices.
    fn eval_at(&self, row: usize, col: usize) -> Self::Elem;

    /// Returns the number of rows of the result.
    fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns of the result.
    fn cols(&self) -> usize {
        C
    }

    /// Evaluates the expression into a new matrix.
    ///
    /// Every element is computed exactly once, in the natural traversal
    /// order of the result storage, with no intermediate allocations.
    fn eval(&self) -> Matrix<Self::Elem, R, C, Self::Output> {
        Matrix::from_expr(self)
    }

    /// Creates an expression with rows and columns interchanged.
    fn transpose(self) -> Unary<Self, Transpose, C, R> {
        Unary::new(self)
    }
}
