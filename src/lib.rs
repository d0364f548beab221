/*!
# Statically sized matrices for Rust

## Overview

The statmat crate provides matrices whose dimensions are known at compile
time, with arithmetic expressed as lazily evaluated expressions. Operators
build an expression graph instead of computing; the whole expression is
evaluated in a single pass when it is materialized into a matrix, with no
intermediate allocations.

Here are the main features of statmat:

- Matrix shape, element type and memory layout are part of the type, so
  dimension and layout agreement of every operation is checked at compile
  time.
- Elementwise addition, subtraction and negation, scalar and matrix
  multiplication, transposition and equality over arbitrarily nested
  expressions.
- Dense storage with row-major or column-major element order, and storage
  rebinding to derive result and conversion types.
- Standard Rust mechanisms are used for operators, indexing and equality.

The design is inspired from expression template libraries in C++ and the
Rust ndarray and nalgebra crates.

## Example

```
use statmat::{DenseMat, Expression};

let a = DenseMat::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
let b = DenseMat::<i32, 3, 2>::from_rows([[7, 8], [9, 10], [11, 12]]);

let c = (&a * &b).eval();

assert_eq!(c, DenseMat::<i32, 2, 2>::from_rows([[58, 64], [139, 154]]));
```
*/

#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unused_results)]

mod dense;
mod expr;
mod expression;
mod format;
mod matrix;
mod ops;
mod order;
#[cfg(feature = "serde")]
mod serde;
mod storage;

pub use dense::DenseStorage;
pub use expr::{fill, Binary, Fill, MatMul, Minus, Negate, Plus, Scale, Transpose, Unary};
pub use expression::Expression;
pub use matrix::Matrix;
pub use order::{ColMajor, Major, Order, RowMajor};
pub use storage::{Mode, Scalar, Storage};

/// Dense matrix with the specified element order, row-major by default.
pub type DenseMat<T, const R: usize, const C: usize, O = RowMajor> =
    Matrix<T, R, C, DenseStorage<T, R, C, O>>;

/// Dense 2x2 matrix with row-major element order.
pub type Mat2<T> = DenseMat<T, 2, 2>;

/// Dense 3x3 matrix with row-major element order.
pub type Mat3<T> = DenseMat<T, 3, 3>;

/// Dense 4x4 matrix with row-major element order.
pub type Mat4<T> = DenseMat<T, 4, 4>;
