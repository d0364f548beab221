use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::expr::{expr_eq, Binary, Fill, MatMul, Minus, Negate, Plus, Scale, Unary};
use crate::expression::Expression;
use crate::matrix::Matrix;
use crate::order::Order;
use crate::storage::{Scalar, Storage};

macro_rules! impl_elementwise_op {
    ($trt:tt, $fn:tt, $tag:tt) => {
        impl<'a, T, const R: usize, const C: usize, S, X: Expression<R, C>> $trt<X>
            for &'a Matrix<T, R, C, S>
        {
            type Output = Binary<Self, X, $tag, R, C>;

            fn $fn(self, rhs: X) -> Self::Output {
                Binary::new(self, rhs)
            }
        }

        impl<E, Op, const R: usize, const C: usize, X: Expression<R, C>> $trt<X>
            for Unary<E, Op, R, C>
        {
            type Output = Binary<Self, X, $tag, R, C>;

            fn $fn(self, rhs: X) -> Self::Output {
                Binary::new(self, rhs)
            }
        }

        impl<L, Rh, Op, const R: usize, const C: usize, X: Expression<R, C>> $trt<X>
            for Binary<L, Rh, Op, R, C>
        {
            type Output = Binary<Self, X, $tag, R, C>;

            fn $fn(self, rhs: X) -> Self::Output {
                Binary::new(self, rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, Plus);
impl_elementwise_op!(Sub, sub, Minus);

impl<'a, T, const R: usize, const C: usize, S> Neg for &'a Matrix<T, R, C, S> {
    type Output = Unary<Self, Negate, R, C>;

    fn neg(self) -> Self::Output {
        Unary::new(self)
    }
}

impl<E, Op, const R: usize, const C: usize> Neg for Unary<E, Op, R, C> {
    type Output = Unary<Self, Negate, R, C>;

    fn neg(self) -> Self::Output {
        Unary::new(self)
    }
}

impl<L, Rh, Op, const R: usize, const C: usize> Neg for Binary<L, Rh, Op, R, C> {
    type Output = Unary<Self, Negate, R, C>;

    fn neg(self) -> Self::Output {
        Unary::new(self)
    }
}

// Matrix product, for each pair of expression kinds. The inner dimension is
// recorded in the operation tag so the product node is self-contained.

impl<'a, 'b, T, U, const M: usize, const K: usize, const N: usize, S, S2>
    Mul<&'b Matrix<U, K, N, S2>> for &'a Matrix<T, M, K, S>
{
    type Output = Binary<Self, &'b Matrix<U, K, N, S2>, MatMul<K>, M, N>;

    fn mul(self, rhs: &'b Matrix<U, K, N, S2>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<'a, T, E, Op, const M: usize, const K: usize, const N: usize, S> Mul<Unary<E, Op, K, N>>
    for &'a Matrix<T, M, K, S>
{
    type Output = Binary<Self, Unary<E, Op, K, N>, MatMul<K>, M, N>;

    fn mul(self, rhs: Unary<E, Op, K, N>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<'a, T, L2, R2, Op, const M: usize, const K: usize, const N: usize, S>
    Mul<Binary<L2, R2, Op, K, N>> for &'a Matrix<T, M, K, S>
{
    type Output = Binary<Self, Binary<L2, R2, Op, K, N>, MatMul<K>, M, N>;

    fn mul(self, rhs: Binary<L2, R2, Op, K, N>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<'b, E, Op, U, const M: usize, const K: usize, const N: usize, S2>
    Mul<&'b Matrix<U, K, N, S2>> for Unary<E, Op, M, K>
{
    type Output = Binary<Self, &'b Matrix<U, K, N, S2>, MatMul<K>, M, N>;

    fn mul(self, rhs: &'b Matrix<U, K, N, S2>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<E, Op, E2, Op2, const M: usize, const K: usize, const N: usize> Mul<Unary<E2, Op2, K, N>>
    for Unary<E, Op, M, K>
{
    type Output = Binary<Self, Unary<E2, Op2, K, N>, MatMul<K>, M, N>;

    fn mul(self, rhs: Unary<E2, Op2, K, N>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<E, Op, L2, R2, Op2, const M: usize, const K: usize, const N: usize>
    Mul<Binary<L2, R2, Op2, K, N>> for Unary<E, Op, M, K>
{
    type Output = Binary<Self, Binary<L2, R2, Op2, K, N>, MatMul<K>, M, N>;

    fn mul(self, rhs: Binary<L2, R2, Op2, K, N>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<'b, L, Rh, Op, U, const M: usize, const K: usize, const N: usize, S2>
    Mul<&'b Matrix<U, K, N, S2>> for Binary<L, Rh, Op, M, K>
{
    type Output = Binary<Self, &'b Matrix<U, K, N, S2>, MatMul<K>, M, N>;

    fn mul(self, rhs: &'b Matrix<U, K, N, S2>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<L, Rh, Op, E2, Op2, const M: usize, const K: usize, const N: usize> Mul<Unary<E2, Op2, K, N>>
    for Binary<L, Rh, Op, M, K>
{
    type Output = Binary<Self, Unary<E2, Op2, K, N>, MatMul<K>, M, N>;

    fn mul(self, rhs: Unary<E2, Op2, K, N>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<L, Rh, Op, L2, R2, Op2, const M: usize, const K: usize, const N: usize>
    Mul<Binary<L2, R2, Op2, K, N>> for Binary<L, Rh, Op, M, K>
{
    type Output = Binary<Self, Binary<L2, R2, Op2, K, N>, MatMul<K>, M, N>;

    fn mul(self, rhs: Binary<L2, R2, Op2, K, N>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

// Scalar product, with the expression normalized to the first operand. Plain
// scalars are supported for the primitive numeric types; `fill` covers any
// other element type.

impl<'a, T: Copy, const R: usize, const C: usize, S> Mul<Fill<T>> for &'a Matrix<T, R, C, S> {
    type Output = Binary<Self, Fill<T>, Scale, R, C>;

    fn mul(self, rhs: Fill<T>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<E, Op, T: Copy, const R: usize, const C: usize> Mul<Fill<T>> for Unary<E, Op, R, C> {
    type Output = Binary<Self, Fill<T>, Scale, R, C>;

    fn mul(self, rhs: Fill<T>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<L, Rh, Op, T: Copy, const R: usize, const C: usize> Mul<Fill<T>> for Binary<L, Rh, Op, R, C> {
    type Output = Binary<Self, Fill<T>, Scale, R, C>;

    fn mul(self, rhs: Fill<T>) -> Self::Output {
        Binary::new(self, rhs)
    }
}

impl<'a, T: Copy, const R: usize, const C: usize, S> Mul<&'a Matrix<T, R, C, S>> for Fill<T> {
    type Output = Binary<&'a Matrix<T, R, C, S>, Fill<T>, Scale, R, C>;

    fn mul(self, rhs: &'a Matrix<T, R, C, S>) -> Self::Output {
        Binary::new(rhs, self)
    }
}

impl<E, Op, T: Copy, const R: usize, const C: usize> Mul<Unary<E, Op, R, C>> for Fill<T> {
    type Output = Binary<Unary<E, Op, R, C>, Fill<T>, Scale, R, C>;

    fn mul(self, rhs: Unary<E, Op, R, C>) -> Self::Output {
        Binary::new(rhs, self)
    }
}

impl<L, Rh, Op, T: Copy, const R: usize, const C: usize> Mul<Binary<L, Rh, Op, R, C>> for Fill<T> {
    type Output = Binary<Binary<L, Rh, Op, R, C>, Fill<T>, Scale, R, C>;

    fn mul(self, rhs: Binary<L, Rh, Op, R, C>) -> Self::Output {
        Binary::new(rhs, self)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<'a, const R: usize, const C: usize, S> Mul<$t> for &'a Matrix<$t, R, C, S> {
                type Output = Binary<Self, Fill<$t>, Scale, R, C>;

                fn mul(self, rhs: $t) -> Self::Output {
                    Binary::new(self, Fill { value: rhs })
                }
            }

            impl<E, Op, const R: usize, const C: usize> Mul<$t> for Unary<E, Op, R, C> {
                type Output = Binary<Self, Fill<$t>, Scale, R, C>;

                fn mul(self, rhs: $t) -> Self::Output {
                    Binary::new(self, Fill { value: rhs })
                }
            }

            impl<L, Rh, Op, const R: usize, const C: usize> Mul<$t> for Binary<L, Rh, Op, R, C> {
                type Output = Binary<Self, Fill<$t>, Scale, R, C>;

                fn mul(self, rhs: $t) -> Self::Output {
                    Binary::new(self, Fill { value: rhs })
                }
            }

            impl<'a, const R: usize, const C: usize, S> Mul<&'a Matrix<$t, R, C, S>> for $t {
                type Output = Binary<&'a Matrix<$t, R, C, S>, Fill<$t>, Scale, R, C>;

                fn mul(self, rhs: &'a Matrix<$t, R, C, S>) -> Self::Output {
                    Binary::new(rhs, Fill { value: self })
                }
            }

            impl<E, Op, const R: usize, const C: usize> Mul<Unary<E, Op, R, C>> for $t {
                type Output = Binary<Unary<E, Op, R, C>, Fill<$t>, Scale, R, C>;

                fn mul(self, rhs: Unary<E, Op, R, C>) -> Self::Output {
                    Binary::new(rhs, Fill { value: self })
                }
            }

            impl<L, Rh, Op, const R: usize, const C: usize> Mul<Binary<L, Rh, Op, R, C>> for $t {
                type Output = Binary<Binary<L, Rh, Op, R, C>, Fill<$t>, Scale, R, C>;

                fn mul(self, rhs: Binary<L, Rh, Op, R, C>) -> Self::Output {
                    Binary::new(rhs, Fill { value: self })
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T, const R: usize, const C: usize, S, X> AddAssign<X> for Matrix<T, R, C, S>
where
    T: Scalar,
    S: Storage<T, R, C>,
    X: Expression<R, C, Elem = T>,
{
    fn add_assign(&mut self, rhs: X) {
        <S::Order as Order>::traverse(R, C, |i, j| self[[i, j]] = self[[i, j]] + rhs.eval_at(i, j));
    }
}

impl<T, const R: usize, const C: usize, S, X> SubAssign<X> for Matrix<T, R, C, S>
where
    T: Scalar + Neg<Output = T>,
    S: Storage<T, R, C>,
    X: Expression<R, C, Elem = T>,
{
    fn sub_assign(&mut self, rhs: X) {
        *self += Unary::<X, Negate, R, C>::new(rhs);
    }
}

impl<T, const R: usize, const C: usize, S> MulAssign<T> for Matrix<T, R, C, S>
where
    T: Scalar + Mul<Output = T>,
    S: Storage<T, R, C>,
{
    fn mul_assign(&mut self, rhs: T) {
        <S::Order as Order>::traverse(R, C, |i, j| self[[i, j]] = self[[i, j]] * rhs);
    }
}

impl<T, const R: usize, const C: usize, S, S2> PartialEq<Matrix<T, R, C, S2>> for Matrix<T, R, C, S>
where
    T: Scalar,
    S: Storage<T, R, C>,
    S2: Storage<T, R, C>,
{
    fn eq(&self, other: &Matrix<T, R, C, S2>) -> bool {
        expr_eq(&self, &other)
    }
}

impl<T, const R: usize, const C: usize, S, X> PartialEq<X> for Matrix<T, R, C, S>
where
    T: Scalar,
    S: Storage<T, R, C>,
    X: Expression<R, C, Elem = T>,
{
    fn eq(&self, other: &X) -> bool {
        expr_eq(&self, other)
    }
}

impl<E, Op, const R: usize, const C: usize, X> PartialEq<X> for Unary<E, Op, R, C>
where
    Unary<E, Op, R, C>: Expression<R, C>,
    X: Expression<R, C, Elem = <Unary<E, Op, R, C> as Expression<R, C>>::Elem>,
{
    fn eq(&self, other: &X) -> bool {
        expr_eq(self, other)
    }
}

impl<E, Op, T, const R: usize, const C: usize, S2> PartialEq<Matrix<T, R, C, S2>>
    for Unary<E, Op, R, C>
where
    T: Scalar,
    S2: Storage<T, R, C>,
    Unary<E, Op, R, C>: Expression<R, C, Elem = T>,
{
    fn eq(&self, other: &Matrix<T, R, C, S2>) -> bool {
        expr_eq(self, &other)
    }
}

impl<L, Rh, Op, const R: usize, const C: usize, X> PartialEq<X> for Binary<L, Rh, Op, R, C>
where
    Binary<L, Rh, Op, R, C>: Expression<R, C>,
    X: Expression<R, C, Elem = <Binary<L, Rh, Op, R, C> as Expression<R, C>>::Elem>,
{
    fn eq(&self, other: &X) -> bool {
        expr_eq(self, other)
    }
}

impl<L, Rh, Op, T, const R: usize, const C: usize, S2> PartialEq<Matrix<T, R, C, S2>>
    for Binary<L, Rh, Op, R, C>
where
    T: Scalar,
    S2: Storage<T, R, C>,
    Binary<L, Rh, Op, R, C>: Expression<R, C, Elem = T>,
{
    fn eq(&self, other: &Matrix<T, R, C, S2>) -> bool {
        expr_eq(self, &other)
    }
}
