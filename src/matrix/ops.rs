//! Element-wise operator surface.
//!
//! Every operation exists as a fallible method (`try_add`, `try_rem_scalar`,
//! `try_bitxor_assign`, ...) and, on top of it, as the matching `core::ops` trait.
//! The trait forms panic with the error's message.
//!
//! Contracts shared by all forms:
//!
//! - matrix-matrix operands must have the same shape;
//! - division and modulus reject any zero divisor before producing output or
//!   touching a cell;
//! - integers wrap on overflow.
//!
//! With the `parallel` feature the kernels run on rayon's thread pool.

use super::{try_alloc, Matrix};
use crate::error::{MatrixError, Result};
use crate::storage::{MathArithmetic, MathIntegral};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul,
    MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use num_traits::Zero;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `f(lhs[i], rhs[i])` for every cell, into a fresh buffer.
pub(super) fn zip_cells<S, F>(lhs: &[S], rhs: &[S], f: F) -> Result<Vec<S>>
where
    S: Copy + Send + Sync,
    F: Fn(S, S) -> S + Send + Sync,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut out = try_alloc(lhs.len())?;
    #[cfg(feature = "parallel")]
    {
        lhs.par_iter()
            .zip(rhs.par_iter())
            .map(|(&a, &b)| f(a, b))
            .collect_into_vec(&mut out);
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.extend(lhs.iter().zip(rhs).map(|(&a, &b)| f(a, b)));
    }
    Ok(out)
}

/// `f(cells[i])` for every cell, into a fresh buffer.
pub(super) fn map_cells<S, F>(cells: &[S], f: F) -> Result<Vec<S>>
where
    S: Copy + Send + Sync,
    F: Fn(S) -> S + Send + Sync,
{
    let mut out = try_alloc(cells.len())?;
    #[cfg(feature = "parallel")]
    {
        cells.par_iter().map(|&a| f(a)).collect_into_vec(&mut out);
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.extend(cells.iter().map(|&a| f(a)));
    }
    Ok(out)
}

/// `lhs[i] = f(lhs[i], rhs[i])` in place.
pub(super) fn zip_assign<S, F>(lhs: &mut [S], rhs: &[S], f: F)
where
    S: Copy + Send + Sync,
    F: Fn(S, S) -> S + Send + Sync,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    #[cfg(feature = "parallel")]
    {
        lhs.par_iter_mut()
            .zip(rhs.par_iter())
            .for_each(|(a, &b)| *a = f(*a, b));
    }
    #[cfg(not(feature = "parallel"))]
    {
        lhs.iter_mut().zip(rhs).for_each(|(a, &b)| *a = f(*a, b));
    }
}

/// `cells[i] = f(cells[i])` in place.
pub(super) fn map_assign<S, F>(cells: &mut [S], f: F)
where
    S: Copy + Send + Sync,
    F: Fn(S) -> S + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        cells.par_iter_mut().for_each(|a| *a = f(*a));
    }
    #[cfg(not(feature = "parallel"))]
    {
        cells.iter_mut().for_each(|a| *a = f(*a));
    }
}

impl<T: crate::storage::Element> Matrix<T> {
    /// Fails unless `self` and `rhs` have the same shape.
    pub(super) fn check_shape(&self, rhs: &Self, op: &'static str) -> Result<()> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            })
        }
    }
}

#[inline]
fn unguarded<T>(_divisors: &[T]) -> Result<()> {
    Ok(())
}

#[inline]
fn nonzero_divisor<T: Zero>(divisors: &[T]) -> Result<()> {
    if divisors.iter().any(Zero::is_zero) {
        return Err(MatrixError::DivisionByZero);
    }
    Ok(())
}

#[inline]
fn nonzero_modulus<T: Zero>(divisors: &[T]) -> Result<()> {
    if divisors.iter().any(Zero::is_zero) {
        return Err(MatrixError::ModulusByZero);
    }
    Ok(())
}

#[inline(always)]
fn and<T: MathIntegral>(a: T, b: T) -> T {
    a & b
}

#[inline(always)]
fn or<T: MathIntegral>(a: T, b: T) -> T {
    a | b
}

#[inline(always)]
fn xor<T: MathIntegral>(a: T, b: T) -> T {
    a ^ b
}

macro_rules! elementwise {
    (
        $bound:ident;
        $(
            $op:literal => $elem:expr, $guard:ident:
            $try:ident, $try_scalar:ident, $try_assign:ident, $try_assign_scalar:ident;
        )*
    ) => {
        impl<T: $bound> Matrix<T> {
            $(
                #[doc = concat!("Element-wise ", $op, " of two matrices of the same shape.")]
                ///
                /// # Errors
                /// [`MatrixError::DimensionMismatch`] if the shapes differ. Division and
                /// modulus also fail if any divisor cell is zero.
                pub fn $try(&self, rhs: &Self) -> Result<Self> {
                    self.check_shape(rhs, $op)?;
                    $guard(&rhs.data)?;
                    let data = zip_cells(&self.data, &rhs.data, $elem)?;
                    Ok(Self::from_storage_vec(self.rows, self.cols, data))
                }

                #[doc = concat!("Element-wise ", $op, " with a scalar on the right.")]
                ///
                /// # Errors
                /// Division and modulus fail if `rhs` is zero.
                pub fn $try_scalar(&self, rhs: T) -> Result<Self> {
                    $guard(core::slice::from_ref(&rhs))?;
                    let data = map_cells(&self.data, move |a| ($elem)(a, rhs))?;
                    Ok(Self::from_storage_vec(self.rows, self.cols, data))
                }

                #[doc = concat!("In-place element-wise ", $op, ".")]
                ///
                /// # Errors
                /// As the non-mutating form; `self` is left untouched on error.
                pub fn $try_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
                    self.check_shape(rhs, $op)?;
                    $guard(&rhs.data)?;
                    zip_assign(&mut self.data, &rhs.data, $elem);
                    Ok(self)
                }

                #[doc = concat!("In-place element-wise ", $op, " with a scalar.")]
                ///
                /// # Errors
                /// Division and modulus fail if `rhs` is zero.
                pub fn $try_assign_scalar(&mut self, rhs: T) -> Result<&mut Self> {
                    $guard(core::slice::from_ref(&rhs))?;
                    map_assign(&mut self.data, move |a| ($elem)(a, rhs));
                    Ok(self)
                }
            )*
        }
    };
}

elementwise! {
    MathArithmetic;
    "addition" => T::add_elem, unguarded: try_add, try_add_scalar, try_add_assign, try_add_assign_scalar;
    "subtraction" => T::sub_elem, unguarded: try_sub, try_sub_scalar, try_sub_assign, try_sub_assign_scalar;
    "multiplication" => T::mul_elem, unguarded: try_mul, try_mul_scalar, try_mul_assign, try_mul_assign_scalar;
    "division" => T::div_elem, nonzero_divisor: try_div, try_div_scalar, try_div_assign, try_div_assign_scalar;
}

elementwise! {
    MathIntegral;
    "modulus" => T::rem_elem, nonzero_modulus: try_rem, try_rem_scalar, try_rem_assign, try_rem_assign_scalar;
    "bitwise and" => and::<T>, unguarded: try_bitand, try_bitand_scalar, try_bitand_assign, try_bitand_assign_scalar;
    "bitwise or" => or::<T>, unguarded: try_bitor, try_bitor_scalar, try_bitor_assign, try_bitor_assign_scalar;
    "bitwise xor" => xor::<T>, unguarded: try_bitxor, try_bitxor_scalar, try_bitxor_assign, try_bitxor_assign_scalar;
}

impl<T: MathIntegral> Matrix<T> {
    /// Bitwise complement of every cell.
    ///
    /// # Errors
    /// [`MatrixError::Alloc`] if the result cannot be allocated.
    pub fn bit_not(&self) -> Result<Self> {
        let data = map_cells(&self.data, |a: T| !a)?;
        Ok(Self::from_storage_vec(self.rows, self.cols, data))
    }

    /// In-place bitwise complement.
    pub fn bit_not_assign(&mut self) -> &mut Self {
        map_assign(&mut self.data, |a: T| !a);
        self
    }

    /// Shifts every cell left by `k` bits.
    ///
    /// `k` is taken modulo the bit width. A negative `k` performs a logical
    /// right shift instead.
    ///
    /// # Errors
    /// [`MatrixError::Alloc`] if the result cannot be allocated.
    pub fn shift_left(&self, k: i32) -> Result<Self> {
        let data = map_cells(&self.data, move |a: T| a.shift_left(k))?;
        Ok(Self::from_storage_vec(self.rows, self.cols, data))
    }

    /// Shifts every cell right by `k` bits.
    ///
    /// `k` is taken modulo the bit width. The shift is arithmetic for signed
    /// types and logical for unsigned ones; a negative `k` shifts left.
    ///
    /// # Errors
    /// [`MatrixError::Alloc`] if the result cannot be allocated.
    pub fn shift_right(&self, k: i32) -> Result<Self> {
        let data = map_cells(&self.data, move |a: T| a.shift_right(k))?;
        Ok(Self::from_storage_vec(self.rows, self.cols, data))
    }

    /// In-place [`Matrix::shift_left`].
    pub fn shift_left_assign(&mut self, k: i32) -> &mut Self {
        map_assign(&mut self.data, move |a: T| a.shift_left(k));
        self
    }

    /// In-place [`Matrix::shift_right`].
    pub fn shift_right_assign(&mut self, k: i32) -> &mut Self {
        map_assign(&mut self.data, move |a: T| a.shift_right(k));
        self
    }
}

#[track_caller]
fn expect_op<R>(result: Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

macro_rules! std_ops {
    (
        $bound:ident;
        $(
            $Trait:ident::$method:ident, $Assign:ident::$assign:ident =>
            $try:ident, $try_scalar:ident, $try_assign:ident, $try_assign_scalar:ident;
        )*
    ) => {$(
        impl<T: $bound> $Trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                expect_op(self.$try(rhs))
            }
        }

        impl<T: $bound> $Trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(mut self, rhs: &Matrix<T>) -> Matrix<T> {
                expect_op(self.$try_assign(rhs).map(|_| ()));
                self
            }
        }

        impl<T: $bound> $Trait<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(mut self, rhs: Matrix<T>) -> Matrix<T> {
                expect_op(self.$try_assign(&rhs).map(|_| ()));
                self
            }
        }

        impl<T: $bound> $Trait<T> for &Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: T) -> Matrix<T> {
                expect_op(self.$try_scalar(rhs))
            }
        }

        impl<T: $bound> $Trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(mut self, rhs: T) -> Matrix<T> {
                expect_op(self.$try_assign_scalar(rhs).map(|_| ()));
                self
            }
        }

        impl<T: $bound> $Assign<&Matrix<T>> for Matrix<T> {
            #[track_caller]
            fn $assign(&mut self, rhs: &Matrix<T>) {
                expect_op(self.$try_assign(rhs).map(|_| ()));
            }
        }

        impl<T: $bound> $Assign<T> for Matrix<T> {
            #[track_caller]
            fn $assign(&mut self, rhs: T) {
                expect_op(self.$try_assign_scalar(rhs).map(|_| ()));
            }
        }
    )*};
}

std_ops! {
    MathArithmetic;
    Add::add, AddAssign::add_assign => try_add, try_add_scalar, try_add_assign, try_add_assign_scalar;
    Sub::sub, SubAssign::sub_assign => try_sub, try_sub_scalar, try_sub_assign, try_sub_assign_scalar;
    Mul::mul, MulAssign::mul_assign => try_mul, try_mul_scalar, try_mul_assign, try_mul_assign_scalar;
    Div::div, DivAssign::div_assign => try_div, try_div_scalar, try_div_assign, try_div_assign_scalar;
}

std_ops! {
    MathIntegral;
    Rem::rem, RemAssign::rem_assign => try_rem, try_rem_scalar, try_rem_assign, try_rem_assign_scalar;
    BitAnd::bitand, BitAndAssign::bitand_assign =>
        try_bitand, try_bitand_scalar, try_bitand_assign, try_bitand_assign_scalar;
    BitOr::bitor, BitOrAssign::bitor_assign =>
        try_bitor, try_bitor_scalar, try_bitor_assign, try_bitor_assign_scalar;
    BitXor::bitxor, BitXorAssign::bitxor_assign =>
        try_bitxor, try_bitxor_scalar, try_bitxor_assign, try_bitxor_assign_scalar;
}

impl<T: MathIntegral> Not for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn not(self) -> Matrix<T> {
        expect_op(self.bit_not())
    }
}

impl<T: MathIntegral> Not for Matrix<T> {
    type Output = Matrix<T>;

    fn not(mut self) -> Matrix<T> {
        self.bit_not_assign();
        self
    }
}

impl<T: MathIntegral> Shl<i32> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn shl(self, k: i32) -> Matrix<T> {
        expect_op(self.shift_left(k))
    }
}

impl<T: MathIntegral> Shr<i32> for &Matrix<T> {
    type Output = Matrix<T>;

    #[track_caller]
    fn shr(self, k: i32) -> Matrix<T> {
        expect_op(self.shift_right(k))
    }
}

impl<T: MathIntegral> ShlAssign<i32> for Matrix<T> {
    fn shl_assign(&mut self, k: i32) {
        self.shift_left_assign(k);
    }
}

impl<T: MathIntegral> ShrAssign<i32> for Matrix<T> {
    fn shr_assign(&mut self, k: i32) {
        self.shift_right_assign(k);
    }
}
