//! Capability classes that gate the operator surface.
//!
//! - [`MathArithmetic`]: `+ - * /`, `sum`. All integer types and floats;
//!   `bool`, `char` and `String` are excluded.
//! - [`MathIntegral`]: additionally `%`, bitwise operators and shifts. Integer
//!   types only.
//! - Boolean logic is only offered on `Matrix<bool>` itself.
//!
//! Operations outside a type's class are not implemented, so misuse fails to compile.
//! Integer arithmetic wraps on overflow.

use super::Plain;
use num_traits::{Float, PrimInt, Zero};

/// Element types that support element-wise arithmetic and summation.
pub trait MathArithmetic: Plain + Copy + PartialOrd + Zero + Send + Sync {
    /// `self + rhs`.
    fn add_elem(self, rhs: Self) -> Self;
    /// `self - rhs`.
    fn sub_elem(self, rhs: Self) -> Self;
    /// `self * rhs`.
    fn mul_elem(self, rhs: Self) -> Self;
    /// `self / rhs`; callers reject zero divisors beforehand.
    fn div_elem(self, rhs: Self) -> Self;
    /// Sums a run of cells, returning zero for an empty run.
    fn accumulate(cells: &[Self]) -> Self;
}

/// Integer element types: modulus, bitwise operators and shifts.
pub trait MathIntegral: MathArithmetic + PrimInt {
    /// `self % rhs`; callers reject zero divisors beforehand.
    fn rem_elem(self, rhs: Self) -> Self;

    /// Number of bits in the type.
    #[inline(always)]
    fn bit_width() -> u32 {
        Self::zero().count_zeros()
    }

    /// Shifts left by `k` bits modulo the bit width. A negative `k` is a logical
    /// right shift.
    #[inline]
    fn shift_left(self, k: i32) -> Self {
        let s = k.unsigned_abs() % Self::bit_width();
        if k >= 0 {
            self.unsigned_shl(s)
        } else {
            self.unsigned_shr(s)
        }
    }

    /// Shifts right by `k` bits modulo the bit width: arithmetic for signed
    /// types, logical for unsigned ones. A negative `k` is a left shift.
    #[inline]
    fn shift_right(self, k: i32) -> Self {
        let s = k.unsigned_abs() % Self::bit_width();
        if k >= 0 {
            self >> s as usize
        } else {
            self.unsigned_shl(s)
        }
    }
}

/// Compensated (Kahan) summation.
pub(crate) fn kahan_sum<F: Float>(cells: &[F]) -> F {
    let mut sum = F::zero();
    let mut compensation = F::zero();
    for &cell in cells {
        let y = cell - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

macro_rules! integral_capability {
    ($($t:ty),* $(,)?) => {$(
        impl MathArithmetic for $t {
            #[inline(always)]
            fn add_elem(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn sub_elem(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn mul_elem(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn div_elem(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            fn accumulate(cells: &[Self]) -> Self {
                cells.iter().fold(0, |acc, &v| acc.wrapping_add(v))
            }
        }

        impl MathIntegral for $t {
            #[inline(always)]
            fn rem_elem(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }
        }
    )*};
}

integral_capability!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_capability {
    ($($t:ty),* $(,)?) => {$(
        impl MathArithmetic for $t {
            #[inline(always)]
            fn add_elem(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn sub_elem(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn mul_elem(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn div_elem(self, rhs: Self) -> Self {
                self / rhs
            }

            fn accumulate(cells: &[Self]) -> Self {
                kahan_sum(cells)
            }
        }
    )*};
}

float_capability!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(i8::MAX.add_elem(1), i8::MIN);
        assert_eq!(0u8.sub_elem(1), u8::MAX);
        assert_eq!(i32::MIN.div_elem(-1), i32::MIN);
        assert_eq!(i32::MIN.rem_elem(-1), 0);
    }

    #[test]
    fn test_shift_semantics() {
        assert_eq!(1u8.shift_left(3), 8);
        assert_eq!(1u8.shift_left(9), 2); // 9 mod 8
        assert_eq!((-8i8).shift_right(1), -4); // arithmetic
        assert_eq!(0x80u8.shift_right(7), 1); // logical
        assert_eq!(16u32.shift_left(-2), 4);
        assert_eq!((-1i8).shift_left(-4), 0x0F); // reversed left shift is logical
        assert_eq!(3i16.shift_right(-1), 6);
        assert_eq!(5i64.shift_left(0), 5);
        assert_eq!(<u16 as MathIntegral>::bit_width(), 16);
    }

    #[test]
    fn test_kahan_beats_naive() {
        let mut cells = vec![1.0f32];
        cells.extend(std::iter::repeat(1e-8f32).take(10_000));
        let naive: f32 = cells.iter().sum();
        let compensated = f32::accumulate(&cells);
        assert_eq!(naive, 1.0);
        assert!((compensated - 1.0001).abs() < 1e-6);
    }
}
