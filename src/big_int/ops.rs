// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::{
    iter::{Product, Sum},
    ops::{
        Add, AddAssign, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
};

use super::{math_algos, BigInt};

cfg_if::cfg_if! {
    if #[cfg(feature = "bytewiseShift")] {
        use math_algos::shift::bytewise as shift_algo;
    } else {
        use math_algos::shift as shift_algo;
    }
}

/// every operation wraps around modulo 2^128 instead of overflowing
impl BigInt {
    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_le_bytes(math_algos::add::wrapping(self.bytes, rhs.bytes))
    }
    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_le_bytes(math_algos::sub::wrapping(self.bytes, rhs.bytes))
    }
    /// two's complement, [`BigInt::MIN`] stays [`BigInt::MIN`]
    #[must_use]
    pub fn wrapping_neg(self) -> Self {
        Self::from_le_bytes(math_algos::negate::twos_complement(self.bytes))
    }
    #[must_use]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_le_bytes(math_algos::mul::shift_and_add(self.bytes, rhs.bytes))
    }

    /// `n <= 0` keeps the value, `n >= 128` gives zero
    #[must_use]
    pub fn shift_left(self, n: i32) -> Self {
        Self::from_le_bytes(shift_algo::shl(self.bytes, n))
    }
    /// fills with zeros, `n <= 0` keeps the value, `n >= 128` gives zero
    #[must_use]
    pub fn shift_right_logical(self, n: i32) -> Self {
        Self::from_le_bytes(shift_algo::shr(self.bytes, n))
    }
    /// fills with the sign bit, `n <= 0` keeps the value,
    /// `n >= 128` gives [`BigInt::NEG_ONE`] for negative and [`BigInt::ZERO`] for other values
    #[must_use]
    pub fn shift_right_arithmetic(self, n: i32) -> Self {
        Self::from_le_bytes(shift_algo::sar(self.bytes, n))
    }
}

macro_rules! implBigMath {
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident, $method:ident) => {
        implBigMath!($assign_trait, $assign_func, $trait, $func, $method, BigInt);
    };
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident, $method:ident, $rhs:ty) => {
        impl $trait<$rhs> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$method(self, rhs)
            }
        }
        impl $trait<&$rhs> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: &$rhs) -> Self::Output {
                BigInt::$method(self, *rhs)
            }
        }
        impl $trait<$rhs> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$method(*self, rhs)
            }
        }
        impl $trait<&$rhs> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: &$rhs) -> Self::Output {
                BigInt::$method(*self, *rhs)
            }
        }
        impl $assign_trait<$rhs> for BigInt {
            fn $assign_func(&mut self, rhs: $rhs) {
                *self = BigInt::$method(*self, rhs);
            }
        }
        impl $assign_trait<&$rhs> for BigInt {
            fn $assign_func(&mut self, rhs: &$rhs) {
                *self = BigInt::$method(*self, *rhs);
            }
        }
    };
}
implBigMath!(AddAssign, add_assign, Add, add, wrapping_add);
implBigMath!(SubAssign, sub_assign, Sub, sub, wrapping_sub);
implBigMath!(MulAssign, mul_assign, Mul, mul, wrapping_mul);
implBigMath!(ShlAssign, shl_assign, Shl, shl, shift_left, i32);
// same as for i128, `>>` keeps the sign
implBigMath!(ShrAssign, shr_assign, Shr, shr, shift_right_arithmetic, i32);

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}
impl Not for BigInt {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_le_bytes(math_algos::negate::complement(self.bytes))
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::wrapping_add)
    }
}
impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
impl Product for BigInt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Self::wrapping_mul)
    }
}
impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}
