//! Finite field GF(2) arithmetic.
//!
//! This module contains the struct [GF2], which implements the finite field
//! arithmetic in GF(2). It is used as the scalar element of
//! [`BitMatrix`](crate::bitmatrix::BitMatrix), so that dense bit matrices can
//! be backed by an `ndarray::Array2<GF2>` and reuse `ndarray`'s generic
//! linear-algebra machinery (`.dot()`, slicing, concatenation).

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use ndarray::ScalarOperand;
use num_traits::{One, Zero};

/// Finite field GF(2) element.
///
/// This struct represents an element of the finite field GF(2).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct GF2(u8);

impl Zero for GF2 {
    fn zero() -> GF2 {
        GF2(0)
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn set_zero(&mut self) {
        *self = Self::zero()
    }
}

impl One for GF2 {
    fn one() -> GF2 {
        GF2(1)
    }

    fn set_one(&mut self) {
        *self = Self::one()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

impl Add for GF2 {
    type Output = GF2;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: GF2) -> GF2 {
        GF2(self.0 ^ rhs.0)
    }
}

impl Sub for GF2 {
    type Output = GF2;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: GF2) -> GF2 {
        self + rhs
    }
}

impl Mul for GF2 {
    type Output = GF2;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, rhs: GF2) -> GF2 {
        GF2(self.0 & rhs.0)
    }
}

impl Div for GF2 {
    type Output = GF2;

    fn div(self, rhs: GF2) -> GF2 {
        if rhs.is_zero() {
            panic!("division by zero");
        }
        self
    }
}

impl From<u8> for GF2 {
    /// Any nonzero byte maps to the field element 1.
    fn from(bit: u8) -> GF2 {
        GF2((bit != 0) as u8)
    }
}

impl From<bool> for GF2 {
    fn from(bit: bool) -> GF2 {
        GF2(bit as u8)
    }
}

impl From<GF2> for u8 {
    fn from(x: GF2) -> u8 {
        x.0
    }
}

impl GF2 {
    /// Returns the element as a `0`/`1` byte.
    pub fn bit(self) -> u8 {
        self.0
    }
}

macro_rules! impl_ops {
    ($op:ident, $opmethod:ident, $opassign:ident, $opassign_method:ident) => {
        impl $op<&GF2> for GF2 {
            type Output = GF2;
            fn $opmethod(self, rhs: &GF2) -> GF2 {
                self.$opmethod(*rhs)
            }
        }

        impl $opassign for GF2 {
            fn $opassign_method(&mut self, rhs: GF2) {
                *self = self.$opmethod(rhs);
            }
        }

        impl $opassign<&GF2> for GF2 {
            fn $opassign_method(&mut self, rhs: &GF2) {
                *self = self.$opmethod(*rhs);
            }
        }
    };
}

impl_ops!(Add, add, AddAssign, add_assign);
impl_ops!(Sub, sub, SubAssign, sub_assign);
impl_ops!(Mul, mul, MulAssign, mul_assign);
impl_ops!(Div, div, DivAssign, div_assign);

impl ScalarOperand for GF2 {}
