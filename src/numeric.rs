/*!
 * Numerical type definitions
 */

use std::iter::Sum;
use std::ops::Add;
use std::ops::Mul;
use std::cmp::PartialOrd;

/**
 * A general purpose numeric trait that defines all the behaviour numerical matrices need
 * their types to support for math operations.
 *
 * The matrix operations in this crate only ever add and multiply elements, so unsigned
 * integers are Numeric here and can be used directly without wrapping.
 */
pub trait Numeric:
    Add<Output = Self> + Mul<Output = Self> + Sum + PartialOrd + Sized + Clone + ZeroOne {}

/**
 * Anything which implements all the super traits will automatically implement this trait too.
 * This covers primitives such as f32, f64, and the signed and unsigned integers.
 */
impl <T> Numeric for T where
    T: Add<Output = T> + Mul<Output = T> + Sum + PartialOrd + Sized + Clone + ZeroOne {}

/**
 * A trait defining how to obtain 0 and 1 for every implementing type.
 *
 * The boilerplate implementations for primitives is performed with a macro.
 * If a primitive type is missing from this list, please open an issue to add it in.
 */
pub trait ZeroOne: Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

macro_rules! zero_one_integral {
    ($T:ty) => {
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { 0 }
            #[inline]
            fn one() -> $T { 1 }
        }
    };
}

macro_rules! zero_one_float {
    ($T:ty) => {
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { 0.0 }
            #[inline]
            fn one() -> $T { 1.0 }
        }
    };
}

zero_one_integral!(u8);
zero_one_integral!(i8);
zero_one_integral!(u16);
zero_one_integral!(i16);
zero_one_integral!(u32);
zero_one_integral!(i32);
zero_one_integral!(u64);
zero_one_integral!(i64);
zero_one_integral!(u128);
zero_one_integral!(i128);
zero_one_float!(f32);
zero_one_float!(f64);
zero_one_integral!(usize);
zero_one_integral!(isize);
