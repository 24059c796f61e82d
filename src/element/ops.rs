//! Operator overloads for [`Element`]
//!
//! Operators forward to the checked methods and panic with the error's
//! message on failure: mixing operands from different concrete algebras,
//! dividing by zero, or an exponent out of range.

use super::Element;
use crate::protocols::{Additive, Invertible, Multiplicative, Negatable};
use crate::Result;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! binary_operator {
    ($bound:ident, $trait:ident, $method:ident, $checked:ident) => {
        impl<A: $bound> $trait<&Element<A>> for &Element<A> {
            type Output = Element<A>;

            fn $method(self, rhs: &Element<A>) -> Element<A> {
                or_panic(self.$checked(rhs))
            }
        }

        impl<A: $bound> $trait<Element<A>> for Element<A> {
            type Output = Element<A>;

            fn $method(self, rhs: Element<A>) -> Element<A> {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<A: $bound> $trait<&Element<A>> for Element<A> {
            type Output = Element<A>;

            fn $method(self, rhs: &Element<A>) -> Element<A> {
                or_panic(self.$checked(rhs))
            }
        }

        impl<A: $bound> $trait<Element<A>> for &Element<A> {
            type Output = Element<A>;

            fn $method(self, rhs: Element<A>) -> Element<A> {
                or_panic(self.$checked(&rhs))
            }
        }
    };
}

// # Panics
//
// When the operands belong to different concrete algebras, and for
// division also when the divisor has no inverse.
binary_operator!(Multiplicative, Mul, mul, try_mul);
binary_operator!(Additive, Add, add, try_add);
binary_operator!(Negatable, Sub, sub, try_sub);
binary_operator!(Invertible, Div, div, try_div);

impl<A: Negatable> Neg for &Element<A> {
    type Output = Element<A>;

    fn neg(self) -> Element<A> {
        self.negate()
    }
}

impl<A: Negatable> Neg for Element<A> {
    type Output = Element<A>;

    fn neg(self) -> Element<A> {
        self.negate()
    }
}

/// `x * n` adds `x` to itself `n` times.
///
/// # Panics
///
/// When `n` is outside the range the algebra accepts.
impl<A: Additive> Mul<i64> for &Element<A> {
    type Output = Element<A>;

    fn mul(self, n: i64) -> Element<A> {
        or_panic(self.times(n))
    }
}

impl<A: Additive> Mul<i64> for Element<A> {
    type Output = Element<A>;

    fn mul(self, n: i64) -> Element<A> {
        or_panic(self.times(n))
    }
}

/// `n * x`, same as `x * n`
impl<A: Additive> Mul<&Element<A>> for i64 {
    type Output = Element<A>;

    fn mul(self, x: &Element<A>) -> Element<A> {
        or_panic(x.times(self))
    }
}

impl<A: Additive> Mul<Element<A>> for i64 {
    type Output = Element<A>;

    fn mul(self, x: Element<A>) -> Element<A> {
        or_panic(x.times(self))
    }
}
