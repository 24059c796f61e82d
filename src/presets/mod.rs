//! Ready-made algebras over common representation types
//!
//! Every call builds a fresh concrete algebra with its own element table.

use crate::algebras::{AbelianGroup, CommutativeMonoid, Field, Group, Monoid, Ring};
use crate::protocols::Representation;
use crate::{AlgebraError, Result};
use ndarray::{s, Array2};
use num_complex::Complex;
use num_rational::Rational64;
use num_traits::{One, Zero};

fn reduce(value: i128, modulus: i64) -> i64 {
    // the remainder lies in [0, modulus), so it fits back into i64
    value.rem_euclid(i128::from(modulus)) as i64
}

/// `base^exp mod modulus` by repeated squaring, for `modulus > 0`
pub fn pow_mod(base: i64, exp: u64, modulus: i64) -> i64 {
    let m = i128::from(modulus);
    let mut result = 1_i128 % m;
    let mut base = i128::from(base).rem_euclid(m);
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    // the remainder lies in [0, modulus)
    result as i64
}

/// Whether `n` is prime.
///
/// Deterministic Miller-Rabin: the first twelve prime bases decide every
/// 64-bit input.
pub fn is_prime(n: i64) -> bool {
    const BASES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    if n < 2 {
        return false;
    }
    if let Some(&p) = BASES.iter().find(|&&p| n % p == 0) {
        return n == p;
    }

    let odd = (n - 1) >> (n - 1).trailing_zeros();
    let squarings = (n - 1).trailing_zeros();
    BASES.iter().all(|&a| {
        let mut x = pow_mod(a, odd.unsigned_abs(), n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..squarings {
            x = reduce(i128::from(x) * i128::from(x), n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm, if
/// `gcd(a, m) == 1`
pub fn inverse_mod(a: i64, m: i64) -> Option<i64> {
    let modulus = i128::from(m);
    let (mut old_r, mut r) = (i128::from(a).rem_euclid(modulus), modulus);
    let (mut old_s, mut s) = (1_i128, 0_i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    (old_r == 1).then(|| reduce(old_s, m))
}

/// The integers modulo `n` as a ring, reps narrowed into `0..n`.
///
/// `n` must be at least 2 so that `one != zero`.
pub fn integers_mod(n: i64) -> Result<Ring<i64>> {
    if n < 2 {
        return Err(AlgebraError::InvalidModulus(n));
    }
    let ring = Ring::new(
        move |a: &i64, b: &i64| reduce(i128::from(*a) + i128::from(*b), n),
        move |a: &i64, b: &i64| reduce(i128::from(*a) * i128::from(*b), n),
        1,
        0,
        move |a: &i64| reduce(-i128::from(*a), n),
    );
    Ok(ring.with_narrow(move |a| a.rem_euclid(n)))
}

/// The integers modulo a prime `p` as a field.
///
/// Inverses come from Fermat's little theorem, `a^-1 = a^(p-2)`.
pub fn integers_mod_prime(p: i64) -> Result<Field<i64>> {
    if !is_prime(p) {
        return Err(AlgebraError::InvalidModulus(p));
    }
    let field = Field::new(
        move |a: &i64, b: &i64| reduce(i128::from(*a) + i128::from(*b), p),
        move |a: &i64, b: &i64| reduce(i128::from(*a) * i128::from(*b), p),
        1,
        0,
        move |a: &i64| reduce(-i128::from(*a), p),
        move |a: &i64| pow_mod(*a, (p - 2).unsigned_abs(), p),
    );
    tracing::debug!(modulus = p, "prime field created");
    Ok(field.with_narrow(move |a| a.rem_euclid(p)))
}

/// The integers under addition.
///
/// Arithmetic wraps on overflow.
pub fn integers() -> AbelianGroup<i64> {
    AbelianGroup::new(|a: &i64, b: &i64| a.wrapping_add(*b), 0, |a: &i64| a.wrapping_neg())
}

/// Any numeric type under addition
pub fn additive<T>() -> CommutativeMonoid<T>
where
    T: Representation + Zero,
{
    CommutativeMonoid::new(|a: &T, b: &T| a.clone() + b.clone(), T::zero())
}

/// Any numeric type under multiplication
pub fn multiplicative<T>() -> Monoid<T>
where
    T: Representation + One,
{
    Monoid::new(|a: &T, b: &T| a.clone() * b.clone(), T::one())
}

/// The rational numbers as a field.
///
/// `Rational64` arithmetic panics on overflow in debug builds and wraps in
/// release builds.
pub fn rationals() -> Field<Rational64> {
    Field::new(
        |a: &Rational64, b: &Rational64| a + b,
        |a: &Rational64, b: &Rational64| a * b,
        Rational64::one(),
        Rational64::zero(),
        |a: &Rational64| -a,
        |a: &Rational64| a.recip(),
    )
}

/// The Gaussian integers `a + bi` as a ring.
///
/// Component arithmetic panics on overflow in debug builds and wraps in
/// release builds.
pub fn gaussian_integers() -> Ring<Complex<i64>> {
    Ring::new(
        |a: &Complex<i64>, b: &Complex<i64>| a + b,
        |a: &Complex<i64>, b: &Complex<i64>| a * b,
        Complex::new(1, 0),
        Complex::new(0, 0),
        |a: &Complex<i64>| -a,
    )
}

/// The `n x n` integer matrices as a (non-commutative) ring.
///
/// Representations of another shape are truncated or zero-padded to
/// `n x n`. Entry arithmetic panics on overflow in debug builds and wraps
/// in release builds.
pub fn square_matrices(n: usize) -> Ring<Array2<i64>> {
    Ring::new(
        |a: &Array2<i64>, b: &Array2<i64>| a + b,
        |a: &Array2<i64>, b: &Array2<i64>| a.dot(b),
        Array2::eye(n),
        Array2::zeros((n, n)),
        |a: &Array2<i64>| a.mapv(|x| -x),
    )
    .with_narrow(move |a| fit_square(a, n))
}

fn fit_square(matrix: Array2<i64>, n: usize) -> Array2<i64> {
    if matrix.dim() == (n, n) {
        return matrix;
    }
    let rows = matrix.nrows().min(n);
    let cols = matrix.ncols().min(n);
    let mut fitted = Array2::zeros((n, n));
    fitted
        .slice_mut(s![..rows, ..cols])
        .assign(&matrix.slice(s![..rows, ..cols]));
    fitted
}

/// Strings under concatenation, the free monoid over `char`
pub fn strings() -> Monoid<String> {
    Monoid::new(|a: &String, b: &String| format!("{a}{b}"), String::new())
}

/// The cyclic group of order `n`, written multiplicatively over the
/// exponents `0..n` of a generator
pub fn cyclic_group(n: u64) -> Result<Group<u64>> {
    if n == 0 {
        return Err(AlgebraError::InvalidModulus(0));
    }
    let modulus = u128::from(n);
    let group = Group::new(
        // remainder is below n, so the cast back is lossless
        move |a: &u64, b: &u64| ((u128::from(*a) + u128::from(*b)) % modulus) as u64,
        0,
        move |a: &u64| (n - a % n) % n,
    );
    Ok(group.with_narrow(move |a| a % n))
}
