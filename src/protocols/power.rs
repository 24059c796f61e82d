//! Powers and integer multiples by repeated squaring
//!
//! Each helper implements one exponent rule; the concrete algebras pick
//! the rule matching their structure. Associativity makes the squaring
//! schedule agree with plain repeated application.

use super::{Additive, AdditiveIdentity, Invertible, Multiplicative, Negatable, Unital};
use crate::{AlgebraError, Result};
use std::num::NonZeroU64;

/// Combine `base` with itself `n` times using `op`.
fn repeat<H: Clone>(base: &H, n: NonZeroU64, op: impl Fn(&H, &H) -> H) -> H {
    let mut n = n.get();
    let mut square = base.clone();
    while n & 1 == 0 {
        square = op(&square, &square);
        n >>= 1;
    }

    let mut acc = square.clone();
    n >>= 1;
    while n > 0 {
        square = op(&square, &square);
        if n & 1 == 1 {
            acc = op(&acc, &square);
        }
        n >>= 1;
    }
    acc
}

fn below_minimum(kind: &'static str, exponent: i64, minimum: i64) -> AlgebraError {
    AlgebraError::InvalidExponent {
        kind,
        exponent,
        minimum,
    }
}

/// Semigroup rule: `n > 0`
pub fn positive_power<A: Multiplicative>(algebra: &A, rep: &A::Rep, n: i64) -> Result<A::Rep> {
    let count = u64::try_from(n)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| below_minimum(A::KIND, n, 1))?;
    Ok(repeat(rep, count, |l, r| algebra.mult(l, r)))
}

/// Monoid rule: `n >= 0`, with `x^0 == one`
pub fn non_negative_power<A: Unital>(algebra: &A, rep: &A::Rep, n: i64) -> Result<A::Rep> {
    let count = u64::try_from(n).map_err(|_| below_minimum(A::KIND, n, 0))?;
    Ok(match NonZeroU64::new(count) {
        Some(count) => repeat(rep, count, |l, r| algebra.mult(l, r)),
        None => algebra.one().clone(),
    })
}

/// Group rule: any `n`, negative powers are powers of the inverse
pub fn integral_power<A: Invertible>(algebra: &A, rep: &A::Rep, n: i64) -> Result<A::Rep> {
    let base = if n < 0 {
        algebra.invert(rep)?
    } else {
        rep.clone()
    };
    Ok(match NonZeroU64::new(n.unsigned_abs()) {
        Some(count) => repeat(&base, count, |l, r| algebra.mult(l, r)),
        None => algebra.one().clone(),
    })
}

/// Commutative semigroup rule: `n > 0`
pub fn positive_multiple<A: Additive>(algebra: &A, rep: &A::Rep, n: i64) -> Result<A::Rep> {
    let count = u64::try_from(n)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| below_minimum(A::KIND, n, 1))?;
    Ok(repeat(rep, count, |l, r| algebra.add(l, r)))
}

/// Commutative monoid rule: `n >= 0`, with `0·x == zero`
pub fn non_negative_multiple<A: AdditiveIdentity>(
    algebra: &A,
    rep: &A::Rep,
    n: i64,
) -> Result<A::Rep> {
    let count = u64::try_from(n).map_err(|_| below_minimum(A::KIND, n, 0))?;
    Ok(match NonZeroU64::new(count) {
        Some(count) => repeat(rep, count, |l, r| algebra.add(l, r)),
        None => algebra.zero().clone(),
    })
}

/// Abelian group rule: any `n`, `(-n)·x == n·(-x)`
pub fn integral_multiple<A: Negatable>(algebra: &A, rep: &A::Rep, n: i64) -> Result<A::Rep> {
    let base = if n < 0 {
        algebra.negate(rep)
    } else {
        rep.clone()
    };
    Ok(match NonZeroU64::new(n.unsigned_abs()) {
        Some(count) => repeat(&base, count, |l, r| algebra.add(l, r)),
        None => algebra.zero().clone(),
    })
}
