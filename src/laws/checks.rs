//! Individual law checks over a sample of representations
//!
//! Every check expects an already narrowed sample (as produced by
//! [`LawChecker`](super::LawChecker)) and reports the first counterexample
//! it finds. With `parallel` set, the outer loop runs on rayon's pool and
//! whichever worker finds a counterexample first wins, so the witness may
//! differ between runs.

use super::{Law, LawViolation};
use crate::protocols::{
    Additive, AdditiveIdentity, Invertible, Multiplicative, Negatable, Unital,
};
use rayon::prelude::*;
use std::fmt::Debug;

/// Outcome of a single law check
pub type Outcome = std::result::Result<(), LawViolation>;

fn render<H: Debug>(reps: &[&H]) -> Vec<String> {
    reps.iter().map(|rep| format!("{rep:?}")).collect()
}

fn search<H, F>(sample: &[H], parallel: bool, probe: F) -> Option<Vec<String>>
where
    H: Sync,
    F: Fn(&H) -> Option<Vec<String>> + Sync + Send,
{
    if parallel {
        sample.par_iter().find_map_any(probe)
    } else {
        sample.iter().find_map(probe)
    }
}

fn verdict(law: Law, found: Option<Vec<String>>) -> Outcome {
    match found {
        None => Ok(()),
        Some(witnesses) => Err(LawViolation { law, witnesses }),
    }
}

/// `(x * y) * z == x * (y * z)`
pub fn mult_associativity<A: Multiplicative>(algebra: &A, sample: &[A::Rep], parallel: bool) -> Outcome {
    let found = search(sample, parallel, |x| {
        sample.iter().find_map(|y| {
            let xy = algebra.mult(x, y);
            sample.iter().find_map(|z| {
                let left = algebra.mult(&xy, z);
                let right = algebra.mult(x, &algebra.mult(y, z));
                (left != right).then(|| render(&[x, y, z]))
            })
        })
    });
    verdict(Law::MultAssociativity, found)
}

/// `x * y == y * x`
pub fn mult_commutativity<A: Multiplicative>(algebra: &A, sample: &[A::Rep], parallel: bool) -> Outcome {
    let found = search(sample, parallel, |x| {
        sample
            .iter()
            .find_map(|y| (algebra.mult(x, y) != algebra.mult(y, x)).then(|| render(&[x, y])))
    });
    verdict(Law::MultCommutativity, found)
}

/// `one * x == x`
pub fn left_identity<A: Unital>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let one = algebra.one();
    let found = sample
        .iter()
        .find(|x| algebra.mult(one, x) != **x)
        .map(|x| render(&[x]));
    verdict(Law::LeftIdentity, found)
}

/// `x * one == x`
pub fn right_identity<A: Unital>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let one = algebra.one();
    let found = sample
        .iter()
        .find(|x| algebra.mult(x, one) != **x)
        .map(|x| render(&[x]));
    verdict(Law::RightIdentity, found)
}

/// `invert(x) * x == one`
pub fn left_inverse<A: Invertible>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let one = algebra.one();
    let found = sample
        .iter()
        .find(|x| match algebra.invert(x) {
            Ok(inverse) => algebra.mult(&inverse, x) != *one,
            Err(_) => true,
        })
        .map(|x| render(&[x]));
    verdict(Law::LeftInverse, found)
}

/// `x * invert(x) == one`
pub fn right_inverse<A: Invertible>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let one = algebra.one();
    let found = sample
        .iter()
        .find(|x| match algebra.invert(x) {
            Ok(inverse) => algebra.mult(x, &inverse) != *one,
            Err(_) => true,
        })
        .map(|x| render(&[x]));
    verdict(Law::RightInverse, found)
}

/// `invert(invert(x)) == x`
pub fn inverse_involution<A: Invertible>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let found = sample
        .iter()
        .find(|x| {
            algebra
                .invert(x)
                .and_then(|inverse| algebra.invert(&inverse))
                .map_or(true, |back| back != **x)
        })
        .map(|x| render(&[x]));
    verdict(Law::InverseInvolution, found)
}

/// `invert(one) == one`
pub fn identity_self_inverse<A: Invertible>(algebra: &A) -> Outcome {
    let one = algebra.one();
    let holds = matches!(algebra.invert(one), Ok(inverse) if inverse == *one);
    verdict(Law::IdentitySelfInverse, (!holds).then(|| render(&[one])))
}

/// `(x + y) + z == x + (y + z)`
pub fn add_associativity<A: Additive>(algebra: &A, sample: &[A::Rep], parallel: bool) -> Outcome {
    let found = search(sample, parallel, |x| {
        sample.iter().find_map(|y| {
            let xy = algebra.add(x, y);
            sample.iter().find_map(|z| {
                let left = algebra.add(&xy, z);
                let right = algebra.add(x, &algebra.add(y, z));
                (left != right).then(|| render(&[x, y, z]))
            })
        })
    });
    verdict(Law::AddAssociativity, found)
}

/// `x + y == y + x`
pub fn add_commutativity<A: Additive>(algebra: &A, sample: &[A::Rep], parallel: bool) -> Outcome {
    let found = search(sample, parallel, |x| {
        sample
            .iter()
            .find_map(|y| (algebra.add(x, y) != algebra.add(y, x)).then(|| render(&[x, y])))
    });
    verdict(Law::AddCommutativity, found)
}

/// `zero + x == x == x + zero`
pub fn add_identity<A: AdditiveIdentity>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let zero = algebra.zero();
    let found = sample
        .iter()
        .find(|x| algebra.add(zero, x) != **x || algebra.add(x, zero) != **x)
        .map(|x| render(&[x]));
    verdict(Law::AddIdentity, found)
}

/// `x + negate(x) == zero`
pub fn add_inverse<A: Negatable>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let zero = algebra.zero();
    let found = sample
        .iter()
        .find(|x| algebra.add(x, &algebra.negate(x)) != *zero)
        .map(|x| render(&[x]));
    verdict(Law::AddInverse, found)
}

/// `negate(negate(x)) == x`
pub fn negation_involution<A: Negatable>(algebra: &A, sample: &[A::Rep]) -> Outcome {
    let found = sample
        .iter()
        .find(|x| algebra.negate(&algebra.negate(x)) != **x)
        .map(|x| render(&[x]));
    verdict(Law::NegationInvolution, found)
}

/// `x * (y + z) == x * y + x * z`
pub fn left_distributivity<A>(algebra: &A, sample: &[A::Rep], parallel: bool) -> Outcome
where
    A: Multiplicative + Additive,
{
    let found = search(sample, parallel, |x| {
        sample.iter().find_map(|y| {
            let xy = algebra.mult(x, y);
            sample.iter().find_map(|z| {
                let left = algebra.mult(x, &algebra.add(y, z));
                let right = algebra.add(&xy, &algebra.mult(x, z));
                (left != right).then(|| render(&[x, y, z]))
            })
        })
    });
    verdict(Law::LeftDistributivity, found)
}

/// `(x + y) * z == x * z + y * z`
pub fn right_distributivity<A>(algebra: &A, sample: &[A::Rep], parallel: bool) -> Outcome
where
    A: Multiplicative + Additive,
{
    let found = search(sample, parallel, |x| {
        sample.iter().find_map(|y| {
            let xy = algebra.add(x, y);
            sample.iter().find_map(|z| {
                let left = algebra.mult(&xy, z);
                let right = algebra.add(&algebra.mult(x, z), &algebra.mult(y, z));
                (left != right).then(|| render(&[x, y, z]))
            })
        })
    });
    verdict(Law::RightDistributivity, found)
}

/// `one != zero`
pub fn nontrivial<A: Unital + AdditiveIdentity>(algebra: &A) -> Outcome {
    let (one, zero) = (algebra.one(), algebra.zero());
    verdict(Law::Nontrivial, (one == zero).then(|| render(&[one, zero])))
}

/// Every non-zero `x` has an inverse with `x * invert(x) == one`
pub fn nonzero_invertible<A>(algebra: &A, sample: &[A::Rep]) -> Outcome
where
    A: Invertible + AdditiveIdentity,
{
    let (one, zero) = (algebra.one(), algebra.zero());
    let found = sample
        .iter()
        .filter(|x| algebra.carrier().narrow((*x).clone()) != *zero)
        .find(|x| match algebra.invert(x) {
            Ok(inverse) => algebra.mult(x, &inverse) != *one,
            Err(_) => true,
        })
        .map(|x| render(&[x]));
    verdict(Law::NonzeroInvertible, found)
}
