//! Commutative semigroup: a set with a commutative, associative addition

use super::Carrier;
use crate::protocols::{positive_multiple, Additive, Algebra, BinaryOp, Representation};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// A set **S** with a commutative, associative operation
/// `add: S × S -> S`, written additively.
///
/// Contract: `add` is closed, commutative and associative on
/// representations. Elements may be multiplied by integers `n > 0`.
pub struct CommutativeSemigroup<H> {
    inner: Arc<CommutativeSemigroupInner<H>>,
}

struct CommutativeSemigroupInner<H> {
    carrier: Carrier<H>,
    add: BinaryOp<H>,
}

impl<H: Representation> CommutativeSemigroup<H> {
    /// Create a commutative semigroup from its addition
    pub fn new<A>(add: A) -> Self
    where
        A: Fn(&H, &H) -> H + Send + Sync + 'static,
    {
        CommutativeSemigroup {
            inner: Arc::new(CommutativeSemigroupInner {
                carrier: Carrier::new(None),
                add: Arc::new(add),
            }),
        }
    }

    /// Same operations over a fresh element table that narrows every rep
    pub fn with_narrow<N>(self, narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        CommutativeSemigroup {
            inner: Arc::new(CommutativeSemigroupInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                add: Arc::clone(&self.inner.add),
            }),
        }
    }
}

impl<H> Clone for CommutativeSemigroup<H> {
    fn clone(&self) -> Self {
        CommutativeSemigroup {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for CommutativeSemigroup<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommutativeSemigroup")
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for CommutativeSemigroup<H> {
    type Rep = H;
    const KIND: &'static str = "CommutativeSemigroup";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Additive for CommutativeSemigroup<H> {
    fn add(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.add)(left, right))
    }

    fn times(&self, rep: &H, n: i64) -> Result<H> {
        positive_multiple(self, rep, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgebraError;
    use ndarray::{arr2, Array2};

    fn matrices() -> CommutativeSemigroup<Array2<i64>> {
        CommutativeSemigroup::new(|a: &Array2<i64>, b: &Array2<i64>| a + b)
    }

    #[test]
    fn test_matrix_sums_are_interned() {
        let m3x3 = matrices();
        let eye = m3x3.element(Array2::eye(3));
        let zero = m3x3.element(Array2::zeros((3, 3)));
        let a = m3x3.element(arr2(&[[5, -1, 0], [0, 2, 1], [1, 3, 1]]));
        let b = m3x3.element(arr2(&[[2, -1, 1], [1, 2, 0], [2, 3, -1]]));
        let c = m3x3.element(arr2(&[[1, 1, -4], [1, 1, 5], [42, 0, -2]]));
        let d = m3x3.element(arr2(&[[2, -1, 0], [-1, 0, 0], [0, 0, 0]]));
        let e = m3x3.element(arr2(&[[-1, 1, 0], [1, 1, 0], [0, 0, 1]]));
        let f = m3x3.element(arr2(&[[7, -2, 1], [1, 4, 1], [3, 6, 0]]));

        assert!((&eye + &zero).is(&eye));
        assert!((&zero + &a).is(&a));
        assert!((&d + &e).is(&eye));
        assert!((&e + &d).is(&(&d + &e)));
        assert!((&(&a + &b) + &c).is(&(&a + &(&b + &c))));
        assert!((&a + &b).is(&f));

        let see = m3x3.element(arr2(&[[1, 1, -4], [1, 1, 5], [42, 0, -2]]));
        assert!(see.is(&c));
    }

    #[test]
    fn test_positive_multiples() {
        let m3x3 = matrices();
        let d = m3x3.element(arr2(&[[2, -1, 0], [-1, 0, 0], [0, 0, 0]]));
        let e = m3x3.element(arr2(&[[-1, 1, 0], [1, 1, 0], [0, 0, 1]]));

        assert!((&(&d * 2) + &(2 * &e)).is(&(&(&e + &d) * 2)));
        assert!((3 * &d).is(&(&(&d + &d) + &d)));
    }

    #[test]
    fn test_zero_multiple_rejected() {
        let m3x3 = matrices();
        let d = m3x3.element(Array2::eye(2));
        let err = d.times(0).unwrap_err();
        assert!(matches!(
            err,
            AlgebraError::InvalidExponent {
                kind: "CommutativeSemigroup",
                minimum: 1,
                ..
            }
        ));
    }
}
