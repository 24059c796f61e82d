//! Semigroup: a set with an associative multiplication

use super::Carrier;
use crate::protocols::{
    positive_power, Algebra, Associative, BinaryOp, Multiplicative, Representation,
};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// A set **S** with an associative multiplication `mult: S × S -> S`.
///
/// Contract: `mult` is closed and associative on representations.
/// Elements may be raised to powers `n > 0`.
pub struct Semigroup<H> {
    inner: Arc<SemigroupInner<H>>,
}

struct SemigroupInner<H> {
    carrier: Carrier<H>,
    mult: BinaryOp<H>,
}

impl<H: Representation> Semigroup<H> {
    /// Create a semigroup from an associative multiplication
    pub fn new<M>(mult: M) -> Self
    where
        M: Fn(&H, &H) -> H + Send + Sync + 'static,
    {
        Semigroup {
            inner: Arc::new(SemigroupInner {
                carrier: Carrier::new(None),
                mult: Arc::new(mult),
            }),
        }
    }

    /// Same operations over a fresh element table that narrows every rep.
    ///
    /// Narrowing is a many-to-one map, like choosing a representative
    /// from each coset of a subgroup.
    pub fn with_narrow<N>(self, narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        Semigroup {
            inner: Arc::new(SemigroupInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                mult: Arc::clone(&self.inner.mult),
            }),
        }
    }
}

impl<H> Clone for Semigroup<H> {
    fn clone(&self) -> Self {
        Semigroup {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for Semigroup<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Semigroup")
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for Semigroup<H> {
    type Rep = H;
    const KIND: &'static str = "Semigroup";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Multiplicative for Semigroup<H> {
    fn mult(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.mult)(left, right))
    }
}

impl<H: Representation> Associative for Semigroup<H> {
    fn power(&self, rep: &H, n: i64) -> Result<H> {
        positive_power(self, rep, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgebraError;
    use ndarray::{arr2, Array2};

    fn matrices() -> Semigroup<Array2<i64>> {
        Semigroup::new(|a: &Array2<i64>, b: &Array2<i64>| a.dot(b))
    }

    #[test]
    fn test_matrix_multiplication_is_interned() {
        let m3x3 = matrices();
        let eye = m3x3.element(Array2::eye(3));
        let a = m3x3.element(arr2(&[[5, -1, 0], [0, 2, 1], [1, 3, 1]]));
        let b = m3x3.element(arr2(&[[2, -1, 1], [1, 2, 0], [2, 3, -1]]));
        let c = m3x3.element(arr2(&[[1, 1, -4], [1, 1, 5], [42, 0, -2]]));

        assert!((&eye * &a).is(&a));
        assert!((&b * &eye).is(&b));
        assert!((&(&a * &b) * &c).is(&(&a * &(&b * &c))));
        assert_ne!(&a * &b, &b * &a);
    }

    #[test]
    fn test_positive_powers() {
        let words = Semigroup::new(|a: &String, b: &String| format!("{}{}", a, b));
        let ab = words.element("ab".to_string());
        assert_eq!(ab.pow(1).unwrap(), ab);
        assert_eq!(ab.pow(3).unwrap().rep(), "ababab");
    }

    #[test]
    fn test_non_positive_power_rejected() {
        let words = Semigroup::new(|a: &String, b: &String| format!("{}{}", a, b));
        let ab = words.element("ab".to_string());
        let err = ab.pow(0).unwrap_err();
        assert!(matches!(
            err,
            AlgebraError::InvalidExponent {
                kind: "Semigroup",
                exponent: 0,
                minimum: 1
            }
        ));
        assert_eq!(err.to_string(), "for a Semigroup n>=1, but n=0 was given");
        assert!(ab.pow(-2).is_err());
    }

    #[test]
    fn test_narrowed_semigroup() {
        let mod10 = Semigroup::new(|a: &u32, b: &u32| a * b).with_narrow(|m| m % 10);
        let three = mod10.element(13);
        assert_eq!(*three.rep(), 3);
        assert!(three.pow(4).unwrap().is(&mod10.element(1)));
    }
}
