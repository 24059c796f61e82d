//! Monoid: a semigroup with an identity element

use super::Carrier;
use crate::protocols::{
    non_negative_power, Algebra, Associative, BinaryOp, Multiplicative, Representation, Unital,
};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// A semigroup **M** with an identity `u`, `(∀m ∈ M)(u*m = m*u = m)`.
///
/// When such an identity exists it is unique.
///
/// Contract: `mult` is closed and associative, `one` is an identity:
/// `mult(rep, one) == rep == mult(one, rep)`.
pub struct Monoid<H> {
    inner: Arc<MonoidInner<H>>,
}

struct MonoidInner<H> {
    carrier: Carrier<H>,
    mult: BinaryOp<H>,
    one: H,
}

impl<H: Representation> Monoid<H> {
    /// Create a monoid from an associative multiplication and its identity
    pub fn new<M>(mult: M, one: H) -> Self
    where
        M: Fn(&H, &H) -> H + Send + Sync + 'static,
    {
        Monoid {
            inner: Arc::new(MonoidInner {
                carrier: Carrier::new(None),
                mult: Arc::new(mult),
                one,
            }),
        }
    }

    /// Same operations over a fresh element table that narrows every rep
    pub fn with_narrow<N>(self, narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        let one = narrow(self.inner.one.clone());
        Monoid {
            inner: Arc::new(MonoidInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                mult: Arc::clone(&self.inner.mult),
                one,
            }),
        }
    }
}

impl<H> Clone for Monoid<H> {
    fn clone(&self) -> Self {
        Monoid {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for Monoid<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monoid")
            .field("one", &self.inner.one)
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for Monoid<H> {
    type Rep = H;
    const KIND: &'static str = "Monoid";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Multiplicative for Monoid<H> {
    fn mult(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.mult)(left, right))
    }
}

impl<H: Representation> Associative for Monoid<H> {
    fn power(&self, rep: &H, n: i64) -> Result<H> {
        non_negative_power(self, rep, n)
    }
}

impl<H: Representation> Unital for Monoid<H> {
    fn one(&self) -> &H {
        &self.inner.one
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgebraError;

    fn words() -> Monoid<String> {
        Monoid::new(|a: &String, b: &String| format!("{}{}", a, b), String::new())
    }

    #[test]
    fn test_identity_element() {
        let w = words();
        let one = w.one_element();
        let abc = w.element("abc".to_string());
        assert!((&one * &abc).is(&abc));
        assert!((&abc * &one).is(&abc));
    }

    #[test]
    fn test_zeroth_power_is_identity() {
        let w = words();
        let abc = w.element("abc".to_string());
        assert!(abc.pow(0).unwrap().is(&w.one_element()));
        assert_eq!(abc.pow(2).unwrap().rep(), "abcabc");
    }

    #[test]
    fn test_negative_power_rejected() {
        let w = words();
        let err = w.element("x".to_string()).pow(-1).unwrap_err();
        assert!(matches!(
            err,
            AlgebraError::InvalidExponent {
                kind: "Monoid",
                minimum: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_identity_is_narrowed() {
        let mod6 = Monoid::new(|a: &i32, b: &i32| a * b, 7).with_narrow(|m| m.rem_euclid(6));
        assert_eq!(*mod6.one(), 1);
        let five = mod6.element(-1);
        assert!(five.pow(2).unwrap().is(&mod6.element(1)));
    }
}
