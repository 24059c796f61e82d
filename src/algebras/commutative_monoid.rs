//! Commutative monoid: a commutative semigroup with an additive identity

use super::Carrier;
use crate::protocols::{
    non_negative_multiple, Additive, AdditiveIdentity, Algebra, BinaryOp, Representation,
};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// A commutative semigroup **M**, written additively, with an identity
/// `u`, `(∀m ∈ M)(u+m = m+u = m)`.
///
/// Contract: `add` is closed, commutative and associative, `zero` is an
/// identity: `add(rep, zero) == rep == add(zero, rep)`.
pub struct CommutativeMonoid<H> {
    inner: Arc<CommutativeMonoidInner<H>>,
}

struct CommutativeMonoidInner<H> {
    carrier: Carrier<H>,
    add: BinaryOp<H>,
    zero: H,
}

impl<H: Representation> CommutativeMonoid<H> {
    /// Create a commutative monoid from its addition and identity
    pub fn new<A>(add: A, zero: H) -> Self
    where
        A: Fn(&H, &H) -> H + Send + Sync + 'static,
    {
        CommutativeMonoid {
            inner: Arc::new(CommutativeMonoidInner {
                carrier: Carrier::new(None),
                add: Arc::new(add),
                zero,
            }),
        }
    }

    /// Same operations over a fresh element table that narrows every rep
    pub fn with_narrow<N>(self, narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        let zero = narrow(self.inner.zero.clone());
        CommutativeMonoid {
            inner: Arc::new(CommutativeMonoidInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                add: Arc::clone(&self.inner.add),
                zero,
            }),
        }
    }
}

impl<H> Clone for CommutativeMonoid<H> {
    fn clone(&self) -> Self {
        CommutativeMonoid {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for CommutativeMonoid<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommutativeMonoid")
            .field("zero", &self.inner.zero)
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for CommutativeMonoid<H> {
    type Rep = H;
    const KIND: &'static str = "CommutativeMonoid";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Additive for CommutativeMonoid<H> {
    fn add(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.add)(left, right))
    }

    fn times(&self, rep: &H, n: i64) -> Result<H> {
        non_negative_multiple(self, rep, n)
    }
}

impl<H: Representation> AdditiveIdentity for CommutativeMonoid<H> {
    fn zero(&self) -> &H {
        &self.inner.zero
    }
}
