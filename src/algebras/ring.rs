//! Ring: an abelian group under addition and a monoid under multiplication

use super::Carrier;
use crate::protocols::{
    integral_multiple, non_negative_power, Additive, AdditiveIdentity, Algebra, Associative,
    BinaryOp, Multiplicative, Negatable, Representation, UnaryOp, Unital,
};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// An abelian group under `add` which is also a monoid under `mult`,
/// with multiplication distributing over addition.
///
/// By convention `one != zero`, otherwise the ring has a single element.
///
/// Contract:
///
/// - `add` closed, commutative and associative on representations
/// - `mult` closed and associative on representations
/// - `one` an identity for `mult`, `zero` an identity for `add`
/// - `negate` maps `rep -> -rep`, `add(rep, negate(rep)) == zero`
/// - `mult` distributes over `add` on both sides
pub struct Ring<H> {
    inner: Arc<RingInner<H>>,
}

struct RingInner<H> {
    carrier: Carrier<H>,
    add: BinaryOp<H>,
    mult: BinaryOp<H>,
    one: H,
    zero: H,
    negate: UnaryOp<H>,
}

impl<H: Representation> Ring<H> {
    /// Create a ring from both operations, both identities and negation
    pub fn new<A, M, N>(add: A, mult: M, one: H, zero: H, negate: N) -> Self
    where
        A: Fn(&H, &H) -> H + Send + Sync + 'static,
        M: Fn(&H, &H) -> H + Send + Sync + 'static,
        N: Fn(&H) -> H + Send + Sync + 'static,
    {
        Ring {
            inner: Arc::new(RingInner {
                carrier: Carrier::new(None),
                add: Arc::new(add),
                mult: Arc::new(mult),
                one,
                zero,
                negate: Arc::new(negate),
            }),
        }
    }

    /// Same operations over a fresh element table that narrows every rep
    pub fn with_narrow<N>(self, narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        let inner = &self.inner;
        let one = narrow(inner.one.clone());
        let zero = narrow(inner.zero.clone());
        Ring {
            inner: Arc::new(RingInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                add: Arc::clone(&inner.add),
                mult: Arc::clone(&inner.mult),
                one,
                zero,
                negate: Arc::clone(&inner.negate),
            }),
        }
    }
}

impl<H> Clone for Ring<H> {
    fn clone(&self) -> Self {
        Ring {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for Ring<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("one", &self.inner.one)
            .field("zero", &self.inner.zero)
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for Ring<H> {
    type Rep = H;
    const KIND: &'static str = "Ring";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Multiplicative for Ring<H> {
    fn mult(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.mult)(left, right))
    }
}

impl<H: Representation> Associative for Ring<H> {
    fn power(&self, rep: &H, n: i64) -> Result<H> {
        non_negative_power(self, rep, n)
    }
}

impl<H: Representation> Unital for Ring<H> {
    fn one(&self) -> &H {
        &self.inner.one
    }
}

impl<H: Representation> Additive for Ring<H> {
    fn add(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.add)(left, right))
    }

    fn times(&self, rep: &H, n: i64) -> Result<H> {
        integral_multiple(self, rep, n)
    }
}

impl<H: Representation> AdditiveIdentity for Ring<H> {
    fn zero(&self) -> &H {
        &self.inner.zero
    }
}

impl<H: Representation> Negatable for Ring<H> {
    fn negate(&self, rep: &H) -> H {
        self.inner.carrier.narrow((self.inner.negate)(rep))
    }
}
