//! Abelian group: a commutative monoid all of whose elements have
//! additive inverses
//!
//! Addition is used for the group operation.

use super::Carrier;
use crate::protocols::{
    integral_multiple, Additive, AdditiveIdentity, Algebra, BinaryOp, Negatable, Representation,
    UnaryOp,
};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// A commutative monoid **G**, written additively, in which every element
/// has a negation.
///
/// Contract:
///
/// - `add` closed, commutative and associative on representations
/// - `zero` an identity, `add(rep, zero) == rep == add(zero, rep)`
/// - `negate` an involution with `add(rep, negate(rep)) == zero`
pub struct AbelianGroup<H> {
    inner: Arc<AbelianGroupInner<H>>,
}

struct AbelianGroupInner<H> {
    carrier: Carrier<H>,
    add: BinaryOp<H>,
    zero: H,
    negate: UnaryOp<H>,
}

impl<H: Representation> AbelianGroup<H> {
    /// Create an abelian group from its addition, identity and negation
    pub fn new<A, N>(add: A, zero: H, negate: N) -> Self
    where
        A: Fn(&H, &H) -> H + Send + Sync + 'static,
        N: Fn(&H) -> H + Send + Sync + 'static,
    {
        AbelianGroup {
            inner: Arc::new(AbelianGroupInner {
                carrier: Carrier::new(None),
                add: Arc::new(add),
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
        let zero = narrow(self.inner.zero.clone());
        AbelianGroup {
            inner: Arc::new(AbelianGroupInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                add: Arc::clone(&self.inner.add),
                zero,
                negate: Arc::clone(&self.inner.negate),
            }),
        }
    }
}

impl<H> Clone for AbelianGroup<H> {
    fn clone(&self) -> Self {
        AbelianGroup {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for AbelianGroup<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbelianGroup")
            .field("zero", &self.inner.zero)
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for AbelianGroup<H> {
    type Rep = H;
    const KIND: &'static str = "AbelianGroup";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Additive for AbelianGroup<H> {
    fn add(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.add)(left, right))
    }

    fn times(&self, rep: &H, n: i64) -> Result<H> {
        integral_multiple(self, rep, n)
    }
}

impl<H: Representation> AdditiveIdentity for AbelianGroup<H> {
    fn zero(&self) -> &H {
        &self.inner.zero
    }
}

impl<H: Representation> Negatable for AbelianGroup<H> {
    fn negate(&self, rep: &H) -> H {
        self.inner.carrier.narrow((self.inner.negate)(rep))
    }
}
