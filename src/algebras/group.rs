//! Group: a monoid all of whose elements have inverses
//!
//! No assumption is made about commutativity. For commutative groups
//! written additively see [`AbelianGroup`](super::AbelianGroup).

use super::Carrier;
use crate::protocols::{
    integral_power, Algebra, Associative, BinaryOp, Invertible, Multiplicative, Representation,
    UnaryOp, Unital,
};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// A monoid **G** in which every element has a multiplicative inverse.
///
/// Contract:
///
/// - `mult` closed and associative on representations
/// - `one` an identity, `mult(rep, one) == rep == mult(one, rep)`
/// - `invert` an involution, `invert(invert(rep)) == rep`, with
///   `mult(rep, invert(rep)) == one`
pub struct Group<H> {
    inner: Arc<GroupInner<H>>,
}

struct GroupInner<H> {
    carrier: Carrier<H>,
    mult: BinaryOp<H>,
    one: H,
    invert: UnaryOp<H>,
}

impl<H: Representation> Group<H> {
    /// Create a group from its multiplication, identity and inversion
    pub fn new<M, I>(mult: M, one: H, invert: I) -> Self
    where
        M: Fn(&H, &H) -> H + Send + Sync + 'static,
        I: Fn(&H) -> H + Send + Sync + 'static,
    {
        Group {
            inner: Arc::new(GroupInner {
                carrier: Carrier::new(None),
                mult: Arc::new(mult),
                one,
                invert: Arc::new(invert),
            }),
        }
    }

    /// Same operations over a fresh element table that narrows every rep
    pub fn with_narrow<N>(self, narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        let one = narrow(self.inner.one.clone());
        Group {
            inner: Arc::new(GroupInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                mult: Arc::clone(&self.inner.mult),
                one,
                invert: Arc::clone(&self.inner.invert),
            }),
        }
    }
}

impl<H> Clone for Group<H> {
    fn clone(&self) -> Self {
        Group {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for Group<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("one", &self.inner.one)
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for Group<H> {
    type Rep = H;
    const KIND: &'static str = "Group";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Multiplicative for Group<H> {
    fn mult(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.mult)(left, right))
    }
}

impl<H: Representation> Associative for Group<H> {
    fn power(&self, rep: &H, n: i64) -> Result<H> {
        integral_power(self, rep, n)
    }
}

impl<H: Representation> Unital for Group<H> {
    fn one(&self) -> &H {
        &self.inner.one
    }
}

impl<H: Representation> Invertible for Group<H> {
    fn invert(&self, rep: &H) -> Result<H> {
        Ok(self.inner.carrier.narrow((self.inner.invert)(rep)))
    }
}
