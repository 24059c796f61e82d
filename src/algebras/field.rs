//! Field: a commutative ring whose non-zero elements have multiplicative
//! inverses

use super::Carrier;
use crate::protocols::{
    integral_multiple, integral_power, Additive, AdditiveIdentity, Algebra, Associative,
    BinaryOp, Invertible, Multiplicative, Negatable, Representation, UnaryOp, Unital,
};
use crate::{AlgebraError, Result};
use std::fmt;
use std::sync::Arc;

/// A commutative ring in which every non-zero element is invertible.
///
/// By convention `one != zero`.
///
/// Contract:
///
/// - `add` closed, commutative and associative on representations
/// - `mult` closed, commutative and associative on representations
/// - `one` an identity for `mult`, `zero` an identity for `add`
/// - `negate` maps `rep -> -rep`, `add(rep, negate(rep)) == zero`
/// - `invert` maps every non-zero `rep` to its multiplicative inverse;
///   it is never called on `zero`
pub struct Field<H> {
    inner: Arc<FieldInner<H>>,
}

struct FieldInner<H> {
    carrier: Carrier<H>,
    add: BinaryOp<H>,
    mult: BinaryOp<H>,
    one: H,
    zero: H,
    negate: UnaryOp<H>,
    invert: UnaryOp<H>,
}

impl<H: Representation> Field<H> {
    /// Create a field from both operations, both identities, negation and
    /// inversion
    pub fn new<A, M, N, I>(add: A, mult: M, one: H, zero: H, negate: N, invert: I) -> Self
    where
        A: Fn(&H, &H) -> H + Send + Sync + 'static,
        M: Fn(&H, &H) -> H + Send + Sync + 'static,
        N: Fn(&H) -> H + Send + Sync + 'static,
        I: Fn(&H) -> H + Send + Sync + 'static,
    {
        Field {
            inner: Arc::new(FieldInner {
                carrier: Carrier::new(None),
                add: Arc::new(add),
                mult: Arc::new(mult),
                one,
                zero,
                negate: Arc::new(negate),
                invert: Arc::new(invert),
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
        Field {
            inner: Arc::new(FieldInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                add: Arc::clone(&inner.add),
                mult: Arc::clone(&inner.mult),
                one,
                zero,
                negate: Arc::clone(&inner.negate),
                invert: Arc::clone(&inner.invert),
            }),
        }
    }
}

impl<H> Clone for Field<H> {
    fn clone(&self) -> Self {
        Field {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for Field<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("one", &self.inner.one)
            .field("zero", &self.inner.zero)
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for Field<H> {
    type Rep = H;
    const KIND: &'static str = "Field";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Multiplicative for Field<H> {
    fn mult(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.mult)(left, right))
    }
}

impl<H: Representation> Associative for Field<H> {
    fn power(&self, rep: &H, n: i64) -> Result<H> {
        integral_power(self, rep, n)
    }
}

impl<H: Representation> Unital for Field<H> {
    fn one(&self) -> &H {
        &self.inner.one
    }
}

impl<H: Representation> Invertible for Field<H> {
    fn invert(&self, rep: &H) -> Result<H> {
        let rep = self.inner.carrier.narrow(rep.clone());
        if rep == self.inner.zero {
            return Err(AlgebraError::NotInvertible(format!("{:?}", rep)));
        }
        Ok(self.inner.carrier.narrow((self.inner.invert)(&rep)))
    }
}

impl<H: Representation> Additive for Field<H> {
    fn add(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.add)(left, right))
    }

    fn times(&self, rep: &H, n: i64) -> Result<H> {
        integral_multiple(self, rep, n)
    }
}

impl<H: Representation> AdditiveIdentity for Field<H> {
    fn zero(&self) -> &H {
        &self.inner.zero
    }
}

impl<H: Representation> Negatable for Field<H> {
    fn negate(&self, rep: &H) -> H {
        self.inner.carrier.narrow((self.inner.negate)(rep))
    }
}
