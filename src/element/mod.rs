//! Elements of concrete algebras
//!
//! An [`Element`] wraps an interned representation together with a handle
//! to the algebra it belongs to. Operations on elements are forwarded to
//! the algebra and their results interned there, so within one algebra
//! equal elements are always the very same element (see [`Element::is`]).

mod ops;

use crate::protocols::{
    Additive, AdditiveIdentity, Algebra, Associative, Invertible, Multiplicative, Negatable,
    Unital,
};
use crate::{AlgebraError, Result};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An element of the concrete algebra `A`
pub struct Element<A: Algebra> {
    rep: Arc<A::Rep>,
    algebra: A,
}

impl<A: Algebra> Element<A> {
    pub(crate) fn from_parts(rep: Arc<A::Rep>, algebra: A) -> Self {
        Element { rep, algebra }
    }

    /// The narrowed representation wrapped by the element.
    ///
    /// This is a reference to the interned value, not a copy.
    pub fn rep(&self) -> &A::Rep {
        &self.rep
    }

    /// The algebra this element belongs to
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// Identity test: both handles wrap the same interned representation.
    ///
    /// Within one concrete algebra this holds exactly when the elements
    /// are equal.
    pub fn is(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rep, &other.rep)
    }

    /// Whether the element belongs to the given concrete algebra
    pub fn belongs_to(&self, algebra: &A) -> bool {
        self.algebra.same_algebra(algebra)
    }

    fn ensure_same_algebra(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.algebra.same_algebra(&other.algebra) {
            Ok(())
        } else {
            Err(AlgebraError::ForeignOperand { operation })
        }
    }

    fn lift(&self, rep: A::Rep) -> Self {
        self.algebra.element(rep)
    }
}

impl<A: Multiplicative> Element<A> {
    /// Multiply two elements of the same concrete algebra
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_algebra(other, "Multiplication")?;
        Ok(self.lift(self.algebra.mult(&self.rep, &other.rep)))
    }
}

impl<A: Associative> Element<A> {
    /// Raise the element to the `n`th power.
    ///
    /// The accepted range of `n` depends on the algebra: `n > 0` for
    /// semigroups, `n >= 0` for monoids and rings, any `n` for groups and
    /// fields.
    pub fn pow(&self, n: i64) -> Result<Self> {
        Ok(self.lift(self.algebra.power(&self.rep, n)?))
    }
}

impl<A: Invertible> Element<A> {
    /// The multiplicative inverse
    pub fn inverse(&self) -> Result<Self> {
        Ok(self.lift(self.algebra.invert(&self.rep)?))
    }

    /// Multiply by the inverse of `other`
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.ensure_same_algebra(other, "Division")?;
        let inverse = self.algebra.invert(&other.rep)?;
        Ok(self.lift(self.algebra.mult(&self.rep, &inverse)))
    }
}

impl<A: Unital> Element<A> {
    /// Whether this is the multiplicative identity
    pub fn is_one(&self) -> bool {
        *self.rep == *self.algebra.one()
    }
}

impl<A: Additive> Element<A> {
    /// Add two elements of the same concrete algebra
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_algebra(other, "Addition")?;
        Ok(self.lift(self.algebra.add(&self.rep, &other.rep)))
    }

    /// Add the element to itself `n` times.
    ///
    /// The accepted range of `n` depends on the algebra: `n > 0` for
    /// commutative semigroups, `n >= 0` for commutative monoids, any `n`
    /// once negation exists.
    pub fn times(&self, n: i64) -> Result<Self> {
        Ok(self.lift(self.algebra.times(&self.rep, n)?))
    }
}

impl<A: Negatable> Element<A> {
    /// The additive inverse
    pub fn negate(&self) -> Self {
        self.lift(self.algebra.negate(&self.rep))
    }

    /// Add the negation of `other`
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_algebra(other, "Subtraction")?;
        let negated = self.algebra.negate(&other.rep);
        Ok(self.lift(self.algebra.add(&self.rep, &negated)))
    }
}

impl<A: AdditiveIdentity> Element<A> {
    /// Whether this is the additive identity
    pub fn is_zero(&self) -> bool {
        *self.rep == *self.algebra.zero()
    }
}

impl<A: Algebra> Clone for Element<A> {
    fn clone(&self) -> Self {
        Element {
            rep: Arc::clone(&self.rep),
            algebra: self.algebra.clone(),
        }
    }
}

/// Elements compare by representation, even across concrete algebras of
/// the same type.
impl<A: Algebra> PartialEq for Element<A> {
    fn eq(&self, other: &Self) -> bool {
        self.is(other) || self.rep == other.rep
    }
}

impl<A: Algebra> Eq for Element<A> {}

impl<A: Algebra> Hash for Element<A> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.rep.hash(state);
    }
}

impl<A: Algebra> PartialOrd for Element<A>
where
    A::Rep: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.rep.as_ref().partial_cmp(other.rep.as_ref())
    }
}

impl<A: Algebra> Ord for Element<A>
where
    A::Rep: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.rep.as_ref().cmp(other.rep.as_ref())
    }
}

impl<A: Algebra> fmt::Debug for Element<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Element({:?})", A::KIND, self.rep)
    }
}

impl<A: Algebra> fmt::Display for Element<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Element[[{:?}]]", A::KIND, self.rep)
    }
}

/// Serializes the representation only
impl<A: Algebra> Serialize for Element<A>
where
    A::Rep: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rep.as_ref().serialize(serializer)
    }
}
