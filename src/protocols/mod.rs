//! Capability traits implemented by the concrete algebras
//!
//! An algebra advertises what it can do through these traits, and
//! [`Element`] only gets an operator when its algebra implements the
//! matching capability. Adding two magma elements, or multiplying a
//! semigroup element by an integer, does not compile.
//!
//! | trait | provides | contract |
//! |---|---|---|
//! | [`Multiplicative`] | `mult` | closed |
//! | [`Associative`] | `power` | `mult` associative |
//! | [`Unital`] | `one` | `one` a two-sided identity |
//! | [`Invertible`] | `invert` | `x * invert(x) == one`, may be partial |
//! | [`Additive`] | `add`, `times` | closed, commutative, associative |
//! | [`AdditiveIdentity`] | `zero` | `zero` an identity for `add` |
//! | [`Negatable`] | `negate` | `x + negate(x) == zero` |

mod power;

pub use power::{
    integral_multiple, integral_power, non_negative_multiple, non_negative_power,
    positive_multiple, positive_power,
};

use crate::{algebras::Carrier, element::Element, Result};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Types usable as representations of algebra elements
pub trait Representation: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Representation for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// A closed binary operation on representations
pub type BinaryOp<H> = Arc<dyn Fn(&H, &H) -> H + Send + Sync>;

/// A unary operation on representations
pub type UnaryOp<H> = Arc<dyn Fn(&H) -> H + Send + Sync>;

/// A many-to-one map choosing the canonical representative of a rep
pub type Narrow<H> = Arc<dyn Fn(H) -> H + Send + Sync>;

/// A concrete algebra: a set of elements backed by a shared element table
///
/// Handles are cheap to clone; clones refer to the same concrete algebra.
pub trait Algebra: Clone + Send + Sync + Sized {
    /// Representation wrapped by each element
    type Rep: Representation;

    /// Name of the structure, used when rendering elements
    const KIND: &'static str;

    /// The table of elements this algebra has encountered
    fn carrier(&self) -> &Carrier<Self::Rep>;

    /// Return the unique element with the given representation,
    /// adding it to the algebra if not already present.
    fn element(&self, rep: Self::Rep) -> Element<Self> {
        let rep = self.carrier().intern(rep);
        Element::from_parts(rep, self.clone())
    }

    /// Whether an element with this representation was already added
    fn has(&self, rep: &Self::Rep) -> bool {
        self.carrier().contains(rep)
    }

    /// Map a representation to its canonical representative
    fn narrow(&self, rep: Self::Rep) -> Self::Rep {
        self.carrier().narrow(rep)
    }

    /// Number of elements encountered so far
    fn len(&self) -> usize {
        self.carrier().len()
    }

    /// Whether no element was encountered yet
    fn is_empty(&self) -> bool {
        self.carrier().is_empty()
    }

    /// Representations in order of first encounter
    fn representations(&self) -> Vec<Self::Rep> {
        self.carrier()
            .snapshot()
            .into_iter()
            .map(|rep| (*rep).clone())
            .collect()
    }

    /// Elements in order of first encounter
    fn elements(&self) -> Vec<Element<Self>> {
        self.carrier()
            .snapshot()
            .into_iter()
            .map(|rep| Element::from_parts(rep, self.clone()))
            .collect()
    }

    /// Whether both handles refer to the same concrete algebra
    fn same_algebra(&self, other: &Self) -> bool {
        std::ptr::eq(self.carrier(), other.carrier())
    }
}

/// A closed binary multiplication (magma)
pub trait Multiplicative: Algebra {
    /// Multiply two representations
    fn mult(&self, left: &Self::Rep, right: &Self::Rep) -> Self::Rep;
}

/// An associative multiplication (semigroup)
pub trait Associative: Multiplicative {
    /// Raise a representation to the `n`th power.
    ///
    /// Which exponents are accepted depends on the structure: semigroups
    /// need `n > 0`, monoids `n >= 0`, groups accept any `n`.
    fn power(&self, rep: &Self::Rep, n: i64) -> Result<Self::Rep>;
}

/// A multiplicative identity (monoid)
pub trait Unital: Associative {
    /// Representation of the multiplicative identity
    fn one(&self) -> &Self::Rep;

    /// The multiplicative identity as an element
    fn one_element(&self) -> Element<Self> {
        self.element(self.one().clone())
    }
}

/// Multiplicative inverses (group, or the non-zero part of a field)
pub trait Invertible: Unital {
    /// Representation of the multiplicative inverse
    fn invert(&self, rep: &Self::Rep) -> Result<Self::Rep>;
}

/// A commutative, associative addition
pub trait Additive: Algebra {
    /// Add two representations
    fn add(&self, left: &Self::Rep, right: &Self::Rep) -> Self::Rep;

    /// Add a representation to itself `n` times.
    ///
    /// Commutative semigroups need `n > 0`, commutative monoids `n >= 0`,
    /// abelian groups accept any `n`.
    fn times(&self, rep: &Self::Rep, n: i64) -> Result<Self::Rep>;
}

/// An additive identity (commutative monoid)
pub trait AdditiveIdentity: Additive {
    /// Representation of the additive identity
    fn zero(&self) -> &Self::Rep;

    /// The additive identity as an element
    fn zero_element(&self) -> Element<Self> {
        self.element(self.zero().clone())
    }
}

/// Additive inverses (abelian group)
pub trait Negatable: AdditiveIdentity {
    /// Representation of the additive inverse
    fn negate(&self, rep: &Self::Rep) -> Self::Rep;
}
