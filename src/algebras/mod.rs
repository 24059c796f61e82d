//! Concrete algebras
//!
//! Every algebra is a cheap, cloneable handle around a shared element
//! table ([`Carrier`]) and the user-supplied operations on
//! representations. Results of the operations are narrowed, then interned
//! through the table, so each representation belongs to exactly one
//! element of each concrete algebra.
//!
//! | algebra | operations | identities |
//! |---|---|---|
//! | [`BaseSet`] | none | none |
//! | [`Magma`] | `*` | none |
//! | [`Semigroup`] | `*`, `pow(n > 0)` | none |
//! | [`Monoid`] | `*`, `pow(n >= 0)` | one |
//! | [`Group`] | `*`, `/`, `pow(n)` | one |
//! | [`CommutativeSemigroup`] | `+`, `n > 0` times | none |
//! | [`CommutativeMonoid`] | `+`, `n >= 0` times | zero |
//! | [`AbelianGroup`] | `+`, `-`, `n` times | zero |
//! | [`Ring`] | `+`, `-`, `*`, `pow(n >= 0)` | one, zero |
//! | [`Field`] | `+`, `-`, `*`, `/`, `pow(n)` | one, zero |

mod abelian_group;
mod carrier;
mod commutative_monoid;
mod commutative_semigroup;
mod field;
mod group;
mod magma;
mod monoid;
mod ring;
mod semigroup;

pub use abelian_group::AbelianGroup;
pub use carrier::{BaseSet, Carrier};
pub use commutative_monoid::CommutativeMonoid;
pub use commutative_semigroup::CommutativeSemigroup;
pub use field::Field;
pub use group::Group;
pub use magma::Magma;
pub use monoid::Monoid;
pub use ring::Ring;
pub use semigroup::Semigroup;
