//! # Boring Algebra: concrete representations of abstract algebras
//!
//! An *algebra* here is a set together with closed operations and
//! designated elements. This library builds concrete representations of
//! such systems, from magmas up to fields.
//!
//! - Each element wraps a hashable *representation* (`rep`).
//! - Each element knows the concrete algebra to which it belongs.
//! - Operations act on elements, not on their representations.
//! - Algebras know how to manipulate the representations of their elements.
//!
//! An algebra keeps a table of the elements it has seen. The table grows
//! deterministically as new representations are encountered, so infinite
//! or continuous domains work as well as finite ones.
//!
//! ## Features
//!
//! - **Algebras**: magma, semigroup, monoid, group, commutative
//!   semigroup/monoid, abelian group, ring, field
//! - **Protocols**: capability traits deciding which operators elements get
//! - **Laws**: sampled contract checks (associativity, identities, inverses,
//!   distributivity)
//! - **Cayley**: closures, Cayley graphs and tables for finite exploration
//! - **Presets**: integers mod n, rationals, Gaussian integers, matrices
//!
//! ```
//! use boring_algebra::prelude::*;
//!
//! let f7 = presets::integers_mod_prime(7).unwrap();
//! let three = f7.element(3);
//! let four = f7.element(4);
//! assert!((&three * &four).is(&f7.element(5)));
//! assert!(f7.element(-1).is(&f7.element(6)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Concrete algebras and their shared element tables
pub mod algebras;

/// Elements and the operators they support
pub mod element;

/// Capability traits implemented by the algebras
pub mod protocols;

/// Sampled checks of algebraic laws
pub mod laws;

/// Closures, Cayley graphs and multiplication tables
pub mod cayley;

/// Ready-made algebras over common representation types
pub mod presets;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use algebras::{
    AbelianGroup, BaseSet, CommutativeMonoid, CommutativeSemigroup, Field, Group, Magma, Monoid,
    Ring, Semigroup,
};
pub use element::Element;
pub use laws::{LawChecker, LawConfig, LawReport};
pub use protocols::{
    Additive, AdditiveIdentity, Algebra, Associative, Invertible, Multiplicative, Negatable,
    Representation, Unital,
};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum AlgebraError {
    /// Operands belong to different concrete algebras
    #[error("{operation} must be between elements of the same concrete algebra")]
    ForeignOperand {
        /// Name of the attempted operation
        operation: &'static str,
    },

    /// Exponent or multiplier outside the range the structure supports
    #[error("for a {kind} n>={minimum}, but n={exponent} was given")]
    InvalidExponent {
        /// Kind of algebra the operation was attempted in
        kind: &'static str,
        /// The exponent that was given
        exponent: i64,
        /// Smallest exponent the structure supports
        minimum: i64,
    },

    /// Element has no multiplicative inverse
    #[error("{0} is not invertible")]
    NotInvertible(String),

    /// A user-supplied operation broke the algebra's contract
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Closure exploration exceeded its element limit
    #[error("Closure exceeded the limit of {0} elements")]
    ClosureLimitExceeded(usize),

    /// Modulus unusable for the requested preset
    #[error("Invalid modulus {0}")]
    InvalidModulus(i64),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        algebras::{
            AbelianGroup, BaseSet, CommutativeMonoid, CommutativeSemigroup, Field, Group, Magma,
            Monoid, Ring, Semigroup,
        },
        element::Element,
        laws::{LawChecker, LawConfig, LawReport},
        presets,
        protocols::{
            Additive, AdditiveIdentity, Algebra, Associative, Invertible, Multiplicative,
            Negatable, Representation, Unital,
        },
        AlgebraError, Result,
    };
}
