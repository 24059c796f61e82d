//! Sampled checks of the contracts algebra constructors document
//!
//! The concrete algebras trust the operations they are given. A
//! [`LawChecker`] tests those operations against the laws of a structure
//! over a finite sample of representations. Passing shows only that no
//! counterexample was found in the sample.
//!
//! ```
//! use boring_algebra::prelude::*;
//!
//! let z5 = presets::integers_mod(5).unwrap();
//! let report = LawChecker::new(z5, 0..5).ring();
//! assert!(report.is_lawful());
//! ```

mod checks;
mod config;

pub use checks::{
    add_associativity, add_commutativity, add_identity, add_inverse, identity_self_inverse,
    inverse_involution, left_distributivity, left_identity, left_inverse, mult_associativity,
    mult_commutativity, negation_involution, nontrivial, nonzero_invertible, right_distributivity,
    right_identity, right_inverse, Outcome,
};
pub use config::LawConfig;

use crate::protocols::{
    Additive, AdditiveIdentity, Algebra, Associative, Invertible, Negatable, Unital,
};
use crate::utils::{self, timing::Timer};
use crate::{AlgebraError, Result};
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// A law an algebra's operations are expected to satisfy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Law {
    /// `(x * y) * z == x * (y * z)`
    MultAssociativity,
    /// `x * y == y * x`
    MultCommutativity,
    /// `one * x == x`
    LeftIdentity,
    /// `x * one == x`
    RightIdentity,
    /// `invert(x) * x == one`
    LeftInverse,
    /// `x * invert(x) == one`
    RightInverse,
    /// `invert(invert(x)) == x`
    InverseInvolution,
    /// `invert(one) == one`
    IdentitySelfInverse,
    /// `(x + y) + z == x + (y + z)`
    AddAssociativity,
    /// `x + y == y + x`
    AddCommutativity,
    /// `zero + x == x == x + zero`
    AddIdentity,
    /// `x + negate(x) == zero`
    AddInverse,
    /// `negate(negate(x)) == x`
    NegationInvolution,
    /// `x * (y + z) == x * y + x * z`
    LeftDistributivity,
    /// `(x + y) * z == x * z + y * z`
    RightDistributivity,
    /// `one != zero`
    Nontrivial,
    /// every non-zero `x` satisfies `x * invert(x) == one`
    NonzeroInvertible,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::MultAssociativity => "associativity of multiplication",
            Law::MultCommutativity => "commutativity of multiplication",
            Law::LeftIdentity => "left identity",
            Law::RightIdentity => "right identity",
            Law::LeftInverse => "left inverse",
            Law::RightInverse => "right inverse",
            Law::InverseInvolution => "inverse of the inverse",
            Law::IdentitySelfInverse => "inverse of one",
            Law::AddAssociativity => "associativity of addition",
            Law::AddCommutativity => "commutativity of addition",
            Law::AddIdentity => "additive identity",
            Law::AddInverse => "additive inverse",
            Law::NegationInvolution => "negation of the negation",
            Law::LeftDistributivity => "left distributivity",
            Law::RightDistributivity => "right distributivity",
            Law::Nontrivial => "one != zero",
            Law::NonzeroInvertible => "invertibility of non-zero elements",
        };
        f.write_str(name)
    }
}

/// A law that failed, with the representations that witness the failure
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{law} fails for [{}]", .witnesses.join(", "))]
pub struct LawViolation {
    /// The failing law
    pub law: Law,
    /// Debug renderings of the offending representations
    pub witnesses: Vec<String>,
}

/// Outcome of checking the laws of one structure
#[derive(Clone, Debug, Serialize)]
pub struct LawReport {
    /// Structure whose laws were checked
    pub kind: &'static str,
    /// Number of distinct representations in the sample
    pub sample_size: usize,
    /// Laws checked, in order
    pub checked: Vec<Law>,
    /// Laws that failed
    pub violations: Vec<LawViolation>,
}

impl LawReport {
    fn new(kind: &'static str, sample_size: usize) -> Self {
        LawReport {
            kind,
            sample_size,
            checked: Vec::new(),
            violations: Vec::new(),
        }
    }

    fn record(&mut self, law: Law, outcome: Outcome) {
        self.checked.push(law);
        if let Err(violation) = outcome {
            self.violations.push(violation);
        }
    }

    /// Whether every checked law held on the sample
    pub fn is_lawful(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether the given law failed
    pub fn violates(&self, law: Law) -> bool {
        self.violations.iter().any(|v| v.law == law)
    }

    /// Turn violations into an error
    pub fn ensure(&self) -> Result<()> {
        if self.is_lawful() {
            return Ok(());
        }
        let failures: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        Err(AlgebraError::ContractViolation(format!(
            "{} laws broken: {}",
            self.kind,
            failures.join("; ")
        )))
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} laws hold on {} samples",
            self.kind,
            self.checked.len() - self.violations.len(),
            self.checked.len(),
            self.sample_size
        )?;
        for violation in &self.violations {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

/// Checks the laws of a structure over a fixed sample of representations
pub struct LawChecker<A: Algebra> {
    algebra: A,
    sample: Vec<A::Rep>,
    config: LawConfig,
}

impl<A: Algebra> LawChecker<A> {
    /// Check over the given representations.
    ///
    /// They are narrowed and deduplicated; none is added to the algebra.
    pub fn new<I>(algebra: A, reps: I) -> Self
    where
        I: IntoIterator<Item = A::Rep>,
    {
        let sample: IndexSet<A::Rep> = reps.into_iter().map(|rep| algebra.narrow(rep)).collect();
        LawChecker {
            algebra,
            sample: sample.into_iter().collect(),
            config: LawConfig::default(),
        }
    }

    /// Check over `config.sample_size` representations drawn from `pool`
    pub fn random(algebra: A, pool: &[A::Rep], config: LawConfig) -> Result<Self> {
        config.validate()?;
        let drawn = utils::sample_reps(pool, config.sample_size, config.seed);
        Ok(Self::new(algebra, drawn).with_config(config))
    }

    /// Builder method: replace the configuration
    pub fn with_config(mut self, config: LawConfig) -> Self {
        self.config = config;
        self
    }

    /// The narrowed, deduplicated sample
    pub fn sample(&self) -> &[A::Rep] {
        &self.sample
    }

    /// The algebra under test
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    fn parallel(&self) -> bool {
        self.sample.len() > self.config.parallel_threshold
    }

    fn run<F>(&self, kind: &'static str, laws: F) -> LawReport
    where
        F: FnOnce(&mut LawReport),
    {
        let _timer = Timer::new(kind);
        let mut report = LawReport::new(kind, self.sample.len());
        laws(&mut report);

        for violation in &report.violations {
            tracing::warn!(kind, algebra = A::KIND, %violation, "law violated");
        }
        tracing::debug!(
            kind,
            algebra = A::KIND,
            sample = report.sample_size,
            parallel = self.parallel(),
            checked = report.checked.len(),
            violations = report.violations.len(),
            "law check finished"
        );
        report
    }
}

impl<A: Associative> LawChecker<A> {
    /// Associativity, plus commutativity if configured
    pub fn semigroup(&self) -> LawReport {
        self.run("Semigroup", |report| self.semigroup_laws(report))
    }

    fn semigroup_laws(&self, report: &mut LawReport) {
        let (algebra, sample, parallel) = (&self.algebra, &self.sample, self.parallel());
        report.record(
            Law::MultAssociativity,
            mult_associativity(algebra, sample, parallel),
        );
        if self.config.check_commutativity {
            report.record(
                Law::MultCommutativity,
                mult_commutativity(algebra, sample, parallel),
            );
        }
    }
}

impl<A: Unital> LawChecker<A> {
    /// Semigroup laws plus both identity laws
    pub fn monoid(&self) -> LawReport {
        self.run("Monoid", |report| self.monoid_laws(report))
    }

    fn monoid_laws(&self, report: &mut LawReport) {
        self.semigroup_laws(report);
        report.record(Law::LeftIdentity, left_identity(&self.algebra, &self.sample));
        report.record(Law::RightIdentity, right_identity(&self.algebra, &self.sample));
    }
}

impl<A: Invertible> LawChecker<A> {
    /// Monoid laws plus the inverse laws
    pub fn group(&self) -> LawReport {
        self.run("Group", |report| {
            self.monoid_laws(report);
            let (algebra, sample) = (&self.algebra, &self.sample);
            report.record(Law::LeftInverse, left_inverse(algebra, sample));
            report.record(Law::RightInverse, right_inverse(algebra, sample));
            report.record(Law::InverseInvolution, inverse_involution(algebra, sample));
            report.record(Law::IdentitySelfInverse, identity_self_inverse(algebra));
        })
    }
}

impl<A: Additive> LawChecker<A> {
    /// Associativity and commutativity of addition
    pub fn commutative_semigroup(&self) -> LawReport {
        self.run("CommutativeSemigroup", |report| {
            self.commutative_semigroup_laws(report)
        })
    }

    fn commutative_semigroup_laws(&self, report: &mut LawReport) {
        let (algebra, sample, parallel) = (&self.algebra, &self.sample, self.parallel());
        report.record(
            Law::AddAssociativity,
            add_associativity(algebra, sample, parallel),
        );
        report.record(
            Law::AddCommutativity,
            add_commutativity(algebra, sample, parallel),
        );
    }
}

impl<A: AdditiveIdentity> LawChecker<A> {
    /// Commutative semigroup laws plus the additive identity
    pub fn commutative_monoid(&self) -> LawReport {
        self.run("CommutativeMonoid", |report| {
            self.commutative_monoid_laws(report)
        })
    }

    fn commutative_monoid_laws(&self, report: &mut LawReport) {
        self.commutative_semigroup_laws(report);
        report.record(Law::AddIdentity, add_identity(&self.algebra, &self.sample));
    }
}

impl<A: Negatable> LawChecker<A> {
    /// Commutative monoid laws plus negation
    pub fn abelian_group(&self) -> LawReport {
        self.run("AbelianGroup", |report| self.abelian_group_laws(report))
    }

    fn abelian_group_laws(&self, report: &mut LawReport) {
        self.commutative_monoid_laws(report);
        report.record(Law::AddInverse, add_inverse(&self.algebra, &self.sample));
        report.record(
            Law::NegationInvolution,
            negation_involution(&self.algebra, &self.sample),
        );
    }
}

impl<A: Negatable + Unital> LawChecker<A> {
    /// Abelian group laws for addition, monoid laws for multiplication,
    /// distributivity and `one != zero`
    pub fn ring(&self) -> LawReport {
        self.run("Ring", |report| self.ring_laws(report))
    }

    fn ring_laws(&self, report: &mut LawReport) {
        self.abelian_group_laws(report);
        self.monoid_laws(report);
        let (algebra, sample, parallel) = (&self.algebra, &self.sample, self.parallel());
        report.record(
            Law::LeftDistributivity,
            left_distributivity(algebra, sample, parallel),
        );
        report.record(
            Law::RightDistributivity,
            right_distributivity(algebra, sample, parallel),
        );
        report.record(Law::Nontrivial, nontrivial(algebra));
    }
}

impl<A: Negatable + Invertible> LawChecker<A> {
    /// Ring laws, commutative multiplication and inverses of all non-zero
    /// elements
    pub fn field(&self) -> LawReport {
        self.run("Field", |report| {
            self.ring_laws(report);
            let (algebra, sample) = (&self.algebra, &self.sample);
            if !self.config.check_commutativity {
                report.record(
                    Law::MultCommutativity,
                    mult_commutativity(algebra, sample, self.parallel()),
                );
            }
            report.record(Law::NonzeroInvertible, nonzero_invertible(algebra, sample));
            report.record(Law::IdentitySelfInverse, identity_self_inverse(algebra));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebras::{CommutativeMonoid, Field, Group, Magma, Monoid, Ring, Semigroup};

    #[test]
    fn test_subtraction_semigroup_is_unlawful() {
        let minus = Semigroup::new(|a: &i64, b: &i64| a - b);
        let report = LawChecker::new(minus, -3..4).semigroup();
        assert!(!report.is_lawful());
        assert!(report.violates(Law::MultAssociativity));
        assert!(matches!(
            report.ensure(),
            Err(AlgebraError::ContractViolation(msg)) if msg.starts_with("Semigroup laws broken")
        ));
    }

    #[test]
    fn test_sample_is_narrowed_and_deduplicated() {
        let z3 = Group::new(|a: &i64, b: &i64| a + b, 0, |a: &i64| -a).with_narrow(|a| a.rem_euclid(3));
        let checker = LawChecker::new(z3.clone(), vec![0, 3, 1, 4, 2, -1]);
        assert_eq!(checker.sample(), &[0, 1, 2]);
        assert!(z3.is_empty());

        let report = checker.group();
        assert!(report.is_lawful(), "{report}");
        assert_eq!(report.checked.len(), 7);
    }

    #[test]
    fn test_commutativity_optional() {
        let concat = Monoid::new(|a: &String, b: &String| format!("{a}{b}"), String::new());
        let words: Vec<String> = ["", "a", "ab", "b"].iter().map(|s| s.to_string()).collect();

        let lenient = LawChecker::new(concat.clone(), words.clone());
        assert!(lenient.monoid().is_lawful());

        let strict = lenient.with_config(LawConfig {
            check_commutativity: true,
            ..LawConfig::default()
        });
        let report = strict.monoid();
        assert!(report.violates(Law::MultCommutativity));
        assert!(!report.violates(Law::MultAssociativity));
    }

    #[test]
    fn test_magma_commutativity_through_free_check() {
        let mean = Magma::new(|a: &i64, b: &i64| (a + b) / 2);
        assert!(mult_commutativity(&mean, &[1, 4, 9], false).is_ok());
        assert!(mult_associativity(&mean, &[1, 4, 9], false).is_err());
    }

    #[test]
    fn test_commutative_monoid_report() {
        let max = CommutativeMonoid::new(|a: &u32, b: &u32| *a.max(b), 0);
        let report = LawChecker::new(max, 0..20).commutative_monoid();
        assert!(report.is_lawful());
        assert!(report.ensure().is_ok());
        assert_eq!(
            report.checked,
            vec![Law::AddAssociativity, Law::AddCommutativity, Law::AddIdentity]
        );
    }

    #[test]
    fn test_ring_with_broken_distributivity() {
        // multiplication as max does not distribute over addition
        let bad = Ring::new(|a: &i64, b: &i64| a + b, |a: &i64, b: &i64| *a.max(b), i64::MIN, 0, |a: &i64| -a);
        let report = LawChecker::new(bad, -2..3).ring();
        assert!(report.violates(Law::LeftDistributivity));
        assert!(!report.violates(Law::AddInverse));
    }

    #[test]
    fn test_field_mod_5() {
        let f5 = Field::new(
            |a: &i64, b: &i64| a + b,
            |a: &i64, b: &i64| a * b,
            1,
            0,
            |a: &i64| -a,
            |a: &i64| a.pow(3),
        )
        .with_narrow(|a| a.rem_euclid(5));
        let report = LawChecker::new(f5, 0..5).field();
        assert!(report.is_lawful(), "{report}");
        assert!(report.checked.contains(&Law::NonzeroInvertible));
    }

    #[test]
    fn test_random_sample_is_reproducible() {
        let z = Group::new(|a: &i64, b: &i64| a + b, 0, |a: &i64| -a);
        let pool: Vec<i64> = (-500..500).collect();
        let config = LawConfig::default().with_seed(3).with_sample_size(12);

        let first = LawChecker::random(z.clone(), &pool, config.clone()).unwrap();
        let second = LawChecker::random(z, &pool, config).unwrap();
        assert_eq!(first.sample(), second.sample());
        assert_eq!(first.sample().len(), 12);
        assert!(first.group().is_lawful());
    }

    #[test]
    fn test_random_rejects_zero_sample() {
        let z = Group::new(|a: &i64, b: &i64| a + b, 0, |a: &i64| -a);
        let config = LawConfig::default().with_sample_size(0);
        assert!(LawChecker::random(z, &[1, 2, 3], config).is_err());
    }

    #[test]
    fn test_report_display() {
        let minus = Semigroup::new(|a: &i64, b: &i64| a - b);
        let report = LawChecker::new(minus, vec![0, 1]).semigroup();
        let text = report.to_string();
        assert!(text.starts_with("Semigroup: 0 of 1 laws hold on 2 samples"));
        assert!(text.contains("associativity of multiplication fails for"));
    }
}
