//! Algebraic law properties of the preset algebras
//!
//! Each property builds elements through the public API, so interning and
//! narrowing are exercised along with the operations themselves.

use boring_algebra::cayley;
use boring_algebra::prelude::*;
use num_complex::Complex;
use num_rational::Rational64;
use proptest::prelude::*;

const P: i64 = 101;

fn arb_rational() -> impl Strategy<Value = Rational64> {
    (-50i64..50, 1i64..20).prop_map(|(n, d)| Rational64::new(n, d))
}

fn arb_gaussian() -> impl Strategy<Value = Complex<i64>> {
    (-1000i64..1000, -1000i64..1000).prop_map(|(re, im)| Complex::new(re, im))
}

proptest! {
    /// Narrowing: any two integers congruent mod p give the very same element
    #[test]
    fn congruent_reps_are_identical(a in any::<i64>(), k in -1000i64..1000) {
        let field = presets::integers_mod_prime(P).unwrap();
        let shifted = a.rem_euclid(P) + k * P;
        prop_assert!(field.element(a).is(&field.element(shifted)));
    }

    /// Distributivity of the prime field, on elements
    #[test]
    fn prime_field_distributes(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let field = presets::integers_mod_prime(P).unwrap();
        let (x, y, z) = (field.element(a), field.element(b), field.element(c));
        prop_assert!((&x * &(&y + &z)).is(&(&(&x * &y) + &(&x * &z))));
    }

    /// Every non-zero residue has an inverse, and division undoes multiplication
    #[test]
    fn prime_field_inverses(a in 1i64..P, b in any::<i64>()) {
        let field = presets::integers_mod_prime(P).unwrap();
        let x = field.element(a);
        let y = field.element(b);
        prop_assert!((&x * &x.inverse().unwrap()).is(&field.one_element()));
        prop_assert!((&(&y * &x) / &x).is(&y));
    }

    /// Repeated squaring agrees with repeated multiplication, and negative
    /// powers are powers of the inverse
    #[test]
    fn prime_field_powers(a in 1i64..P, n in 0i64..64) {
        let field = presets::integers_mod_prime(P).unwrap();
        let x = field.element(a);
        let mut expected = field.one_element();
        for _ in 0..n {
            expected = &expected * &x;
        }
        prop_assert!(x.pow(n).unwrap().is(&expected));
        prop_assert!(x.pow(-n).unwrap().is(&expected.inverse().unwrap()));
    }

    /// Fermat's little theorem
    #[test]
    fn fermat(a in 1i64..P) {
        let field = presets::integers_mod_prime(P).unwrap();
        prop_assert!(field.element(a).pow(P - 1).unwrap().is(&field.one_element()));
    }

    /// The integer action is repeated addition, including negative multiples
    #[test]
    fn integer_multiples(a in -10_000i64..10_000, n in -100i64..100) {
        let z = presets::integers();
        let x = z.element(a);
        prop_assert_eq!(*(&x * n).rep(), a * n);
        prop_assert!((n * &x).is(&(&x * n)));
        prop_assert!((&x * -n).is(&(-&(&x * n))));
    }

    /// The rationals form a field on any sampled triple
    #[test]
    fn rational_field_laws(a in arb_rational(), b in arb_rational(), c in arb_rational()) {
        let q = presets::rationals();
        let report = LawChecker::new(q, vec![a, b, c]).field();
        prop_assert!(report.is_lawful(), "{}", report);
    }

    /// Gaussian integer norms are multiplicative
    #[test]
    fn gaussian_norm_multiplicative(a in arb_gaussian(), b in arb_gaussian()) {
        let zi = presets::gaussian_integers();
        let product = &zi.element(a) * &zi.element(b);
        prop_assert_eq!(product.rep().norm_sqr(), a.norm_sqr() * b.norm_sqr());
    }

    /// Concatenation is associative and the empty string is the identity
    #[test]
    fn string_monoid(a in "[a-c]{0,6}", b in "[a-c]{0,6}", c in "[a-c]{0,6}") {
        let words = presets::strings();
        let (x, y, z) = (words.element(a.clone()), words.element(b), words.element(c));
        prop_assert!((&(&x * &y) * &z).is(&(&x * &(&y * &z))));
        prop_assert!((&x * &words.one_element()).is(&x));
        prop_assert_eq!(x.pow(3).unwrap().rep().len(), 3 * a.len());
    }

    /// Lagrange: the order of every element of a cyclic group divides its order
    #[test]
    fn cyclic_orders_divide(n in 1u64..60, g in any::<u64>()) {
        let group = presets::cyclic_group(n).unwrap();
        let element = group.element(g);
        let k = cayley::order(&element, n).unwrap();
        prop_assert_eq!(n % k, 0);
        let closure = cayley::generate(&group, &[element], 64).unwrap();
        prop_assert_eq!(closure.len() as u64, k);
    }
}

#[test]
fn mixing_algebras_is_reported() {
    let left = presets::integers_mod_prime(7).unwrap();
    let right = presets::integers_mod_prime(7).unwrap();
    let err = left.element(3).try_add(&right.element(4)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Addition must be between elements of the same concrete algebra"
    );
    assert_eq!(left.element(3), right.element(3));
}

#[test]
fn seeded_random_law_checks_are_reproducible() {
    let pool: Vec<i64> = (0..1000).collect();
    let config = LawConfig::from_json_str(r#"{"sample_size": 16, "seed": 2024}"#).unwrap();

    let ring = presets::integers_mod(12).unwrap();
    let first = LawChecker::random(ring.clone(), &pool, config.clone()).unwrap();
    let second = LawChecker::random(ring, &pool, config).unwrap();
    assert_eq!(first.sample(), second.sample());
    assert!(first.ring().ensure().is_ok());
}
