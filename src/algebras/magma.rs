//! Magma: a set with a closed binary multiplication
//!
//! No assumption is made about associativity or commutativity, so magma
//! elements can be multiplied but not raised to powers.

use super::Carrier;
use crate::protocols::{Algebra, BinaryOp, Multiplicative, Representation};
use std::fmt;
use std::sync::Arc;

/// A set **M** with a multiplication `mult: M × M -> M`.
///
/// Contract: `mult` is closed on representations.
pub struct Magma<H> {
    inner: Arc<MagmaInner<H>>,
}

struct MagmaInner<H> {
    carrier: Carrier<H>,
    mult: BinaryOp<H>,
}

impl<H: Representation> Magma<H> {
    /// Create a magma from a multiplication on representations
    pub fn new<M>(mult: M) -> Self
    where
        M: Fn(&H, &H) -> H + Send + Sync + 'static,
    {
        Magma {
            inner: Arc::new(MagmaInner {
                carrier: Carrier::new(None),
                mult: Arc::new(mult),
            }),
        }
    }

    /// Same operations over a fresh element table that narrows every rep
    pub fn with_narrow<N>(self, narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        Magma {
            inner: Arc::new(MagmaInner {
                carrier: Carrier::new(Some(Arc::new(narrow))),
                mult: Arc::clone(&self.inner.mult),
            }),
        }
    }
}

impl<H> Clone for Magma<H> {
    fn clone(&self) -> Self {
        Magma {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Representation> fmt::Debug for Magma<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Magma")
            .field("elements", &self.inner.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for Magma<H> {
    type Rep = H;
    const KIND: &'static str = "Magma";

    fn carrier(&self) -> &Carrier<H> {
        &self.inner.carrier
    }
}

impl<H: Representation> Multiplicative for Magma<H> {
    fn mult(&self, left: &H, right: &H) -> H {
        self.inner.carrier.narrow((self.inner.mult)(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgebraError;

    fn non_assoc_mult(m: &i64, n: &i64) -> i64 {
        m * n - m.min(n)
    }

    fn non_comm_mult(m: &i64, n: &i64) -> i64 {
        m * n - m
    }

    #[test]
    fn test_elements_are_unique() {
        let na = Magma::new(non_assoc_mult);
        let nc = Magma::new(non_comm_mult);

        let na2 = na.element(2);
        let na3 = na.element(3);
        let nc3 = nc.element(3);
        let nc4 = nc.element(4);

        assert_eq!(*na2.rep(), 2);
        assert_eq!(*nc4.rep(), 4);
        assert_eq!(na3.rep(), nc3.rep());

        assert_eq!(na2, na2.clone());
        assert!(na2.is(&na.element(2)));
        assert_ne!(na2, na3);
        assert!(!na2.is(&na3));
    }

    #[test]
    fn test_products_land_in_the_table() {
        let na = Magma::new(non_assoc_mult);
        let nc = Magma::new(non_comm_mult);

        let foo1 = &na.element(2) * &na.element(3);
        let foo2 = &na.element(3) * &na.element(2);
        assert!(foo1.is(&foo2));

        let nc2 = nc.element(2);
        let nc3 = nc.element(3);
        let nc4 = nc.element(4);
        let bar1 = &nc2 * &nc3;
        let bar2 = &nc2 * &nc3;
        assert_eq!(bar1, nc4);
        assert!(bar1.is(&bar2));
        assert!(bar1.is(&nc4));

        // 3*2 - 3 differs from 2*3 - 2
        assert_ne!(&nc3 * &nc2, bar1);
    }

    #[test]
    fn test_multiplying_across_magmas_fails() {
        let na = Magma::new(non_assoc_mult);
        let nc = Magma::new(non_comm_mult);

        let err = nc.element(5).try_mul(&na.element(6)).unwrap_err();
        assert!(matches!(err, AlgebraError::ForeignOperand { .. }));
        assert_eq!(
            err.to_string(),
            "Multiplication must be between elements of the same concrete algebra"
        );
    }

    #[test]
    #[should_panic(expected = "same concrete algebra")]
    fn test_operator_panics_across_magmas() {
        let na = Magma::new(non_assoc_mult);
        let nc = Magma::new(non_comm_mult);
        let _ = na.element(7) * nc.element(8);
    }

    #[test]
    fn test_boolean_magma() {
        let nand = Magma::new(|a: &bool, b: &bool| !(*a && *b));
        let t = nand.element(true);
        let f = nand.element(false);
        assert!((&t * &t).is(&f));
        assert!((&t * &f).is(&t));
        assert!((&f * &f).is(&t));
        assert_eq!(nand.len(), 2);
    }
}
