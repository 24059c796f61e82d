//! Element tables shared by every algebra

use crate::protocols::{Algebra, Narrow, Representation};
use indexmap::IndexSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The table of elements an algebra has encountered.
///
/// The table only grows. Each representation is narrowed first, then
/// interned: equal narrowed representations always map to one shared
/// allocation, which is what makes element identity (`Element::is`) work.
pub struct Carrier<H> {
    narrow: Option<Narrow<H>>,
    table: Mutex<IndexSet<Arc<H>>>,
}

impl<H: Representation> Carrier<H> {
    pub(crate) fn new(narrow: Option<Narrow<H>>) -> Self {
        Carrier {
            narrow,
            table: Mutex::new(IndexSet::new()),
        }
    }

    fn table(&self) -> MutexGuard<'_, IndexSet<Arc<H>>> {
        // The table is never left half-updated, so a poisoned lock is still usable.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Map a representation to its canonical representative
    pub fn narrow(&self, rep: H) -> H {
        match &self.narrow {
            Some(narrow) => narrow(rep),
            None => rep,
        }
    }

    /// Shared handle to the unique interned copy of `narrow(rep)`
    pub fn intern(&self, rep: H) -> Arc<H> {
        let rep = self.narrow(rep);
        let mut table = self.table();
        if let Some(existing) = table.get(&rep) {
            return Arc::clone(existing);
        }

        let shared = Arc::new(rep);
        table.insert(Arc::clone(&shared));
        tracing::trace!(rep = ?shared, size = table.len(), "element table grew");
        shared
    }

    /// Whether `narrow(rep)` was already interned
    pub fn contains(&self, rep: &H) -> bool {
        let rep = self.narrow(rep.clone());
        self.table().contains(&rep)
    }

    /// Number of interned representations
    pub fn len(&self) -> usize {
        self.table().len()
    }

    /// Whether nothing was interned yet
    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    /// Interned representations in order of first encounter
    pub fn snapshot(&self) -> Vec<Arc<H>> {
        self.table().iter().cloned().collect()
    }
}

impl<H: Representation> fmt::Debug for Carrier<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carrier")
            .field("narrowed", &self.narrow.is_some())
            .field("elements", &self.len())
            .finish()
    }
}

/// A bare set: an algebra with no operations.
///
/// Its elements support equality, hashing and identity, nothing else.
pub struct BaseSet<H> {
    carrier: Arc<Carrier<H>>,
}

impl<H: Representation> BaseSet<H> {
    /// Create an empty set whose representations are used as given
    pub fn new() -> Self {
        BaseSet {
            carrier: Arc::new(Carrier::new(None)),
        }
    }

    /// Create an empty set that narrows every representation
    pub fn with_narrow<N>(narrow: N) -> Self
    where
        N: Fn(H) -> H + Send + Sync + 'static,
    {
        BaseSet {
            carrier: Arc::new(Carrier::new(Some(Arc::new(narrow)))),
        }
    }
}

impl<H: Representation> Default for BaseSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for BaseSet<H> {
    fn clone(&self) -> Self {
        BaseSet {
            carrier: Arc::clone(&self.carrier),
        }
    }
}

impl<H: Representation> fmt::Debug for BaseSet<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseSet")
            .field("elements", &self.carrier.len())
            .finish()
    }
}

impl<H: Representation> Algebra for BaseSet<H> {
    type Rep = H;
    const KIND: &'static str = "Set";

    fn carrier(&self) -> &Carrier<H> {
        &self.carrier
    }
}
