//! The instrumented value type.
//!
//! A [`LineageCell`] records by what means it came into existence
//! ([`Provenance`]) and how many explicit copy operations lie in its
//! ancestry (its hop count), and reports its own drop to the
//! [`DropLedger`] it was constructed against.
//!
//! # What counts as a copy
//!
//! Exactly two operations: `Clone::clone` and [`assign_from`]. Moves —
//! rebinding, passing by value, returning — transfer the same instance and
//! touch nothing. Borrows and address-taking observe without copying.
//!
//! [`assign_from`]: LineageCell::assign_from

use std::cell::Cell;
use std::fmt;
use std::ptr;

use crate::ledger::DropLedger;
use crate::provenance::Provenance;

/// A value that knows its own copy history.
///
/// State lives in `Cell`s so that copy-assignment can be expressed through
/// a shared reference. That is what makes the aliased call
/// `cell.assign_from(&cell)` representable at all — with a `&mut self`
/// receiver the self-assignment case could never be written down, and the
/// identity guard it exercises could never be tested.
///
/// There is deliberately no `PartialEq` impl: two cells with equal state are
/// still distinct instances, and the assignment contract hinges on instance
/// identity (`ptr::eq`), not content equality.
pub struct LineageCell {
    provenance: Cell<Provenance>,
    hops: Cell<u32>,
    ledger: DropLedger,
}

impl LineageCell {
    /// Construct a fresh cell against the given ledger.
    ///
    /// The cell starts with [`Provenance::Fresh`] and zero hops, and holds
    /// its own handle to `ledger` for drop accounting.
    pub fn fresh(ledger: &DropLedger) -> Self {
        tracing::trace!(hops = 0, "fresh cell");
        LineageCell {
            provenance: Cell::new(Provenance::Fresh),
            hops: Cell::new(0),
            ledger: ledger.clone(),
        }
    }

    /// Number of explicit clone/assign operations in this cell's ancestry.
    pub fn hops(&self) -> u32 {
        self.hops.get()
    }

    /// Which operation produced this cell's current state.
    pub fn provenance(&self) -> Provenance {
        self.provenance.get()
    }

    /// Copy-assign `source`'s lineage into this cell.
    ///
    /// If `self` and `source` are the identical instance, the call is a
    /// complete no-op: no hop increment, no provenance change. The identity
    /// check runs before any mutation — an aliased write without the guard
    /// would read back its own partially-overwritten state.
    ///
    /// Otherwise the cell takes [`Provenance::Assigned`] and
    /// `source.hops() + 1`. The receiver keeps the ledger it was
    /// constructed against: assignment rewrites lineage, not residency.
    pub fn assign_from(&self, source: &LineageCell) {
        if ptr::eq(self, source) {
            tracing::trace!(hops = self.hops.get(), "self-assignment skipped");
            return;
        }

        let hops = source.hops.get() + 1;
        self.hops.set(hops);
        self.provenance.set(Provenance::Assigned);
        tracing::trace!(source_hops = source.hops.get(), hops, "assigned cell");
    }
}

impl Clone for LineageCell {
    /// The explicit copy operation: one hop on top of the source.
    ///
    /// Reads the source without mutating it. The new cell shares the
    /// source's ledger, so both report drops to the same counter.
    fn clone(&self) -> Self {
        let hops = self.hops.get() + 1;
        tracing::trace!(source_hops = self.hops.get(), hops, "cloned cell");
        LineageCell {
            provenance: Cell::new(Provenance::Cloned),
            hops: Cell::new(hops),
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for LineageCell {
    fn drop(&mut self) {
        tracing::trace!(
            hops = self.hops.get(),
            provenance = self.provenance.get().as_str(),
            "cell dropped"
        );
        self.ledger.record_drop();
    }
}

impl fmt::Debug for LineageCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineageCell")
            .field("provenance", &self.provenance.get())
            .field("hops", &self.hops.get())
            .finish()
    }
}
