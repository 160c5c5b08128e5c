//! Shared drop-counting ledger.
//!
//! The ledger is the counting collaborator handed to every
//! [`LineageCell`](crate::LineageCell) at construction. Cloning the handle
//! shares the underlying counter, so a cell and the test observing it see
//! the same tally without any global state.
//!
//! # Concurrency
//!
//! `Rc`/`Cell` underneath: a handle is `!Send` and `!Sync`, which makes the
//! single-threaded contract structural. Tests that need isolation create one
//! ledger each; Rust's parallel test runner never shares a counter between
//! tests.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Cloneable handle to a shared drop counter.
///
/// Every drop of a cell constructed against this ledger increments the
/// counter by exactly 1, regardless of how the cell came into existence.
/// The counter only decreases via explicit [`reset`](DropLedger::reset),
/// the harness's test-isolation step.
pub struct DropLedger(Rc<Cell<u64>>);

impl DropLedger {
    /// Create a new ledger with a zeroed counter.
    pub fn new() -> Self {
        DropLedger(Rc::new(Cell::new(0)))
    }

    /// Number of drops recorded so far.
    pub fn dropped(&self) -> u64 {
        self.0.get()
    }

    /// Record one drop.
    ///
    /// Called from `Drop` impls of instrumented values; also usable directly
    /// by a harness that counts releases of its own resources.
    pub fn record_drop(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.0.set(0);
    }
}

impl Clone for DropLedger {
    fn clone(&self) -> Self {
        DropLedger(Rc::clone(&self.0))
    }
}

impl Default for DropLedger {
    fn default() -> Self {
        DropLedger::new()
    }
}

impl fmt::Debug for DropLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DropLedger(dropped: {})", self.0.get())
    }
}
