//! Allocation accounting probes.
//!
//! [`AllocProbe`] is a deliberately move-only type: it has no `Clone` impl,
//! so the only events in its life are one construction and one drop, each
//! tallied on the [`AllocStats`] handle it was built against. Owning
//! containers (`Box`, `Rc`, `Vec`) move probes around without creating or
//! destroying them, and the counters make that visible.
//!
//! The stats handle follows the same shape as `vita_lineage`'s drop ledger:
//! a cloneable `Rc` newtype over interior-mutable counters, injected at
//! construction instead of living in a global.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

struct Counters {
    created: Cell<u64>,
    dropped: Cell<u64>,
}

/// Cloneable handle to a shared created/dropped tally.
pub struct AllocStats(Rc<Counters>);

impl AllocStats {
    /// Create a new handle with both counters zeroed.
    pub fn new() -> Self {
        AllocStats(Rc::new(Counters {
            created: Cell::new(0),
            dropped: Cell::new(0),
        }))
    }

    /// Number of probe constructions recorded.
    pub fn created(&self) -> u64 {
        self.0.created.get()
    }

    /// Number of probe drops recorded.
    pub fn dropped(&self) -> u64 {
        self.0.dropped.get()
    }

    /// Probes currently alive: constructed and not yet dropped.
    pub fn live(&self) -> u64 {
        self.0.created.get() - self.0.dropped.get()
    }

    /// Zero both counters.
    pub fn reset(&self) {
        self.0.created.set(0);
        self.0.dropped.set(0);
    }
}

impl Clone for AllocStats {
    fn clone(&self) -> Self {
        AllocStats(Rc::clone(&self.0))
    }
}

impl Default for AllocStats {
    fn default() -> Self {
        AllocStats::new()
    }
}

impl fmt::Debug for AllocStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocStats(created: {}, dropped: {})",
            self.0.created.get(),
            self.0.dropped.get()
        )
    }
}

/// A move-only probe that tallies its own construction and drop.
///
/// No `Clone` impl: a probe changes hands only by moving, and each instance
/// contributes exactly one `created` and one `dropped` tick over its life.
pub struct AllocProbe {
    stats: AllocStats,
}

impl AllocProbe {
    /// Construct a probe against the given stats handle.
    pub fn new(stats: &AllocStats) -> Self {
        stats.0.created.set(stats.0.created.get() + 1);
        tracing::trace!(created = stats.0.created.get(), "probe constructed");
        AllocProbe {
            stats: stats.clone(),
        }
    }

    /// The probe's display name; handy for exercising access through
    /// owning handles (`Box`, `Rc`) without touching the counters.
    pub fn name(&self) -> &'static str {
        "alloc probe"
    }
}

impl Drop for AllocProbe {
    fn drop(&mut self) {
        self.stats.0.dropped.set(self.stats.0.dropped.get() + 1);
        tracing::trace!(dropped = self.stats.0.dropped.get(), "probe dropped");
    }
}

impl fmt::Debug for AllocProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AllocProbe(live: {})", self.stats.live())
    }
}
