//! Provenance tags for instrumented values.

/// Which operation produced a value instance.
///
/// Set once at construction time (or rewritten by a successful
/// copy-assignment) and never changed by moves, borrows, or reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Provenance {
    /// Constructed directly, not derived from any other instance.
    Fresh,

    /// Produced by `Clone::clone` from an existing instance.
    Cloned,

    /// Overwritten in place by a copy-assignment from a *distinct* instance.
    ///
    /// Self-assignment is a no-op and leaves the previous tag intact.
    Assigned,
}

impl Provenance {
    /// Stable lowercase label, used as a structured field in trace events.
    pub fn as_str(self) -> &'static str {
        match self {
            Provenance::Fresh => "fresh",
            Provenance::Cloned => "cloned",
            Provenance::Assigned => "assigned",
        }
    }

    /// Returns `true` if this value descends from at least one copy
    /// operation (clone or assignment).
    pub fn is_derived(self) -> bool {
        self != Provenance::Fresh
    }
}
