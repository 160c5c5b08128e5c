//! Clone-lineage instrumentation for the vita semantics lab.
//!
//! This crate provides:
//!
//! - **Provenance tags** ([`Provenance`]) — every instrumented value records
//!   which operation produced it: [`Fresh`](Provenance::Fresh) (direct
//!   construction), [`Cloned`](Provenance::Cloned) (produced by
//!   `Clone::clone`), or [`Assigned`](Provenance::Assigned) (overwritten in
//!   place by [`LineageCell::assign_from`]).
//!
//! - **Hop counts** — the number of explicit clone/assign operations in a
//!   value's ancestry chain. Freshly constructed values start at 0; each
//!   clone or assignment adds exactly 1 on top of its source.
//!
//! - **Drop ledger** ([`DropLedger`]) — a cloneable counter handle injected
//!   into every [`LineageCell`] at construction. Each cell drop increments
//!   the ledger exactly once, letting a test observe how many values a scope
//!   actually destroyed.
//!
//! # Design
//!
//! Moves are **not** copies. Binding a cell to a new name, passing it by
//! value, or returning it changes neither provenance nor hop count — only
//! the two explicit operations (`clone`, `assign_from`) do. This is the
//! load-bearing difference from languages with implicit copy construction,
//! and the tests lean on it.
//!
//! The ledger is deliberately not global state: every cell carries a handle
//! to the ledger it was constructed against, and each test creates its own.
//! `Rc`/`Cell` underneath make the single-threaded contract structural — a
//! handle cannot leave the thread that created it.

pub mod ledger;
pub mod provenance;
pub mod value;

pub use ledger::DropLedger;
pub use provenance::Provenance;
pub use value::LineageCell;
