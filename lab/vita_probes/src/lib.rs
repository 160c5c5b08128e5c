//! Direct language probes for the vita semantics lab.
//!
//! Where `vita_lineage` instruments *copying*, this crate probes the rest
//! of the value-semantics surface with small observable types:
//!
//! - **Allocation accounting** ([`AllocProbe`], [`AllocStats`]) — a
//!   move-only probe whose constructions and drops are tallied through an
//!   injected stats handle. Tests use it to watch when `Box`, `Rc`, `Weak`,
//!   and collections actually create and destroy values.
//!
//! - **Numeric kind reporting** ([`Numeric`], [`NumericKind`],
//!   [`kind_of`]) — monomorphization-time evidence of what the compiler
//!   inferred for a numeric expression, used to pin down literal
//!   defaulting rules.
//!
//! The array-layout and scalar-representation probes need no library
//! support at all; they live entirely in this crate's `tests/` directory.

pub mod alloc;
pub mod numeric;

pub use alloc::{AllocProbe, AllocStats};
pub use numeric::{kind_of, Numeric, NumericKind};
