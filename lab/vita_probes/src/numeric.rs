//! Numeric kind reporting.
//!
//! Rust has no function overloading; what it has instead is monomorphized
//! generics plus literal defaulting. [`kind_of`] makes both observable: the
//! compiler picks a single concrete `T` for every call site, and the
//! returned [`NumericKind`] is evidence of what it picked. The interesting
//! cases are the unsuffixed literals — `10` falls back to `i32` and `1.0`
//! to `f64` unless the surrounding code demands otherwise.

/// The concrete numeric type the compiler settled on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericKind {
    Int32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

/// Primitive numeric types that can report their own kind.
pub trait Numeric {
    /// The kind tag for this type, fixed at monomorphization time.
    const KIND: NumericKind;
}

impl Numeric for i32 {
    const KIND: NumericKind = NumericKind::Int32;
}

impl Numeric for i64 {
    const KIND: NumericKind = NumericKind::Int64;
}

impl Numeric for u64 {
    const KIND: NumericKind = NumericKind::UInt64;
}

impl Numeric for f32 {
    const KIND: NumericKind = NumericKind::Float32;
}

impl Numeric for f64 {
    const KIND: NumericKind = NumericKind::Float64;
}

/// Report the kind the compiler inferred for `value`.
///
/// Takes its argument by value the way an overload set would, so a bare
/// literal at the call site exercises the defaulting rules with no outer
/// context to steer them.
pub fn kind_of<T: Numeric>(_value: T) -> NumericKind {
    T::KIND
}

#[cfg(test)]
mod tests;
