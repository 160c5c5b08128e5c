use pretty_assertions::assert_eq;

use super::*;

#[test]
fn bare_integer_literals_default_to_i32() {
    assert_eq!(kind_of(10), NumericKind::Int32);
    assert_eq!(kind_of(0), NumericKind::Int32);
    assert_eq!(kind_of(-3), NumericKind::Int32);
}

#[test]
fn bare_float_literals_default_to_f64() {
    assert_eq!(kind_of(1.0), NumericKind::Float64);
    assert_eq!(kind_of(2.01e2), NumericKind::Float64);
}

#[test]
fn suffixes_override_the_default() {
    assert_eq!(kind_of(1u64), NumericKind::UInt64);
    assert_eq!(kind_of(1i64), NumericKind::Int64);
    assert_eq!(kind_of(1.5f32), NumericKind::Float32);
}

#[test]
fn annotations_steer_inference() {
    let narrow: f32 = 1.0;
    assert_eq!(kind_of(narrow), NumericKind::Float32);

    let wide: i64 = 10;
    assert_eq!(kind_of(wide), NumericKind::Int64);
}

#[test]
fn conversions_change_the_reported_kind() {
    let d = 1.0;
    assert_eq!(kind_of(d), NumericKind::Float64);

    // Same value, re-homed in a narrower type.
    #[allow(clippy::cast_possible_truncation)]
    let f = d as f32;
    assert_eq!(kind_of(f), NumericKind::Float32);

    let n = 10i32;
    assert_eq!(kind_of(i64::from(n)), NumericKind::Int64);
}

#[test]
fn kinds_are_available_without_a_value() {
    assert_eq!(<i32 as Numeric>::KIND, NumericKind::Int32);
    assert_eq!(<f64 as Numeric>::KIND, NumericKind::Float64);
}
