//! Inflate and coerce tests.
//!
//! Covers round trips, error variants, pass-through of existing values and the
//! ordinal-then-symbol policy of `coerce_any`.

use crate::{EnumDefinition, EnumError, EnumType, RawValue, StorageMode};

use super::common::{doneness, perm, DONENESS};

#[test]
fn symbol_round_trip() {
    let t = doneness();
    for (ordinal, symbol) in DONENESS.iter().enumerate() {
        let value = t.inflate_symbol(symbol).expect("inflate should succeed");
        assert_eq!(value.stringify(), *symbol);
        assert_eq!(value.numify(), ordinal as i64);
    }
}

#[test]
fn ordinal_round_trip() {
    let t = perm();
    for ordinal in [1, 2, 4] {
        let value = t.inflate_ordinal(ordinal).expect("inflate should succeed");
        assert_eq!(value.numify(), ordinal);
    }
    assert_eq!(
        t.inflate_ordinal(4).expect("inflate should succeed").stringify(),
        "EXECUTE"
    );
    assert_eq!(
        t.inflate_symbol("READ").expect("inflate should succeed").numify(),
        1
    );
}

#[test]
fn invalid_symbol() {
    let result = doneness().inflate_symbol("nonexistent");
    assert!(matches!(
        result,
        Err(EnumError::InvalidSymbol { ref symbol, ref type_name })
            if symbol == "nonexistent" && &**type_name == "Doneness"
    ));
}

#[test]
fn invalid_ordinal() {
    let result = perm().inflate_ordinal(3);
    assert!(matches!(
        result,
        Err(EnumError::InvalidOrdinal { ordinal: RawValue::Int(3), .. })
    ));
}

#[test]
fn coerce_passes_own_values_through() {
    let t = doneness();
    let toast = t.inflate_symbol("toast").expect("inflate should succeed");

    for coerced in [
        t.coerce_symbol(&toast),
        t.coerce_ordinal(&toast),
        t.coerce_any(&toast),
    ] {
        let coerced = coerced.expect("coerce should succeed");
        assert!(t.owns(&coerced));
        assert_eq!(coerced, toast);
    }
}

#[test]
fn coerce_reads_foreign_values_by_symbol() {
    let t = doneness();
    let other = EnumType::new("Menu", EnumDefinition::sequence(["toast", "eggs"]))
        .expect("new should succeed");
    let foreign = other.inflate_symbol("toast").expect("inflate should succeed");
    assert_eq!(foreign.numify(), 0);

    let coerced = t.coerce_symbol(foreign.clone()).expect("coerce should succeed");
    assert!(t.owns(&coerced));
    assert_eq!(coerced.numify(), 2);

    let coerced = t.coerce_any(foreign.clone()).expect("coerce should succeed");
    assert_eq!(coerced.numify(), 2);

    // The symbol text is not an ordinal.
    assert!(matches!(
        t.coerce_ordinal(foreign),
        Err(EnumError::InvalidOrdinal { .. })
    ));
}

#[test]
fn coerce_symbol_and_ordinal_from_raw() {
    let t = doneness();

    let v = t.coerce_symbol("burnt").expect("coerce should succeed");
    assert_eq!(v.numify(), 3);

    let v = t.coerce_ordinal(1i64).expect("coerce should succeed");
    assert_eq!(v.stringify(), "toasting");

    let v = t.coerce_ordinal("2").expect("coerce should succeed");
    assert_eq!(v.stringify(), "toast");

    assert!(matches!(
        t.coerce_ordinal("two"),
        Err(EnumError::InvalidOrdinal { ordinal: RawValue::Text(ref s), .. }) if s == "two"
    ));
    assert!(matches!(
        t.coerce_symbol("charcoal"),
        Err(EnumError::InvalidSymbol { .. })
    ));
}

#[test]
fn coerce_any_falls_back_to_symbol() {
    let t = doneness();

    let v = t.coerce_any("toast").expect("coerce should succeed");
    assert_eq!(v.numify(), 2);

    let v = t.coerce_any(3i64).expect("coerce should succeed");
    assert_eq!(v.stringify(), "burnt");

    let v = t.coerce_any("3").expect("coerce should succeed");
    assert_eq!(v.stringify(), "burnt");
}

#[test]
fn coerce_any_prefers_ordinal_over_symbol() {
    // Symbol "1" has ordinal 0, symbol "0" has ordinal 1.
    let t = EnumType::new("Flipped", EnumDefinition::sequence(["1", "0"]))
        .expect("new should succeed");

    let by_any = t.coerce_any("1").expect("coerce should succeed");
    let by_ordinal = t.inflate_ordinal(1).expect("inflate should succeed");
    assert_eq!(by_any, by_ordinal);
    assert_eq!(by_any.stringify(), "0");

    let by_symbol = t.coerce_symbol("1").expect("coerce should succeed");
    assert_eq!(by_symbol.numify(), 0);
}

#[test]
fn coerce_any_rejects_unknown() {
    let t = doneness();

    assert!(matches!(
        t.coerce_any("nonexistent"),
        Err(EnumError::Coercion { value: RawValue::Text(ref s), .. }) if s == "nonexistent"
    ));
    assert!(matches!(
        t.coerce_any(9i64),
        Err(EnumError::Coercion { value: RawValue::Int(9), .. })
    ));
}

#[test]
fn new_value_is_inflate_symbol() {
    let t = doneness();
    let toast = t.new_value("toast").expect("new_value should succeed");
    assert_eq!(toast.numify(), 2);

    let burnt = toast.new_value("burnt").expect("new_value should succeed");
    assert!(t.owns(&burnt));
    assert_eq!(burnt.numify(), 3);

    assert!(matches!(
        toast.new_value("ash"),
        Err(EnumError::InvalidSymbol { .. })
    ));
}

#[test]
fn inflate_raw_by_mode() {
    let t = perm();

    let v = t
        .inflate_raw(&RawValue::Int(2), StorageMode::Ordinal)
        .expect("inflate should succeed");
    assert_eq!(v.stringify(), "WRITE");

    let v = t
        .inflate_raw(&RawValue::from("4"), StorageMode::Ordinal)
        .expect("inflate should succeed");
    assert_eq!(v.stringify(), "EXECUTE");

    let v = t
        .inflate_raw(&RawValue::from("READ"), StorageMode::Symbol)
        .expect("inflate should succeed");
    assert_eq!(v.numify(), 1);

    assert!(matches!(
        t.inflate_raw(&RawValue::Int(1), StorageMode::Symbol),
        Err(EnumError::InvalidSymbol { ref symbol, .. }) if symbol == "1"
    ));
}
