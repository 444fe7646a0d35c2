use super::*;

// =============================================================================
// from_f64 / as_f64
// =============================================================================

#[test]
fn from_f64_rounds_to_nearest_cent() {
    assert_eq!(Money::from_f64(7982.32).unwrap().cents(), 798_232);
    assert_eq!(Money::from_f64(0.005).unwrap().cents(), 1);
    assert_eq!(Money::from_f64(-1.5).unwrap().cents(), -150);
}

#[test]
fn from_f64_rejects_non_finite() {
    assert_eq!(Money::from_f64(f64::NAN), Err(MoneyError::NotFinite));
    assert_eq!(Money::from_f64(f64::INFINITY), Err(MoneyError::NotFinite));
}

#[test]
fn from_f64_rejects_huge_values() {
    assert_eq!(Money::from_f64(1e300), Err(MoneyError::OutOfRange));
}

#[test]
fn as_f64_is_exact_for_quarter_cents() {
    let m = Money::from_cents(2_609_325);
    assert!((m.as_f64() - 26093.25).abs() < f64::EPSILON);
}

// =============================================================================
// Display / FromStr
// =============================================================================

#[test]
fn display_pads_fraction() {
    assert_eq!(Money::from_cents(798_232).to_string(), "7982.32");
    assert_eq!(Money::from_cents(5).to_string(), "0.05");
    assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    assert_eq!(Money::ZERO.to_string(), "0.00");
}

#[test]
fn parse_accepts_common_forms() {
    assert_eq!("12".parse::<Money>().unwrap().cents(), 1200);
    assert_eq!("12.5".parse::<Money>().unwrap().cents(), 1250);
    assert_eq!("12.05".parse::<Money>().unwrap().cents(), 1205);
    assert_eq!(" -3.10 ".parse::<Money>().unwrap().cents(), -310);
}

#[test]
fn parse_rejects_garbage() {
    for raw in ["", ".5", "1.234", "1,50", "abc", "1.-5", "--1"] {
        assert!(raw.parse::<Money>().is_err(), "expected error for {raw:?}");
    }
}

#[test]
fn parse_overflow_is_out_of_range() {
    assert_eq!("99999999999999999999".parse::<Money>(), Err(MoneyError::OutOfRange));
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn serializes_as_json_number() {
    let json = serde_json::to_string(&Money::from_cents(798_232)).unwrap();
    assert_eq!(json, "7982.32");
}

#[test]
fn deserializes_numbers_and_strings() {
    let a: Money = serde_json::from_str("7982.32").unwrap();
    let b: Money = serde_json::from_str("\"7982.32\"").unwrap();
    let c: Money = serde_json::from_str("15").unwrap();
    assert_eq!(a.cents(), 798_232);
    assert_eq!(a, b);
    assert_eq!(c.cents(), 1500);
}

#[test]
fn deserialize_rejects_bad_text() {
    assert!(serde_json::from_str::<Money>("\"twelve\"").is_err());
}

#[test]
fn checked_add_detects_overflow() {
    assert_eq!(Money::from_cents(1).checked_add(Money::from_cents(2)), Some(Money::from_cents(3)));
    assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
}
