//! Conversion-layer tests: strict and lenient extraction, defaults, and
//! soft reads.

use json5_core::{Json5Error, Value};

fn conversion_err(result: json5_core::Result<impl Sized>) -> bool {
    matches!(result, Err(Json5Error::Conversion { .. }))
}

// ============================================================================
// Strict extraction: same-category only
// ============================================================================

#[test]
fn strict_same_category() {
    assert_eq!(Value::Bool(true).get::<bool>().unwrap(), true);
    assert_eq!(Value::Integer(42).get::<i64>().unwrap(), 42);
    assert_eq!(Value::Integer(42).get::<u8>().unwrap(), 42);
    assert_eq!(Value::Real(2.5).get::<f64>().unwrap(), 2.5);
    assert_eq!(Value::from("abc").get::<String>().unwrap(), "abc");
}

#[test]
fn numeric_tags_interchange_with_range_checks() {
    // Integer → float widens.
    assert_eq!(Value::Integer(3).get::<f64>().unwrap(), 3.0);
    assert_eq!(Value::Integer(3).get::<f32>().unwrap(), 3.0);
    // Real → integer truncates toward zero.
    assert_eq!(Value::Real(2.9).get::<i32>().unwrap(), 2);
    assert_eq!(Value::Real(-2.9).get::<i32>().unwrap(), -2);
    assert_eq!(Value::Real(100.0).get::<u8>().unwrap(), 100);
}

#[test]
fn out_of_range_narrowing_fails() {
    assert!(conversion_err(Value::Integer(300).get::<u8>()));
    assert!(conversion_err(Value::Integer(-1).get::<u64>()));
    assert!(conversion_err(Value::Integer(128).get::<i8>()));
    assert!(conversion_err(Value::Real(1e30).get::<i64>()));
    assert!(conversion_err(Value::Real(-1.0).get::<u32>()));
    assert!(conversion_err(Value::Real(f64::NAN).get::<i32>()));
    assert!(conversion_err(Value::Real(f64::INFINITY).get::<i64>()));
}

#[test]
fn narrowing_is_exact_at_the_type_boundary() {
    // `i64::MAX as f64` rounds up to 2^63, which is one past the
    // largest i64; that value must not slip through the range check.
    assert!(conversion_err(Value::Real(9223372036854775808.0).get::<i64>()));
    assert!(conversion_err(Value::Real(18446744073709551616.0).get::<u64>()));
    assert!(conversion_err(Value::Real(-9223372036854777856.0).get::<i64>()));

    // The largest doubles below the boundary still convert.
    assert_eq!(
        Value::Real(9223372036854774784.0).get::<i64>().unwrap(),
        9223372036854774784
    );
    assert_eq!(
        Value::Real(18446744073709549568.0).get::<u64>().unwrap(),
        18446744073709549568
    );
    // The signed lower bound is exactly representable and in range.
    assert_eq!(
        Value::Real(-9223372036854775808.0).get::<i64>().unwrap(),
        i64::MIN
    );
}

#[test]
fn strict_rejects_cross_category() {
    assert!(conversion_err(Value::Bool(true).get::<i32>()));
    assert!(conversion_err(Value::from("1").get::<i32>()));
    assert!(conversion_err(Value::from("true").get::<bool>()));
    assert!(conversion_err(Value::Integer(1).get::<String>()));
    assert!(conversion_err(Value::Null.get::<bool>()));
    assert!(conversion_err(Value::Null.get::<String>()));
    assert!(conversion_err(Value::from(vec![Value::Integer(1)]).get::<i32>()));
}

#[test]
fn failures_are_conversion_errors_not_mismatches() {
    assert_eq!(
        Value::Bool(true).get::<i32>(),
        Err(Json5Error::Conversion {
            from: "boolean",
            to: "i32"
        })
    );
    assert_eq!(
        Value::Null.get::<String>(),
        Err(Json5Error::Conversion {
            from: "null",
            to: "String"
        })
    );
}

// ============================================================================
// Lenient extraction: the cross-category matrix
// ============================================================================

#[test]
fn lenient_null_conversions() {
    assert_eq!(Value::Null.get_lenient::<bool>().unwrap(), false);
    assert_eq!(Value::Null.get_lenient::<String>().unwrap(), "null");
    // Null → numeric has no defined conversion in either mode.
    assert!(conversion_err(Value::Null.get_lenient::<i32>()));
    assert!(conversion_err(Value::Null.get_lenient::<f64>()));
}

#[test]
fn lenient_boolean_conversions() {
    assert_eq!(Value::Bool(true).get_lenient::<i32>().unwrap(), 1);
    assert_eq!(Value::Bool(false).get_lenient::<i32>().unwrap(), 0);
    assert_eq!(Value::Bool(true).get_lenient::<f64>().unwrap(), 1.0);
    assert_eq!(Value::Bool(false).get_lenient::<String>().unwrap(), "false");
}

#[test]
fn lenient_numeric_to_boolean_is_zero_versus_nonzero() {
    assert_eq!(Value::Integer(0).get_lenient::<bool>().unwrap(), false);
    assert_eq!(Value::Integer(-3).get_lenient::<bool>().unwrap(), true);
    assert_eq!(Value::Real(0.0).get_lenient::<bool>().unwrap(), false);
    assert_eq!(Value::Real(0.5).get_lenient::<bool>().unwrap(), true);
}

#[test]
fn lenient_string_to_boolean_matches_true_exactly() {
    assert_eq!(Value::from("true").get_lenient::<bool>().unwrap(), true);
    assert_eq!(Value::from("false").get_lenient::<bool>().unwrap(), false);
    assert_eq!(Value::from("yes").get_lenient::<bool>().unwrap(), false);
    assert_eq!(Value::from("True").get_lenient::<bool>().unwrap(), false);
}

#[test]
fn lenient_text_to_number() {
    assert_eq!(Value::from("42").get_lenient::<i32>().unwrap(), 42);
    assert_eq!(Value::from(" 42 ").get_lenient::<i32>().unwrap(), 42);
    assert_eq!(Value::from("-7").get_lenient::<i64>().unwrap(), -7);
    assert_eq!(Value::from("2.5").get_lenient::<f64>().unwrap(), 2.5);
    assert!(conversion_err(Value::from("abc").get_lenient::<i32>()));
    assert!(conversion_err(Value::from("2.5").get_lenient::<i32>()));
    assert!(conversion_err(Value::from("").get_lenient::<f64>()));
}

#[test]
fn lenient_number_to_text() {
    assert_eq!(Value::Integer(42).get_lenient::<String>().unwrap(), "42");
    assert_eq!(Value::Real(2.5).get_lenient::<String>().unwrap(), "2.5");
    assert_eq!(Value::Bool(true).get_lenient::<String>().unwrap(), "true");
}

#[test]
fn lenient_still_rejects_containers() {
    assert!(conversion_err(
        Value::from(vec![Value::Integer(1)]).get_lenient::<i32>()
    ));
    assert!(conversion_err(
        json5_core::object([("a", 1)]).get_lenient::<String>()
    ));
}

// ============================================================================
// Defaults and soft reads
// ============================================================================

#[test]
fn get_or_substitutes_the_default_on_null_only() {
    assert_eq!(Value::Null.get_or(7).unwrap(), 7);
    assert_eq!(Value::Integer(42).get_or(7).unwrap(), 42);
    assert_eq!(Value::Null.get_or(String::from("x")).unwrap(), "x");
    // A present-but-unconvertible value still propagates the error.
    assert!(conversion_err(Value::from("abc").get_or(7)));
}

#[test]
fn try_get_skips_null_without_touching_the_target() {
    let mut target = 99;
    assert_eq!(Value::Null.try_get(&mut target).unwrap(), false);
    assert_eq!(target, 99);

    assert_eq!(Value::Integer(5).try_get(&mut target).unwrap(), true);
    assert_eq!(target, 5);

    // Lenient rules apply to the write-through.
    let mut flag = false;
    assert_eq!(Value::Integer(1).try_get(&mut flag).unwrap(), true);
    assert!(flag);

    assert!(Value::from("abc").try_get(&mut target).is_err());
    assert_eq!(target, 5);
}

#[test]
fn try_get_with_lets_the_consumer_veto() {
    let v = Value::Integer(5);
    assert_eq!(v.try_get_with(|x: i64| x < 10).unwrap(), true);
    assert_eq!(v.try_get_with(|x: i64| x > 10).unwrap(), false);

    // Null short-circuits before the consumer runs.
    assert_eq!(
        Value::Null.try_get_with(|_: i64| panic!("not reached")).unwrap(),
        false
    );

    assert!(Value::from("abc").try_get_with(|_: i64| true).is_err());
}
