//! Grammar-extension tests: the JSON5 preset and individual toggles.

use json5_core::{
    parse, parse_json5, stringify, Json5Error, Parser, SliceSource, Syntax, Value,
};

fn parse_with(text: &str, syntax: Syntax) -> json5_core::Result<Value> {
    Parser::new(SliceSource::new(text.as_bytes()), syntax).parse()
}

// ============================================================================
// The canonical presets disagree exactly on the extensions
// ============================================================================

#[test]
fn extended_document_rejected_by_strict_accepted_by_json5() {
    let text = "{ foo: //comment\n[123,\"baz\",],}";
    assert!(parse(text).is_err());

    let v = parse_json5(text).unwrap();
    assert_eq!(v.len(), 1);
    assert_eq!(v.at("foo").len(), 2);
    assert_eq!(v.at("foo").at(0usize), &Value::Integer(123));
    assert_eq!(v.at("foo").at(1usize), "baz");
    assert_eq!(stringify(&v), r#"{"foo":[123,"baz"]}"#);
}

#[test]
fn strict_json_is_a_subset_of_json5() {
    let text = r#"{"a": [1, 2.5, "x"], "b": null, "c": true}"#;
    assert_eq!(parse(text).unwrap(), parse_json5(text).unwrap());
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn line_comments() {
    assert_eq!(parse_json5("// before\n1").unwrap(), Value::Integer(1));
    assert_eq!(parse_json5("1 // after").unwrap(), Value::Integer(1));
    // A line comment at end of input needs no terminating newline.
    assert_eq!(parse_json5("[1, // one\n 2]").unwrap().len(), 2);
}

#[test]
fn block_comments() {
    assert_eq!(parse_json5("/* x */ 1 /* y */").unwrap(), Value::Integer(1));
    assert_eq!(parse_json5("/* * ** */ 2").unwrap(), Value::Integer(2));
    assert_eq!(
        parse_json5("[1 /* inline */, 2]").unwrap(),
        parse("[1, 2]").unwrap()
    );
}

#[test]
fn unterminated_block_comment_is_fatal() {
    assert_eq!(
        parse_json5("/* never closed"),
        Err(Json5Error::Syntax {
            found: None,
            context: "comment"
        })
    );
}

#[test]
fn lone_slash_is_not_a_comment() {
    assert!(parse_json5("/").is_err());
    assert!(parse_json5("1 /").is_err());
    assert!(parse_json5("[1 / 2]").is_err());
}

#[test]
fn comment_toggle_alone() {
    let syntax = Syntax::strict().comments(true);
    assert_eq!(parse_with("// c\n7", syntax).unwrap(), Value::Integer(7));
    // The other extensions stay off.
    assert!(parse_with("[1,]", syntax).is_err());
    assert!(parse_with("{a: 1}", syntax).is_err());
}

// ============================================================================
// Trailing commas
// ============================================================================

#[test]
fn trailing_commas() {
    assert_eq!(parse_json5("[1, 2,]").unwrap().len(), 2);
    assert_eq!(parse_json5("{\"a\": 1,}").unwrap().len(), 1);
    assert_eq!(parse_json5("[1, 2, ]").unwrap().len(), 2);
}

#[test]
fn trailing_comma_does_not_allow_holes() {
    assert!(parse_json5("[,]").is_err());
    assert!(parse_json5("[1,,2]").is_err());
    assert!(parse_json5("{,}").is_err());
}

// ============================================================================
// Unquoted keys
// ============================================================================

#[test]
fn unquoted_keys() {
    let v = parse_json5("{foo: 1, $bar: 2, _baz: 3, a1: 4}").unwrap();
    assert_eq!(v.len(), 4);
    assert_eq!(v.at("foo"), &Value::Integer(1));
    assert_eq!(v.at("$bar"), &Value::Integer(2));
    assert_eq!(v.at("_baz"), &Value::Integer(3));
    assert_eq!(v.at("a1"), &Value::Integer(4));
}

#[test]
fn unquoted_key_must_start_with_a_letter() {
    assert!(parse_json5("{1a: 1}").is_err());
    assert!(parse_json5("{: 1}").is_err());
}

#[test]
fn quoted_keys_still_work_in_json5() {
    let v = parse_json5("{\"quoted key\": 1, bare: 2}").unwrap();
    assert_eq!(v.at("quoted key"), &Value::Integer(1));
    assert_eq!(v.at("bare"), &Value::Integer(2));
}

// ============================================================================
// Single-quoted and multi-line strings
// ============================================================================

#[test]
fn single_quoted_strings() {
    assert_eq!(parse_json5("'abc'").unwrap(), "abc");
    // The other quote style needs no escaping inside.
    assert_eq!(parse_json5("'say \"hi\"'").unwrap(), "say \"hi\"");
    assert_eq!(parse_json5(r#"'don\'t'"#).unwrap(), "don't");
}

#[test]
fn escaped_line_break_is_dropped() {
    assert_eq!(parse_json5("\"ab\\\ncd\"").unwrap(), "abcd");
    // CR+LF counts as one break.
    assert_eq!(parse_json5("\"ab\\\r\ncd\"").unwrap(), "abcd");
    assert_eq!(parse_json5("\"ab\\\rcd\"").unwrap(), "abcd");
}

#[test]
fn raw_line_break_in_string_is_still_illegal() {
    assert!(parse_json5("\"ab\ncd\"").is_err());
}

// ============================================================================
// Number extensions
// ============================================================================

#[test]
fn hexadecimal_integers() {
    assert_eq!(parse_json5("0x0").unwrap(), Value::Integer(0));
    assert_eq!(parse_json5("0x1A").unwrap(), Value::Integer(26));
    assert_eq!(parse_json5("0Xff").unwrap(), Value::Integer(255));
    assert_eq!(parse_json5("-0x0a9f").unwrap(), Value::Integer(-0x0a9f));
    assert_eq!(parse_json5("+0x10").unwrap(), Value::Integer(16));
}

#[test]
fn hexadecimal_overflow_falls_back_to_real() {
    let v = parse_json5("0xffffffffffffffff").unwrap();
    assert!(v.is_number());
    assert!(!v.is_integer());
    assert_eq!(v.as_number().unwrap(), 1.8446744073709552e19);
}

#[test]
fn hexadecimal_requires_digits() {
    assert!(parse_json5("0x").is_err());
    assert!(parse_json5("0xg").is_err());
}

#[test]
fn explicit_plus_sign() {
    assert_eq!(parse_json5("+1").unwrap(), Value::Integer(1));
    assert_eq!(parse_json5("+2.5").unwrap(), Value::Real(2.5));
}

#[test]
fn leading_and_trailing_decimal_points() {
    assert_eq!(parse_json5(".5").unwrap(), Value::Real(0.5));
    assert_eq!(parse_json5("-.25").unwrap(), Value::Real(-0.25));
    assert_eq!(parse_json5("+.5").unwrap(), Value::Real(0.5));
    // A trailing point consumes no fractional digit, so the literal's
    // shape is still integral.
    assert_eq!(parse_json5("5.").unwrap(), Value::Integer(5));
}

#[test]
fn infinity_and_nan_literals() {
    assert_eq!(parse_json5("infinity").unwrap(), Value::Real(f64::INFINITY));
    assert_eq!(
        parse_json5("-infinity").unwrap(),
        Value::Real(f64::NEG_INFINITY)
    );
    assert!(parse_json5("NaN").unwrap().as_number().unwrap().is_nan());

    // Exact spellings only.
    assert!(parse_json5("Infinity").is_err());
    assert!(parse_json5("nan").is_err());
    assert!(parse_json5("infinit").is_err());
}

// ============================================================================
// Individual toggles stay independent
// ============================================================================

#[test]
fn single_toggle_combinations() {
    let mut only_commas = Syntax::strict();
    only_commas.trailing_comma = true;
    assert_eq!(parse_with("[1,]", only_commas).unwrap().len(), 1);
    assert!(parse_with("{a: 1}", only_commas).is_err());
    assert!(parse_with("'x'", only_commas).is_err());

    let mut only_quotes = Syntax::strict();
    only_quotes.single_quote = true;
    assert_eq!(parse_with("'x'", only_quotes).unwrap(), "x");
    assert!(parse_with("[1,]", only_quotes).is_err());

    let decimals = Syntax::strict().decimal_points(true);
    assert_eq!(parse_with(".5", decimals).unwrap(), Value::Real(0.5));
    assert!(parse_with("0x10", decimals).is_err());
}

#[test]
fn json5_streaming_mode() {
    let source = SliceSource::new(b"0x10 'two' // done");
    let mut parser = Parser::new(source, Syntax::extended().streaming());
    assert_eq!(parser.parse().unwrap(), Value::Integer(16));
    assert_eq!(parser.parse().unwrap(), "two");
    assert!(parser.parse().is_err());
}

// ============================================================================
// A fuller document
// ============================================================================

#[test]
fn kitchen_sink_document() {
    let text = r#"{
        // configuration block
        name: 'demo',
        version: "1.0", /* quoted anyway */
        threshold: .75,
        retries: 0x3,
        scale: infinity,
        tags: [
            'a',
            "b",
        ],
    }"#;
    let v = parse_json5(text).unwrap();
    assert_eq!(v.len(), 6);
    assert_eq!(v.at("name"), "demo");
    assert_eq!(v.at("version"), "1.0");
    assert_eq!(v.at("threshold"), &Value::Real(0.75));
    assert_eq!(v.at("retries"), &Value::Integer(3));
    assert_eq!(v.at("scale"), &Value::Real(f64::INFINITY));
    assert_eq!(v.at("tags").len(), 2);
}
