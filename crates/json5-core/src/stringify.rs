//! Stringifier, parameterized by a [`Style`] configuration.
//!
//! Walks the value tree with exhaustive per-tag handling and pushes text
//! into a `String`. Object members are always emitted in the value
//! model's key-sorted order — an observable contract, not an
//! implementation detail.

use crate::config::Style;
use crate::value::Value;

/// Render strict JSON: compact, non-finite reals coerced to `null`.
pub fn stringify(value: &Value) -> String {
    stringify_with(value, &Style::strict())
}

/// Render with JSON5 output rules: `infinity` and `NaN` written as such.
pub fn stringify_json5(value: &Value) -> String {
    stringify_with(value, &Style::extended())
}

/// Render with an explicit output configuration.
pub fn stringify_with(value: &Value, style: &Style) -> String {
    let mut out = String::new();
    write_value(value, style, "", &mut out);
    out
}

fn newline(style: &Style) -> &'static str {
    if style.crlf_newline {
        "\r\n"
    } else {
        "\n"
    }
}

/// One level of indentation: N spaces, |N| tabs, or nothing.
fn indent_unit(style: &Style) -> String {
    if style.indent > 0 {
        " ".repeat(style.indent as usize)
    } else if style.indent < 0 {
        "\t".repeat(style.indent.unsigned_abs() as usize)
    } else {
        String::new()
    }
}

fn write_value(value: &Value, style: &Style, indent: &str, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Real(r) => write_real(*r, style, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
            } else if style.indent == 0 {
                let mut delim = "[";
                for item in items {
                    out.push_str(delim);
                    write_value(item, style, indent, out);
                    delim = ",";
                }
                out.push(']');
            } else {
                let newline = newline(style);
                let inner_indent = format!("{indent}{}", indent_unit(style));
                let mut delim = "[";
                for item in items {
                    out.push_str(delim);
                    out.push_str(newline);
                    out.push_str(&inner_indent);
                    write_value(item, style, &inner_indent, out);
                    delim = ",";
                }
                out.push_str(newline);
                out.push_str(indent);
                out.push(']');
            }
        }
        Value::Object(members) => {
            if members.is_empty() {
                out.push_str("{}");
            } else if style.indent == 0 {
                let mut delim = "{";
                for (key, member) in members {
                    out.push_str(delim);
                    write_string(key, out);
                    out.push(':');
                    write_value(member, style, indent, out);
                    delim = ",";
                }
                out.push('}');
            } else {
                let newline = newline(style);
                let inner_indent = format!("{indent}{}", indent_unit(style));
                let mut delim = "{";
                for (key, member) in members {
                    out.push_str(delim);
                    out.push_str(newline);
                    out.push_str(&inner_indent);
                    write_string(key, out);
                    out.push_str(": ");
                    write_value(member, style, &inner_indent, out);
                    delim = ",";
                }
                out.push_str(newline);
                out.push_str(indent);
                out.push('}');
            }
        }
    }
}

/// NaN and infinities have no strict-JSON representation; without the
/// matching output toggle they coerce to `null`.
fn write_real(real: f64, style: &Style, out: &mut String) {
    if real.is_nan() {
        out.push_str(if style.not_a_number { "NaN" } else { "null" });
    } else if real.is_infinite() {
        if !style.infinity_number {
            out.push_str("null");
        } else if real > 0.0 {
            out.push_str("infinity");
        } else {
            out.push_str("-infinity");
        }
    } else {
        out.push_str(&real.to_string());
    }
}

/// Double-quoted string: `"` and `\` escaped, control characters below
/// 0x20 as their short escape or `\u00XX`, everything else verbatim.
fn write_string(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => {
                const HEX: &[u8; 16] = b"0123456789abcdef";
                out.push_str("\\u00");
                out.push(HEX[(ch as usize >> 4) & 0xf] as char);
                out.push(HEX[ch as usize & 0xf] as char);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
