//! Recursive-descent parser, parameterized by a [`Syntax`] configuration.
//!
//! One algorithm serves strict JSON, JSON5, and every partial toggle
//! combination in between; the grammar extensions are pure configuration,
//! never duplicated code paths. The engine reads one byte of lookahead at
//! most beyond what it has committed to consuming, so it works against
//! genuinely incremental [`ByteSource`]s.
//!
//! The first grammar violation aborts the parse with
//! [`Json5Error::Syntax`] carrying the offending byte (or the end-of-input
//! marker) and the name of the syntactic context. No partial results, no
//! recovery.

use crate::config::Syntax;
use crate::error::{Json5Error, Result};
use crate::source::{ByteSource, SliceSource};
use crate::value::{Object, Value};

/// Parse strict JSON (RFC 8259), requiring the input to be fully consumed.
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(SliceSource::new(text.as_bytes()), Syntax::strict()).parse()
}

/// Parse JSON5 (all grammar extensions on), requiring the input to be
/// fully consumed.
pub fn parse_json5(text: &str) -> Result<Value> {
    Parser::new(SliceSource::new(text.as_bytes()), Syntax::extended()).parse()
}

/// The parser engine. Construct one directly for streaming reads or for
/// custom toggle combinations; [`parse`] and [`parse_json5`] cover the
/// two canonical presets.
pub struct Parser<S: ByteSource> {
    source: S,
    syntax: Syntax,
}

impl<S: ByteSource> Parser<S> {
    pub fn new(source: S, syntax: Syntax) -> Self {
        Parser { source, syntax }
    }

    /// Parse one value from the source. In finished mode, anything but
    /// whitespace and comments after the value is an error; in streaming
    /// mode the tail is left unconsumed, so `parse` may be called again
    /// to read the next value.
    pub fn parse(&mut self) -> Result<Value> {
        let value = self.parse_value("value")?;
        if self.syntax.finished {
            if let Some(byte) = self.skip_spaces()? {
                return Err(Json5Error::syntax(Some(byte), "value"));
            }
        }
        Ok(value)
    }

    /// Give the source back, e.g. to inspect unconsumed input after a
    /// streaming-mode parse.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Consume whitespace (and comments, when enabled) and return the
    /// first significant byte. An unterminated block comment is fatal.
    fn skip_spaces(&mut self) -> Result<Option<u8>> {
        'space: loop {
            let mut byte = self.source.read();
            // A line comment terminator needs re-evaluation as whitespace,
            // hence the inner loop.
            loop {
                match byte {
                    Some(b'\t' | b'\n' | b'\r' | b' ') => continue 'space,
                    Some(b'/')
                        if self.syntax.single_line_comment || self.syntax.multi_line_comment =>
                    {
                        let second = self.source.read();
                        if self.syntax.single_line_comment && second == Some(b'/') {
                            loop {
                                byte = self.source.read();
                                if matches!(byte, None | Some(b'\r') | Some(b'\n')) {
                                    break;
                                }
                            }
                            continue;
                        }
                        if self.syntax.multi_line_comment && second == Some(b'*') {
                            let mut star = false;
                            loop {
                                match self.source.read() {
                                    None => return Err(Json5Error::syntax(None, "comment")),
                                    Some(b'*') => star = true,
                                    Some(b'/') if star => break,
                                    Some(_) => star = false,
                                }
                            }
                            continue 'space;
                        }
                        // Not a comment after all: the slash stands on
                        // its own and the caller decides what it means.
                        if let Some(b) = second {
                            self.source.unread(b);
                        }
                        return Ok(Some(b'/'));
                    }
                    other => return Ok(other),
                }
            }
        }
    }

    /// Dispatch on the first significant byte.
    fn parse_value(&mut self, context: &'static str) -> Result<Value> {
        match self.skip_spaces()? {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(quote @ (b'"' | b'\'')) => {
                Ok(Value::String(self.parse_string(quote, "string")?))
            }
            Some(b'n') => self.parse_null(),
            Some(byte @ (b't' | b'f')) => self.parse_boolean(byte),
            Some(byte)
                if byte.is_ascii_digit()
                    || matches!(byte, b'-' | b'+' | b'.' | b'i' | b'N') =>
            {
                self.parse_number(byte)
            }
            other => Err(Json5Error::syntax(other, context)),
        }
    }

    /// Match the remaining bytes of a keyword exactly.
    fn expect_keyword(&mut self, rest: &[u8], context: &'static str) -> Result<()> {
        for &expected in rest {
            let byte = self.source.read();
            if byte != Some(expected) {
                return Err(Json5Error::syntax(byte, context));
            }
        }
        Ok(())
    }

    fn parse_null(&mut self) -> Result<Value> {
        self.expect_keyword(b"ull", "null")?;
        Ok(Value::Null)
    }

    fn parse_boolean(&mut self, first: u8) -> Result<Value> {
        if first == b't' {
            self.expect_keyword(b"rue", "boolean")?;
            Ok(Value::Bool(true))
        } else {
            self.expect_keyword(b"alse", "boolean")?;
            Ok(Value::Bool(false))
        }
    }

    /// Number literals. The magnitude is accumulated digit by digit; the
    /// literal's *shape* decides the tag: Integer only when no fractional
    /// digit was consumed, no exponent was present, and the signed
    /// magnitude fits `i64`. Everything else — fraction, exponent, or
    /// overflow — produces a Real, so `1e2` is a Real even though its
    /// value is exactly 100.
    fn parse_number(&mut self, first: u8) -> Result<Value> {
        const CONTEXT: &str = "number";

        let mut byte = Some(first);
        let mut negative = false;
        if first == b'-' {
            negative = true;
            byte = self.source.read();
        } else if self.syntax.explicit_plus_sign && first == b'+' {
            byte = self.source.read();
        }

        // Integer magnitude, tracked exactly in u64 and approximately in
        // f64 for the overflow fallback.
        let mut int_part: u64 = 0;
        let mut int_approx: f64 = 0.0;
        let mut overflow = false;

        match byte {
            Some(b'0') => {
                byte = self.source.read();
                if self.syntax.hexadecimal && matches!(byte, Some(b'x' | b'X')) {
                    let mut any_digit = false;
                    loop {
                        byte = self.source.read();
                        match byte.and_then(hex_digit) {
                            Some(digit) => {
                                match int_part.checked_mul(16) {
                                    Some(shifted) => int_part = shifted | u64::from(digit),
                                    None => overflow = true,
                                }
                                int_approx = int_approx * 16.0 + f64::from(digit);
                                any_digit = true;
                            }
                            None => {
                                if let Some(b) = byte {
                                    self.source.unread(b);
                                }
                                break;
                            }
                        }
                    }
                    if !any_digit {
                        return Err(Json5Error::syntax(byte, CONTEXT));
                    }
                    return Ok(finish_integer(negative, int_part, int_approx, overflow));
                }
            }
            Some(b) if b.is_ascii_digit() => {
                int_part = u64::from(b - b'0');
                int_approx = f64::from(b - b'0');
                loop {
                    byte = self.source.read();
                    match byte {
                        Some(b) if b.is_ascii_digit() => {
                            let digit = u64::from(b - b'0');
                            match int_part.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                                Some(v) => int_part = v,
                                None => overflow = true,
                            }
                            int_approx = int_approx * 10.0 + digit as f64;
                        }
                        _ => break,
                    }
                }
            }
            Some(b'.') if self.syntax.leading_decimal_point => {
                // Magnitude stays zero; fall through to the fraction.
            }
            Some(b'i') if self.syntax.infinity_number => {
                self.expect_keyword(b"nfinity", CONTEXT)?;
                return Ok(Value::Real(if negative {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }));
            }
            Some(b'N') if self.syntax.not_a_number => {
                self.expect_keyword(b"aN", CONTEXT)?;
                return Ok(Value::Real(f64::NAN));
            }
            other => return Err(Json5Error::syntax(other, CONTEXT)),
        }

        // Fraction: a separate magnitude plus a digit count, so the
        // fractional value is frac × 10^-digits rather than an
        // incrementally accumulated float.
        let mut frac_part: f64 = 0.0;
        let mut frac_digits: i32 = 0;
        if byte == Some(b'.') {
            loop {
                byte = self.source.read();
                match byte {
                    Some(b) if b.is_ascii_digit() => {
                        frac_part = frac_part * 10.0 + f64::from(b - b'0');
                        frac_digits += 1;
                    }
                    _ => break,
                }
            }
            if !self.syntax.trailing_decimal_point && frac_digits == 0 {
                return Err(Json5Error::syntax(byte, CONTEXT));
            }
        }

        // Exponent, sign tracked separately.
        let mut exp_part: i32 = 0;
        let mut exp_negative = false;
        let mut has_exp = false;
        if matches!(byte, Some(b'e' | b'E')) {
            has_exp = true;
            byte = self.source.read();
            match byte {
                Some(b'-') => {
                    exp_negative = true;
                    byte = self.source.read();
                }
                Some(b'+') => byte = self.source.read(),
                _ => {}
            }
            let mut any_digit = false;
            while let Some(b) = byte {
                if !b.is_ascii_digit() {
                    break;
                }
                exp_part = exp_part.saturating_mul(10).saturating_add(i32::from(b - b'0'));
                any_digit = true;
                byte = self.source.read();
            }
            if !any_digit {
                return Err(Json5Error::syntax(byte, CONTEXT));
            }
        }

        // The byte that ended the literal belongs to the caller.
        if let Some(b) = byte {
            self.source.unread(b);
        }

        if frac_digits == 0 && !has_exp {
            return Ok(finish_integer(negative, int_part, int_approx, overflow));
        }

        // The exact magnitude feeds the Real as a single cast; the
        // running approximation is only for magnitudes past u64.
        let mut number = if overflow { int_approx } else { int_part as f64 };
        if frac_digits > 0 {
            number += frac_part * 10f64.powi(-frac_digits);
        }
        if has_exp {
            number *= 10f64.powi(if exp_negative { -exp_part } else { exp_part });
        }
        Ok(Value::Real(if negative { -number } else { number }))
    }

    /// Scan a quoted string into UTF-8 text. Bytes are copied verbatim to
    /// the closing quote; control bytes below 0x20 are illegal outside a
    /// recognized escape. Each `\uXXXX` escape decodes one 16-bit unit and
    /// re-encodes it independently — consecutive escapes forming a UTF-16
    /// surrogate pair are not combined, a lone surrogate becomes U+FFFD.
    fn parse_string(&mut self, quote: u8, context: &'static str) -> Result<String> {
        if !(quote == b'"' || (self.syntax.single_quote && quote == b'\'')) {
            return Err(Json5Error::syntax(Some(quote), context));
        }
        let mut buf: Vec<u8> = Vec::new();
        loop {
            match self.source.read() {
                None => return Err(Json5Error::syntax(None, context)),
                Some(b) if b == quote => break,
                Some(b) if b < 0x20 => return Err(Json5Error::syntax(Some(b), context)),
                Some(b'\\') => {
                    let escape = self.source.read();
                    match escape {
                        Some(b'\'') if self.syntax.single_quote => buf.push(b'\''),
                        Some(b @ (b'"' | b'\\' | b'/')) => buf.push(b),
                        Some(b'b') => buf.push(0x08),
                        Some(b'f') => buf.push(0x0c),
                        Some(b'n') => buf.push(b'\n'),
                        Some(b'r') => buf.push(b'\r'),
                        Some(b't') => buf.push(b'\t'),
                        Some(b'u') => {
                            let mut code: u32 = 0;
                            for _ in 0..4 {
                                let byte = self.source.read();
                                match byte.and_then(hex_digit) {
                                    Some(digit) => code = (code << 4) | u32::from(digit),
                                    None => return Err(Json5Error::syntax(byte, context)),
                                }
                            }
                            push_code_unit(&mut buf, code);
                        }
                        // A backslash directly before a line break is a
                        // line continuation: both are dropped, CR+LF
                        // counting as one break.
                        Some(b'\r') if self.syntax.multi_line_string => {
                            let next = self.source.read();
                            if let Some(b) = next {
                                if b != b'\n' {
                                    self.source.unread(b);
                                }
                            }
                        }
                        Some(b'\n') if self.syntax.multi_line_string => {}
                        other => return Err(Json5Error::syntax(other, context)),
                    }
                }
                Some(b) => buf.push(b),
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn parse_array(&mut self) -> Result<Value> {
        const CONTEXT: &str = "array";
        let mut elements: Vec<Value> = Vec::new();
        loop {
            let byte = self.skip_spaces()?;
            match byte {
                Some(b']') => break,
                byte => {
                    if elements.is_empty() {
                        match byte {
                            Some(b) => self.source.unread(b),
                            None => return Err(Json5Error::syntax(None, CONTEXT)),
                        }
                    } else if byte != Some(b',') {
                        return Err(Json5Error::syntax(byte, CONTEXT));
                    } else if self.syntax.trailing_comma {
                        match self.skip_spaces()? {
                            Some(b']') => break,
                            Some(b) => self.source.unread(b),
                            None => return Err(Json5Error::syntax(None, CONTEXT)),
                        }
                    }
                    elements.push(self.parse_value(CONTEXT)?);
                }
            }
        }
        Ok(Value::Array(elements))
    }

    /// Object keys: a quoted string, or — with the unquoted-key toggle —
    /// a bare `[A-Za-z_$][A-Za-z0-9_$]*` identifier terminated by `:`.
    fn parse_key(&mut self) -> Result<String> {
        const CONTEXT: &str = "object-key";
        let byte = self.skip_spaces()?;
        if self.syntax.unquoted_key && !matches!(byte, Some(b'"' | b'\'')) {
            let mut key = String::new();
            let mut byte = byte;
            loop {
                match byte {
                    Some(b) if b == b'_' || b == b'$' || b.is_ascii_alphabetic() => {
                        key.push(b as char)
                    }
                    Some(b) if b.is_ascii_digit() && !key.is_empty() => key.push(b as char),
                    Some(b':') => {
                        self.source.unread(b':');
                        break;
                    }
                    other => return Err(Json5Error::syntax(other, CONTEXT)),
                }
                byte = self.source.read();
            }
            return Ok(key);
        }
        match byte {
            Some(quote) => self.parse_string(quote, CONTEXT),
            None => Err(Json5Error::syntax(None, CONTEXT)),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        const CONTEXT: &str = "object";
        let mut members = Object::new();
        loop {
            let byte = self.skip_spaces()?;
            match byte {
                Some(b'}') => break,
                byte => {
                    if members.is_empty() {
                        match byte {
                            Some(b) => self.source.unread(b),
                            None => return Err(Json5Error::syntax(None, CONTEXT)),
                        }
                    } else if byte != Some(b',') {
                        return Err(Json5Error::syntax(byte, CONTEXT));
                    } else if self.syntax.trailing_comma {
                        match self.skip_spaces()? {
                            Some(b'}') => break,
                            Some(b) => self.source.unread(b),
                            None => return Err(Json5Error::syntax(None, CONTEXT)),
                        }
                    }
                    let key = self.parse_key()?;
                    let byte = self.skip_spaces()?;
                    if byte != Some(b':') {
                        return Err(Json5Error::syntax(byte, CONTEXT));
                    }
                    let value = self.parse_value(CONTEXT)?;
                    // Duplicate keys: the last value wins.
                    members.insert(key, value);
                }
            }
        }
        Ok(Value::Object(members))
    }
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Apply the Integer/Real decision to a plain magnitude: Integer when the
/// signed value fits `i64`, Real otherwise.
fn finish_integer(negative: bool, magnitude: u64, approx: f64, overflow: bool) -> Value {
    if !overflow {
        if negative {
            if magnitude <= i64::MAX as u64 {
                return Value::Integer(-(magnitude as i64));
            }
            if magnitude == i64::MAX as u64 + 1 {
                return Value::Integer(i64::MIN);
            }
        } else if magnitude <= i64::MAX as u64 {
            return Value::Integer(magnitude as i64);
        }
        let real = magnitude as f64;
        return Value::Real(if negative { -real } else { real });
    }
    Value::Real(if negative { -approx } else { approx })
}

/// Re-encode one 16-bit code unit as UTF-8 (1–3 bytes). Surrogate-range
/// units cannot appear in a Rust `String`, so they map to U+FFFD.
fn push_code_unit(buf: &mut Vec<u8>, code: u32) {
    if code < 0x80 {
        buf.push(code as u8);
    } else if code < 0x800 {
        buf.push(0xc0 | (code >> 6) as u8);
        buf.push(0x80 | (code & 0x3f) as u8);
    } else if (0xd800..0xe000).contains(&code) {
        buf.extend_from_slice("\u{fffd}".as_bytes());
    } else {
        buf.push(0xe0 | (code >> 12) as u8);
        buf.push(0x80 | ((code >> 6) & 0x3f) as u8);
        buf.push(0x80 | (code & 0x3f) as u8);
    }
}
