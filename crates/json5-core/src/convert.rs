//! Generic extraction of native values from a [`Value`].
//!
//! Extraction has two modes. **Strict** permits only same-category
//! access: the numeric tags interchange freely (with range checks), but
//! null, boolean, string, and number are mutually exclusive. **Lenient**
//! adds a fixed cross-category matrix: Null→`"null"`, Null→`false`,
//! Boolean↔numeric (zero/nonzero), Boolean↔`"true"`/other text, and
//! numeric↔decimal text in both directions. Anything outside the matrix
//! fails with [`Json5Error::Conversion`] regardless of mode — including
//! Null→numeric, which has no defined conversion at all.

use crate::error::{Json5Error, Result};
use crate::value::Value;

/// Types extractable from a [`Value`]. Implemented for `bool`, the
/// primitive integer and float widths, and `String`.
pub trait FromValue: Sized {
    /// Name of the target type, used in error messages.
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value, lenient: bool) -> Result<Self>;
}

fn no_conversion<T: FromValue>(value: &Value) -> Json5Error {
    Json5Error::Conversion {
        from: value.type_name(),
        to: T::TYPE_NAME,
    }
}

impl FromValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: &Value, lenient: bool) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Null if lenient => Ok(false),
            Value::Integer(i) if lenient => Ok(*i != 0),
            Value::Real(r) if lenient => Ok(*r != 0.0),
            Value::String(s) if lenient => Ok(s == "true"),
            _ => Err(no_conversion::<Self>(value)),
        }
    }
}

macro_rules! from_value_int {
    ($($t:ty),*) => {$(
        impl FromValue for $t {
            const TYPE_NAME: &'static str = stringify!($t);

            fn from_value(value: &Value, lenient: bool) -> Result<Self> {
                match value {
                    Value::Integer(i) => {
                        <$t>::try_from(*i).map_err(|_| no_conversion::<Self>(value))
                    }
                    // Narrowing from a real truncates toward zero; NaN
                    // and out-of-range magnitudes have no representation.
                    // The upper bound is exclusive: `MAX as f64` rounds
                    // up to 2^63 / 2^64 for the widest types, one past
                    // the largest value the cast can hold.
                    Value::Real(r) if r.is_finite() => {
                        let truncated = r.trunc();
                        if truncated >= <$t>::MIN as f64 && truncated < <$t>::MAX as f64 + 1.0 {
                            Ok(truncated as $t)
                        } else {
                            Err(no_conversion::<Self>(value))
                        }
                    }
                    Value::Bool(b) if lenient => Ok(*b as $t),
                    Value::String(s) if lenient => {
                        s.trim().parse::<$t>().map_err(|_| no_conversion::<Self>(value))
                    }
                    _ => Err(no_conversion::<Self>(value)),
                }
            }
        }
    )*};
}

from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

macro_rules! from_value_float {
    ($($t:ty),*) => {$(
        impl FromValue for $t {
            const TYPE_NAME: &'static str = stringify!($t);

            fn from_value(value: &Value, lenient: bool) -> Result<Self> {
                match value {
                    Value::Integer(i) => Ok(*i as $t),
                    Value::Real(r) => Ok(*r as $t),
                    Value::Bool(b) if lenient => Ok(if *b { 1.0 } else { 0.0 }),
                    Value::String(s) if lenient => {
                        s.trim().parse::<$t>().map_err(|_| no_conversion::<Self>(value))
                    }
                    _ => Err(no_conversion::<Self>(value)),
                }
            }
        }
    )*};
}

from_value_float!(f32, f64);

impl FromValue for String {
    const TYPE_NAME: &'static str = "String";

    fn from_value(value: &Value, lenient: bool) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Null if lenient => Ok("null".to_string()),
            Value::Bool(b) if lenient => Ok(b.to_string()),
            Value::Integer(i) if lenient => Ok(i.to_string()),
            Value::Real(r) if lenient => Ok(r.to_string()),
            _ => Err(no_conversion::<Self>(value)),
        }
    }
}

impl Value {
    /// Strict extraction: no cross-category conversion.
    pub fn get<T: FromValue>(&self) -> Result<T> {
        T::from_value(self, false)
    }

    /// Lenient extraction: the cross-category matrix described in the
    /// module docs applies.
    pub fn get_lenient<T: FromValue>(&self) -> Result<T> {
        T::from_value(self, true)
    }

    /// Lenient extraction with a Null fallback: a Null value yields
    /// `default` instead of an error. Conversion failures on non-Null
    /// values still propagate.
    pub fn get_or<T: FromValue>(&self, default: T) -> Result<T> {
        if self.is_null() {
            Ok(default)
        } else {
            T::from_value(self, true)
        }
    }

    /// Soft extraction: a Null value leaves `target` untouched and
    /// returns `Ok(false)`; otherwise the lenient extraction result is
    /// written through and `Ok(true)` is returned.
    pub fn try_get<T: FromValue>(&self, target: &mut T) -> Result<bool> {
        if self.is_null() {
            return Ok(false);
        }
        *target = T::from_value(self, true)?;
        Ok(true)
    }

    /// Soft extraction through a consumer: a Null value returns
    /// `Ok(false)` without invoking `consume`; otherwise the lenient
    /// extraction result is handed to `consume`, whose verdict is
    /// returned — letting the caller veto an in-range-but-unwanted value.
    pub fn try_get_with<T, F>(&self, consume: F) -> Result<bool>
    where
        T: FromValue,
        F: FnOnce(T) -> bool,
    {
        if self.is_null() {
            return Ok(false);
        }
        Ok(consume(T::from_value(self, true)?))
    }
}
