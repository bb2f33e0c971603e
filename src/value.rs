//! Typed values stored in an INI document.
//!
//! Every entry in a [`Section`](crate::Section) holds a [`Value`]. Text read from a
//! file always becomes [`Value::Raw`] and is written back exactly as stored; the other
//! variants only appear when a value is added programmatically. Keeping the variant
//! around until write time is what lets a `true` be written as `yes` without confusing
//! it with the string `"yes"`.
//!
//! ## Rendering
//!
//! | Variant | [`Value::render`] | Written by `save` |
//! |---------|-------------------|-------------------|
//! | `String("a b")` | `a b` | `"a b"` |
//! | `Raw("a b")` | `a b` | `a b` |
//! | `Integer(42)` | `42` | `42` |
//! | `Float(1.5)` | `1.5` | `1.5` |
//! | `Boolean(true)` | `yes` | `yes` |
//!
//! ## Coercion
//!
//! ```rust
//! use ini_doc::Value;
//!
//! assert_eq!(Value::from("42").coerce_i64(), 42);
//! assert_eq!(Value::from("not a number").coerce_i64(), 0);
//! assert_eq!(Value::from(2.75).coerce_i64(), 2);
//! assert!(Value::from("YES").coerce_bool());
//! assert!(!Value::from("true").coerce_bool());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The literal written for `Boolean(true)`.
pub const TRUE_TOKEN: &str = "yes";
/// The literal written for `Boolean(false)`.
pub const FALSE_TOKEN: &str = "no";

/// A value held by one INI key.
///
/// # Examples
///
/// ```rust
/// use ini_doc::Value;
///
/// let value = Value::from(true);
/// assert!(value.is_bool());
/// assert_eq!(value.render(), "yes");
/// assert_eq!(value.to_string(), "yes");
///
/// let text = Value::from("hello");
/// assert_eq!(text.render(), "hello");
/// assert_eq!(text.to_string(), "\"hello\"");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Text added through the API. Quoted when written.
    String(String),
    /// Text read from a file, already unquoted. Written verbatim.
    Raw(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Default for Value {
    fn default() -> Self {
        Value::String(String::new())
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Value::Raw(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns the string slice if this is a `String` or `Raw` value.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer` value. No parsing is attempted.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Renders the value as text, without the quotes the writer adds around strings.
    ///
    /// This is what [`Document::get_value`](crate::Document::get_value) returns.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Value::String(s) | Value::Raw(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => bool_token(*b).to_string(),
        }
    }

    /// Integer view of the value. Anything that does not parse as base-10 yields `0`.
    #[must_use]
    pub fn coerce_i64(&self) -> i64 {
        match self {
            Value::Integer(i) => *i,
            // Saturating truncation toward zero
            Value::Float(f) => *f as i64,
            Value::Boolean(b) => i64::from(*b),
            Value::String(s) | Value::Raw(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Float view of the value. Anything that does not parse yields `0.0`.
    #[must_use]
    pub fn coerce_f64(&self) -> f64 {
        match self {
            Value::Float(f) => *f,
            Value::Integer(i) => *i as f64,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::String(s) | Value::Raw(s) => s.trim().parse().unwrap_or(0.0),
        }
    }

    /// Boolean view of the value: only `yes` (any case) is true.
    #[must_use]
    pub fn coerce_bool(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::String(s) | Value::Raw(s) => s.eq_ignore_ascii_case(TRUE_TOKEN),
            Value::Integer(_) | Value::Float(_) => false,
        }
    }
}

pub(crate) const fn bool_token(b: bool) -> &'static str {
    if b {
        TRUE_TOKEN
    } else {
        FALSE_TOKEN
    }
}

/// Formats the value the way it appears on the right-hand side of `key=` in a file.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Raw(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Boolean(b) => f.write_str(bool_token(*b)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) | Value::Raw(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, integer, float or boolean")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::Integer)
                    .map_err(|_| E::custom(format!("integer {} is out of range", value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}
