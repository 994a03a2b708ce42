//! Runtime value types for field access and comparison.
//!
//! The [`Value`] enum represents the runtime value of one record field,
//! borrowed from the record for the duration of a pipeline run.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Runtime value of a record field, borrowed from the record.
///
/// An accessor function (or a [`Fielded`](crate::Fielded) impl) returns
/// this type for every field the pipeline may touch. Fields the record
/// does not have map to [`Value::None`].
///
/// # Example
///
/// ```
/// use roster_facet::{Number, Value};
///
/// struct Member {
///     name: String,
///     skills: Vec<String>,
///     gpa: f64,
/// }
///
/// fn accessor<'a>(member: &'a Member, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Str(&member.name),
///         "skills" => Value::Tags(&member.skills),
///         "gpa" => Value::Number(Number::F64(member.gpa)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    Str(&'a str),
    /// Numeric value.
    Number(Number),
    /// Calendar value (milliseconds since Unix epoch).
    Date(Date),
    /// Boolean value.
    Bool(bool),
    /// Set-of-string value (skills, tags), borrowed.
    Tags(&'a [String]),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the date value, if present.
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the tag set, if present.
    pub fn as_tags(&self) -> Option<&'a [String]> {
        match self {
            Value::Tags(t) => Some(t),
            _ => None,
        }
    }
}

/// Numeric value preserving integer and float precision.
///
/// Numbers are stored in one of three variants:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Comparisons between variants convert to a common type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed variants.
    ///
    /// Returns `None` when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// Calendar value represented as milliseconds since the Unix epoch.
///
/// A simple, timezone-agnostic representation suitable for chronological
/// comparison. Convert from your preferred datetime type at the accessor
/// boundary.
///
/// # Example
///
/// ```
/// use roster_facet::Date;
///
/// let earlier = Date::from_secs(1_700_000_000);
/// let later = Date::from_secs(1_710_000_000);
/// assert!(earlier < later);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Date(pub i64);

impl Date {
    /// Creates a date from milliseconds since the Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Date(millis)
    }

    /// Creates a date from seconds since the Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Date(secs * 1000)
    }

    /// Returns the date as milliseconds since the Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the date as seconds since the Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }
}

impl From<i64> for Date {
    fn from(millis: i64) -> Self {
        Date(millis)
    }
}
