//! Field access for record types.
//!
//! The pipeline never looks inside a record directly; it reads fields
//! through the [`Fielded`] trait (or an equivalent free accessor
//! function), so any struct can be browsed without the engine knowing
//! its shape.

use crate::value::Value;

/// Trait for record types the pipeline can browse.
///
/// Unknown field keys must map to [`Value::None`]; the engines treat
/// them as "never matches" / "sorts last" rather than erroring.
///
/// # Example
///
/// ```
/// use roster_facet::{Fielded, Number, Value};
///
/// struct Member {
///     name: String,
///     gpa: f64,
/// }
///
/// impl Fielded for Member {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Str(&self.name),
///             "gpa" => Value::Number(Number::F64(self.gpa)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let member = Member { name: "Sarah Chen".into(), gpa: 3.8 };
/// assert_eq!(member.field_value("name"), Value::Str("Sarah Chen"));
/// assert_eq!(member.field_value("unknown"), Value::None);
/// ```
pub trait Fielded {
    /// Returns the value of a field for matching and ordering.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function form, suitable for passing to the engine
    /// functions directly: `search(&records, query, fields, Member::accessor)`.
    fn accessor<'a>(record: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        record.field_value(field)
    }
}
