//! The sort engine: stable multi-key ordering.
//!
//! Strings compare case-insensitively, numbers and dates by value, and
//! missing values sort last under *both* directions: descending
//! reverses the order of present values only, so a "sort by GPA,
//! highest first" never floats the records with no GPA to the top.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Applies this direction to an ordering of two present values.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One sort key: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// The field to order by.
    pub field: String,
    /// The direction.
    pub dir: Dir,
}

impl SortKey {
    /// Creates a sort key.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortKey {
            field: field.into(),
            dir,
        }
    }
}

/// An ordering specification: a primary key plus tie-breakers.
///
/// # Example
///
/// ```
/// use roster_facet::{Dir, SortSpec};
///
/// // GPA, highest first; ties broken by name
/// let spec = SortSpec::desc("gpa").then("name", Dir::Asc);
/// assert_eq!(spec.keys().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Creates an empty spec (input order preserved).
    pub fn unsorted() -> Self {
        SortSpec::default()
    }

    /// Creates a spec ordering by one field.
    pub fn by(field: impl Into<String>, dir: Dir) -> Self {
        SortSpec {
            keys: vec![SortKey::new(field, dir)],
        }
    }

    /// Creates an ascending spec for one field.
    pub fn asc(field: impl Into<String>) -> Self {
        SortSpec::by(field, Dir::Asc)
    }

    /// Creates a descending spec for one field.
    pub fn desc(field: impl Into<String>) -> Self {
        SortSpec::by(field, Dir::Desc)
    }

    /// Appends a tie-breaking key.
    pub fn then(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.keys.push(SortKey::new(field, dir));
        self
    }

    /// Returns the keys, primary first.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns `true` if no keys are set.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Compares two present values of the same shape.
///
/// Strings compare case-insensitively (without allocating lowercase
/// copies); numbers and dates by value. Returns `None` for shapes with
/// no defined order (tag sets, mismatched types, NaN).
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Str(a), Value::Str(b)) => Some(
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase)),
        ),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Compares two records under a [`SortSpec`].
///
/// Missing values sort last regardless of direction; pairs with no
/// defined order fall through to the next key, and finally to `Equal`
/// (input order, since the sort is stable).
pub fn compare_records<T, F>(a: &T, b: &T, spec: &SortSpec, accessor: &F) -> Ordering
where
    for<'c> F: Fn(&'c T, &str) -> Value<'c>,
{
    for key in spec.keys() {
        let va = accessor(a, &key.field);
        let vb = accessor(b, &key.field);

        let ordering = match (va.is_none(), vb.is_none()) {
            (true, true) => Ordering::Equal,
            // Missing sorts last, in both directions.
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match compare_values(&va, &vb) {
                Some(ordering) => key.dir.apply(ordering),
                None => Ordering::Equal,
            },
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Returns `records` ordered by `spec`, without mutating the input.
///
/// The sort is stable: records comparing equal keep their input order.
/// An empty spec returns the input order unchanged.
pub fn sort_records<'a, I, T, F>(records: I, spec: &SortSpec, accessor: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    let mut ordered: Vec<&'a T> = records.into_iter().collect();
    if !spec.is_empty() {
        ordered.sort_by(|a, b| compare_records(*a, *b, spec, &accessor));
    }
    ordered
}
