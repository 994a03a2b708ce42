//! Filter state: the caller-supplied value of each facet.
//!
//! Each facet kind has its own value shape with an explicit "no filter"
//! sentinel, rather than coercing empty strings and empty sets to
//! "unset". [`FilterValue::is_active`] is the single source of truth
//! for whether a value constrains anything.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::value::{Date, Number};

/// The current value of one facet.
///
/// The inactive sentinel per variant:
/// - `Single(None)`: nothing selected
/// - `Multi` with an empty set
/// - `NumberRange` / `DateRange` with both bounds absent
/// - `Text` that is blank or whitespace-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterValue {
    /// One selected option, or none.
    Single(Option<String>),
    /// The selected subset of options.
    Multi(BTreeSet<String>),
    /// Inclusive numeric bounds; an absent bound is unbounded.
    NumberRange {
        /// Lower bound, inclusive.
        min: Option<Number>,
        /// Upper bound, inclusive.
        max: Option<Number>,
    },
    /// Inclusive chronological bounds; an absent bound is unbounded.
    DateRange {
        /// Earliest date, inclusive.
        start: Option<Date>,
        /// Latest date, inclusive.
        end: Option<Date>,
    },
    /// Free-text query scoped to one field.
    Text(String),
}

impl FilterValue {
    /// Returns `true` if this value constrains records at all.
    ///
    /// Inactive values are skipped by the filter engine; they are the
    /// explicit form of "no filter", not an error.
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Single(selected) => selected.is_some(),
            FilterValue::Multi(selected) => !selected.is_empty(),
            FilterValue::NumberRange { min, max } => min.is_some() || max.is_some(),
            FilterValue::DateRange { start, end } => start.is_some() || end.is_some(),
            FilterValue::Text(text) => !text.trim().is_empty(),
        }
    }
}

/// The filter state of one page: facet key to current value.
///
/// Built fresh per query from UI state. Keys not present in the
/// [`FacetConfig`](crate::FacetConfig) are ignored by the engine.
///
/// # Example
///
/// ```
/// use roster_facet::FilterState;
///
/// let state = FilterState::new()
///     .select_many("department", ["Engineering", "Design"])
///     .at_least("gpa", 3.7)
///     .matching("location", "berlin");
///
/// assert!(state.get("department").is_some());
/// assert!(state.get("skills").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(flatten)]
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    /// Creates an empty state (no constraints).
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Sets a facet value directly.
    pub fn set(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Selects one option on a single-select facet.
    pub fn select(self, key: impl Into<String>, option: impl Into<String>) -> Self {
        self.set(key, FilterValue::Single(Some(option.into())))
    }

    /// Replaces the selection of a multi-select facet.
    pub fn select_many<I, S>(self, key: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(
            key,
            FilterValue::Multi(options.into_iter().map(Into::into).collect()),
        )
    }

    /// Adds an option to a multi-select facet if absent, removes it if
    /// present (checkbox semantics).
    pub fn toggle(mut self, key: impl Into<String>, option: impl Into<String>) -> Self {
        let entry = self
            .values
            .entry(key.into())
            .or_insert_with(|| FilterValue::Multi(BTreeSet::new()));
        match entry {
            FilterValue::Multi(selected) => {
                let option = option.into();
                if !selected.remove(&option) {
                    selected.insert(option);
                }
            }
            other => *other = FilterValue::Multi(BTreeSet::from([option.into()])),
        }
        self
    }

    /// Sets the lower bound of a numeric range facet, keeping any upper
    /// bound already present.
    pub fn at_least(mut self, key: impl Into<String>, min: impl Into<Number>) -> Self {
        let entry = self.values.entry(key.into()).or_insert(FilterValue::NumberRange {
            min: None,
            max: None,
        });
        match entry {
            FilterValue::NumberRange { min: lower, .. } => *lower = Some(min.into()),
            other => {
                *other = FilterValue::NumberRange {
                    min: Some(min.into()),
                    max: None,
                }
            }
        }
        self
    }

    /// Sets the upper bound of a numeric range facet, keeping any lower
    /// bound already present.
    pub fn at_most(mut self, key: impl Into<String>, max: impl Into<Number>) -> Self {
        let entry = self.values.entry(key.into()).or_insert(FilterValue::NumberRange {
            min: None,
            max: None,
        });
        match entry {
            FilterValue::NumberRange { max: upper, .. } => *upper = Some(max.into()),
            other => {
                *other = FilterValue::NumberRange {
                    min: None,
                    max: Some(max.into()),
                }
            }
        }
        self
    }

    /// Sets both bounds of a numeric range facet.
    pub fn between(
        self,
        key: impl Into<String>,
        min: impl Into<Number>,
        max: impl Into<Number>,
    ) -> Self {
        self.set(
            key,
            FilterValue::NumberRange {
                min: Some(min.into()),
                max: Some(max.into()),
            },
        )
    }

    /// Sets the earliest date of a date range facet, keeping any end
    /// bound already present.
    pub fn since(mut self, key: impl Into<String>, start: impl Into<Date>) -> Self {
        let entry = self.values.entry(key.into()).or_insert(FilterValue::DateRange {
            start: None,
            end: None,
        });
        match entry {
            FilterValue::DateRange { start: lower, .. } => *lower = Some(start.into()),
            other => {
                *other = FilterValue::DateRange {
                    start: Some(start.into()),
                    end: None,
                }
            }
        }
        self
    }

    /// Sets the latest date of a date range facet, keeping any start
    /// bound already present.
    pub fn until(mut self, key: impl Into<String>, end: impl Into<Date>) -> Self {
        let entry = self.values.entry(key.into()).or_insert(FilterValue::DateRange {
            start: None,
            end: None,
        });
        match entry {
            FilterValue::DateRange { end: upper, .. } => *upper = Some(end.into()),
            other => {
                *other = FilterValue::DateRange {
                    start: None,
                    end: Some(end.into()),
                }
            }
        }
        self
    }

    /// Sets the query of a free-text facet.
    pub fn matching(self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.set(key, FilterValue::Text(text.into()))
    }

    /// Removes any value for the given facet.
    pub fn clear(mut self, key: &str) -> Self {
        self.values.remove(key);
        self
    }

    /// Returns the value for a facet, if set.
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// Returns `true` if no facet has a value at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the facet keys with an active value.
    pub fn active_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|(_, v)| v.is_active())
            .map(|(k, _)| k.as_str())
    }
}
