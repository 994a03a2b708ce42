//! The filter engine: conjunctive facet constraints over a collection.
//!
//! The engine compiles the `(FilterState, FacetConfig)` pair into a
//! constraint plan once per run, then tests every record against it. A
//! record survives only if it satisfies every active constraint.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::config::{FacetConfig, FacetKind};
use crate::search::Matcher;
use crate::state::{FilterState, FilterValue};
use crate::value::{Date, Number, Value};

/// One active, compiled facet constraint.
enum Constraint<'s> {
    /// Field equals the selected option (case-sensitive, options are
    /// enumerated rather than typed).
    Is(&'s str),
    /// Scalar field is a member of the set; a tag-set field matches on
    /// non-empty intersection.
    OneOf(&'s BTreeSet<String>),
    /// Numeric field lies within the inclusive bounds.
    NumberWithin {
        min: Option<Number>,
        max: Option<Number>,
    },
    /// Date field lies within the inclusive bounds.
    DateWithin {
        start: Option<Date>,
        end: Option<Date>,
    },
    /// String field contains the query, case-insensitively.
    Contains(Matcher),
}

impl Constraint<'_> {
    /// Tests one field value.
    ///
    /// Absent or wrong-typed field values never satisfy a constraint:
    /// a bounded range cannot hold for a value that has no number, and
    /// a select option cannot equal a value that has no string.
    fn matches(&self, field: &Value<'_>) -> bool {
        match (self, field) {
            (Constraint::Is(option), Value::Str(s)) => s == option,
            (Constraint::OneOf(selected), Value::Str(s)) => selected.contains(*s),
            (Constraint::OneOf(selected), Value::Tags(tags)) => {
                tags.iter().any(|tag| selected.contains(tag.as_str()))
            }
            (Constraint::NumberWithin { min, max }, Value::Number(n)) => {
                let above_min = min.map_or(true, |m| {
                    matches!(n.compare(m), Some(Ordering::Greater | Ordering::Equal))
                });
                let below_max = max.map_or(true, |m| {
                    matches!(n.compare(m), Some(Ordering::Less | Ordering::Equal))
                });
                above_min && below_max
            }
            (Constraint::DateWithin { start, end }, Value::Date(d)) => {
                start.map_or(true, |s| *d >= s) && end.map_or(true, |e| *d <= e)
            }
            (Constraint::Contains(matcher), Value::Str(s)) => matcher.is_match(s),
            _ => false,
        }
    }
}

/// Compiles the active constraints, in config order.
///
/// Skipped outright: facets with no value in the state, inactive values
/// (the per-kind "no filter" sentinel), and values whose shape does not
/// match the declared kind. Malformed state is "no constraint", never
/// an error. State keys with no facet in the config are ignored because
/// the plan is driven by the config side.
fn build_plan<'s>(state: &'s FilterState, config: &'s FacetConfig) -> Vec<(&'s str, Constraint<'s>)> {
    let mut plan = Vec::new();
    for facet in config.facets() {
        let Some(value) = state.get(&facet.key) else {
            continue;
        };
        if !value.is_active() {
            continue;
        }
        let constraint = match (facet.kind, value) {
            (FacetKind::SingleSelect, FilterValue::Single(Some(option))) => {
                Constraint::Is(option)
            }
            (FacetKind::MultiSelect, FilterValue::Multi(selected)) => Constraint::OneOf(selected),
            (FacetKind::NumberRange, FilterValue::NumberRange { min, max }) => {
                Constraint::NumberWithin {
                    min: *min,
                    max: *max,
                }
            }
            (FacetKind::DateRange, FilterValue::DateRange { start, end }) => {
                Constraint::DateWithin {
                    start: *start,
                    end: *end,
                }
            }
            (FacetKind::FreeText, FilterValue::Text(text)) => match Matcher::new(text) {
                Some(matcher) => Constraint::Contains(matcher),
                None => continue,
            },
            _ => continue,
        };
        plan.push((facet.key.as_str(), constraint));
    }
    plan
}

/// Tests a single record against every active facet constraint.
pub fn matches_filters<T, F>(
    record: &T,
    state: &FilterState,
    config: &FacetConfig,
    accessor: &F,
) -> bool
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    build_plan(state, config)
        .iter()
        .all(|(key, constraint)| constraint.matches(&accessor(record, *key)))
}

/// Filters `records` to those satisfying every active facet constraint.
///
/// Constraints conjoin: a record must satisfy all of them. An empty or
/// fully-inactive state returns every record.
///
/// # Example
///
/// ```
/// use roster_facet::{apply_filters, FacetConfig, FieldFacet, FilterState, Value};
///
/// struct Member {
///     name: String,
///     department: String,
/// }
///
/// fn accessor<'a>(m: &'a Member, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Str(&m.name),
///         "department" => Value::Str(&m.department),
///         _ => Value::None,
///     }
/// }
///
/// let config = FacetConfig::new().facet(FieldFacet::multi_select(
///     "department",
///     "Department",
///     ["Engineering", "Product", "Design", "Marketing"],
/// ));
/// let members = vec![
///     Member { name: "Sarah".into(), department: "Engineering".into() },
///     Member { name: "Marcus".into(), department: "Product".into() },
///     Member { name: "Aisha".into(), department: "Design".into() },
///     Member { name: "Leo".into(), department: "Marketing".into() },
/// ];
///
/// let state = FilterState::new().select_many("department", ["Engineering", "Design"]);
/// let hits = apply_filters(&members, &state, &config, accessor);
/// assert_eq!(hits.len(), 2);
/// ```
pub fn apply_filters<'a, I, T, F>(
    records: I,
    state: &FilterState,
    config: &FacetConfig,
    accessor: F,
) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    let records = records.into_iter();
    let plan = build_plan(state, config);
    if plan.is_empty() {
        return records.collect();
    }
    records
        .filter(|&record| {
            plan.iter()
                .all(|(key, constraint)| constraint.matches(&accessor(record, *key)))
        })
        .collect()
}
