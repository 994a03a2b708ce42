//! Case-insensitive substring search across declared fields.
//!
//! The query is escaped and compiled once per run with
//! [`regex::RegexBuilder`] in case-insensitive mode, so matching does
//! not lowercase every field of every record.

use regex::{Regex, RegexBuilder};

use crate::value::Value;

/// A compiled case-insensitive substring matcher.
///
/// `Matcher::new` returns `None` for a blank or whitespace-only query,
/// the identity case, where the caller skips matching entirely.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Regex,
}

impl Matcher {
    /// Compiles a matcher for the given query, or `None` if the query
    /// is blank.
    pub fn new(query: &str) -> Option<Matcher> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let pattern = RegexBuilder::new(&regex::escape(trimmed))
            .case_insensitive(true)
            .build()
            .ok()?;
        Some(Matcher { pattern })
    }

    /// Tests a string for a case-insensitive substring match.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Tests a field value. Strings match on containment; tag sets match
    /// if any member matches; every other shape never matches.
    pub fn matches_value(&self, value: &Value<'_>) -> bool {
        match value {
            Value::Str(s) => self.is_match(s),
            Value::Tags(tags) => tags.iter().any(|tag| self.is_match(tag)),
            _ => false,
        }
    }
}

/// Filters `records` to those where any of `fields` matches `query`.
///
/// A blank query returns every record (identity). Unknown fields yield
/// [`Value::None`] from the accessor and simply never match; they are
/// not an error.
///
/// # Example
///
/// ```
/// use roster_facet::{search, Value};
///
/// struct Member {
///     name: String,
///     skills: Vec<String>,
/// }
///
/// fn accessor<'a>(m: &'a Member, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Str(&m.name),
///         "skills" => Value::Tags(&m.skills),
///         _ => Value::None,
///     }
/// }
///
/// let members = vec![
///     Member { name: "Sarah Chen".into(), skills: vec!["React".into(), "AWS".into()] },
///     Member { name: "Marcus Johnson".into(), skills: vec!["Analytics".into()] },
/// ];
///
/// let hits = search(&members, "react", &["name", "skills"], accessor);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Sarah Chen");
/// ```
pub fn search<'a, I, T, S, F>(records: I, query: &str, fields: &[S], accessor: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    S: AsRef<str>,
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    let records = records.into_iter();
    let Some(matcher) = Matcher::new(query) else {
        return records.collect();
    };
    records
        .filter(|&record| {
            fields
                .iter()
                .any(|field| matcher.matches_value(&accessor(record, field.as_ref())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Member {
        name: String,
        skills: Vec<String>,
        gpa: f64,
    }

    fn accessor<'a>(member: &'a Member, field: &str) -> Value<'a> {
        match field {
            "name" => Value::Str(&member.name),
            "skills" => Value::Tags(&member.skills),
            "gpa" => Value::Number(crate::Number::F64(member.gpa)),
            _ => Value::None,
        }
    }

    fn sample() -> Vec<Member> {
        vec![
            Member {
                name: "Sarah Chen".to_string(),
                skills: vec!["React".to_string(), "AWS".to_string()],
                gpa: 3.8,
            },
            Member {
                name: "Marcus Johnson".to_string(),
                skills: vec!["Analytics".to_string()],
                gpa: 3.6,
            },
            Member {
                name: "Aisha Patel".to_string(),
                skills: vec!["Figma".to_string(), "User Research".to_string()],
                gpa: 3.9,
            },
        ]
    }

    #[test]
    fn blank_query_is_identity() {
        let members = sample();
        assert_eq!(search(&members, "", &["name"], accessor).len(), 3);
        assert_eq!(search(&members, "   ", &["name"], accessor).len(), 3);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let members = sample();
        let hits = search(&members, "sArAh", &["name"], accessor);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Chen");
    }

    #[test]
    fn tag_fields_match_any_member() {
        let members = sample();
        let hits = search(&members, "react", &["name", "skills"], accessor);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Chen");
    }

    #[test]
    fn any_declared_field_may_match() {
        let members = sample();
        let hits = search(&members, "johnson", &["name", "skills"], accessor);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Marcus Johnson");
    }

    #[test]
    fn unknown_fields_never_match() {
        let members = sample();
        assert!(search(&members, "react", &["nonexistent"], accessor).is_empty());
    }

    #[test]
    fn non_text_fields_never_match() {
        let members = sample();
        assert!(search(&members, "3.8", &["gpa"], accessor).is_empty());
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let members = vec![Member {
            name: "C++ study group (.*)".to_string(),
            skills: vec![],
            gpa: 3.0,
        }];
        let hits = search(&members, "(.*)", &["name"], accessor);
        assert_eq!(hits.len(), 1);
        assert!(search(&members, "c++", &["name"], accessor).len() == 1);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let members = sample();
        let hits = search(&members, "  chen  ", &["name"], accessor);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn composes_over_previous_results() {
        let members = sample();
        let first = search(&members, "a", &["name"], accessor);
        let second = search(first, "chen", &["name"], accessor);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "Sarah Chen");
    }
}
