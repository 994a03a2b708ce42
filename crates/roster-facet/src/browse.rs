//! Pipeline composition: Search → Filter → Sort → Paginate.
//!
//! [`Browse`] bundles a facet configuration with the caller's current
//! query, filter state, ordering, and page request, and runs the four
//! engines in their fixed order. It holds no results and no caches;
//! re-running with identical inputs is observably identical, so a UI
//! may re-invoke it on every state change.

use crate::config::FacetConfig;
use crate::filter::{apply_filters, matches_filters};
use crate::page::{paginate, PageResult, PageSpec};
use crate::search::{search, Matcher};
use crate::sort::{sort_records, SortSpec};
use crate::state::FilterState;
use crate::value::Value;

/// A composed browse over a record collection.
///
/// # Example
///
/// ```
/// use roster_facet::{
///     Browse, FacetConfig, FieldFacet, FilterState, PageSpec, SortSpec, Value,
/// };
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
/// let config = FacetConfig::new()
///     .facet(FieldFacet::multi_select("department", "Department", ["Engineering", "Design"]))
///     .searchable(["name"]);
///
/// let members = vec![
///     Member { name: "Sarah Chen".into(), department: "Engineering".into() },
///     Member { name: "Aisha Patel".into(), department: "Design".into() },
/// ];
///
/// let page = Browse::new(config)
///     .state(FilterState::new().select_many("department", ["Engineering"]))
///     .sort(SortSpec::asc("name"))
///     .page(PageSpec::first(25))
///     .run(&members, accessor);
///
/// assert_eq!(page.total_count, 1);
/// assert_eq!(page.items[0].name, "Sarah Chen");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Browse {
    config: FacetConfig,
    query: String,
    state: FilterState,
    sort: SortSpec,
    page: Option<PageSpec>,
}

impl Browse {
    /// Creates a browse over the given facet configuration.
    pub fn new(config: FacetConfig) -> Self {
        Browse {
            config,
            ..Browse::default()
        }
    }

    /// Sets the search query (blank means "no search").
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the filter state.
    pub fn state(mut self, state: FilterState) -> Self {
        self.state = state;
        self
    }

    /// Sets the ordering.
    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the page request. Without one, `run` returns everything as
    /// a single page.
    pub fn page(mut self, page: PageSpec) -> Self {
        self.page = Some(page);
        self
    }

    /// Returns the facet configuration this browse runs under.
    pub fn config(&self) -> &FacetConfig {
        &self.config
    }

    /// Search, filter, and sort: everything up to pagination.
    fn refine<'a, T, F>(&self, records: &'a [T], accessor: &F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let found = search(
            records,
            &self.query,
            self.config.searchable_fields(),
            accessor,
        );
        let kept = apply_filters(found, &self.state, &self.config, accessor);
        sort_records(kept, &self.sort, accessor)
    }

    /// Runs the full pipeline and returns the requested page.
    pub fn run<'a, T, F>(&self, records: &'a [T], accessor: F) -> PageResult<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let refined = self.refine(records, &accessor);
        match &self.page {
            Some(spec) => paginate(refined, spec),
            None => {
                let total_count = refined.len();
                PageResult {
                    items: refined,
                    page: 1,
                    total_pages: 1,
                    total_count,
                }
            }
        }
    }

    /// Runs the full pipeline and clones the page's records.
    pub fn run_cloned<T, F>(&self, records: &[T], accessor: F) -> PageResult<T>
    where
        T: Clone,
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.run(records, accessor).cloned()
    }

    /// Tests whether a single record would survive the search and
    /// filter stages.
    pub fn matches<T, F>(&self, record: &T, accessor: F) -> bool
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let search_hit = match Matcher::new(&self.query) {
            Some(matcher) => self
                .config
                .searchable_fields()
                .iter()
                .any(|field| matcher.matches_value(&accessor(record, field.as_str()))),
            None => true,
        };
        search_hit && matches_filters(record, &self.state, &self.config, &accessor)
    }

    /// Counts the records surviving search and filtering.
    pub fn count<T, F>(&self, records: &[T], accessor: F) -> usize
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        records
            .iter()
            .filter(|record| self.matches(*record, &accessor))
            .count()
    }

    /// Returns `true` if any record survives search and filtering.
    pub fn any<T, F>(&self, records: &[T], accessor: F) -> bool
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        records.iter().any(|record| self.matches(record, &accessor))
    }

    /// Returns the first record in sorted order, if any survives.
    pub fn find<'a, T, F>(&self, records: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.refine(records, &accessor).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldFacet;
    use crate::sort::Dir;
    use crate::value::{Date, Number};

    #[derive(Debug, Clone, PartialEq)]
    struct Member {
        name: String,
        department: String,
        skills: Vec<String>,
        gpa: f64,
        joined: Date,
    }

    fn accessor<'a>(member: &'a Member, field: &str) -> Value<'a> {
        match field {
            "name" => Value::Str(&member.name),
            "department" => Value::Str(&member.department),
            "skills" => Value::Tags(&member.skills),
            "gpa" => Value::Number(Number::F64(member.gpa)),
            "joined" => Value::Date(member.joined),
            _ => Value::None,
        }
    }

    fn member(name: &str, department: &str, skills: &[&str], gpa: f64, joined: i64) -> Member {
        Member {
            name: name.to_string(),
            department: department.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            gpa,
            joined: Date(joined),
        }
    }

    fn sample() -> Vec<Member> {
        vec![
            member("Sarah Chen", "Engineering", &["React", "AWS"], 3.8, 500),
            member("Marcus Johnson", "Product", &["Analytics"], 3.6, 400),
            member("Aisha Patel", "Design", &["Figma"], 3.9, 300),
            member("Leo Novak", "Engineering", &["Go", "AWS"], 3.4, 200),
            member("Priya Shah", "Engineering", &["React"], 3.7, 100),
        ]
    }

    fn config() -> FacetConfig {
        FacetConfig::new()
            .facet(FieldFacet::multi_select(
                "department",
                "Department",
                ["Engineering", "Product", "Design"],
            ))
            .facet(FieldFacet::multi_select(
                "skills",
                "Skills",
                ["React", "AWS", "Analytics", "Figma", "Go"],
            ))
            .facet(FieldFacet::number_range("gpa", "GPA"))
            .facet(FieldFacet::date_range("joined", "Joined"))
            .searchable(["name", "skills"])
    }

    #[test]
    fn stages_run_in_order() {
        let members = sample();
        let page = Browse::new(config())
            .query("aws")
            .state(FilterState::new().select_many("department", ["Engineering"]))
            .sort(SortSpec::asc("name"))
            .page(PageSpec::first(10))
            .run(&members, accessor);

        let names: Vec<&str> = page.items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Leo Novak", "Sarah Chen"]);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn without_page_spec_everything_is_one_page() {
        let members = sample();
        let page = Browse::new(config()).run(&members, accessor);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.len(), 5);
    }

    #[test]
    fn pagination_applies_after_sorting() {
        let members = sample();
        let browse = Browse::new(config()).sort(SortSpec::desc("gpa"));

        let page1 = browse.clone().page(PageSpec::new(1, 2)).run(&members, accessor);
        let names: Vec<&str> = page1.items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Aisha Patel", "Sarah Chen"]);
        assert_eq!(page1.total_pages, 3);

        let page3 = browse.clone().page(PageSpec::new(3, 2)).run(&members, accessor);
        let names: Vec<&str> = page3.items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Leo Novak"]);
    }

    #[test]
    fn rerun_is_idempotent() {
        let members = sample();
        let browse = Browse::new(config())
            .query("react")
            .state(FilterState::new().at_least("gpa", 3.5))
            .sort(SortSpec::by("gpa", Dir::Desc))
            .page(PageSpec::first(2));

        let first = browse.run(&members, accessor).cloned();
        let second = browse.run(&members, accessor).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn run_cloned_matches_run() {
        let members = sample();
        let browse = Browse::new(config()).query("priya");
        let refs = browse.run(&members, accessor);
        let owned = browse.run_cloned(&members, accessor);
        assert_eq!(owned.items.len(), refs.items.len());
        assert_eq!(&owned.items[0], refs.items[0]);
    }

    #[test]
    fn count_any_find() {
        let members = sample();
        let browse = Browse::new(config())
            .state(FilterState::new().select_many("skills", ["React"]))
            .sort(SortSpec::asc("name"));

        assert_eq!(browse.count(&members, accessor), 2);
        assert!(browse.any(&members, accessor));
        assert_eq!(
            browse.find(&members, accessor).map(|m| m.name.as_str()),
            Some("Priya Shah")
        );

        let nothing = Browse::new(config()).query("nobody");
        assert!(!nothing.any(&members, accessor));
        assert!(nothing.find(&members, accessor).is_none());
    }

    #[test]
    fn matches_agrees_with_run() {
        let members = sample();
        let browse = Browse::new(config())
            .query("aws")
            .state(FilterState::new().at_least("gpa", 3.5));

        let surviving: Vec<&Member> = browse.run(&members, accessor).items;
        for member in &members {
            let expected = surviving.iter().any(|m| std::ptr::eq(*m, member));
            assert_eq!(browse.matches(member, accessor), expected);
        }
    }
}
