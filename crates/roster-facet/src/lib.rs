//! Faceted browsing for in-memory record collections.
//!
//! roster-facet turns the filter/search/sort/paginate plumbing that
//! every listing page reimplements into one declarative pipeline:
//!
//! - A [`FacetConfig`] declares, per page, which fields can be filtered
//!   and how (single/multi select, numeric or date range, free text)
//!   plus which fields the search box covers.
//! - A [`FilterState`] carries the user's current facet values, with an
//!   explicit "no filter" sentinel per kind.
//! - Four pure engines ([`search`], [`apply_filters`], [`sort_records`],
//!   [`paginate`]) transform a record slice into the page to render,
//!   composed in fixed order by [`Browse`].
//!
//! Records stay opaque: the engines read fields through a [`Fielded`]
//! impl or an accessor function returning [`Value`], so any struct can
//! be browsed.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_facet::{
//!     Browse, FacetConfig, Fielded, FieldFacet, FilterState, Number, PageSpec,
//!     SortSpec, Value,
//! };
//!
//! struct Member {
//!     name: String,
//!     department: String,
//!     skills: Vec<String>,
//!     gpa: f64,
//! }
//!
//! impl Fielded for Member {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::Str(&self.name),
//!             "department" => Value::Str(&self.department),
//!             "skills" => Value::Tags(&self.skills),
//!             "gpa" => Value::Number(Number::F64(self.gpa)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let members = vec![
//!     Member {
//!         name: "Sarah Chen".into(),
//!         department: "Engineering".into(),
//!         skills: vec!["React".into(), "AWS".into()],
//!         gpa: 3.8,
//!     },
//!     Member {
//!         name: "Marcus Johnson".into(),
//!         department: "Product".into(),
//!         skills: vec!["Analytics".into()],
//!         gpa: 3.6,
//!     },
//! ];
//!
//! let config = FacetConfig::new()
//!     .facet(FieldFacet::multi_select(
//!         "department",
//!         "Department",
//!         ["Engineering", "Product", "Design"],
//!     ))
//!     .facet(FieldFacet::number_range("gpa", "GPA"))
//!     .searchable(["name", "skills"]);
//!
//! let page = Browse::new(config)
//!     .query("react")
//!     .state(FilterState::new().at_least("gpa", 3.7))
//!     .sort(SortSpec::asc("name"))
//!     .page(PageSpec::first(25))
//!     .run(&members, Member::accessor);
//!
//! assert_eq!(page.total_count, 1);
//! assert_eq!(page.items[0].name, "Sarah Chen");
//! ```
//!
//! # Degradation, not errors
//!
//! The engines operate on best-effort UI state that may be transiently
//! inconsistent (mid-typing text, a half-initialized range), so they
//! degrade deterministically instead of failing:
//!
//! - a filter value whose shape does not match its declared kind is no
//!   constraint at all;
//! - unknown field keys never match and sort last;
//! - a page past the end is empty, not an error;
//! - an empty collection flows through every stage and paginates to one
//!   empty page.
//!
//! The only fallible surface is [`FacetConfig::validate`], an opt-in
//! structural check for configurations.
//!
//! # Pipeline order
//!
//! [`Browse::run`] applies Search → Filter → Sort → Paginate. Each
//! stage is a pure function of its inputs; nothing is cached and no
//! stage mutates the records, so repeated runs with the same inputs
//! return the same page.

mod browse;
mod config;
mod error;
mod filter;
mod page;
mod record;
mod search;
mod seq;
mod sort;
mod state;
mod value;

// Re-export public API
pub use browse::Browse;
pub use config::{FacetConfig, FacetKind, FieldFacet};
pub use error::{FacetError, Result};
pub use filter::{apply_filters, matches_filters};
pub use page::{paginate, PageResult, PageSpec};
pub use record::Fielded;
pub use search::{search, Matcher};
pub use seq::{RequestSeq, RequestToken};
pub use sort::{compare_records, compare_values, sort_records, Dir, SortKey, SortSpec};
pub use state::{FilterState, FilterValue};
pub use value::{Date, Number, Value};
