//! Declarative facet configuration.
//!
//! A [`FacetConfig`] describes, per page, which fields can be filtered
//! and how: the interaction kind, the option set for select kinds, and
//! the display label. The same configuration drives the filter engine
//! for every page instead of per-page ad hoc filter code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{FacetError, Result};

/// The interaction style of one filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FacetKind {
    /// Pick one option, or none.
    SingleSelect,
    /// Pick any subset of the options.
    MultiSelect,
    /// Constrain a numeric field to an inclusive range.
    NumberRange,
    /// Constrain a date field to an inclusive range.
    DateRange,
    /// Substring match against one string field.
    FreeText,
}

impl FacetKind {
    /// Returns `true` for the kinds that enumerate options.
    pub fn is_select(self) -> bool {
        matches!(self, FacetKind::SingleSelect | FacetKind::MultiSelect)
    }

    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FacetKind::SingleSelect => "single-select",
            FacetKind::MultiSelect => "multi-select",
            FacetKind::NumberRange => "number-range",
            FacetKind::DateRange => "date-range",
            FacetKind::FreeText => "free-text",
        }
    }
}

impl std::fmt::Display for FacetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One filterable field: key, kind, options, display label.
///
/// `options` is ordered and only meaningful for the select kinds; the
/// range and text kinds ignore it. `label` is render-only and never
/// consulted by the engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFacet {
    /// The record field this facet constrains.
    pub key: String,
    /// Display name for rendering.
    pub label: String,
    /// The interaction kind.
    pub kind: FacetKind,
    /// Allowed values, in display order (select kinds only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldFacet {
    /// Declares a single-select facet with the given options.
    pub fn single_select<I, S>(key: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldFacet {
            key: key.into(),
            label: label.into(),
            kind: FacetKind::SingleSelect,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Declares a multi-select facet with the given options.
    pub fn multi_select<I, S>(key: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldFacet {
            key: key.into(),
            label: label.into(),
            kind: FacetKind::MultiSelect,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Declares an inclusive numeric range facet.
    pub fn number_range(key: impl Into<String>, label: impl Into<String>) -> Self {
        FieldFacet {
            key: key.into(),
            label: label.into(),
            kind: FacetKind::NumberRange,
            options: Vec::new(),
        }
    }

    /// Declares an inclusive date range facet.
    pub fn date_range(key: impl Into<String>, label: impl Into<String>) -> Self {
        FieldFacet {
            key: key.into(),
            label: label.into(),
            kind: FacetKind::DateRange,
            options: Vec::new(),
        }
    }

    /// Declares a free-text facet scoped to one string field.
    pub fn free_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        FieldFacet {
            key: key.into(),
            label: label.into(),
            kind: FacetKind::FreeText,
            options: Vec::new(),
        }
    }
}

/// The full filter configuration of one page: the facets, in display
/// order, plus the field keys the search box covers.
///
/// # Example
///
/// ```
/// use roster_facet::{FacetConfig, FieldFacet};
///
/// let config = FacetConfig::new()
///     .facet(FieldFacet::multi_select(
///         "department",
///         "Department",
///         ["Engineering", "Design", "Product", "Marketing"],
///     ))
///     .facet(FieldFacet::number_range("gpa", "GPA"))
///     .searchable(["name", "skills"]);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.facets().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetConfig {
    #[serde(default)]
    facets: Vec<FieldFacet>,
    #[serde(default)]
    searchable: Vec<String>,
}

impl FacetConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        FacetConfig::default()
    }

    /// Appends a facet. Facets apply in insertion order (the order does
    /// not affect results, since constraints conjoin).
    pub fn facet(mut self, facet: FieldFacet) -> Self {
        self.facets.push(facet);
        self
    }

    /// Declares the fields the search box covers, in match order.
    pub fn searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the declared facets in order.
    pub fn facets(&self) -> &[FieldFacet] {
        &self.facets
    }

    /// Returns the declared searchable field keys.
    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable
    }

    /// Looks up a facet by field key.
    pub fn get(&self, key: &str) -> Option<&FieldFacet> {
        self.facets.iter().find(|f| f.key == key)
    }

    /// Checks structural invariants: field keys are unique, and select
    /// facets enumerate at least one option.
    ///
    /// Validation is opt-in; the engines accept any configuration and
    /// degrade per the documented rules.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for facet in &self.facets {
            if !seen.insert(facet.key.as_str()) {
                return Err(FacetError::DuplicateKey(facet.key.clone()));
            }
            if facet.kind.is_select() && facet.options.is_empty() {
                return Err(FacetError::EmptyOptions {
                    key: facet.key.clone(),
                    kind: facet.kind,
                });
            }
        }
        Ok(())
    }
}
