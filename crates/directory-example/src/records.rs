//! The directory's record types, facet configurations, and datasets.
//!
//! Booleans are exposed to the facet layer as `"yes"`/`"no"` strings so
//! they can be constrained with a single-select facet; the five facet
//! kinds deliberately have no boolean variant.

use roster_facet::{Date, FacetConfig, Fielded, FieldFacet, Number, Value};
use serde::Deserialize;

static MEMBERS_JSON: &str = include_str!("../data/members.json");
static QUESTIONS_JSON: &str = include_str!("../data/questions.json");
static EVENTS_JSON: &str = include_str!("../data/events.json");

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// A member of the community directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub department: String,
    pub skills: Vec<String>,
    pub gpa: f64,
    pub location: String,
    /// Milliseconds since the Unix epoch.
    pub joined: i64,
    pub mentoring: bool,
}

impl Fielded for Member {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::Str(&self.name),
            "role" => Value::Str(&self.role),
            "department" => Value::Str(&self.department),
            "skills" => Value::Tags(&self.skills),
            "gpa" => Value::Number(Number::F64(self.gpa)),
            "location" => Value::Str(&self.location),
            "joined" => Value::Date(Date::from_millis(self.joined)),
            "mentoring" => Value::Str(yes_no(self.mentoring)),
            _ => Value::None,
        }
    }
}

/// The member directory's facet configuration.
pub fn member_facets() -> FacetConfig {
    FacetConfig::new()
        .facet(FieldFacet::multi_select(
            "department",
            "Department",
            ["Engineering", "Product", "Design", "Marketing"],
        ))
        .facet(FieldFacet::multi_select(
            "skills",
            "Skills",
            [
                "React",
                "AWS",
                "TypeScript",
                "Analytics",
                "SQL",
                "Figma",
                "User Research",
                "Go",
                "Kubernetes",
                "CSS",
                "SEO",
                "Copywriting",
                "Python",
                "Roadmapping",
                "Illustration",
                "Cryptography",
                "Swift",
                "Kotlin",
                "Social",
            ],
        ))
        .facet(FieldFacet::number_range("gpa", "GPA"))
        .facet(FieldFacet::date_range("joined", "Joined"))
        .facet(FieldFacet::single_select(
            "mentoring",
            "Open to mentoring",
            ["yes", "no"],
        ))
        .facet(FieldFacet::free_text("location", "Location"))
        .searchable(["name", "role", "skills"])
}

/// A question on the Q&A board.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub votes: u32,
    pub answered: bool,
    /// Milliseconds since the Unix epoch.
    pub asked: i64,
}

impl Fielded for Question {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "title" => Value::Str(&self.title),
            "body" => Value::Str(&self.body),
            "tags" => Value::Tags(&self.tags),
            "votes" => Value::Number(Number::U64(self.votes as u64)),
            "answered" => Value::Str(yes_no(self.answered)),
            "asked" => Value::Date(Date::from_millis(self.asked)),
            _ => Value::None,
        }
    }
}

/// The question board's facet configuration.
pub fn question_facets() -> FacetConfig {
    FacetConfig::new()
        .facet(FieldFacet::multi_select(
            "tags",
            "Tags",
            [
                "aws",
                "cloud",
                "mentorship",
                "design",
                "events",
                "react",
                "frontend",
                "analytics",
                "housing",
                "seattle",
                "expenses",
                "sql",
                "learning",
            ],
        ))
        .facet(FieldFacet::single_select(
            "answered",
            "Answered",
            ["yes", "no"],
        ))
        .facet(FieldFacet::number_range("votes", "Votes"))
        .facet(FieldFacet::date_range("asked", "Asked"))
        .searchable(["title", "body", "tags"])
}

/// An event on the community calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub title: String,
    pub category: String,
    pub location: String,
    /// Milliseconds since the Unix epoch.
    pub starts: i64,
    pub capacity: u32,
    pub rsvps: u32,
}

impl Fielded for Event {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "title" => Value::Str(&self.title),
            "category" => Value::Str(&self.category),
            "location" => Value::Str(&self.location),
            "starts" => Value::Date(Date::from_millis(self.starts)),
            "capacity" => Value::Number(Number::U64(self.capacity as u64)),
            "rsvps" => Value::Number(Number::U64(self.rsvps as u64)),
            _ => Value::None,
        }
    }
}

/// The event calendar's facet configuration.
pub fn event_facets() -> FacetConfig {
    FacetConfig::new()
        .facet(FieldFacet::single_select(
            "category",
            "Category",
            ["Workshop", "Social", "Career", "Talk"],
        ))
        .facet(FieldFacet::date_range("starts", "Starts"))
        .facet(FieldFacet::number_range("capacity", "Capacity"))
        .facet(FieldFacet::number_range("rsvps", "RSVPs"))
        .facet(FieldFacet::free_text("location", "Location"))
        .searchable(["title", "location"])
}

/// Loads the embedded member dataset.
pub fn members() -> serde_json::Result<Vec<Member>> {
    serde_json::from_str(MEMBERS_JSON)
}

/// Loads the embedded question dataset.
pub fn questions() -> serde_json::Result<Vec<Question>> {
    serde_json::from_str(QUESTIONS_JSON)
}

/// Loads the embedded event dataset.
pub fn events() -> serde_json::Result<Vec<Event>> {
    serde_json::from_str(EVENTS_JSON)
}
