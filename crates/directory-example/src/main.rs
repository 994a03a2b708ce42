//! `roster`: browse the intern community directory from the terminal.
//!
//! Each subcommand wires its flags into a [`FilterState`], runs the
//! shared browsing pipeline, and prints the resulting page as a plain
//! table. Rendering is deliberately minimal; the interesting part is
//! the pipeline.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use directory_example::records::{
    self, event_facets, member_facets, question_facets, Event, Member, Question,
};
use roster_facet::{Browse, Date, Dir, Fielded, FilterState, PageResult, PageSpec, SortSpec};

#[derive(Parser)]
#[command(name = "roster", about = "Browse the intern community directory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the member directory
    Members(MembersArgs),
    /// Browse the Q&A board
    Questions(QuestionsArgs),
    /// Browse the event calendar
    Events(EventsArgs),
}

/// Flags shared by every listing subcommand.
#[derive(Args)]
struct BrowseArgs {
    /// Search across the page's searchable fields
    #[arg(long, short = 's')]
    search: Option<String>,

    /// Field to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    desc: bool,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    page_size: usize,
}

impl BrowseArgs {
    fn sort_spec(&self, default_field: &str) -> SortSpec {
        let field = self.sort.as_deref().unwrap_or(default_field);
        let dir = if self.desc { Dir::Desc } else { Dir::Asc };
        SortSpec::by(field, dir)
    }

    fn page_spec(&self) -> PageSpec {
        PageSpec::new(self.page.max(1), self.page_size.max(1))
    }

    fn query(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

#[derive(Args)]
struct MembersArgs {
    #[command(flatten)]
    browse: BrowseArgs,

    /// Filter by department (repeatable)
    #[arg(long)]
    department: Vec<String>,

    /// Filter by skill (repeatable)
    #[arg(long)]
    skill: Vec<String>,

    /// Minimum GPA, inclusive
    #[arg(long)]
    min_gpa: Option<f64>,

    /// Maximum GPA, inclusive
    #[arg(long)]
    max_gpa: Option<f64>,

    /// Joined on or after this time (ms since epoch)
    #[arg(long)]
    joined_since: Option<i64>,

    /// Only members open to mentoring
    #[arg(long)]
    mentoring: bool,

    /// Filter by location substring
    #[arg(long)]
    location: Option<String>,
}

#[derive(Args)]
struct QuestionsArgs {
    #[command(flatten)]
    browse: BrowseArgs,

    /// Filter by tag (repeatable)
    #[arg(long)]
    tag: Vec<String>,

    /// Only answered questions
    #[arg(long, conflicts_with = "unanswered")]
    answered: bool,

    /// Only unanswered questions
    #[arg(long)]
    unanswered: bool,

    /// Minimum vote count, inclusive
    #[arg(long)]
    min_votes: Option<u32>,
}

#[derive(Args)]
struct EventsArgs {
    #[command(flatten)]
    browse: BrowseArgs,

    /// Filter by category
    #[arg(long)]
    category: Option<String>,

    /// Starting on or after this time (ms since epoch)
    #[arg(long)]
    from: Option<i64>,

    /// Starting on or before this time (ms since epoch)
    #[arg(long)]
    to: Option<i64>,

    /// Filter by location substring
    #[arg(long)]
    location: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Members(args) => list_members(args),
        Command::Questions(args) => list_questions(args),
        Command::Events(args) => list_events(args),
    }
}

fn list_members(args: MembersArgs) -> Result<()> {
    let members = records::members()?;

    let mut state = FilterState::new();
    if !args.department.is_empty() {
        state = state.select_many("department", args.department);
    }
    if !args.skill.is_empty() {
        state = state.select_many("skills", args.skill);
    }
    if let Some(min) = args.min_gpa {
        state = state.at_least("gpa", min);
    }
    if let Some(max) = args.max_gpa {
        state = state.at_most("gpa", max);
    }
    if let Some(since) = args.joined_since {
        state = state.since("joined", Date::from_millis(since));
    }
    if args.mentoring {
        state = state.select("mentoring", "yes");
    }
    if let Some(location) = args.location {
        state = state.matching("location", location);
    }

    let page = Browse::new(member_facets())
        .query(args.browse.query())
        .state(state)
        .sort(args.browse.sort_spec("name"))
        .page(args.browse.page_spec())
        .run(&members, Member::accessor);

    print_members(&page);
    Ok(())
}

fn list_questions(args: QuestionsArgs) -> Result<()> {
    let questions = records::questions()?;

    let mut state = FilterState::new();
    if !args.tag.is_empty() {
        state = state.select_many("tags", args.tag);
    }
    if args.answered {
        state = state.select("answered", "yes");
    }
    if args.unanswered {
        state = state.select("answered", "no");
    }
    if let Some(min) = args.min_votes {
        state = state.at_least("votes", min);
    }

    let page = Browse::new(question_facets())
        .query(args.browse.query())
        .state(state)
        .sort(args.browse.sort_spec("votes"))
        .page(args.browse.page_spec())
        .run(&questions, Question::accessor);

    print_questions(&page);
    Ok(())
}

fn list_events(args: EventsArgs) -> Result<()> {
    let events = records::events()?;

    let mut state = FilterState::new();
    if let Some(category) = args.category {
        state = state.select("category", category);
    }
    if let Some(from) = args.from {
        state = state.since("starts", Date::from_millis(from));
    }
    if let Some(to) = args.to {
        state = state.until("starts", Date::from_millis(to));
    }
    if let Some(location) = args.location {
        state = state.matching("location", location);
    }

    let page = Browse::new(event_facets())
        .query(args.browse.query())
        .state(state)
        .sort(args.browse.sort_spec("starts"))
        .page(args.browse.page_spec())
        .run(&events, Event::accessor);

    print_events(&page);
    Ok(())
}

fn print_members(page: &PageResult<&Member>) {
    println!(
        "{:<16} {:<12} {:<30} {:>5}  {}",
        "NAME", "DEPARTMENT", "SKILLS", "GPA", "LOCATION"
    );
    for member in &page.items {
        println!(
            "{:<16} {:<12} {:<30} {:>5.2}  {}",
            member.name,
            member.department,
            member.skills.join(", "),
            member.gpa,
            member.location
        );
    }
    print_footer(page, "members");
}

fn print_questions(page: &PageResult<&Question>) {
    println!(
        "{:<46} {:<24} {:>5}  {}",
        "TITLE", "TAGS", "VOTES", "ANSWERED"
    );
    for question in &page.items {
        println!(
            "{:<46} {:<24} {:>5}  {}",
            question.title,
            question.tags.join(", "),
            question.votes,
            if question.answered { "yes" } else { "no" }
        );
    }
    print_footer(page, "questions");
}

fn print_events(page: &PageResult<&Event>) {
    println!(
        "{:<26} {:<10} {:<12} {:>8}  {}",
        "TITLE", "CATEGORY", "LOCATION", "RSVPS", "CAPACITY"
    );
    for event in &page.items {
        println!(
            "{:<26} {:<10} {:<12} {:>8}  {}",
            event.title, event.category, event.location, event.rsvps, event.capacity
        );
    }
    print_footer(page, "events");
}

fn print_footer<T>(page: &PageResult<T>, noun: &str) {
    println!();
    println!(
        "page {} of {} ({} {})",
        page.page, page.total_pages, page.total_count, noun
    );
}
