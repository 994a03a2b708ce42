//! Integration tests: the full pipeline over the embedded datasets.

use directory_example::records::{
    self, event_facets, member_facets, question_facets, Event, Member, Question,
};
use roster_facet::{
    Browse, Date, Dir, Fielded, FilterState, PageSpec, RequestSeq, SortSpec,
};

fn names(items: &[&Member]) -> Vec<String> {
    items.iter().map(|m| m.name.clone()).collect()
}

#[test]
fn search_covers_name_role_and_skills() {
    let members = records::members().unwrap();

    // "react" only appears in skills
    let page = Browse::new(member_facets())
        .query("react")
        .sort(SortSpec::asc("name"))
        .run(&members, Member::accessor);
    assert_eq!(names(&page.items), ["Priya Shah", "Sarah Chen"]);

    // role text is searchable too
    let page = Browse::new(member_facets())
        .query("security intern")
        .run(&members, Member::accessor);
    assert_eq!(names(&page.items), ["Hannah Lee"]);
}

#[test]
fn department_filter_is_a_set_union() {
    let members = records::members().unwrap();
    let page = Browse::new(member_facets())
        .state(FilterState::new().select_many("department", ["Product", "Design"]))
        .run(&members, Member::accessor);
    assert_eq!(page.total_count, 4);
    assert!(page
        .items
        .iter()
        .all(|m| m.department == "Product" || m.department == "Design"));
}

#[test]
fn gpa_floor_keeps_the_high_performers() {
    let members = records::members().unwrap();
    let page = Browse::new(member_facets())
        .state(FilterState::new().at_least("gpa", 3.7))
        .sort(SortSpec::desc("gpa"))
        .run(&members, Member::accessor);

    assert_eq!(page.total_count, 6);
    assert_eq!(page.items[0].name, "Hannah Lee");
    assert!(page.items.iter().all(|m| m.gpa >= 3.7));
}

#[test]
fn mentoring_flag_filters_through_single_select() {
    let members = records::members().unwrap();
    let page = Browse::new(member_facets())
        .state(FilterState::new().select("mentoring", "yes"))
        .run(&members, Member::accessor);
    assert_eq!(page.total_count, 4);
    assert!(page.items.iter().all(|m| m.mentoring));
}

#[test]
fn joined_since_cuts_by_date() {
    let members = records::members().unwrap();
    let cutoff = Date::from_millis(1_750_032_000_000); // mid-June
    let page = Browse::new(member_facets())
        .state(FilterState::new().since("joined", cutoff))
        .run(&members, Member::accessor);
    assert_eq!(page.total_count, 6);
    assert!(page.items.iter().all(|m| m.joined >= cutoff.as_millis()));
}

#[test]
fn directory_pages_partition_the_roster() {
    let members = records::members().unwrap();
    let browse = Browse::new(member_facets()).sort(SortSpec::asc("name"));

    let page1 = browse
        .clone()
        .page(PageSpec::new(1, 5))
        .run(&members, Member::accessor);
    let page2 = browse
        .clone()
        .page(PageSpec::new(2, 5))
        .run(&members, Member::accessor);
    let page3 = browse
        .clone()
        .page(PageSpec::new(3, 5))
        .run(&members, Member::accessor);
    let page4 = browse
        .clone()
        .page(PageSpec::new(4, 5))
        .run(&members, Member::accessor);

    assert_eq!(page1.len(), 5);
    assert_eq!(page2.len(), 5);
    assert_eq!(page3.len(), 2);
    assert_eq!(page3.total_pages, 3);
    assert!(page4.is_empty());
    assert_eq!(page4.total_count, 12);

    let mut all = Vec::new();
    all.extend(names(&page1.items));
    all.extend(names(&page2.items));
    all.extend(names(&page3.items));
    assert_eq!(all.len(), 12);
    let mut sorted = all.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(all, sorted);
}

#[test]
fn combined_search_filter_sort_page() {
    let members = records::members().unwrap();
    let page = Browse::new(member_facets())
        .query("intern")
        .state(
            FilterState::new()
                .select_many("department", ["Engineering"])
                .at_least("gpa", 3.5),
        )
        .sort(SortSpec::desc("gpa").then("name", Dir::Asc))
        .page(PageSpec::new(1, 3))
        .run(&members, Member::accessor);

    // Engineering, gpa >= 3.5: Hannah 3.95, Emma 3.85, Sarah 3.8, Priya 3.7, Omar 3.55
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 2);
    assert_eq!(
        names(&page.items),
        ["Hannah Lee", "Emma Fischer", "Sarah Chen"]
    );
}

#[test]
fn unanswered_questions_by_votes() {
    let questions = records::questions().unwrap();
    let page = Browse::new(question_facets())
        .state(FilterState::new().select("answered", "no"))
        .sort(SortSpec::desc("votes"))
        .run(&questions, Question::accessor);

    assert_eq!(page.total_count, 4);
    let votes: Vec<u32> = page.items.iter().map(|q| q.votes).collect();
    assert_eq!(votes, [9, 5, 4, 3]);
}

#[test]
fn question_tags_filter_matches_any_selected() {
    let questions = records::questions().unwrap();
    let page = Browse::new(question_facets())
        .state(FilterState::new().select_many("tags", ["react", "sql"]))
        .sort(SortSpec::asc("asked"))
        .run(&questions, Question::accessor);

    let titles: Vec<&str> = page.items.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "React vs Vue for the hackathon?",
            "Study group for the SQL workshop?"
        ]
    );
}

#[test]
fn question_search_reaches_the_body() {
    let questions = records::questions().unwrap();
    let page = Browse::new(question_facets())
        .query("judging rubric")
        .run(&questions, Question::accessor);
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].title, "React vs Vue for the hackathon?");
}

#[test]
fn upcoming_events_window() {
    let events = records::events().unwrap();
    let july = Date::from_millis(1_751_328_000_000);
    let page = Browse::new(event_facets())
        .state(FilterState::new().since("starts", july))
        .sort(SortSpec::asc("starts"))
        .run(&events, Event::accessor);

    let titles: Vec<&str> = page.items.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Intro to Kubernetes",
            "Design Systems Talk",
            "Summer Hackathon Kickoff",
            "Ask a Director AMA"
        ]
    );
}

#[test]
fn event_category_and_location_conjoin() {
    let events = records::events().unwrap();
    let page = Browse::new(event_facets())
        .state(
            FilterState::new()
                .select("category", "Career")
                .matching("location", "remote"),
        )
        .run(&events, Event::accessor);

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].title, "Ask a Director AMA");
}

#[test]
fn stale_reload_is_dropped() {
    let members = records::members().unwrap();
    let seq = RequestSeq::new();
    let mut shown: Option<usize> = None;

    // User asks for Engineering, then narrows to Design before the
    // first (simulated) load completes.
    let engineering = seq.begin();
    let design = seq.begin();

    let design_page = Browse::new(member_facets())
        .state(FilterState::new().select_many("department", ["Design"]))
        .run(&members, Member::accessor);
    if seq.is_current(design) {
        shown = Some(design_page.total_count);
    }

    let engineering_page = Browse::new(member_facets())
        .state(FilterState::new().select_many("department", ["Engineering"]))
        .run(&members, Member::accessor);
    if seq.is_current(engineering) {
        shown = Some(engineering_page.total_count);
    }

    // The straggling Engineering result never overwrites the fresh one.
    assert_eq!(shown, Some(2));
}
