// tests/search.rs
//
// Filtering a loaded program by title and author patterns.
//
use icra_scrape::config::markers::Markers;
use icra_scrape::model::PresentationParts;
use icra_scrape::search::{self, Query};
use icra_scrape::specs::{self, Patterns};
use icra_scrape::{Author, DayProgram, Presentation, Program, Session, SessionCategory};

fn talk(title: &str, id: &str, authors: &[&str]) -> Presentation {
    Presentation::new(
        PresentationParts {
            title: title.into(),
            scheduled_time: "10:30-12:00".into(),
            identifier: id.into(),
            authors: authors.iter().map(|n| Author::new(*n, "Somewhere")).collect(),
            abstract_text: Some("text".into()),
            session_summary: "Oral Session: Test".into(),
        },
        SessionCategory::Oral,
    )
    .unwrap()
}

fn session(title: &str, talks: Vec<Presentation>) -> Session {
    Session::new(title.into(), SessionCategory::Oral, Some(Author::new("Chair", "Uni")), None, talks).unwrap()
}

fn program() -> Program {
    Program {
        days: vec![
            DayProgram {
                day: "day1".into(),
                sessions: vec![session(
                    "Learning",
                    vec![
                        talk("Grasping with Vision", "MoA.1", &["John Smith"]),
                        talk("Legged Locomotion", "MoA.2", &["Jane Doe"]),
                    ],
                )],
            },
            DayProgram {
                day: "day2".into(),
                sessions: vec![
                    session("Planning", vec![talk("Motion Planning at Scale", "TuA.1", &["Jane Doe", "JOHN SMITH"])]),
                    session("Vision", vec![talk("Visual Odometry", "TuB.1", &["Ann Lee"])]),
                ],
            },
        ],
    }
}

fn ids(hits: &[search::Hit<'_>]) -> Vec<(String, String)> {
    hits.iter()
        .map(|h| (h.day.to_string(), h.presentation.identifier().to_string()))
        .collect()
}

#[test]
fn no_patterns_returns_everything_in_order() {
    let p = program();
    let hits = search::filter(&p, &Query::new(None, None).unwrap());
    assert_eq!(
        ids(&hits),
        vec![
            ("day1".into(), "MoA.1".into()),
            ("day1".into(), "MoA.2".into()),
            ("day2".into(), "TuA.1".into()),
            ("day2".into(), "TuB.1".into()),
        ]
    );
}

#[test]
fn author_pattern_matches_any_author() {
    let p = program();
    let hits = search::filter(&p, &Query::new(None, Some("(?i)smith")).unwrap());
    assert_eq!(ids(&hits), vec![("day1".into(), "MoA.1".into()), ("day2".into(), "TuA.1".into())]);
    assert!(hits.iter().all(|h| h.presentation.authors().iter().any(|a| a.name.to_lowercase().contains("smith"))));
}

#[test]
fn patterns_are_case_insensitive_substring_searches() {
    let p = program();
    let hits = search::filter(&p, &Query::new(Some("PLANNING"), None).unwrap());
    assert_eq!(ids(&hits), vec![("day2".into(), "TuA.1".into())]);

    let hits = search::filter(&p, &Query::new(Some("^vis"), None).unwrap());
    assert_eq!(ids(&hits), vec![("day2".into(), "TuB.1".into())]);
}

#[test]
fn both_patterns_must_match() {
    let p = program();
    // "Locomotion" matches "motion" too
    let hits = search::filter(&p, &Query::new(Some("grasp|motion"), Some("doe")).unwrap());
    assert_eq!(ids(&hits), vec![("day1".into(), "MoA.2".into()), ("day2".into(), "TuA.1".into())]);
}

#[test]
fn invalid_pattern_is_rejected() {
    assert!(Query::new(Some("(unclosed"), None).is_err());
    assert!(Query::new(None, Some("[")).is_err());
}

#[test]
fn report_lists_count_then_days() {
    let p = program();
    let hits = search::filter(&p, &Query::new(None, Some("lee")).unwrap());
    let mut out = Vec::new();
    search::write_hits(&mut out, &hits).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Found 1 presentations\nDay: day2\n[TuB.1] 10:30-12:00 Visual Odometry\n"));
    assert!(text.contains("Authors: Ann Lee (Somewhere)"));
}

#[test]
fn search_over_parsed_page() {
    let doc = include_str!("fixtures/program_day.html");
    let sessions = specs::parse_doc(doc, &Patterns::compile(Markers::default()).unwrap()).unwrap();
    let p = Program { days: vec![DayProgram { day: "day1".into(), sessions }] };

    // John Smith only chairs; Anna Smith is the one author
    let hits = search::filter(&p, &Query::new(None, Some("(?i)smith")).unwrap());
    let titles: Vec<&str> = hits.iter().map(|h| h.presentation.title()).collect();
    assert_eq!(titles, vec!["Certified Safe Navigation"]);

    let hits = search::filter(&p, &Query::new(None, Some("doe, jane")).unwrap());
    assert_eq!(hits.len(), 2);
}

#[test]
fn accented_names_are_searchable_after_decoding() {
    let doc = include_str!("fixtures/program_day.html").replacen("Roe, Richard", "Ro&#233;, Ren&eacute;", 1);
    let sessions = specs::parse_doc(&doc, &Patterns::compile(Markers::default()).unwrap()).unwrap();
    let p = Program { days: vec![DayProgram { day: "day1".into(), sessions }] };

    let hits = search::filter(&p, &Query::new(None, Some("roé, rené")).unwrap());
    let titles: Vec<&str> = hits.iter().map(|h| h.presentation.title()).collect();
    assert_eq!(titles, vec!["Walking on Ice"]);
}
