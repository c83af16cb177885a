// tests/runner.rs
//
// A full run with an in-memory page loader.
//
use std::path::{Path, PathBuf};

use icra_scrape::config::options::{DaySource, ScrapeOptions};
use icra_scrape::progress::{NullProgress, Progress};
use icra_scrape::{Error, ParseError, runner, store};

const DOC: &str = include_str!("fixtures/program_day.html");

fn broken_doc() -> String {
    // Second title row in the first session
    let title_row = r#"<tr><td colspan="2" class="sTtl"><a href="ICRA24_ProgramAtAGlanceWeb.html#MoAT1" title="Click to go to the Program at a Glance">Robot Learning I</a></td></tr>"#;
    DOC.replacen(title_row, &format!("{title_row}\n{title_row}"), 1)
}

fn options(out: &Path) -> ScrapeOptions {
    ScrapeOptions {
        sources: vec![
            DaySource::new("day1", "https://example.org/p/day1.html"),
            DaySource::new("day2", "https://example.org/p/day2.html"),
            DaySource::new("day3", "https://example.org/p/day3.html"),
        ],
        cache_dir: out.join("cache"),
        out_dir: out.join("dump"),
        ..ScrapeOptions::default()
    }
}

fn loader(src: &DaySource, _cache: &Path) -> icra_scrape::error::Result<String> {
    match src.key.as_str() {
        "day1" | "day3" => Ok(DOC.to_string()),
        _ => Ok(broken_doc()),
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, day: &str, sessions: usize) {
        self.done.push((day.to_string(), sessions));
    }
    fn item_failed(&mut self, day: &str, _err: &str) {
        self.failed.push(day.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn failed_day_is_skipped_and_others_are_written() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path());
    let mut rec = Recorder::default();

    let summary = runner::run_with(&opts, Some(&mut rec), loader).unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.failures.len(), 1);
    assert!(matches!(
        &summary.failures[0],
        Error::Parse { day, source: ParseError::DuplicateField { .. } } if day == "day2"
    ));

    let dump = tmp.path().join("dump");
    assert!(dump.join("sessions_day1.json").is_file());
    assert!(!dump.join("sessions_day2.json").exists());
    assert!(dump.join("sessions_day3.json").is_file());

    let expected: Vec<PathBuf> = vec![
        dump.join("sessions_day1.json"),
        dump.join("sessions_day3.json"),
        dump.join("aggregate_sessions.json"),
    ];
    assert_eq!(summary.files_written, expected);

    let aggregate = store::load_program(&opts.aggregate_path()).unwrap();
    let days: Vec<&str> = aggregate.days.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(days, vec!["day1", "day3"]);
    assert_eq!(aggregate, summary.program);

    assert_eq!(rec.total, 3);
    assert_eq!(rec.done, vec![("day1".to_string(), 5), ("day3".to_string(), 5)]);
    assert_eq!(rec.failed, vec!["day2".to_string()]);
    assert!(rec.finished);
}

#[test]
fn all_days_failing_writes_no_aggregate() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path());

    let summary = runner::run_with(&opts, None, |src: &DaySource, _: &Path| {
        Err(Error::Url(src.url.clone()))
    })
    .unwrap();

    assert_eq!(summary.failures.len(), 3);
    assert!(summary.files_written.is_empty());
    assert!(!opts.aggregate_path().exists());
}

#[test]
fn loader_sees_the_configured_cache_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = options(tmp.path());
    opts.sources.truncate(1);
    let cache = opts.cache_dir.clone();

    let summary = runner::run_with(&opts, Some(&mut NullProgress), |_: &DaySource, dir: &Path| {
        assert_eq!(dir, cache.as_path());
        Ok(DOC.to_string())
    })
    .unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.program.presentation_count(), 6);
}
