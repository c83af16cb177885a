// src/cli.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::{
    config::{
        consts::{AGGREGATE_FILE, DEFAULT_OUT_DIR},
        options::{DaySource, ScrapeOptions},
    },
    progress::Progress,
    runner, search, store,
};

/// Scrape conference program pages into JSON dumps.
#[derive(Parser, Debug)]
#[command(name = "icra_scrape", version, about)]
pub struct ScrapeArgs {
    /// Program pages as DAY=URL, or a bare URL keyed by its file stem.
    /// Defaults to the ICRA 2024 program days.
    #[arg(value_name = "DAY=URL", value_parser = DaySource::parse)]
    pub sources: Vec<DaySource>,

    /// Where fetched pages are cached.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Where the per-day and aggregate JSON files go.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl ScrapeArgs {
    pub fn into_options(self) -> ScrapeOptions {
        let mut opts = ScrapeOptions::default();
        if !self.sources.is_empty() {
            opts.sources = self.sources;
        }
        if let Some(dir) = self.cache_dir {
            opts.cache_dir = dir;
        }
        if let Some(dir) = self.out_dir {
            opts.out_dir = dir;
        }
        opts
    }
}

/// Search the scraped program by presentation title or author name.
/// Reads dump/aggregate_sessions.json in the current directory, which is
/// where icra_scrape writes it unless given --out-dir.
#[derive(Parser, Debug)]
#[command(name = "search", version)]
pub struct SearchArgs {
    /// Regex for the presentation title (case-insensitive)
    #[arg(long, value_name = "REGEX")]
    pub ptitle: Option<String>,

    /// Regex for any author name (case-insensitive)
    #[arg(long, value_name = "REGEX")]
    pub author: Option<String>,
}

/// Prints one line per event to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scraping {total} program day(s)");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, day: &str, sessions: usize) {
        self.seen += 1;
        eprintln!("[{}/{}] {day}: {sessions} sessions", self.seen, self.total);
    }
    fn item_failed(&mut self, day: &str, err: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {day}: FAILED: {err}", self.seen, self.total);
    }
}

pub fn run_scrape(args: ScrapeArgs) -> Result<()> {
    let opts = args.into_options();
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    if !summary.is_success() {
        let lines: Vec<String> = summary.failures.iter().map(|e| format!("  {e}")).collect();
        bail!(
            "{} of {} day(s) failed:\n{}",
            summary.failures.len(),
            opts.sources.len(),
            lines.join("\n")
        );
    }
    Ok(())
}

pub fn run_search(args: SearchArgs) -> Result<()> {
    let query = search::Query::new(args.ptitle.as_deref(), args.author.as_deref())
        .wrap_err("invalid search pattern")?;

    let path = Path::new(DEFAULT_OUT_DIR).join(AGGREGATE_FILE);
    let program = store::load_program(&path)
        .wrap_err_with(|| {
            format!(
                "cannot load {}; run icra_scrape first (search only reads the default --out-dir)",
                path.display()
            )
        })?;

    let hits = search::filter(&program, &query);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    search::write_hits(&mut out, &hits)?;
    out.flush()?;
    Ok(())
}
