// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::options::{DaySource, ScrapeOptions},
    error::{Error, Result},
    model::{DayProgram, Program, Session},
    progress::Progress,
    source,
    specs::{self, Patterns},
    store,
};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub program: Program,
    /// Days that could not be loaded, parsed or written, in source order.
    pub failures: Vec<Error>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load, parse and dump every configured day.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    run_with(opts, progress, source::load)
}

/// `run` with the page loader passed in.
/// A day that fails is recorded and skipped; nothing is written for it.
pub fn run_with<F>(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
    mut load: F,
) -> Result<RunSummary>
where
    F: FnMut(&DaySource, &Path) -> Result<String>,
{
    let pat = Patterns::compile(opts.markers.clone())?;
    let mut summary = RunSummary::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.sources.len());
    }

    for src in &opts.sources {
        match process_day(opts, src, &pat, &mut load) {
            Ok((sessions, path)) => {
                log::info!("Day {}: {} sessions → {}", src.key, sessions.len(), path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&src.key, sessions.len());
                }
                summary.files_written.push(path);
                summary.program.days.push(DayProgram { day: src.key.clone(), sessions });
            }
            Err(e) => {
                log::error!("Day {}: {e}", src.key);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&src.key, &e.to_string());
                }
                summary.failures.push(e);
            }
        }
    }

    // An all-failed run keeps whatever aggregate is already on disk
    if !summary.program.days.is_empty() {
        let path = opts.aggregate_path();
        store::save_program(&path, &summary.program)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Aggregate: {} presentations → {}", summary.program.presentation_count(), path.display()));
        }
        summary.files_written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

fn process_day<F>(
    opts: &ScrapeOptions,
    src: &DaySource,
    pat: &Patterns,
    load: &mut F,
) -> Result<(Vec<Session>, PathBuf)>
where
    F: FnMut(&DaySource, &Path) -> Result<String>,
{
    let html = load(src, &opts.cache_dir)?;
    let sessions = specs::parse_doc(&html, pat)
        .map_err(|source| Error::Parse { day: src.key.clone(), source })?;
    let path = store::save_day(&opts.out_dir, &src.key, &sessions)?;
    Ok((sessions, path))
}
