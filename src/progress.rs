// src/progress.rs
/// Progress reporting for a scrape run.
/// The CLI implements this to print status lines; tests use `NullProgress`.
pub trait Progress {
    /// Called at the start with the number of days to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One day parsed and written.
    fn item_done(&mut self, _day: &str, _sessions: usize) {}

    /// One day failed; the run goes on with the next.
    fn item_failed(&mut self, _day: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
