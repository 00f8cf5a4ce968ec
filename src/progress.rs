// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the page is parsed, with the number of rows in the window.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each emitted record (1-based count so far).
    fn item_done(&mut self, _count: usize) {}

    /// Called at the end with the number of records produced.
    fn finish(&mut self, _emitted: usize) {}
}
