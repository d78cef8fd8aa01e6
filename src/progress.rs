// src/progress.rs
/// Progress reporting for a generation run.
/// Frontends implement this to surface status; the library never prints.
pub trait Progress {
    /// Called once the records are known, with their count.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One record produced output (an element row may yield several entries).
    fn item_done(&mut self, _name: &str) {}

    /// One record was dropped on purpose (e.g. the `data-*` wildcard).
    fn item_skipped(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards to the log; per-record events at debug level.
pub struct LogProgress;
impl Progress for LogProgress {
    fn begin(&mut self, total: usize) { logf!("{total} records"); }
    fn log(&mut self, msg: &str) { logf!("{msg}"); }
    fn item_done(&mut self, name: &str) { logd!("emitted {name}"); }
    fn item_skipped(&mut self, name: &str) { logd!("skipped {name}"); }
    fn finish(&mut self) { logd!("done"); }
}
