// src/progress.rs
/// Lightweight progress reporting used by long-running stages.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a match page was parsed).
    fn item_done(&mut self, _index: usize, _label: &str) {}

    /// Called at the end of a stage, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress sink that reports through the log.
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.done = 0;
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn item_done(&mut self, index: usize, label: &str) {
        self.done += 1;
        logf!("{index} {label} ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        if self.total > 0 {
            logf!("Fetch complete ({}/{})", self.done, self.total);
        }
    }
}
