/// Trait for reporting scan progress.
///
/// The CLI implements it with indicatif bars. All methods have default no-op
/// implementations, and nothing a reporter does can change the scan outcome.
pub trait ProgressReporter: Send + Sync {
    fn on_collect_start(&self) {}
    fn on_collect_complete(&self, _total_files: usize, _duration_secs: f64) {}
    fn on_file_progress(&self, _files_visited: usize, _total_files: usize) {}
    fn on_scan_complete(&self, _samples: usize, _files_visited: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
