use crate::config::AppConfig;
use crate::histogram::{FocalLength, FocalLengthDistribution};
use crate::progress::ProgressReporter;
use crate::reader::MetadataReader;
use crate::scanner::FileCollector;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

pub struct ScanEngine {
    collector: FileCollector,
    reader: MetadataReader,
}

/// What a finished run hands to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult {
    NoFoldersSelected,
    NoCandidateFiles,
    NoSamplesExtracted,
    Distribution(FocalLengthDistribution),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanStats {
    pub candidates: usize,
    pub files_visited: usize,
    pub samples: usize,
    pub cancelled: bool,
    pub collect_duration: Duration,
    pub read_duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub result: ScanResult,
    pub stats: ScanStats,
}

/// Samples gathered by one pass over the candidate files, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleRun {
    pub samples: Vec<FocalLength>,
    pub candidates: usize,
    pub files_visited: usize,
    pub cancelled: bool,
    pub collect_duration: Duration,
    pub read_duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    NoCandidateFiles { collect_duration: Duration },
    Sampled(SampleRun),
}

impl ScanEngine {
    pub fn new(collector: FileCollector, reader: MetadataReader) -> Self {
        Self { collector, reader }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            FileCollector::new(&config.ignore_patterns),
            MetadataReader::from_config(&config.exiftool),
        )
    }

    pub fn reader(&self) -> &MetadataReader {
        &self.reader
    }

    /// Collects candidates, then reads them one at a time.
    ///
    /// `cancel_check` is polled before every file; once it returns true the
    /// samples gathered so far are returned and no further file is opened.
    pub fn scan<P: AsRef<Path>>(
        &self,
        folders: &[P],
        cancel_check: &dyn Fn() -> bool,
        reporter: &dyn ProgressReporter,
    ) -> ScanOutcome {
        info!("Collecting JPEG files from {} folder(s)...", folders.len());
        reporter.on_collect_start();
        let collect_start = Instant::now();
        let candidates = self.collector.collect(folders);
        let collect_duration = collect_start.elapsed();
        reporter.on_collect_complete(candidates.len(), collect_duration.as_secs_f64());
        debug!(
            "Collection completed in {:.2}s, {} candidate files",
            collect_duration.as_secs_f64(),
            candidates.len()
        );

        if candidates.is_empty() {
            return ScanOutcome::NoCandidateFiles { collect_duration };
        }

        info!("Reading focal lengths from {} files...", candidates.len());
        let total = candidates.len();
        let read_start = Instant::now();
        let mut samples = Vec::new();
        let mut files_visited = 0usize;
        let mut cancelled = false;

        for path in &candidates {
            if cancel_check() {
                info!("Scan cancelled after {} of {} files", files_visited, total);
                cancelled = true;
                break;
            }

            match self
                .reader
                .read_focal_length(path)
                .and_then(FocalLength::from_mm)
            {
                Some(focal_length) => samples.push(focal_length),
                None => trace!("Skipping {}", path.display()),
            }

            files_visited += 1;
            reporter.on_file_progress(files_visited, total);
        }

        let read_duration = read_start.elapsed();
        reporter.on_scan_complete(samples.len(), files_visited, read_duration.as_secs_f64());
        debug!(
            "Read completed in {:.2}s, {} samples from {} files",
            read_duration.as_secs_f64(),
            samples.len(),
            files_visited
        );

        ScanOutcome::Sampled(SampleRun {
            samples,
            candidates: total,
            files_visited,
            cancelled,
            collect_duration,
            read_duration,
        })
    }

    /// Full pipeline: classify empty outcomes, otherwise aggregate.
    pub fn run<P: AsRef<Path>>(
        &self,
        folders: &[P],
        cancel_check: &dyn Fn() -> bool,
        reporter: &dyn ProgressReporter,
    ) -> ScanReport {
        if folders.is_empty() {
            return ScanReport {
                result: ScanResult::NoFoldersSelected,
                stats: ScanStats::default(),
            };
        }

        let run = match self.scan(folders, cancel_check, reporter) {
            ScanOutcome::NoCandidateFiles { collect_duration } => {
                return ScanReport {
                    result: ScanResult::NoCandidateFiles,
                    stats: ScanStats {
                        collect_duration,
                        ..ScanStats::default()
                    },
                }
            }
            ScanOutcome::Sampled(run) => run,
        };

        let stats = ScanStats {
            candidates: run.candidates,
            files_visited: run.files_visited,
            samples: run.samples.len(),
            cancelled: run.cancelled,
            collect_duration: run.collect_duration,
            read_duration: run.read_duration,
        };

        let distribution = FocalLengthDistribution::aggregate(run.samples);
        let result = if distribution.is_empty() {
            ScanResult::NoSamplesExtracted
        } else {
            info!(
                "{} photos across {} distinct focal lengths",
                distribution.total(),
                distribution.len()
            );
            ScanResult::Distribution(distribution)
        };

        ScanReport { result, stats }
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
