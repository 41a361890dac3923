pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod histogram;
pub mod progress;
pub mod reader;
pub mod scanner;

pub use cancel::CancelFlag;
pub use config::AppConfig;
pub use engine::{SampleRun, ScanEngine, ScanOutcome, ScanReport, ScanResult, ScanStats};
pub use error::Error;
pub use histogram::{FocalLength, FocalLengthDistribution};
pub use progress::{ProgressReporter, SilentReporter};
pub use reader::{FocalLengthSource, Lookup, MetadataReader};
