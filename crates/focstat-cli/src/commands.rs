use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "focstat")]
#[command(about = "Histogram of the focal lengths used across your photo folders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan folders and print a focal length histogram
    Histogram(HistogramArgs),
    /// Print the focal length read from a single file
    Read {
        /// JPEG file to inspect
        file: PathBuf,
    },
    /// List the available label languages
    Languages,
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct HistogramArgs {
    /// Folders to scan recursively; defaults to root_paths from the configuration
    pub folders: Vec<PathBuf>,
    /// Language used for messages and chart labels
    #[arg(short, long)]
    pub language: Option<String>,
    /// Also write the distribution to this CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
    /// Only read embedded EXIF data, never call the external tool
    #[arg(long)]
    pub no_exiftool: bool,
    /// Per-file timeout for the external tool, in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
    /// Width of the longest bar, in columns
    #[arg(long, default_value_t = 50)]
    pub width: usize,
}
