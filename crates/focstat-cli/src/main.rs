mod chart;
mod commands;
mod export;
mod labels;
mod logging;
mod progress;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, HistogramArgs};
use dotenv::dotenv;
use focstat_core::reader::{ExifTagSource, ExifToolSource};
use focstat_core::{
    AppConfig, CancelFlag, FocalLength, FocalLengthSource, ScanEngine, ScanResult,
};
use labels::LabelTable;
use progress::CliReporter;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match focstat_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let labels = LabelTable::builtin();
    let args = Cli::parse();

    match args.command {
        Some(Commands::Histogram(histogram_args)) => {
            run_histogram(config, &labels, histogram_args)?;
        }
        Some(Commands::Read { file }) => {
            run_read(&config, &file)?;
        }
        Some(Commands::Languages) => {
            for language in labels.languages() {
                if let Some(l) = labels.get(language) {
                    println!("{}  {}\n    {}", language.bold(), l.title, l.description);
                }
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:#?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_histogram(
    mut config: AppConfig,
    table: &LabelTable,
    args: HistogramArgs,
) -> anyhow::Result<()> {
    if let Some(language) = args.language {
        config.language = language;
    }
    if args.no_exiftool {
        config.exiftool.enabled = false;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.exiftool.timeout_ms = timeout_ms;
    }

    let Some(labels) = table.get(&config.language) else {
        bail!("no label table available");
    };

    let folders: Vec<PathBuf> = if args.folders.is_empty() {
        config.root_paths.iter().map(PathBuf::from).collect()
    } else {
        args.folders
    };

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_flag.cancel()) {
        warn!("Could not install Ctrl+C handler, scan cannot be cancelled: {}", e);
    }

    let engine = ScanEngine::from_config(&config);
    let reporter = CliReporter::new(labels.scan_progress.clone());
    let report = engine.run(&folders, &|| cancel.is_cancelled(), &reporter);

    info!(
        "Collect: {}, Read: {}",
        format!("{:.2}s", report.stats.collect_duration.as_secs_f64()).green(),
        format!("{:.2}s", report.stats.read_duration.as_secs_f64()).green(),
    );

    if report.stats.cancelled {
        println!("{}", labels.cancelled.yellow());
    }

    let distribution = match &report.result {
        ScanResult::Distribution(distribution) => distribution,
        other => {
            if let Some(message) = labels.outcome_message(other) {
                println!("{}", message);
            }
            return Ok(());
        }
    };

    println!();
    print!("{}", chart::render_bar_chart(distribution, labels, args.width));
    println!(
        "{} photos, {} distinct focal lengths",
        format!("{}", distribution.total()).cyan(),
        format!("{}", distribution.len()).cyan(),
    );

    if let Some(csv_path) = args.csv {
        export::write_csv_file(distribution, &csv_path)
            .with_context(|| format!("writing {}", csv_path.display()))?;
        info!("Distribution written to {}", csv_path.display());
    }

    Ok(())
}

fn run_read(config: &AppConfig, file: &Path) -> anyhow::Result<()> {
    if !file.is_file() {
        bail!("{} is not a file", file.display());
    }

    let exif = ExifTagSource.lookup(file).value();
    print_tier("exif", exif);

    if config.exiftool.enabled {
        let tool = ExifToolSource::from_config(&config.exiftool);
        print_tier(tool.name(), tool.lookup(file).value());
    }

    let engine = ScanEngine::from_config(config);
    match engine
        .reader()
        .read_focal_length(file)
        .and_then(FocalLength::from_mm)
    {
        Some(focal_length) => println!("{} {} mm", "focal length:".bold(), focal_length),
        None => println!("{} none", "focal length:".bold()),
    }

    Ok(())
}

fn print_tier(name: &str, value: Option<f64>) {
    match value {
        Some(mm) => println!("  {:<10} {}", name, format!("{} mm", mm).green()),
        None => println!("  {:<10} {}", name, "not found".dimmed()),
    }
}
