use focstat_core::{FocalLength, FocalLengthDistribution};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Row {
    focal_length_mm: String,
    count: usize,
}

impl Row {
    fn new(focal_length: FocalLength, count: usize) -> Self {
        Self {
            focal_length_mm: focal_length.to_string(),
            count,
        }
    }
}

/// Writes `focal_length_mm,count` rows in ascending focal length order.
pub fn write_csv<W: Write>(distribution: &FocalLengthDistribution, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (focal_length, count) in distribution.entries() {
        wtr.serialize(Row::new(focal_length, count))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(distribution: &FocalLengthDistribution, path: &Path) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(distribution, file)
}
