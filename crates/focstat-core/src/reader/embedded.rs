use super::{FocalLengthSource, Lookup};
use crate::error::Error;
use exif::{Field, In, Tag, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;
use tracing::trace;

/// Reads `FocalLength` from the EXIF block embedded in the file itself.
pub struct ExifTagSource;

impl ExifTagSource {
    pub fn extract<R: BufRead + Seek>(reader: &mut R) -> Result<Option<f64>, Error> {
        let exif = exif::Reader::new().read_from_container(reader)?;

        Ok(exif
            .get_field(Tag::FocalLength, In::PRIMARY)
            .and_then(field_to_mm))
    }

    fn extract_path(path: &Path) -> Result<Option<f64>, Error> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::extract(&mut reader)
    }
}

impl FocalLengthSource for ExifTagSource {
    fn name(&self) -> &str {
        "exif"
    }

    fn lookup(&self, path: &Path) -> Lookup {
        match Self::extract_path(path) {
            Ok(Some(mm)) => Lookup::Found(mm),
            Ok(None) => {
                trace!("{}: no FocalLength tag", path.display());
                Lookup::NotFound
            }
            Err(e) => {
                trace!("{}: unreadable EXIF: {}", path.display(), e);
                Lookup::NotFound
            }
        }
    }
}

/// Quotient of an EXIF rational, `None` when the denominator is zero.
pub fn rational_to_mm(num: u32, denom: u32) -> Option<f64> {
    if denom == 0 {
        return None;
    }
    Some(num as f64 / denom as f64)
}

fn field_to_mm(field: &Field) -> Option<f64> {
    if let Value::Rational(r) = &field.value {
        if let Some(first) = r.first() {
            return rational_to_mm(first.num, first.denom);
        }
    }

    None
}
