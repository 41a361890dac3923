mod embedded;
mod exiftool;

pub use embedded::{rational_to_mm, ExifTagSource};
pub use exiftool::{parse_tool_output, ExifToolSource};

use crate::config::ExifToolConfig;
use std::path::Path;
use tracing::{debug, trace};

/// Result of asking a single source for a file's focal length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    Found(f64),
    NotFound,
}

impl Lookup {
    pub fn value(self) -> Option<f64> {
        match self {
            Lookup::Found(mm) => Some(mm),
            Lookup::NotFound => None,
        }
    }
}

/// Something that, given a path, may produce an unrounded focal length in
/// millimetres. Implementations never fail: every error becomes `NotFound`.
pub trait FocalLengthSource {
    fn name(&self) -> &str;

    fn lookup(&self, path: &Path) -> Lookup;
}

/// Two-tier reader: the embedded EXIF block first, an external tool second.
pub struct MetadataReader {
    primary: Box<dyn FocalLengthSource>,
    fallback: Option<Box<dyn FocalLengthSource>>,
}

impl MetadataReader {
    pub fn new(
        primary: Box<dyn FocalLengthSource>,
        fallback: Option<Box<dyn FocalLengthSource>>,
    ) -> Self {
        Self { primary, fallback }
    }

    pub fn from_config(config: &ExifToolConfig) -> Self {
        let fallback: Option<Box<dyn FocalLengthSource>> = if config.enabled {
            Some(Box::new(ExifToolSource::from_config(config)))
        } else {
            None
        };
        Self::new(Box::new(ExifTagSource), fallback)
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn read_focal_length(&self, path: &Path) -> Option<f64> {
        if let Lookup::Found(mm) = self.primary.lookup(path) {
            debug!("{}: {} mm via {}", path.display(), mm, self.primary.name());
            return Some(mm);
        }

        let fallback = self.fallback.as_ref()?;
        match fallback.lookup(path) {
            Lookup::Found(mm) => {
                debug!("{}: {} mm via {}", path.display(), mm, fallback.name());
                Some(mm)
            }
            Lookup::NotFound => {
                trace!("{}: no focal length from any source", path.display());
                None
            }
        }
    }
}

impl Default for MetadataReader {
    fn default() -> Self {
        Self::from_config(&ExifToolConfig::default())
    }
}
