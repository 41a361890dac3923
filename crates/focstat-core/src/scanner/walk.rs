use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use walkdir::WalkDir;

const JPEG_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Recursive JPEG enumeration over a list of folders, optionally skipping
/// paths that match glob ignore patterns.
#[derive(Debug, Default)]
pub struct FileCollector {
    ignore_patterns: Vec<Pattern>,
}

impl FileCollector {
    pub fn new(ignore_globs: &[String]) -> Self {
        let ignore_patterns = ignore_globs
            .iter()
            .filter_map(|glob| match Pattern::new(glob) {
                Ok(p) => Some(p),
                Err(e) => {
                    error!("Invalid glob pattern '{}': {}", glob, e);
                    None
                }
            })
            .collect();

        Self { ignore_patterns }
    }

    /// Candidate files in traversal order, folder by folder. Overlapping
    /// folders are walked independently, so shared files appear once per
    /// folder that contains them.
    pub fn collect<P: AsRef<Path>>(&self, folders: &[P]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for folder in folders {
            self.visit(folder.as_ref(), &mut files);
        }
        files
    }

    fn visit(&self, root: &Path, files: &mut Vec<PathBuf>) {
        if !root.is_dir() {
            warn!("Skipping {}: not a readable directory", root.display());
            return;
        }

        let before = files.len();
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Error walking {}: {}", root.display(), err);
                    continue;
                }
            };

            if entry.file_type().is_file() && is_jpeg(entry.path()) {
                files.push(entry.into_path());
            }
        }

        debug!("{} candidate files under {}", files.len() - before, root.display());
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(path))
    }
}

/// `.jpg` or `.jpeg`, any letter case.
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            JPEG_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_jpeg() {
        assert!(is_jpeg(Path::new("a.jpg")));
        assert!(is_jpeg(Path::new("a.JPG")));
        assert!(is_jpeg(Path::new("dir/a.Jpeg")));
        assert!(is_jpeg(Path::new("a.JPEG")));
        assert!(!is_jpeg(Path::new("a.png")));
        assert!(!is_jpeg(Path::new("a.jpg.txt")));
        assert!(!is_jpeg(Path::new("jpg")));
        assert!(!is_jpeg(Path::new("a.jpe")));
    }

    #[test]
    fn test_collect_no_folders() {
        let folders: Vec<PathBuf> = Vec::new();
        assert!(FileCollector::default().collect(&folders).is_empty());
    }

    #[test]
    fn test_collect_recurses_and_filters() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("2023").join("summer");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("a.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"x").unwrap();
        fs::write(nested.join("b.JPEG"), b"x").unwrap();
        fs::write(nested.join("c.png"), b"x").unwrap();

        let mut files = FileCollector::default().collect(&[tmp.path()]);
        files.sort();
        let mut expected = vec![tmp.path().join("a.jpg"), nested.join("b.JPEG")];
        expected.sort();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_directory_named_like_jpeg_is_not_a_candidate() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("album.jpg")).unwrap();
        assert!(FileCollector::default().collect(&[tmp.path()]).is_empty());
    }

    #[test]
    fn test_missing_folder_is_skipped() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.jpg"), b"x").unwrap();
        let missing = tmp.path().join("does-not-exist");

        let files = FileCollector::default().collect(&[missing.as_path(), tmp.path()]);
        assert_eq!(files, vec![tmp.path().join("a.jpg")]);
    }

    #[test]
    fn test_ignore_patterns() {
        let tmp = tempdir().unwrap();
        let thumbs = tmp.path().join(".thumbnails");
        fs::create_dir_all(&thumbs).unwrap();
        fs::write(thumbs.join("t.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("keep.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("skip_edit.jpg"), b"x").unwrap();

        let collector = FileCollector::new(&[
            "*/.thumbnails".to_string(),
            "*_edit.jpg".to_string(),
            "[".to_string(),
        ]);
        let files = collector.collect(&[tmp.path()]);
        assert_eq!(files, vec![tmp.path().join("keep.jpg")]);
    }
}
