use std::path::{Path, PathBuf};

/// Every location the run reads from or writes to, resolved against one root.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub ingest_dir: PathBuf,
    pub output_dir: PathBuf,
    pub targets_path: PathBuf,
    pub output_path: PathBuf,
    pub filtered_path: PathBuf,
    pub debug_dir: PathBuf,
    /// Dump each document's sanitized text into `debug_dir`.
    pub debug: bool,
}

impl Config {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let output_dir = root.join("out");
        Self {
            ingest_dir: root.join("docs"),
            targets_path: root.join("target_course_names.txt"),
            output_path: output_dir.join("output.csv"),
            filtered_path: output_dir.join("filtered.csv"),
            debug_dir: output_dir.join("debug_extracted_text"),
            output_dir,
            root,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_root() {
        let c = Config::from_root("/srv/transcripts");
        assert_eq!(c.ingest_dir, Path::new("/srv/transcripts/docs"));
        assert_eq!(c.output_path, Path::new("/srv/transcripts/out/output.csv"));
        assert_eq!(c.filtered_path, Path::new("/srv/transcripts/out/filtered.csv"));
        assert_eq!(
            c.targets_path,
            Path::new("/srv/transcripts/target_course_names.txt")
        );
        assert!(!c.debug);
    }
}
