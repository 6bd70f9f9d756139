use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::error;

use crate::report::CourseRecord;

/// Load the course-code allow-list: trimmed, upper-cased, deduplicated, sorted.
///
/// An unreadable file is logged and treated as an empty list, so the filtered
/// report comes out empty rather than the run failing.
pub fn load_targets(path: &Path) -> BTreeSet<String> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_targets(&contents),
        Err(e) => {
            error!("Error reading target course names from {}: {}", path.display(), e);
            BTreeSet::new()
        }
    }
}

fn parse_targets(contents: &str) -> BTreeSet<String> {
    contents
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Keep records whose course code is in `targets`. Matching is exact, so
/// lower-case codes in the source documents never match.
pub fn filter_records(records: &[CourseRecord], targets: &BTreeSet<String>) -> Vec<CourseRecord> {
    records
        .iter()
        .filter(|r| targets.contains(&r.course_code))
        .cloned()
        .collect()
}
