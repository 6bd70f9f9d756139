use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

pub const HEADER: [&str; 4] = ["Name", "Pass", "Course Code", "Course Name"];

/// One output row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub name: Option<String>,
    pub result: String,
    pub course_code: String,
    pub course_title: String,
}

/// Order by student name, then course title. Rows without a name come first.
pub fn sort_records(records: &mut [CourseRecord]) {
    records.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.course_title.cmp(&b.course_title))
    });
}

pub fn write_csv(records: &[CourseRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Write a report, logging instead of failing so one bad path can't cost the other report.
pub fn write_report(records: &[CourseRecord], path: &Path) -> bool {
    match write_csv(records, path) {
        Ok(()) => {
            info!("Wrote {} rows to {}", records.len(), path.display());
            true
        }
        Err(e) => {
            error!("Error writing CSV file {}: {:#}", path.display(), e);
            false
        }
    }
}
