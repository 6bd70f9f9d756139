use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::document::{discover_pdfs, DocumentSource};
use crate::parser;
use crate::report::{self, CourseRecord};
use crate::targets;

/// The two tables a run produces.
#[derive(Debug)]
pub struct Reports {
    pub full: Vec<CourseRecord>,
    pub filtered: Vec<CourseRecord>,
}

/// Extract every document under the ingest directory. `None` when there is nothing to process.
///
/// Any document that can't be read fails the whole run.
pub fn process_all(config: &Config, source: &dyn DocumentSource) -> Result<Option<Reports>> {
    let paths = discover_pdfs(&config.ingest_dir);
    if paths.is_empty() {
        warn!(
            "No PDF files found in the ingest directory {}",
            config.ingest_dir.display()
        );
        return Ok(None);
    }

    if config.debug {
        fs::create_dir_all(&config.debug_dir)
            .with_context(|| format!("creating {}", config.debug_dir.display()))?;
    }

    info!("Processing {} PDF files...", paths.len());

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let per_document: Result<Vec<Vec<CourseRecord>>> = paths
        .par_iter()
        .map(|path| {
            let records = process_document(config, source, path);
            pb.inc(1);
            records
        })
        .collect();
    pb.finish_and_clear();

    let mut full: Vec<CourseRecord> = per_document?.into_iter().flatten().collect();
    report::sort_records(&mut full);
    info!("Finished! Extracted {} course records", full.len());

    let targets = targets::load_targets(&config.targets_path);
    let filtered = targets::filter_records(&full, &targets);
    debug!(
        "{} of {} records match {} target codes",
        filtered.len(),
        full.len(),
        targets.len()
    );

    Ok(Some(Reports { full, filtered }))
}

/// Process all documents and write both reports. Write failures are logged, not returned.
pub fn run(config: &Config, source: &dyn DocumentSource) -> Result<()> {
    let Some(reports) = process_all(config, source)? else {
        return Ok(());
    };

    report::write_report(&reports.full, &config.output_path);
    report::write_report(&reports.filtered, &config.filtered_path);
    Ok(())
}

fn process_document(
    config: &Config,
    source: &dyn DocumentSource,
    path: &Path,
) -> Result<Vec<CourseRecord>> {
    let pages = source.pages(path)?;
    let (text, transcript) = parser::process_text(&pages.concat());

    if config.debug {
        let dump = debug_dump_path(config, path);
        if let Some(parent) = dump.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&dump, &text).with_context(|| format!("writing {}", dump.display()))?;
    }

    match &transcript.name {
        Some(name) => debug!(
            "{}: {} with {} courses",
            path.display(),
            name,
            transcript.courses.len()
        ),
        None => warn!("{}: no student name found", path.display()),
    }
    if transcript.courses.is_empty() {
        warn!("{}: no course blocks found", path.display());
    }

    Ok(transcript
        .courses
        .into_iter()
        .map(|c| CourseRecord {
            name: transcript.name.clone(),
            result: c.result,
            course_code: c.code,
            course_title: c.title,
        })
        .collect())
}

/// Mirrors the document's location under the ingest directory, so equal
/// file names in different folders get separate dumps.
fn debug_dump_path(config: &Config, path: &Path) -> PathBuf {
    let relative = path
        .strip_prefix(&config.ingest_dir)
        .unwrap_or_else(|_| Path::new(path.file_name().unwrap_or_default()));
    config.debug_dir.join(relative).with_extension("txt")
}
