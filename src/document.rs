use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use walkdir::WalkDir;

/// Anything that can turn a document path into its pages of plain text.
pub trait DocumentSource: Sync {
    fn pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reads PDFs from disk with `pdf-extract`.
pub struct PdfSource;

impl DocumentSource for PdfSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;

        // pdf-extract panics on some malformed files instead of returning an error
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        }));
        match result {
            Ok(Ok(pages)) => Ok(pages.iter().map(|p| normalize_page(p)).collect()),
            Ok(Err(e)) => Err(anyhow!("extracting text from {}: {}", path.display(), e)),
            Err(_) => Err(anyhow!(
                "extracting text from {}: malformed PDF",
                path.display()
            )),
        }
    }
}

/// One line of text per `\n`, as the parser expects. pdf-extract inserts a
/// blank line between widely spaced lines, which would break every course
/// block.
fn normalize_page(page: &str) -> String {
    let mut out = String::with_capacity(page.len());
    for line in page.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Every `.pdf` file under `dir`, recursively, in file-name order. Symlinks are followed.
pub fn discover_pdfs(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".pdf"))
        .map(|e| e.into_path())
        .collect()
}
