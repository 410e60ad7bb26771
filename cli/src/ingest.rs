use anyhow::{bail, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use textdex_core::{Index, IndexBuilder};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct BuildReport {
    pub documents: usize,
    pub unique_terms: usize,
    /// Files that produced no indexable terms.
    pub skipped: usize,
    /// Files that could not be read.
    pub unreadable: usize,
    pub elapsed: Duration,
}

/// Walk `root` recursively and index every regular file in it.
pub fn build_index(root: &Path) -> Result<(Index, BuildReport)> {
    if !root.is_dir() {
        bail!("dataset directory not found: {}", root.display());
    }

    let start = Instant::now();
    let mut builder = IndexBuilder::new();
    let mut report = BuildReport::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(error = %err, "failed to walk dataset entry");
                report.unreadable += 1;
                continue;
            }
        };
        let path = entry.path();
        // Directory links are not descended; file links index their target.
        let is_file = if entry.path_is_symlink() {
            fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
        } else {
            entry.file_type().is_file()
        };
        if !is_file {
            continue;
        }
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read file");
                report.unreadable += 1;
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        if builder.add_document(path.display().to_string(), &text).is_err() {
            report.skipped += 1;
        }
    }

    let index = builder.finalize();
    report.documents = index.num_documents();
    report.unique_terms = index.num_terms();
    report.elapsed = start.elapsed();
    tracing::info!(
        documents = report.documents,
        skipped = report.skipped,
        unreadable = report.unreadable,
        "dataset ingested"
    );
    Ok((index, report))
}
