//! Source document line acquisition
//!
//! Turns a source document into the ordered, trimmed, non-empty text lines
//! the extraction pipeline consumes. Plain-text documents are read directly;
//! PDF documents go through the `pdftotext` utility (Poppler), which keeps
//! this tool free of any in-process PDF parsing.
//!
//! A document that cannot be read or converted fails with an extraction
//! error scoped to that document only.

use std::path::Path;
use std::process::Command;

use crate::error::{BreakevenError, BreakevenResult};

/// Read a source document and return its trimmed, non-empty lines in order.
pub fn read_document_lines(path: &Path) -> BreakevenResult<Vec<String>> {
    let raw = if is_pdf(path) {
        pdf_to_text(path)?
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| BreakevenError::extraction(path.display().to_string(), e.to_string()))?
    };

    Ok(collect_lines(&raw))
}

/// Derive the default vendor label for a document: its file stem.
pub fn vendor_label_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Convert a PDF to text by shelling out to `pdftotext <path> -`.
fn pdf_to_text(path: &Path) -> BreakevenResult<String> {
    let output = Command::new("pdftotext")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| {
            BreakevenError::extraction(
                path.display().to_string(),
                format!("failed to run pdftotext: {}", e),
            )
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BreakevenError::extraction(
            path.display().to_string(),
            format!("pdftotext exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn collect_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
