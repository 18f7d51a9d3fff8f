//! Text extraction from uploaded report containers.
//!
//! Dispatch is by lower-cased file extension: `pdf` (text layer only, no
//! rendering or OCR), `docx`/`doc` (paragraph traversal), `txt` (lossy
//! UTF-8 read). The API layer treats any extraction failure as an empty
//! document so analysis can degrade to placeholder output.

use std::path::Path;

use thiserror::Error;

mod docx;
mod pdf;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing error: {0}")]
    PdfParsing(String),

    #[error("DOCX parsing error: {0}")]
    DocxParsing(String),

    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),
}

/// Extract plain text from a file on disk, dispatching on its extension.
///
/// A readable file with no text content yields an empty string, not an
/// error; that is a valid (degenerate) document downstream.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => {
            let bytes = std::fs::read(path)?;
            extract_pdf_text(&bytes)
        }
        "docx" | "doc" => {
            let bytes = std::fs::read(path)?;
            extract_docx_text(&bytes)
        }
        "txt" => {
            let bytes = std::fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        other => Err(ExtractionError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn txt_file_reads_verbatim() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Heart rate: 72 bpm\nPatient stable").unwrap();
        let text = extract_text(file.path()).unwrap();
        assert_eq!(text, "Heart rate: 72 bpm\nPatient stable");
    }

    #[test]
    fn txt_with_invalid_utf8_reads_lossily() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"glucose 120\xff mg/dL").unwrap();
        let text = extract_text(file.path()).unwrap();
        assert!(text.starts_with("glucose 120"));
        assert!(text.ends_with("mg/dL"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(ref e) if e == "csv"));
    }

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        let mut file = tempfile::Builder::new().suffix(".TXT").tempfile().unwrap();
        write!(file, "plain text").unwrap();
        assert_eq!(extract_text(file.path()).unwrap(), "plain text");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = extract_text(Path::new("/nonexistent/report.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
    }

    #[test]
    fn garbage_bytes_with_pdf_extension_fail_as_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"not a pdf at all").unwrap();
        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParsing(_)));
    }
}
