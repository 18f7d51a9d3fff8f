//! PDF text-layer extraction via the pdf-extract crate.
//!
//! Digital PDFs only: scanned documents without a text layer come back as
//! (near-)empty pages, which downstream analysis treats as a degenerate
//! document rather than a failure.

use super::ExtractionError;

/// Extract the embedded text layer of every page, joined by newlines.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = extract_pdf_text(&[]).unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParsing(_)));
    }

    #[test]
    fn truncated_header_is_a_parse_error() {
        let err = extract_pdf_text(b"%PDF-1.4\n").unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParsing(_)));
    }
}
