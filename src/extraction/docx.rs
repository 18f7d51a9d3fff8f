//! Word document extraction: flatten paragraph runs into plain text.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use super::ExtractionError;

/// Read a .docx container and concatenate its paragraph text, one
/// paragraph per line. Non-text content (tables, images) is skipped.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx =
        docx_rs::read_docx(bytes).map_err(|e| ExtractionError::DocxParsing(e.to_string()))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for para_child in paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}
