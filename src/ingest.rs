use std::path::Path;

use crate::error::{Error, Result};

/// Black-box document-to-text collaborator. PDF and OCR engines slot in
/// behind this trait; the pipeline only sees raw text or a failure.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Reads UTF-8 text documents straight from disk.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Extraction(format!("{}: {e}", path.display())))?;

        if text.trim().is_empty() {
            return Err(Error::Extraction(format!(
                "{}: document contains no text",
                path.display()
            )));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_documents() {
        let dir = std::env::temp_dir();
        let path = dir.join("resumatch_ingest_test.txt");
        std::fs::write(&path, "Skills: Python").unwrap();

        let text = PlainTextExtractor.extract(&path).unwrap();
        assert_eq!(text, "Skills: Python");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_document_is_an_extraction_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("resumatch_ingest_empty.txt");
        std::fs::write(&path, "   \n").unwrap();

        let err = PlainTextExtractor.extract(&path).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_document_is_an_extraction_error() {
        let err = PlainTextExtractor
            .extract(Path::new("/nonexistent/resume.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
