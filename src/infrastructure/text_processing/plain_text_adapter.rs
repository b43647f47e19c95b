use async_trait::async_trait;

use crate::application::ports::{DocumentProcessor, DocumentProcessorError};
use crate::domain::{ContentType, Document};

/// Reads UTF-8 text and Markdown uploads as-is. Markdown heading markers and
/// list bullets are stripped later, when the segmenter sanitizes the text.
pub struct PlainTextProcessor;

#[async_trait]
impl DocumentProcessor for PlainTextProcessor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, DocumentProcessorError> {
        if !matches!(
            document.content_type,
            ContentType::Text | ContentType::Markdown
        ) {
            return Err(DocumentProcessorError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let text = String::from_utf8(data.to_vec())
            .map_err(|e| DocumentProcessorError::ExtractionFailed(e.to_string()))?;

        Ok(text.trim_start_matches('\u{feff}').to_string())
    }
}
