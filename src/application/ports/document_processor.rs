use async_trait::async_trait;

use crate::domain::Document;

/// Turns an uploaded document into plain text for the generation pipeline.
#[async_trait]
pub trait DocumentProcessor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, DocumentProcessorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentProcessorError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
