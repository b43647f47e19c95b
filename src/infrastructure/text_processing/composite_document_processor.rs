use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentProcessor, DocumentProcessorError};
use crate::domain::{ContentType, Document};

/// Routes each document to the processor registered for its content type.
pub struct CompositeDocumentProcessor {
    processors: HashMap<ContentType, Arc<dyn DocumentProcessor>>,
}

impl CompositeDocumentProcessor {
    pub fn new(processors: Vec<(ContentType, Arc<dyn DocumentProcessor>)>) -> Self {
        Self {
            processors: processors.into_iter().collect(),
        }
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.processors.contains_key(&content_type)
    }
}

#[async_trait]
impl DocumentProcessor for CompositeDocumentProcessor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, DocumentProcessorError> {
        let processor = self.processors.get(&document.content_type).ok_or_else(|| {
            DocumentProcessorError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            )
        })?;

        processor.extract_text(data, document).await
    }
}
