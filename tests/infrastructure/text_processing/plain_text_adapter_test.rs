use std::sync::Arc;

use lectern::application::ports::{DocumentProcessor, DocumentProcessorError};
use lectern::domain::{ContentType, Document};
use lectern::infrastructure::text_processing::{CompositeDocumentProcessor, PlainTextProcessor};

fn document(name: &str, content_type: ContentType, data: &[u8]) -> Document {
    Document::new(name.to_string(), content_type, data.len() as u64)
}

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_string() {
    let data = b"Hello, this is plain text.";

    let result = PlainTextProcessor
        .extract_text(data, &document("readme.txt", ContentType::Text, data))
        .await;

    assert_eq!(result.unwrap(), "Hello, this is plain text.");
}

#[tokio::test]
async fn given_byte_order_mark_when_extracting_then_strips_it() {
    let data = "\u{feff}# Lesson".as_bytes();

    let result = PlainTextProcessor
        .extract_text(data, &document("lesson.md", ContentType::Markdown, data))
        .await;

    assert_eq!(result.unwrap(), "# Lesson");
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_returns_extraction_failed() {
    let data: &[u8] = &[0xFF, 0xFE, 0xFD];

    let result = PlainTextProcessor
        .extract_text(data, &document("broken.txt", ContentType::Text, data))
        .await;

    assert!(matches!(
        result,
        Err(DocumentProcessorError::ExtractionFailed(_))
    ));
}

#[tokio::test]
async fn given_non_text_content_type_when_extracting_then_returns_unsupported() {
    let data = b"some data";

    let result = PlainTextProcessor
        .extract_text(data, &document("file.pdf", ContentType::Pdf, data))
        .await;

    assert!(matches!(
        result,
        Err(DocumentProcessorError::UnsupportedContentType(_))
    ));
}

#[tokio::test]
async fn given_registered_processor_when_routing_then_composite_delegates() {
    let composite = CompositeDocumentProcessor::new(vec![(
        ContentType::Markdown,
        Arc::new(PlainTextProcessor) as Arc<dyn DocumentProcessor>,
    )]);
    let data = b"## Claims";

    let result = composite
        .extract_text(data, &document("claims.md", ContentType::Markdown, data))
        .await;

    assert!(composite.supports(ContentType::Markdown));
    assert!(!composite.supports(ContentType::Docx));
    assert_eq!(result.unwrap(), "## Claims");
}

#[tokio::test]
async fn given_unregistered_type_when_routing_then_composite_reports_mime() {
    let composite = CompositeDocumentProcessor::new(Vec::new());
    let data = b"PK";

    let result = composite
        .extract_text(data, &document("notes.docx", ContentType::Docx, data))
        .await;

    match result {
        Err(DocumentProcessorError::UnsupportedContentType(mime)) => {
            assert_eq!(mime, ContentType::Docx.as_mime());
        }
        other => panic!("expected unsupported content type, got {:?}", other),
    }
}
