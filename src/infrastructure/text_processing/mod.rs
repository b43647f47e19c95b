mod composite_document_processor;
mod plain_text_adapter;

pub use composite_document_processor::CompositeDocumentProcessor;
pub use plain_text_adapter::PlainTextProcessor;
