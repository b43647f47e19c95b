mod answer_index_source;
mod content_generator;
mod document_processor;
mod llm_client;
mod progress_reporter;

pub use answer_index_source::AnswerIndexSource;
pub use content_generator::{
    ContentGenerator, GenerationError, GenerationOptions, GeneratorProvider, MAX_QUIZ_QUESTIONS,
    MIN_QUIZ_QUESTIONS,
};
pub use document_processor::{DocumentProcessor, DocumentProcessorError};
pub use llm_client::{LlmClient, LlmClientError};
pub use progress_reporter::{GenerationStage, NoopProgress, ProgressReporter};
