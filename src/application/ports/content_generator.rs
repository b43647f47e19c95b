use async_trait::async_trait;

use super::document_processor::DocumentProcessorError;
use super::llm_client::LlmClientError;
use super::progress_reporter::ProgressReporter;
use crate::domain::{Deck, DeckStyle, QuizQuestion, QuizQuestionError};

pub const MIN_QUIZ_QUESTIONS: usize = 5;
pub const MAX_QUIZ_QUESTIONS: usize = 8;

/// Produces slides and quiz questions from plain text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_slides(
        &self,
        text: &str,
        style: DeckStyle,
        progress: &dyn ProgressReporter,
    ) -> Result<Deck, GenerationError>;

    async fn generate_quiz(
        &self,
        transcript: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GenerationError>;

    /// True when output is simulated rather than produced by a real backend.
    fn is_mock(&self) -> bool;
}

/// Per-call generation settings. Passed explicitly, never read from globals.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub api_key: Option<String>,
    pub use_mock: bool,
    pub style: DeckStyle,
    pub quiz_questions: usize,
}

impl GenerationOptions {
    pub fn mock(style: DeckStyle) -> Self {
        Self {
            api_key: None,
            use_mock: true,
            style,
            quiz_questions: MIN_QUIZ_QUESTIONS,
        }
    }

    pub fn wants_mock(&self) -> bool {
        self.use_mock || self.api_key.as_deref().is_none_or(|k| k.trim().is_empty())
    }

    pub fn quiz_question_count(&self) -> usize {
        self.quiz_questions
            .clamp(MIN_QUIZ_QUESTIONS, MAX_QUIZ_QUESTIONS)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("input text is empty")]
    EmptyInput,
    #[error("input contains no words to segment")]
    DegenerateSegmentation,
    #[error("not enough content: {0}")]
    InsufficientContent(String),
    #[error("document processing: {0}")]
    DocumentProcessing(#[from] DocumentProcessorError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("invalid model response: {0}")]
    InvalidModelResponse(String),
    #[error("invalid question: {0}")]
    InvalidQuestion(#[from] QuizQuestionError),
}

/// Chooses the generator for a call from its options.
pub trait GeneratorProvider: Send + Sync {
    fn generator(&self, options: &GenerationOptions) -> std::sync::Arc<dyn ContentGenerator>;
}
