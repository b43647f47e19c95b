use std::sync::Arc;

use crate::application::ports::{
    DocumentProcessor, GenerationError, GenerationOptions, GenerationStage, GeneratorProvider,
    ProgressReporter,
};
use crate::domain::{ContentType, Deck, Document, ExtractedContent, QuizQuestion};

use super::slide_pipeline::SlidePipeline;

pub struct GenerationService<D: ?Sized>
where
    D: DocumentProcessor,
{
    document_processor: Arc<D>,
    generators: Arc<dyn GeneratorProvider>,
    pipeline: SlidePipeline,
}

impl<D: ?Sized> GenerationService<D>
where
    D: DocumentProcessor,
{
    pub fn new(
        document_processor: Arc<D>,
        generators: Arc<dyn GeneratorProvider>,
        pipeline: SlidePipeline,
    ) -> Self {
        Self {
            document_processor,
            generators,
            pipeline,
        }
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<ExtractedContent, GenerationError> {
        self.pipeline.analyze(text)
    }

    #[tracing::instrument(skip(self, text, options, progress), fields(style = %options.style))]
    pub async fn generate_slides(
        &self,
        text: &str,
        options: &GenerationOptions,
        progress: &dyn ProgressReporter,
    ) -> Result<Deck, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        let generator = self.generators.generator(options);
        tracing::debug!(mock = generator.is_mock(), "Generating slides");

        let deck = generator
            .generate_slides(text, options.style, progress)
            .await?;
        progress.report(GenerationStage::Complete);

        tracing::info!(slides = deck.slides.len(), "Slides generated");
        Ok(deck)
    }

    #[tracing::instrument(skip(self, transcript, options))]
    pub async fn generate_quiz(
        &self,
        transcript: &str,
        options: &GenerationOptions,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        if transcript.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        let generator = self.generators.generator(options);
        let questions = generator
            .generate_quiz(transcript, options.quiz_question_count())
            .await?;

        tracing::info!(
            questions = questions.len(),
            mock = generator.is_mock(),
            "Quiz generated"
        );
        Ok(questions)
    }

    #[tracing::instrument(skip(self, data, options, progress), fields(bytes = data.len()))]
    pub async fn generate_from_document(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
        options: &GenerationOptions,
        progress: &dyn ProgressReporter,
    ) -> Result<Deck, GenerationError> {
        let document = Document::new(filename, content_type, data.len() as u64);

        let text = self
            .document_processor
            .extract_text(data, &document)
            .await?;

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            "Document text extracted"
        );

        self.generate_slides(&text, options, progress).await
    }
}
