use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    AnswerIndexSource, ContentGenerator, GenerationError, ProgressReporter,
};
use crate::application::services::{QuizSynthesizer, SlidePipeline};
use crate::domain::{Deck, DeckStyle, QuizQuestion};

/// Mock generation service: runs the local heuristics and, when configured,
/// waits before answering to mimic a remote model's latency.
pub struct HeuristicContentGenerator {
    pipeline: SlidePipeline,
    quiz: QuizSynthesizer,
    simulated_latency: Duration,
}

impl HeuristicContentGenerator {
    pub fn new(
        pipeline: SlidePipeline,
        answers: Arc<dyn AnswerIndexSource>,
        simulated_latency: Duration,
    ) -> Self {
        Self {
            pipeline,
            quiz: QuizSynthesizer::new(answers),
            simulated_latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }
}

#[async_trait]
impl ContentGenerator for HeuristicContentGenerator {
    async fn generate_slides(
        &self,
        text: &str,
        style: DeckStyle,
        progress: &dyn ProgressReporter,
    ) -> Result<Deck, GenerationError> {
        self.simulate_latency().await;
        self.pipeline.run(text, style, progress)
    }

    async fn generate_quiz(
        &self,
        transcript: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        self.simulate_latency().await;
        self.quiz.generate(transcript, count)
    }

    fn is_mock(&self) -> bool {
        true
    }
}
