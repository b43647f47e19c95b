use std::sync::Arc;

use crate::application::ports::{ContentGenerator, GenerationOptions, GeneratorProvider};
use crate::infrastructure::llm::OpenAiClient;

use super::{HeuristicContentGenerator, LlmContentGenerator};

/// Picks the mock generator unless the call carries an API key and did not
/// ask for mock output.
pub struct ContentGeneratorFactory {
    mock: Arc<HeuristicContentGenerator>,
    completion_model: String,
    base_url: String,
}

impl ContentGeneratorFactory {
    pub fn new(
        mock: Arc<HeuristicContentGenerator>,
        completion_model: String,
        base_url: String,
    ) -> Self {
        Self {
            mock,
            completion_model,
            base_url,
        }
    }
}

impl GeneratorProvider for ContentGeneratorFactory {
    fn generator(&self, options: &GenerationOptions) -> Arc<dyn ContentGenerator> {
        if options.wants_mock() {
            tracing::debug!("Using heuristic mock generator");
            return Arc::clone(&self.mock) as Arc<dyn ContentGenerator>;
        }

        let api_key = options.api_key.clone().unwrap_or_default();
        tracing::debug!(model = %self.completion_model, "Using chat completion generator");
        Arc::new(LlmContentGenerator::new(Arc::new(OpenAiClient::new(
            api_key,
            self.completion_model.clone(),
            self.base_url.clone(),
        ))))
    }
}
