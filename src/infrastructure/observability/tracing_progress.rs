use crate::application::ports::{GenerationStage, ProgressReporter};

/// Emits each generation checkpoint as a structured log event.
pub struct TracingProgress {
    operation: &'static str,
}

impl TracingProgress {
    pub fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl ProgressReporter for TracingProgress {
    fn report(&self, stage: GenerationStage) {
        tracing::debug!(
            operation = self.operation,
            stage = stage.as_str(),
            percent = stage.percent(),
            "Generation progress"
        );
    }
}
