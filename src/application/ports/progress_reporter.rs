use std::fmt;

/// Checkpoints reached while a deck is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStage {
    Segmenting,
    Analyzing,
    Synthesizing,
    Complete,
}

impl GenerationStage {
    pub fn percent(&self) -> u8 {
        match self {
            GenerationStage::Segmenting => 10,
            GenerationStage::Analyzing => 35,
            GenerationStage::Synthesizing => 70,
            GenerationStage::Complete => 100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStage::Segmenting => "segmenting",
            GenerationStage::Analyzing => "analyzing",
            GenerationStage::Synthesizing => "synthesizing",
            GenerationStage::Complete => "complete",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.as_str(), self.percent())
    }
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, stage: GenerationStage);
}

pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _stage: GenerationStage) {}
}
