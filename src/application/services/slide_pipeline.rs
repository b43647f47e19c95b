use crate::application::ports::{GenerationError, GenerationStage, ProgressReporter};
use crate::domain::{Deck, DeckStyle, ExtractedContent};

use super::content_analyzer::ContentAnalyzer;
use super::slide_synthesizer::SlideSynthesizer;
use super::text_segmenter::TextSegmenter;

/// segment → analyze → synthesize, as one synchronous transform.
///
/// Progress is reported at each stage boundary; latency simulation and
/// cancellation belong to the caller.
#[derive(Debug, Clone, Default)]
pub struct SlidePipeline {
    segmenter: TextSegmenter,
    analyzer: ContentAnalyzer,
}

impl SlidePipeline {
    pub fn new(segmenter: TextSegmenter, analyzer: ContentAnalyzer) -> Self {
        Self {
            segmenter,
            analyzer,
        }
    }

    pub fn analyze(&self, text: &str) -> Result<ExtractedContent, GenerationError> {
        let segmented = self.segmenter.segment(text)?;
        Ok(self.analyzer.analyze(&segmented))
    }

    pub fn run(
        &self,
        text: &str,
        style: DeckStyle,
        progress: &dyn ProgressReporter,
    ) -> Result<Deck, GenerationError> {
        progress.report(GenerationStage::Segmenting);
        let segmented = self.segmenter.segment(text)?;

        progress.report(GenerationStage::Analyzing);
        let extracted = self.analyzer.analyze(&segmented);

        progress.report(GenerationStage::Synthesizing);
        let slides = SlideSynthesizer::new(style.profile()).synthesize(&segmented, &extracted);

        Ok(Deck {
            style,
            slides,
            suggested_slide_count: extracted.metadata.suggested_slide_count,
        })
    }
}
