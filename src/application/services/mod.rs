mod content_analyzer;
mod generation_service;
mod keyword_extractor;
mod phrasing;
mod quiz_synthesizer;
mod slide_pipeline;
mod slide_synthesizer;
mod text_sanitizer;
mod text_segmenter;
mod topic_detector;

pub use content_analyzer::{ContentAnalyzer, MAX_KEY_POINTS, MAX_MAIN_TOPICS, importance_score};
pub use generation_service::GenerationService;
pub use keyword_extractor::{ranked_words, significant_keywords, tokenize, top_keywords};
pub use phrasing::{derive_heading, keyword_heading, strip_leading_connectives};
pub use quiz_synthesizer::QuizSynthesizer;
pub use slide_pipeline::SlidePipeline;
pub use slide_synthesizer::SlideSynthesizer;
pub use text_sanitizer::sanitize_extracted_text;
pub use text_segmenter::{
    DEFAULT_MIN_PARAGRAPH_CHARS, DEFAULT_MIN_SENTENCE_CHARS, Paragraph, SegmentedText,
    TextSegmenter, split_paragraphs, split_sentences,
};
pub use topic_detector::{classify_content, detect_domain_topics, estimate_complexity};
