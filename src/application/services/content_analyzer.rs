use unicode_segmentation::UnicodeSegmentation;

use crate::domain::{
    BodySection, ContentMetadata, ContentStructure, ExtractedContent, KeyPoint, fit_bullet,
};

use super::keyword_extractor::{tokenize, top_keywords};
use super::phrasing::{capitalize_first, derive_heading};
use super::text_segmenter::{Paragraph, SegmentedText};
use super::topic_detector::{classify_content, detect_domain_topics, estimate_complexity};

const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "learn",
    "understand",
    "important",
    "key",
    "essential",
    "principle",
    "concept",
    "requirement",
    "fundamental",
    "critical",
];

const ACTION_WORDS: &[&str] = &[
    "implement",
    "apply",
    "ensure",
    "follow",
    "manage",
    "develop",
    "review",
    "maintain",
    "protect",
    "identify",
    "evaluate",
    "establish",
];

pub const MAX_KEY_POINTS: usize = 8;
pub const MAX_MAIN_TOPICS: usize = 6;
const MIN_DOMAIN_TOPICS: usize = 3;
const MIN_SUGGESTED_SLIDES: usize = 3;
const MAX_SUGGESTED_SLIDES: usize = 12;

#[derive(Debug, Clone, Default)]
pub struct ContentAnalyzer;

impl ContentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, segmented: &SegmentedText) -> ExtractedContent {
        let full_text = segmented.full_text();

        let main_topics = main_topics(&full_text);
        let key_points = rank_key_points(&segmented.paragraphs);
        let structure = structure_of(&segmented.paragraphs);

        let metadata = ContentMetadata {
            category: classify_content(&full_text),
            complexity: estimate_complexity(segmented),
            suggested_slide_count: (segmented.paragraphs.len() + 2)
                .clamp(MIN_SUGGESTED_SLIDES, MAX_SUGGESTED_SLIDES),
            word_count: full_text.unicode_words().count(),
            sentence_count: segmented.sentence_count(),
        };

        tracing::debug!(
            topics = main_topics.len(),
            key_points = key_points.len(),
            category = ?metadata.category,
            complexity = ?metadata.complexity,
            "Analyzed content"
        );

        ExtractedContent {
            main_topics,
            key_points,
            structure,
            metadata,
        }
    }
}

fn main_topics(text: &str) -> Vec<String> {
    let mut topics = detect_domain_topics(text);

    if topics.len() < MIN_DOMAIN_TOPICS {
        for keyword in top_keywords(text, MAX_MAIN_TOPICS) {
            let label = capitalize_first(&keyword);
            if !topics.iter().any(|t| t.eq_ignore_ascii_case(&label)) {
                topics.push(label);
            }
        }
    }

    topics.truncate(MAX_MAIN_TOPICS);
    topics
}

/// `2 * sentences + 3 * educational hits + 2 * action hits`. Each listed word
/// counts once per paragraph, matched as a token prefix.
pub fn importance_score(paragraph: &Paragraph) -> u32 {
    let tokens: Vec<String> = tokenize(&paragraph.text).collect();
    let hits = |words: &[&str]| {
        words
            .iter()
            .filter(|word| tokens.iter().any(|t| t.starts_with(**word)))
            .count() as u32
    };

    paragraph.sentences.len() as u32 * 2 + hits(EDUCATIONAL_KEYWORDS) * 3 + hits(ACTION_WORDS) * 2
}

fn rank_key_points(paragraphs: &[Paragraph]) -> Vec<KeyPoint> {
    let mut points: Vec<KeyPoint> = paragraphs
        .iter()
        .filter_map(|paragraph| {
            let first = paragraph.sentences.first()?;
            Some(KeyPoint {
                topic: derive_heading(first),
                supporting_sentences: paragraph.sentences.clone(),
                importance: importance_score(paragraph),
            })
        })
        .collect();

    // Stable: equal scores keep reading order.
    points.sort_by(|a, b| b.importance.cmp(&a.importance));
    points.truncate(MAX_KEY_POINTS);
    points
}

fn structure_of(paragraphs: &[Paragraph]) -> ContentStructure {
    let introduction = (paragraphs.len() >= 2).then(|| paragraphs[0].text.clone());
    let conclusion = (paragraphs.len() >= 3).then(|| paragraphs[paragraphs.len() - 1].text.clone());

    let start = usize::from(introduction.is_some());
    let end = paragraphs.len() - usize::from(conclusion.is_some());

    let sections = paragraphs[start..end]
        .iter()
        .filter_map(|paragraph| {
            let (first, rest) = paragraph.sentences.split_first()?;
            let points = if rest.is_empty() {
                vec![fit_bullet(first)]
            } else {
                rest.iter().map(|s| fit_bullet(s)).collect()
            };
            Some(BodySection {
                heading: derive_heading(first),
                points,
            })
        })
        .collect();

    ContentStructure {
        introduction,
        sections,
        conclusion,
    }
}
