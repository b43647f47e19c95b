use crate::domain::{Complexity, ContentCategory};

use super::keyword_extractor::tokenize;
use super::text_segmenter::SegmentedText;

/// Substring table for the insurance continuing-education domain. Not general
/// topic modelling: a hit on the left adds every label on the right.
const DOMAIN_TOPICS: &[(&str, &[&str])] = &[
    (
        "insurance",
        &["Professional Development", "Regulatory Compliance"],
    ),
    ("ethic", &["Ethics & Professional Conduct"]),
    ("complian", &["Regulatory Compliance"]),
    ("regulat", &["Regulatory Compliance"]),
    ("risk", &["Risk Management"]),
    ("claim", &["Claims Handling"]),
    ("underwrit", &["Underwriting Principles"]),
    ("client", &["Client Relations"]),
    ("customer", &["Client Relations"]),
    ("policyholder", &["Policy Administration"]),
    ("premium", &["Policy Administration"]),
    ("fraud", &["Fraud Prevention"]),
    ("legal", &["Legal Framework"]),
    ("legislat", &["Legal Framework"]),
    ("technolog", &["Technology & Innovation"]),
    ("digital", &["Technology & Innovation"]),
    ("leadership", &["Leadership"]),
    ("communicat", &["Communication Skills"]),
];

const CATEGORY_STEMS: &[(ContentCategory, &[&str])] = &[
    (
        ContentCategory::Regulatory,
        &[
            "regulat", "complian", "legal", "statut", "licens", "requirement", "law",
        ],
    ),
    (
        ContentCategory::Technical,
        &[
            "system", "software", "data", "technolog", "algorithm", "technical", "digital",
        ],
    ),
    (
        ContentCategory::Educational,
        &[
            "learn", "student", "course", "lesson", "training", "educat", "knowledge",
        ],
    ),
    (
        ContentCategory::Business,
        &[
            "market", "sales", "revenue", "business", "strateg", "profit", "customer",
        ],
    ),
];

const LONG_WORD_CHARS: usize = 9;

/// Domain topic labels found in `text`, in table order, without duplicates.
pub fn detect_domain_topics(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut topics: Vec<String> = Vec::new();

    for (pattern, labels) in DOMAIN_TOPICS {
        if !lowered.contains(pattern) {
            continue;
        }
        for label in *labels {
            if !topics.iter().any(|t| t == label) {
                topics.push((*label).to_string());
            }
        }
    }

    topics
}

/// Picks the category whose stems match the most tokens. Ties go to the
/// category listed first; no hits at all is `General`.
pub fn classify_content(text: &str) -> ContentCategory {
    let tokens: Vec<String> = tokenize(text).collect();

    let mut best = (ContentCategory::General, 0usize);
    for (category, stems) in CATEGORY_STEMS {
        let hits = tokens
            .iter()
            .filter(|token| stems.iter().any(|stem| token.starts_with(stem)))
            .count();
        if hits > best.1 {
            best = (*category, hits);
        }
    }

    best.0
}

pub fn estimate_complexity(segmented: &SegmentedText) -> Complexity {
    let sentences: Vec<&String> = segmented
        .paragraphs
        .iter()
        .flat_map(|p| p.sentences.iter())
        .collect();
    if sentences.is_empty() {
        return Complexity::Basic;
    }

    let words: Vec<String> = sentences.iter().flat_map(|s| tokenize(s)).collect();
    if words.is_empty() {
        return Complexity::Basic;
    }

    let avg_sentence_words = words.len() as f64 / sentences.len() as f64;
    let long_ratio = words
        .iter()
        .filter(|w| w.chars().count() >= LONG_WORD_CHARS)
        .count() as f64
        / words.len() as f64;

    if avg_sentence_words > 22.0 || long_ratio > 0.25 {
        Complexity::Advanced
    } else if avg_sentence_words > 14.0 || long_ratio > 0.15 {
        Complexity::Intermediate
    } else {
        Complexity::Basic
    }
}
