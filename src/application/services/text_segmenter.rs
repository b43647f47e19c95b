use regex::Regex;
use std::sync::LazyLock;

use crate::application::ports::GenerationError;
use crate::domain::{MAX_TITLE_CHARS, fit_title};

use super::text_sanitizer::sanitize_extracted_text;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());
static SENTENCE_TERMINATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

pub const DEFAULT_MIN_PARAGRAPH_CHARS: usize = 20;
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 10;
const MAX_HEADING_WORDS: usize = 12;

/// Splits on blank lines. Paragraphs of `min_chars` characters or fewer are dropped.
pub fn split_paragraphs(text: &str, min_chars: usize) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(join_lines)
        .filter(|p| p.chars().count() > min_chars)
        .collect()
}

/// Splits on runs of `.`, `!` and `?`, dropping the terminators.
///
/// Purely punctuation based: abbreviations ("e.g.") and decimals ("3.5")
/// are split as if they ended a sentence.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<String> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(join_lines)
        .filter(|s| s.chars().count() > min_chars)
        .collect()
}

fn join_lines(block: &str) -> String {
    block.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    /// Never empty; a paragraph without a qualifying sentence keeps its whole text.
    pub sentences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedText {
    pub heading: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

impl SegmentedText {
    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }

    pub fn first_sentence(&self) -> Option<&str> {
        self.paragraphs
            .first()
            .and_then(|p| p.sentences.first())
            .map(String::as_str)
    }

    pub fn full_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.paragraphs.len() + 1);
        if let Some(heading) = &self.heading {
            parts.push(heading);
        }
        parts.extend(self.paragraphs.iter().map(|p| p.text.as_str()));
        parts.join("\n\n")
    }
}

#[derive(Debug, Clone)]
pub struct TextSegmenter {
    min_paragraph_chars: usize,
    min_sentence_chars: usize,
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PARAGRAPH_CHARS, DEFAULT_MIN_SENTENCE_CHARS)
    }
}

impl TextSegmenter {
    pub fn new(min_paragraph_chars: usize, min_sentence_chars: usize) -> Self {
        Self {
            min_paragraph_chars,
            min_sentence_chars,
        }
    }

    pub fn segment(&self, raw: &str) -> Result<SegmentedText, GenerationError> {
        if raw.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }
        if !raw.chars().any(char::is_alphanumeric) {
            return Err(GenerationError::DegenerateSegmentation);
        }

        let text = sanitize_extracted_text(raw);
        let (heading, body) = split_heading(&text);

        let mut paragraphs: Vec<Paragraph> = split_paragraphs(body, self.min_paragraph_chars)
            .into_iter()
            .map(|p| self.paragraph(p))
            .collect();

        if paragraphs.is_empty() {
            let remaining = join_lines(body);
            if !remaining.is_empty() {
                paragraphs.push(self.paragraph(remaining));
            }
        }

        tracing::debug!(
            has_heading = heading.is_some(),
            paragraphs = paragraphs.len(),
            "Segmented input text"
        );

        Ok(SegmentedText {
            heading,
            paragraphs,
        })
    }

    fn paragraph(&self, text: String) -> Paragraph {
        let mut sentences = split_sentences(&text, self.min_sentence_chars);
        if sentences.is_empty() {
            let whole = text.trim_end_matches(['.', '!', '?']).trim().to_string();
            sentences.push(if whole.is_empty() { text.clone() } else { whole });
        }
        Paragraph { text, sentences }
    }
}

/// Splits a heading-like first line off the sanitized text.
///
/// A first line followed by a lowercase line in the same block is a wrapped
/// sentence, not a heading.
fn split_heading(text: &str) -> (Option<String>, &str) {
    let (first_line, rest) = text.split_once('\n').unwrap_or((text, ""));
    let wraps_into_next_line =
        !rest.starts_with('\n') && rest.chars().next().is_some_and(char::is_lowercase);

    if is_heading(first_line) && !wraps_into_next_line {
        (Some(fit_title(first_line)), rest.trim_start())
    } else {
        (None, text)
    }
}

fn is_heading(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty()
        && line.chars().count() <= MAX_TITLE_CHARS
        && line.split_whitespace().count() <= MAX_HEADING_WORDS
        && !line.ends_with(['.', '!', '?', ',', ';'])
}
