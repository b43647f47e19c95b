use std::sync::Arc;

use crate::application::ports::{AnswerIndexSource, GenerationError};
use crate::domain::{AnswerKey, QuestionKind, QuizQuestion};

use super::keyword_extractor::{significant_keywords, top_keywords};

/// Options whose index the placeholder key may point at. The fourth option of
/// every template is never marked correct.
const PLACEHOLDER_ANSWER_RANGE: usize = 3;

struct QuestionTemplate {
    question: &'static str,
    options: [&'static str; 4],
}

const KNOWLEDGE: QuestionTemplate = QuestionTemplate {
    question: "Which statement best describes the role of {keyword} in professional practice?",
    options: [
        "It provides a framework for consistent, ethical decisions about {keyword}",
        "It applies to {keyword} only at the senior management level",
        "It makes {keyword} optional unless a client requests it",
        "It replaces the need to document decisions about {keyword}",
    ],
};

const APPLICATION: QuestionTemplate = QuestionTemplate {
    question: "How should a practitioner apply {keyword} when advising a new client?",
    options: [
        "Assess the client's needs and record how {keyword} was considered",
        "Apply {keyword} only after a complaint has been filed",
        "Leave every decision about {keyword} to the client",
        "Consider {keyword} only for high-value accounts",
    ],
};

const ANALYSIS: QuestionTemplate = QuestionTemplate {
    question: "What is the most likely consequence of neglecting {keyword}?",
    options: [
        "Greater regulatory and reputational exposure related to {keyword}",
        "Faster processing with no downside for {keyword}",
        "Improved client satisfaction regarding {keyword}",
        "No measurable impact on outcomes tied to {keyword}",
    ],
};

const SCENARIO: QuestionTemplate = QuestionTemplate {
    question: "A colleague suggests skipping the steps related to {keyword} to save time. What is the best response?",
    options: [
        "Explain why {keyword} matters and follow the established procedure",
        "Agree, since deadlines take priority over {keyword}",
        "Skip the {keyword} steps and inform the client afterwards",
        "Raise {keyword} only if the client complains",
    ],
};

fn template_for(kind: QuestionKind) -> &'static QuestionTemplate {
    match kind {
        QuestionKind::Knowledge => &KNOWLEDGE,
        QuestionKind::Application => &APPLICATION,
        QuestionKind::Analysis => &ANALYSIS,
        QuestionKind::Scenario => &SCENARIO,
    }
}

fn fill(template: &str, keyword: &str) -> String {
    template.replace("{keyword}", keyword)
}

/// Template-based quiz generation for mock mode.
///
/// The correct index is drawn from the injected [`AnswerIndexSource`] and is
/// not derived from the transcript; every question is tagged
/// [`AnswerKey::Placeholder`].
pub struct QuizSynthesizer {
    answers: Arc<dyn AnswerIndexSource>,
}

impl QuizSynthesizer {
    pub fn new(answers: Arc<dyn AnswerIndexSource>) -> Self {
        Self { answers }
    }

    pub fn generate(
        &self,
        transcript: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        if transcript.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        let keywords = quiz_keywords(transcript, count);
        if keywords.is_empty() {
            return Err(GenerationError::InsufficientContent(
                "no keywords found for quiz questions".to_string(),
            ));
        }

        keywords
            .iter()
            .enumerate()
            .map(|(index, keyword)| -> Result<QuizQuestion, GenerationError> {
                let kind = QuestionKind::ROTATION[index % QuestionKind::ROTATION.len()];
                let template = template_for(kind);
                let correct = self.answers.pick(PLACEHOLDER_ANSWER_RANGE) % PLACEHOLDER_ANSWER_RANGE;

                let question = QuizQuestion::new(
                    fill(template.question, keyword),
                    template.options.iter().map(|o| fill(o, keyword)).collect(),
                    correct,
                    kind,
                    AnswerKey::Placeholder,
                )?;

                Ok(question.with_explanation(format!(
                    "Review the material on {}. This answer key is a placeholder and has not been verified.",
                    keyword
                )))
            })
            .collect()
    }
}

/// Significant keywords first, topped up with ordinary keywords when the
/// transcript is short.
fn quiz_keywords(transcript: &str, count: usize) -> Vec<String> {
    let mut keywords = significant_keywords(transcript, count);
    if keywords.len() < count {
        for keyword in top_keywords(transcript, count * 2) {
            if keywords.len() == count {
                break;
            }
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
    }
    keywords
}
