use serde::{Deserialize, Serialize};

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Knowledge,
    Application,
    Analysis,
    Scenario,
}

impl QuestionKind {
    pub const ROTATION: [QuestionKind; 4] = [
        QuestionKind::Knowledge,
        QuestionKind::Application,
        QuestionKind::Analysis,
        QuestionKind::Scenario,
    ];
}

/// Where the `correct_answer` index came from.
///
/// `Placeholder` keys are assigned arbitrarily by the mock generator and must
/// never be used to grade a learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    Placeholder,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: Option<String>,
    pub kind: QuestionKind,
    pub answer_key: AnswerKey,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizQuestionError {
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("expected between 2 and 6 options, got {0}")]
    OptionCount(usize),
    #[error("correct answer index {index} out of range for {len} options")]
    AnswerOutOfRange { index: usize, len: usize },
}

impl QuizQuestion {
    pub fn new(
        question: String,
        options: Vec<String>,
        correct_answer: usize,
        kind: QuestionKind,
        answer_key: AnswerKey,
    ) -> Result<Self, QuizQuestionError> {
        if question.trim().is_empty() {
            return Err(QuizQuestionError::EmptyQuestion);
        }
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
            return Err(QuizQuestionError::OptionCount(options.len()));
        }
        if correct_answer >= options.len() {
            return Err(QuizQuestionError::AnswerOutOfRange {
                index: correct_answer,
                len: options.len(),
            });
        }

        Ok(Self {
            question,
            options,
            correct_answer,
            explanation: None,
            kind,
            answer_key,
        })
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }
}
