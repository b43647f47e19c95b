mod deck_style;
mod document;
mod extracted_content;
mod quiz_question;
mod slide;
mod text_limits;

pub use deck_style::{DeckStyle, SynthesisProfile};
pub use document::{ContentType, Document, DocumentId};
pub use extracted_content::{
    BodySection, Complexity, ContentCategory, ContentMetadata, ContentStructure,
    ExtractedContent, KeyPoint,
};
pub use quiz_question::{
    AnswerKey, MAX_OPTIONS, MIN_OPTIONS, QuestionKind, QuizQuestion, QuizQuestionError,
};
pub use slide::{Deck, Slide, SlideContent, SlideKind, SlideLayout};
pub use text_limits::{
    MAX_BULLET_CHARS, MAX_TITLE_CHARS, fit_bullet, fit_title, truncate_with_ellipsis,
};
