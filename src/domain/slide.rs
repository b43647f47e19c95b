use serde::{Deserialize, Serialize};

use super::deck_style::DeckStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Content,
    Bullet,
    Image,
    Quote,
    Comparison,
    Conclusion,
}

impl SlideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Content => "content",
            SlideKind::Bullet => "bullet",
            SlideKind::Image => "image",
            SlideKind::Quote => "quote",
            SlideKind::Comparison => "comparison",
            SlideKind::Conclusion => "conclusion",
        }
    }

    /// Parses the loose labels generative backends tend to emit.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "content" | "text" => Some(Self::Content),
            "bullet" | "bullets" | "list" => Some(Self::Bullet),
            "image" | "visual" => Some(Self::Image),
            "quote" => Some(Self::Quote),
            "comparison" | "two-column" | "two_column" => Some(Self::Comparison),
            "conclusion" | "closing" | "summary" => Some(Self::Conclusion),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideContent {
    Text(String),
    Points(Vec<String>),
}

impl SlideContent {
    pub fn is_empty(&self) -> bool {
        match self {
            SlideContent::Text(text) => text.trim().is_empty(),
            SlideContent::Points(points) => points.is_empty(),
        }
    }
}

/// Rendering hint for the editor; carries no semantics of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    TitleCenter,
    Agenda,
    Standard,
    ImageRight,
    TwoColumn,
    Spotlight,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub kind: SlideKind,
    pub title: String,
    pub content: SlideContent,
    pub speaker_notes: Option<String>,
    pub layout: Option<SlideLayout>,
}

impl Slide {
    pub fn new(kind: SlideKind, title: String, content: SlideContent) -> Self {
        Self {
            kind,
            title,
            content,
            speaker_notes: None,
            layout: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = Some(notes.into());
        self
    }

    pub fn with_layout(mut self, layout: SlideLayout) -> Self {
        self.layout = Some(layout);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub style: DeckStyle,
    pub slides: Vec<Slide>,
    pub suggested_slide_count: usize,
}
