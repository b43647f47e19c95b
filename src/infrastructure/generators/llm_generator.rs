use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::application::ports::{
    ContentGenerator, GenerationError, GenerationStage, LlmClient, ProgressReporter,
};
use crate::domain::{
    AnswerKey, Deck, DeckStyle, MAX_OPTIONS, QuestionKind, QuizQuestion, Slide, SlideContent,
    SlideKind, SlideLayout, fit_bullet, fit_title,
};

const SLIDES_PROMPT: &str = "Turn the lesson text into presentation slides. Respond with a JSON \
array only. Each element has \"type\" (title, content, bullet, image, quote, comparison or \
conclusion), \"title\" (at most 80 characters), \"content\" (a string or an array of short \
bullet strings) and optional \"notes\". Start with one title slide and end with one conclusion \
slide.";

const QUIZ_PROMPT: &str = "Write multiple-choice questions about the transcript. Respond with a \
JSON array only. Each element has \"question\", \"options\" (four strings), \"correctAnswer\" \
(zero-based index of the right option) and \"explanation\".";

const MAX_TAKEAWAYS: usize = 4;

#[derive(Deserialize)]
struct RawSlide {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Option<SlideContent>,
    #[serde(default, alias = "speakerNotes")]
    notes: Option<String>,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    correct_answer: usize,
    #[serde(default)]
    explanation: Option<String>,
}

/// Generation backed by a chat-completion model.
///
/// Model output is normalized to the same bounds as the local pipeline: titles
/// and bullets are truncated, and a title and closing slide are added when the
/// model leaves them out.
pub struct LlmContentGenerator<L: LlmClient> {
    llm_client: Arc<L>,
}

impl<L: LlmClient> LlmContentGenerator<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }
}

#[async_trait]
impl<L: LlmClient + 'static> ContentGenerator for LlmContentGenerator<L> {
    async fn generate_slides(
        &self,
        text: &str,
        style: DeckStyle,
        progress: &dyn ProgressReporter,
    ) -> Result<Deck, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        progress.report(GenerationStage::Segmenting);
        progress.report(GenerationStage::Analyzing);
        let prompt = format!(
            "{} Use a {} visual style with at most {} content slides.",
            SLIDES_PROMPT,
            style,
            style.profile().max_content_slides
        );
        let response = self.llm_client.complete(&prompt, text).await?;

        progress.report(GenerationStage::Synthesizing);
        let raw: Vec<RawSlide> = parse_json_array(&response)?;
        let slides = normalize_slides(raw, text)?;
        let suggested_slide_count = slides.len();

        Ok(Deck {
            style,
            slides,
            suggested_slide_count,
        })
    }

    async fn generate_quiz(
        &self,
        transcript: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        if transcript.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        let prompt = format!("{} Write exactly {} questions.", QUIZ_PROMPT, count);
        let response = self.llm_client.complete(&prompt, transcript).await?;
        let raw: Vec<RawQuestion> = parse_json_array(&response)?;

        if raw.is_empty() {
            return Err(GenerationError::InvalidModelResponse(
                "no questions returned".to_string(),
            ));
        }

        raw.into_iter()
            .take(count)
            .enumerate()
            .map(|(index, q)| -> Result<QuizQuestion, GenerationError> {
                let options: Vec<String> = q.options.into_iter().take(MAX_OPTIONS).collect();
                let kind = QuestionKind::ROTATION[index % QuestionKind::ROTATION.len()];
                let question = QuizQuestion::new(
                    q.question,
                    options,
                    q.correct_answer,
                    kind,
                    AnswerKey::Generated,
                )
                .map_err(|e| GenerationError::InvalidModelResponse(e.to_string()))?;
                Ok(match q.explanation {
                    Some(explanation) => question.with_explanation(explanation),
                    None => question,
                })
            })
            .collect()
    }

    fn is_mock(&self) -> bool {
        false
    }
}

/// Parses the outermost JSON array in `response`, tolerating code fences and
/// chatter around it.
fn parse_json_array<T: DeserializeOwned>(response: &str) -> Result<Vec<T>, GenerationError> {
    let start = response.find('[');
    let end = response.rfind(']');

    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &response[start..=end],
        _ => {
            return Err(GenerationError::InvalidModelResponse(
                "no JSON array in response".to_string(),
            ));
        }
    };

    serde_json::from_str(json).map_err(|e| GenerationError::InvalidModelResponse(e.to_string()))
}

fn normalize_slides(raw: Vec<RawSlide>, source: &str) -> Result<Vec<Slide>, GenerationError> {
    let mut slides: Vec<Slide> = raw
        .into_iter()
        .filter(|r| !r.title.trim().is_empty())
        .map(|r| {
            let kind = r
                .kind
                .as_deref()
                .and_then(SlideKind::from_label)
                .unwrap_or(SlideKind::Content);
            let content = match r.content {
                Some(SlideContent::Points(points)) => {
                    SlideContent::Points(points.iter().map(|p| fit_bullet(p)).collect())
                }
                Some(text) => text,
                None => SlideContent::Text(String::new()),
            };
            let mut slide = Slide::new(kind, fit_title(&r.title), content);
            slide.speaker_notes = r.notes;
            slide
        })
        .collect();

    if slides.is_empty() {
        return Err(GenerationError::InvalidModelResponse(
            "no usable slides returned".to_string(),
        ));
    }

    // Only the first slide may be a title slide and only the last a conclusion.
    let last = slides.len() - 1;
    for (index, slide) in slides.iter_mut().enumerate() {
        let misplaced = (slide.kind == SlideKind::Title && index != 0)
            || (slide.kind == SlideKind::Conclusion && index != last);
        if misplaced {
            slide.kind = SlideKind::Content;
        }
    }

    if slides[0].kind != SlideKind::Title {
        let heading = source.lines().find(|l| !l.trim().is_empty()).unwrap_or("Presentation");
        slides.insert(
            0,
            Slide::new(
                SlideKind::Title,
                fit_title(heading),
                SlideContent::Text(String::new()),
            )
            .with_layout(SlideLayout::TitleCenter),
        );
    }

    if slides.last().map(|s| s.kind) != Some(SlideKind::Conclusion) {
        let mut takeaways: Vec<String> = slides
            .iter()
            .skip(1)
            .take(MAX_TAKEAWAYS)
            .map(|s| fit_bullet(&s.title))
            .collect();
        if takeaways.is_empty() {
            takeaways.push("Review the key concepts covered".to_string());
        }
        slides.push(
            Slide::new(
                SlideKind::Conclusion,
                "Key Takeaways".to_string(),
                SlideContent::Points(takeaways),
            )
            .with_layout(SlideLayout::Closing),
        );
    }

    Ok(slides)
}
