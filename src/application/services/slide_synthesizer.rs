use crate::domain::{
    ExtractedContent, Slide, SlideContent, SlideKind, SlideLayout, SynthesisProfile, fit_bullet,
    fit_title,
};

use super::keyword_extractor::top_keywords;
use super::phrasing::{as_statement, derive_heading, keyword_heading};
use super::text_segmenter::SegmentedText;

const MIN_SENTENCE_CHUNK: usize = 2;
const MAX_AGENDA_ITEMS: usize = 6;
const MAX_TAKEAWAYS: usize = 4;
const TITLE_SUBTITLE_TOPICS: usize = 3;

/// Maps a segmented text and its analysis onto an ordered slide sequence.
///
/// The output always opens with exactly one `Title` slide and closes with
/// exactly one `Conclusion` slide.
#[derive(Debug, Clone)]
pub struct SlideSynthesizer {
    profile: SynthesisProfile,
}

impl SlideSynthesizer {
    pub fn new(profile: SynthesisProfile) -> Self {
        Self { profile }
    }

    pub fn synthesize(&self, segmented: &SegmentedText, extracted: &ExtractedContent) -> Vec<Slide> {
        let units = self.content_units(segmented);
        let mut slides = Vec::with_capacity(units.len() + 3);

        slides.push(title_slide(segmented, extracted));

        if extracted.main_topics.len() >= self.profile.agenda_min_topics {
            slides.push(agenda_slide(&extracted.main_topics));
        }

        for (index, sentences) in units.iter().enumerate() {
            slides.push(self.unit_slide(index + 1, sentences));
        }

        slides.push(closing_slide(extracted));
        slides
    }

    /// One unit per paragraph. A lone paragraph is cut into sentence chunks
    /// of `max(2, sentences / 3)` instead.
    pub fn content_units<'a>(&self, segmented: &'a SegmentedText) -> Vec<&'a [String]> {
        let max = self.profile.max_content_slides;

        match segmented.paragraphs.as_slice() {
            [only] => {
                let chunk_size = (only.sentences.len() / 3).max(MIN_SENTENCE_CHUNK);
                only.sentences.chunks(chunk_size).take(max).collect()
            }
            paragraphs => paragraphs
                .iter()
                .take(max)
                .map(|p| p.sentences.as_slice())
                .collect(),
        }
    }

    fn unit_slide(&self, position: usize, sentences: &[String]) -> Slide {
        let interval = self.profile.variety_interval;
        if interval > 0 && position % interval == 0 {
            if let Some(slide) = variety_slide(self.profile.variety_kind, sentences) {
                return slide;
            }
        }

        regular_slide(sentences)
    }
}

fn title_slide(segmented: &SegmentedText, extracted: &ExtractedContent) -> Slide {
    let title = match (&segmented.heading, segmented.first_sentence()) {
        (Some(heading), _) => fit_title(heading),
        (None, Some(sentence)) => derive_heading(sentence),
        (None, None) => "Presentation".to_string(),
    };

    let subtitle = if extracted.main_topics.is_empty() {
        "An overview of the key concepts".to_string()
    } else {
        extracted
            .main_topics
            .iter()
            .take(TITLE_SUBTITLE_TOPICS)
            .cloned()
            .collect::<Vec<_>>()
            .join(" \u{2022} ")
    };

    Slide::new(SlideKind::Title, title, SlideContent::Text(subtitle))
        .with_layout(SlideLayout::TitleCenter)
        .with_notes("Introduce the topic and outline what the audience will learn.")
}

fn agenda_slide(topics: &[String]) -> Slide {
    let items = topics
        .iter()
        .take(MAX_AGENDA_ITEMS)
        .map(|t| fit_bullet(t))
        .collect();

    Slide::new(
        SlideKind::Bullet,
        "Overview".to_string(),
        SlideContent::Points(items),
    )
    .with_layout(SlideLayout::Agenda)
    .with_notes("Walk through the topics covered in this session.")
}

fn regular_slide(sentences: &[String]) -> Slide {
    match sentences.split_first() {
        Some((first, rest)) if !rest.is_empty() => Slide::new(
            SlideKind::Bullet,
            derive_heading(first),
            SlideContent::Points(rest.iter().map(|s| fit_bullet(s)).collect()),
        )
        .with_layout(SlideLayout::Standard),
        Some((only, _)) => Slide::new(
            SlideKind::Content,
            keyword_heading(only),
            SlideContent::Text(as_statement(only)),
        )
        .with_layout(SlideLayout::Standard),
        None => Slide::new(
            SlideKind::Content,
            "Key Point".to_string(),
            SlideContent::Text(String::new()),
        ),
    }
}

/// Re-types a unit for visual variety. `None` when the unit cannot fill the
/// requested kind.
fn variety_slide(kind: SlideKind, sentences: &[String]) -> Option<Slide> {
    let (first, rest) = sentences.split_first()?;

    match kind {
        SlideKind::Quote => {
            let mut slide = Slide::new(
                SlideKind::Quote,
                "Key Insight".to_string(),
                SlideContent::Text(as_statement(first)),
            )
            .with_layout(SlideLayout::Spotlight);
            if !rest.is_empty() {
                slide = slide.with_notes(rest.join(". "));
            }
            Some(slide)
        }
        SlideKind::Image => {
            let caption = rest.first().unwrap_or(first);
            let subject = top_keywords(first, 1)
                .into_iter()
                .next()
                .unwrap_or_else(|| "the topic".to_string());
            Some(
                Slide::new(
                    SlideKind::Image,
                    derive_heading(first),
                    SlideContent::Text(as_statement(caption)),
                )
                .with_layout(SlideLayout::ImageRight)
                .with_notes(format!("Suggested visual: an illustration of {}", subject)),
            )
        }
        SlideKind::Comparison if !rest.is_empty() => {
            let left = sentences.len().div_ceil(2);
            Some(
                Slide::new(
                    SlideKind::Comparison,
                    keyword_heading(&sentences.join(" ")),
                    SlideContent::Points(sentences.iter().map(|s| fit_bullet(s)).collect()),
                )
                .with_layout(SlideLayout::TwoColumn)
                .with_notes(format!(
                    "Left column: first {} points; right column: the remaining {}.",
                    left,
                    sentences.len() - left
                )),
            )
        }
        _ => None,
    }
}

fn closing_slide(extracted: &ExtractedContent) -> Slide {
    let mut takeaways: Vec<String> = Vec::new();
    for candidate in extracted
        .key_points
        .iter()
        .map(|k| k.topic.as_str())
        .chain(extracted.main_topics.iter().map(String::as_str))
    {
        if takeaways.len() == MAX_TAKEAWAYS {
            break;
        }
        let bullet = fit_bullet(candidate);
        if !takeaways.contains(&bullet) {
            takeaways.push(bullet);
        }
    }
    if takeaways.is_empty() {
        takeaways.push("Review the key concepts covered".to_string());
    }

    let notes = extracted
        .structure
        .conclusion
        .clone()
        .unwrap_or_else(|| "Summarize the main points and invite questions.".to_string());

    Slide::new(
        SlideKind::Conclusion,
        "Key Takeaways".to_string(),
        SlideContent::Points(takeaways),
    )
    .with_layout(SlideLayout::Closing)
    .with_notes(notes)
}
