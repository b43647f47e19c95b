use lectern::application::ports::{GenerationError, NoopProgress};
use lectern::application::services::{
    ContentAnalyzer, SlidePipeline, SlideSynthesizer, TextSegmenter,
};
use lectern::domain::{
    Deck, DeckStyle, MAX_BULLET_CHARS, MAX_TITLE_CHARS, Slide, SlideContent, SlideKind,
    SlideLayout,
};

const INSURANCE_ETHICS: &str = "Insurance Ethics\n\nProfessionals must follow strict compliance rules. This protects clients and maintains trust.\n\nRisk management is essential for long-term success.";

fn deck(text: &str, style: DeckStyle) -> Deck {
    SlidePipeline::default()
        .run(text, style, &NoopProgress)
        .unwrap()
}

fn content_slides(slides: &[Slide]) -> Vec<&Slide> {
    slides
        .iter()
        .filter(|s| {
            !matches!(s.kind, SlideKind::Title | SlideKind::Conclusion)
                && s.layout != Some(SlideLayout::Agenda)
        })
        .collect()
}

fn two_sentence_paragraphs(count: usize) -> String {
    (1..=count)
        .map(|i| {
            format!(
                "Claims review step {} checks the file for gaps. The adjuster records each finding before approval.",
                i
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[test]
fn given_insurance_lesson_when_generating_then_title_uses_heading_and_deck_is_short() {
    let deck = deck(INSURANCE_ETHICS, DeckStyle::Classic);

    assert_eq!(deck.slides[0].kind, SlideKind::Title);
    assert_eq!(deck.slides[0].title, "Insurance Ethics");
    assert!((3..=5).contains(&deck.slides.len()), "got {} slides", deck.slides.len());
    assert_eq!(deck.slides.last().unwrap().kind, SlideKind::Conclusion);
}

#[test]
fn given_heading_without_blank_line_when_generating_then_title_is_heading_only() {
    let text = "Insurance Ethics\nProfessionals must follow strict compliance rules. This protects clients and maintains trust.\n\nRisk management is essential for long-term success.";

    let deck = deck(text, DeckStyle::Classic);

    assert_eq!(deck.slides[0].title, "Insurance Ethics");
    assert_eq!(
        deck.slides[2].title,
        "Professionals must follow strict compliance rules"
    );
}

#[test]
fn given_insurance_lesson_when_generating_then_body_follows_paragraphs() {
    let deck = deck(INSURANCE_ETHICS, DeckStyle::Classic);

    let agenda = &deck.slides[1];
    assert_eq!(agenda.layout, Some(SlideLayout::Agenda));
    assert_eq!(agenda.title, "Overview");

    let first = &deck.slides[2];
    assert_eq!(first.kind, SlideKind::Bullet);
    assert_eq!(first.title, "Professionals must follow strict compliance rules");
    assert_eq!(
        first.content,
        SlideContent::Points(vec!["This protects clients and maintains trust".to_string()])
    );

    let second = &deck.slides[3];
    assert_eq!(second.kind, SlideKind::Content);
    assert_eq!(second.title, "Risk Management");
    assert_eq!(
        second.content,
        SlideContent::Text("Risk management is essential for long-term success.".to_string())
    );
}

#[test]
fn given_any_input_when_generating_then_exactly_one_title_first_and_one_conclusion_last() {
    let inputs = [
        INSURANCE_ETHICS.to_string(),
        "Hello world".to_string(),
        two_sentence_paragraphs(9),
    ];

    for input in inputs {
        let deck = deck(&input, DeckStyle::Corporate);
        let titles = deck.slides.iter().filter(|s| s.kind == SlideKind::Title).count();
        let conclusions = deck
            .slides
            .iter()
            .filter(|s| s.kind == SlideKind::Conclusion)
            .count();

        assert_eq!(titles, 1);
        assert_eq!(conclusions, 1);
        assert_eq!(deck.slides[0].kind, SlideKind::Title);
        assert_eq!(deck.slides.last().unwrap().kind, SlideKind::Conclusion);
    }
}

#[test]
fn given_heading_only_input_when_generating_then_deck_has_title_and_closing() {
    let deck = deck("Hello world", DeckStyle::Classic);

    assert_eq!(deck.slides.len(), 2);
    assert_eq!(deck.slides[0].title, "Hello world");
}

#[test]
fn given_empty_input_when_generating_then_fails_with_empty_input() {
    let result = SlidePipeline::default().run("  \n ", DeckStyle::Classic, &NoopProgress);

    assert!(matches!(result, Err(GenerationError::EmptyInput)));
}

#[test]
fn given_ten_thousand_word_paragraph_when_generating_then_content_slides_are_capped() {
    let sentence = "Risk management protects every client portfolio. ";
    let text = sentence.repeat(1700);

    let deck = deck(&text, DeckStyle::Classic);

    let content = content_slides(&deck.slides);
    assert!(!content.is_empty());
    assert!(content.len() <= DeckStyle::Classic.profile().max_content_slides);
}

#[test]
fn given_long_first_sentence_when_generating_then_title_is_truncated_with_ellipsis() {
    let text = "Every licensed professional who sells insurance products in this jurisdiction must complete annual continuing education hours. Records are audited.";

    let deck = deck(text, DeckStyle::Classic);

    let title = &deck.slides[0].title;
    assert!(title.chars().count() <= MAX_TITLE_CHARS);
    assert!(title.ends_with("..."));
}

#[test]
fn given_short_titles_when_generating_then_no_title_ends_with_ellipsis() {
    let deck = deck(INSURANCE_ETHICS, DeckStyle::Classic);

    for slide in &deck.slides {
        assert!(!slide.title.ends_with("..."), "title {:?}", slide.title);
    }
}

#[test]
fn given_any_deck_when_generating_then_titles_and_bullets_respect_bounds() {
    let long = format!(
        "{}.\n\nShort opening sentence for context. {}.",
        "word ".repeat(60).trim(),
        "another ".repeat(60).trim()
    );

    for style in [
        DeckStyle::Classic,
        DeckStyle::Modern,
        DeckStyle::Corporate,
        DeckStyle::Minimal,
    ] {
        let deck = deck(&long, style);
        for slide in &deck.slides {
            assert!(slide.title.chars().count() <= MAX_TITLE_CHARS);
            if let SlideContent::Points(points) = &slide.content {
                assert!(points.iter().all(|p| p.chars().count() <= MAX_BULLET_CHARS));
            }
        }
    }
}

#[test]
fn given_sentence_with_connective_when_generating_then_heading_drops_it() {
    let text = "However, underwriters must verify income. Verification prevents later disputes.\n\nThe second paragraph gives a short example of a review.";

    let deck = deck(text, DeckStyle::Classic);

    assert_eq!(deck.slides[0].title, "Underwriters must verify income");
}

#[test]
fn given_modern_style_when_generating_then_every_third_unit_is_an_image_slide() {
    let deck = deck(&two_sentence_paragraphs(4), DeckStyle::Modern);

    let content = content_slides(&deck.slides);
    assert_eq!(content[2].kind, SlideKind::Image);
    assert_eq!(content[2].layout, Some(SlideLayout::ImageRight));
    assert_eq!(content[0].kind, SlideKind::Bullet);
}

#[test]
fn given_corporate_style_when_generating_then_fifth_unit_is_a_comparison() {
    let deck = deck(&two_sentence_paragraphs(6), DeckStyle::Corporate);

    let content = content_slides(&deck.slides);
    assert_eq!(content.len(), 6);
    assert_eq!(content[4].kind, SlideKind::Comparison);
    assert_eq!(content[4].layout, Some(SlideLayout::TwoColumn));
}

#[test]
fn given_classic_style_when_generating_then_fourth_unit_is_a_key_insight_quote() {
    let deck = deck(&two_sentence_paragraphs(5), DeckStyle::Classic);

    let content = content_slides(&deck.slides);
    assert_eq!(content[3].kind, SlideKind::Quote);
    assert_eq!(content[3].title, "Key Insight");
}

#[test]
fn given_more_paragraphs_than_style_allows_when_generating_then_extra_paragraphs_are_dropped() {
    let deck = deck(&two_sentence_paragraphs(9), DeckStyle::Minimal);

    assert_eq!(content_slides(&deck.slides).len(), 4);
}

#[test]
fn given_single_paragraph_when_building_units_then_sentences_are_chunked() {
    let text = "First point is stated here. Second point is stated here. Third point is stated here. Fourth point is stated here. Fifth point is stated here. Sixth point is stated here. Seventh point is stated here.";
    let segmented = TextSegmenter::default().segment(text).unwrap();

    let units = SlideSynthesizer::new(DeckStyle::Classic.profile()).content_units(&segmented);

    assert_eq!(units.iter().map(|u| u.len()).collect::<Vec<_>>(), vec![2, 2, 2, 1]);
}

#[test]
fn given_identical_input_when_generating_twice_then_decks_are_equal() {
    let first = deck(INSURANCE_ETHICS, DeckStyle::Modern);
    let second = deck(INSURANCE_ETHICS, DeckStyle::Modern);

    assert_eq!(first, second);
}

#[test]
fn given_segmented_text_when_synthesizing_directly_then_matches_pipeline_output() {
    let segmented = TextSegmenter::default().segment(INSURANCE_ETHICS).unwrap();
    let extracted = ContentAnalyzer::new().analyze(&segmented);

    let slides = SlideSynthesizer::new(DeckStyle::Classic.profile()).synthesize(&segmented, &extracted);

    assert_eq!(slides, deck(INSURANCE_ETHICS, DeckStyle::Classic).slides);
}
