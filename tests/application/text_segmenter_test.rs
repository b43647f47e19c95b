use lectern::application::ports::GenerationError;
use lectern::application::services::{TextSegmenter, split_paragraphs, split_sentences};

const MIN_PARAGRAPH_CHARS: usize = 20;
const MIN_SENTENCE_CHARS: usize = 10;

#[test]
fn given_blank_line_separated_text_when_splitting_paragraphs_then_drops_short_blocks() {
    let text = "The first paragraph has enough text.\n\n   \nThe second paragraph is long too.\n\nshort";

    let paragraphs = split_paragraphs(text, MIN_PARAGRAPH_CHARS);

    assert_eq!(
        paragraphs,
        vec![
            "The first paragraph has enough text.",
            "The second paragraph is long too."
        ]
    );
}

#[test]
fn given_mixed_terminators_when_splitting_sentences_then_drops_terminators_and_short_pieces() {
    let text = "One sentence here. Two sentence here! Three here? ok.";

    let sentences = split_sentences(text, MIN_SENTENCE_CHARS);

    assert_eq!(sentences, vec!["One sentence here", "Two sentence here"]);
}

#[test]
fn given_decimal_number_when_splitting_sentences_then_splits_at_the_decimal_point() {
    let sentences = split_sentences("The premium rose 3.5 percent this year.", MIN_SENTENCE_CHARS);

    assert_eq!(sentences, vec!["The premium rose 3", "5 percent this year"]);
}

#[test]
fn given_empty_text_when_segmenting_then_fails_with_empty_input() {
    let result = TextSegmenter::default().segment("");

    assert!(matches!(result, Err(GenerationError::EmptyInput)));
}

#[test]
fn given_whitespace_only_text_when_segmenting_then_fails_with_empty_input() {
    let result = TextSegmenter::default().segment("   \n\n\t  ");

    assert!(matches!(result, Err(GenerationError::EmptyInput)));
}

#[test]
fn given_punctuation_only_text_when_segmenting_then_fails_with_degenerate_segmentation() {
    let result = TextSegmenter::default().segment("... !!! ???");

    assert!(matches!(result, Err(GenerationError::DegenerateSegmentation)));
}

#[test]
fn given_leading_short_line_when_segmenting_then_treats_it_as_heading() {
    let text = "Insurance Ethics\n\nProfessionals must follow strict compliance rules. This protects clients and maintains trust.\n\nRisk management is essential for long-term success.";

    let segmented = TextSegmenter::default().segment(text).unwrap();

    assert_eq!(segmented.heading.as_deref(), Some("Insurance Ethics"));
    assert_eq!(segmented.paragraphs.len(), 2);
    assert_eq!(
        segmented.paragraphs[0].sentences,
        vec![
            "Professionals must follow strict compliance rules",
            "This protects clients and maintains trust"
        ]
    );
    assert_eq!(segmented.sentence_count(), 3);
}

#[test]
fn given_leading_sentence_when_segmenting_then_no_heading_is_detected() {
    let text = "Claims must be filed within thirty days.\n\nLate claims are reviewed by a supervisor before approval.";

    let segmented = TextSegmenter::default().segment(text).unwrap();

    assert!(segmented.heading.is_none());
    assert_eq!(segmented.paragraphs.len(), 2);
}

#[test]
fn given_paragraph_without_long_sentences_when_segmenting_then_keeps_whole_paragraph() {
    let text = "Yes. No. Maybe. Sure. Fine. Okay. Right.";

    let segmented = TextSegmenter::default().segment(text).unwrap();

    assert_eq!(segmented.paragraphs.len(), 1);
    assert_eq!(
        segmented.paragraphs[0].sentences,
        vec!["Yes. No. Maybe. Sure. Fine. Okay. Right"]
    );
}

#[test]
fn given_only_short_blocks_when_segmenting_then_merges_them_into_one_paragraph() {
    let text = "Tiny block.\n\nAnother one.\n\nThird bit.";

    let segmented = TextSegmenter::default().segment(text).unwrap();

    assert!(segmented.heading.is_none());
    assert_eq!(segmented.paragraphs.len(), 1);
    assert_eq!(
        segmented.paragraphs[0].text,
        "Tiny block. Another one. Third bit."
    );
    assert_eq!(segmented.paragraphs[0].sentences, vec!["Another one"]);
}

#[test]
fn given_identical_input_when_segmenting_twice_then_results_are_equal() {
    let text = "Underwriting Basics\n\nUnderwriters evaluate risk before issuing a policy. They weigh history and exposure.\n\nPricing follows from that evaluation and from regulatory limits.";
    let segmenter = TextSegmenter::default();

    let first = segmenter.segment(text).unwrap();
    let second = segmenter.segment(text).unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_crlf_line_endings_when_segmenting_then_paragraphs_are_still_found() {
    let text = "Policyholders must disclose material facts.\r\n\r\nNon-disclosure can void the contract entirely.";

    let segmented = TextSegmenter::default().segment(text).unwrap();

    assert_eq!(segmented.paragraphs.len(), 2);
}

#[test]
fn given_heading_on_its_own_line_when_segmenting_then_splits_heading_from_body() {
    let text = "Insurance Ethics\nProfessionals must follow strict compliance rules. This protects clients and maintains trust.\n\nRisk management is essential for long-term success.";

    let segmented = TextSegmenter::default().segment(text).unwrap();

    assert_eq!(segmented.heading.as_deref(), Some("Insurance Ethics"));
    assert_eq!(segmented.paragraphs.len(), 2);
    assert_eq!(
        segmented.paragraphs[0].sentences[0],
        "Professionals must follow strict compliance rules"
    );
}

#[test]
fn given_first_line_wrapping_into_lowercase_line_when_segmenting_then_no_heading_is_detected() {
    let text = "The premium for this policy\nrose sharply after the second claim was filed.";

    let segmented = TextSegmenter::default().segment(text).unwrap();

    assert!(segmented.heading.is_none());
    assert_eq!(
        segmented.paragraphs[0].text,
        "The premium for this policy rose sharply after the second claim was filed."
    );
}

#[test]
fn given_body_with_short_block_when_segmenting_then_paragraphs_match_split_paragraphs() {
    let body = "Underwriters evaluate risk before issuing a policy.\n\nshort\n\nPricing follows from that evaluation and from regulatory limits.";
    let text = format!("Underwriting Basics\n\n{}", body);

    let segmented = TextSegmenter::default().segment(&text).unwrap();

    let texts: Vec<String> = segmented.paragraphs.into_iter().map(|p| p.text).collect();
    assert_eq!(texts, split_paragraphs(body, MIN_PARAGRAPH_CHARS));
}
