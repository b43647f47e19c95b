use lectern::application::services::sanitize_extracted_text;

#[test]
fn given_text_with_fi_ligature_when_sanitizing_then_decomposes_to_fi() {
    assert_eq!(sanitize_extracted_text("\u{fb01}nding the \u{fb01}le"), "finding the file");
}

#[test]
fn given_text_with_excessive_newlines_when_sanitizing_then_collapses_to_paragraph_breaks() {
    let result = sanitize_extracted_text("paragraph one\n\n\n\n\nparagraph two");
    assert_eq!(result, "paragraph one\n\nparagraph two");
}

#[test]
fn given_text_with_redundant_spaces_when_sanitizing_then_collapses_to_single_space() {
    assert_eq!(sanitize_extracted_text("hello    world   test"), "hello world test");
}

#[test]
fn given_whitespace_only_text_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text("   \n\n  "), "");
}

#[test]
fn given_text_with_hyphenated_line_break_when_sanitizing_then_merges_word() {
    let result = sanitize_extracted_text("This is a process-\ning step");
    assert_eq!(result, "This is a processing step");
}

#[test]
fn given_text_with_intentional_hyphen_when_sanitizing_then_preserves_hyphen() {
    assert_eq!(sanitize_extracted_text("This is well-known"), "This is well-known");
}

#[test]
fn given_bulleted_lines_when_sanitizing_then_strips_list_markers() {
    let input = "- Verify coverage limits\n\u{2022} Confirm the deductible\n2. Record the decision";
    let result = sanitize_extracted_text(input);
    assert_eq!(
        result,
        "Verify coverage limits\nConfirm the deductible\nRecord the decision"
    );
}

#[test]
fn given_markdown_headings_when_sanitizing_then_strips_hash_markers() {
    let result = sanitize_extracted_text("# Insurance Ethics\n\n## Duties of an adviser ##\n\nC# and #hashtags stay.");

    assert_eq!(
        result,
        "Insurance Ethics\n\nDuties of an adviser\n\nC# and #hashtags stay."
    );
}
