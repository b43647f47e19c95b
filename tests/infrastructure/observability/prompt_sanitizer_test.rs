use lectern::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Insurance ethics for new advisers";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_cuts_on_char_boundary() {
    let prompt = "\u{e9}".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"\u{e9}".repeat(100)));
    assert!(result.contains("(150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let result = sanitize_prompt("Send request with apiKey=secret123");
    assert!(result.contains("apiKey=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_risk_vocabulary_when_sanitizing_then_text_is_untouched() {
    let prompt = "Assess risk-based pricing before renewal";
    assert_eq!(sanitize_prompt(prompt), prompt);
}
