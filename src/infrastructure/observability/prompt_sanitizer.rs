use regex::Regex;
use std::sync::LazyLock;

const PREVIEW_CHARS: usize = 100;

static CREDENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(bearer\s+|\b(?:api_?key|password|secret|token)=)[^\s&"']+"#).unwrap()
});

/// Log-safe preview of user text: the first 100 characters, with values that
/// look like credentials masked.
pub fn sanitize_prompt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "[EMPTY]".to_string();
    }

    let preview = match trimmed.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    CREDENTIAL
        .replace_all(&preview, "${1}[REDACTED]")
        .into_owned()
}
