pub const MAX_TITLE_CHARS: usize = 80;
pub const MAX_BULLET_CHARS: usize = 120;

const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `max_chars` characters, marking the cut with `...`.
///
/// The result ends with `...` only when characters were dropped.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let head: String = trimmed.chars().take(keep).collect();
    format!("{}{}", head.trim_end(), ELLIPSIS)
}

/// Normalizes a slide title: strips trailing periods and ellipses, then
/// truncates to [`MAX_TITLE_CHARS`].
pub fn fit_title(text: &str) -> String {
    let stripped = text.trim().trim_end_matches(['.', '\u{2026}']).trim_end();
    truncate_with_ellipsis(stripped, MAX_TITLE_CHARS)
}

pub fn fit_bullet(text: &str) -> String {
    let stripped = text.trim().trim_end_matches(['.', '\u{2026}']).trim_end();
    truncate_with_ellipsis(stripped, MAX_BULLET_CHARS)
}
