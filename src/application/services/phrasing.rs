use crate::domain::fit_title;

use super::keyword_extractor::top_keywords;

// Longest entries first so "in addition" wins over "in".
const LEADING_CONNECTIVES: &[&str] = &[
    "in conclusion",
    "in addition",
    "as a result",
    "for example",
    "for instance",
    "on the other hand",
    "additionally",
    "consequently",
    "furthermore",
    "nevertheless",
    "similarly",
    "therefore",
    "meanwhile",
    "moreover",
    "however",
    "finally",
    "overall",
    "lastly",
    "second",
    "first",
    "third",
    "also",
    "next",
    "then",
    "thus",
    "and",
    "but",
    "so",
];

/// Removes connective words ("However,", "In addition,") from the start of a
/// sentence. Returns the input unchanged when nothing else would remain.
pub fn strip_leading_connectives(sentence: &str) -> &str {
    let mut rest = sentence.trim_start();

    loop {
        let matched = LEADING_CONNECTIVES.iter().find(|connective| {
            rest.get(..connective.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(connective))
                && rest[connective.len()..]
                    .chars()
                    .next()
                    .is_none_or(|c| c == ',' || c.is_whitespace())
        });

        let Some(connective) = matched else {
            break;
        };

        let stripped = rest[connective.len()..].trim_start_matches([',', ' ', '\t']);
        if stripped.trim().is_empty() {
            break;
        }
        rest = stripped;
    }

    if rest.trim().is_empty() {
        sentence.trim()
    } else {
        rest
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Slide-ready heading for a sentence.
pub fn derive_heading(sentence: &str) -> String {
    fit_title(&capitalize_first(strip_leading_connectives(sentence)))
}

/// Heading built from the two most frequent keywords of `text`.
pub fn keyword_heading(text: &str) -> String {
    let keywords = top_keywords(text, 2);
    if keywords.is_empty() {
        return "Key Point".to_string();
    }

    let heading = keywords
        .iter()
        .map(|k| capitalize_first(k))
        .collect::<Vec<_>>()
        .join(" ");
    fit_title(&heading)
}

/// Restores the terminal period that segmentation strips.
pub fn as_statement(sentence: &str) -> String {
    let trimmed = sentence.trim();
    match trimmed.chars().last() {
        Some(c) if c.is_alphanumeric() || c == ')' || c == '"' => format!("{}.", trimmed),
        _ => trimmed.to_string(),
    }
}
