use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use unicode_segmentation::UnicodeSegmentation;

const MIN_KEYWORD_CHARS: usize = 4;
const MIN_SIGNIFICANT_CHARS: usize = 6;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "does", "doing", "down",
        "during", "each", "even", "every", "few", "from", "further", "had", "has", "have",
        "having", "here", "hers", "herself", "himself", "into", "itself", "just", "many",
        "more", "most", "much", "must", "need", "only", "other", "ought", "ours",
        "ourselves", "over", "same", "shall", "should", "some", "such", "than", "that",
        "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
        "those", "through", "under", "until", "upon", "very", "want", "well", "were",
        "what", "when", "where", "which", "while", "whom", "will", "with", "within",
        "without", "would", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

// Frequent in transcripts but useless as quiz subjects.
static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "actually", "another", "around", "always", "anything", "already", "across",
        "basically", "become", "becomes", "better", "course", "different", "either",
        "enough", "everyone", "everything", "example", "getting", "going", "however",
        "important", "including", "instead", "itself", "little", "looking", "making",
        "maybe", "might", "number", "really", "rather", "something", "sometimes",
        "therefore", "things", "though", "together", "toward", "towards", "understand",
        "usually", "whether", "without", "yourself",
    ]
    .into_iter()
    .collect()
});

/// Lowercased word tokens in reading order.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words().map(str::to_lowercase)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Word counts ordered by descending frequency, ties broken by first
/// occurrence so repeated calls agree.
pub fn ranked_words<P>(text: &str, keep: P) -> Vec<(String, usize)>
where
    P: Fn(&str) -> bool,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, word) in tokenize(text).enumerate() {
        if !keep(word.as_str()) {
            continue;
        }
        counts
            .entry(word)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, position));
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(word, count, _)| (word, count))
        .collect()
}

fn is_keyword(word: &str) -> bool {
    word.chars().count() >= MIN_KEYWORD_CHARS
        && word.chars().any(char::is_alphabetic)
        && !is_stop_word(word)
}

/// Up to `limit` keywords by descending frequency, excluding stopwords and
/// words of three characters or fewer.
pub fn top_keywords(text: &str, limit: usize) -> Vec<String> {
    ranked_words(text, is_keyword)
        .into_iter()
        .take(limit)
        .map(|(word, _)| word)
        .collect()
}

/// Keywords longer than five characters that are not common filler words.
pub fn significant_keywords(text: &str, limit: usize) -> Vec<String> {
    ranked_words(text, |w| {
        is_keyword(w) && w.chars().count() >= MIN_SIGNIFICANT_CHARS && !COMMON_WORDS.contains(w)
    })
    .into_iter()
    .take(limit)
    .map(|(word, _)| word)
    .collect()
}
