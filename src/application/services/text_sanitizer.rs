use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*\u{2022}\u{25E6}\u{25AA}]|\d{1,2}[.)])\s+").unwrap());

// ATX headings, including the optional closing run of `#`.
static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(?P<heading>.*?)(?:\s+#+)?$").unwrap());

/// Normalizes pasted or extracted text before segmentation.
///
/// NFKC first (ligatures, full-width forms), then words hyphenated across a
/// line break are rejoined. Each line loses its list or Markdown heading
/// marker and repeated whitespace; any run of blank lines becomes a single paragraph break.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let rejoined = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut blocks: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in rejoined.lines().map(clean_line) {
        if !line.is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            blocks.push(current.join("\n"));
            current.clear();
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks.join("\n\n")
}

fn clean_line(line: &str) -> String {
    let unheaded = HEADING_MARKER.replace(line.trim(), "$heading");
    let unmarked = LIST_MARKER.replace(&unheaded, "");
    unmarked.split_whitespace().collect::<Vec<_>>().join(" ")
}
