use serde::{Deserialize, Serialize};

/// Transient analysis of one input text. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub main_topics: Vec<String>,
    pub key_points: Vec<KeyPoint>,
    pub structure: ContentStructure,
    pub metadata: ContentMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub topic: String,
    pub supporting_sentences: Vec<String>,
    pub importance: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStructure {
    pub introduction: Option<String>,
    pub sections: Vec<BodySection>,
    pub conclusion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySection {
    pub heading: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    pub category: ContentCategory,
    pub complexity: Complexity,
    pub suggested_slide_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Regulatory,
    Technical,
    Educational,
    Business,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}
