use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::slide::SlideKind;

/// Visual theme for a generated deck. Each style fixes how many content
/// slides are produced and how often a slide is re-typed for variety.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckStyle {
    #[default]
    Classic,
    Modern,
    Corporate,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisProfile {
    pub max_content_slides: usize,
    pub variety_interval: usize,
    pub variety_kind: SlideKind,
    pub agenda_min_topics: usize,
}

impl DeckStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckStyle::Classic => "classic",
            DeckStyle::Modern => "modern",
            DeckStyle::Corporate => "corporate",
            DeckStyle::Minimal => "minimal",
        }
    }

    pub fn profile(&self) -> SynthesisProfile {
        match self {
            DeckStyle::Classic => SynthesisProfile {
                max_content_slides: 5,
                variety_interval: 4,
                variety_kind: SlideKind::Quote,
                agenda_min_topics: 3,
            },
            DeckStyle::Modern => SynthesisProfile {
                max_content_slides: 6,
                variety_interval: 3,
                variety_kind: SlideKind::Image,
                agenda_min_topics: 3,
            },
            DeckStyle::Corporate => SynthesisProfile {
                max_content_slides: 8,
                variety_interval: 5,
                variety_kind: SlideKind::Comparison,
                agenda_min_topics: 3,
            },
            DeckStyle::Minimal => SynthesisProfile {
                max_content_slides: 4,
                variety_interval: 7,
                variety_kind: SlideKind::Quote,
                agenda_min_topics: 3,
            },
        }
    }
}

impl FromStr for DeckStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(DeckStyle::Classic),
            "modern" => Ok(DeckStyle::Modern),
            "corporate" => Ok(DeckStyle::Corporate),
            "minimal" => Ok(DeckStyle::Minimal),
            other => Err(format!(
                "Invalid deck style: {}. Expected: classic, modern, corporate, or minimal",
                other
            )),
        }
    }
}

impl fmt::Display for DeckStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
