//! Topic classification against the supported SDG focus areas
//!
//! Free-text topics are mapped onto one of three Sustainable Development
//! Goals (4, 6, 13) by keyword matching, with a general sustainability
//! fallback. Classification is a total function: every string, including
//! the empty one, resolves to a category.

use serde::{Deserialize, Serialize};

/// SDG focus area a topic belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdgCategory {
    /// SDG 4: Quality Education
    Education,
    /// SDG 6: Clean Water and Sanitation
    Water,
    /// SDG 13: Climate Action (energy topics included)
    Climate,
    /// General sustainability, no single SDG
    General,
}

impl SdgCategory {
    /// UN goal number, if the category maps to a single SDG
    pub fn sdg_number(&self) -> Option<u8> {
        match self {
            SdgCategory::Education => Some(4),
            SdgCategory::Water => Some(6),
            SdgCategory::Climate => Some(13),
            SdgCategory::General => None,
        }
    }

    /// Display label used in rendered content
    pub fn label(&self) -> &'static str {
        match self {
            SdgCategory::Education => "SDG 4: Quality Education",
            SdgCategory::Water => "SDG 6: Clean Water and Sanitation",
            SdgCategory::Climate => "SDG 13: Climate Action",
            SdgCategory::General => "Sustainability Focus",
        }
    }
}

/// Keyword buckets checked in order; the first bucket with a hit wins.
///
/// The order is part of the contract: buckets overlap ("ocean pollution"
/// contains two water keywords, "climate change in oceans" contains both a
/// climate and a water keyword) and a multi-keyword topic resolves to the
/// earliest bucket that matches.
const EDUCATION_KEYWORDS: &[&str] = &["education", "learning", "school", "student", "teacher"];
const WATER_KEYWORDS: &[&str] =
    &["water", "pollution", "sanitation", "hygiene", "ocean", "river", "lake"];
const CLIMATE_KEYWORDS: &[&str] = &[
    "climate",
    "carbon",
    "emission",
    "warming",
    "greenhouse",
    "renewable",
    "energy",
    "solar",
    "wind",
    "sustainability",
];

/// Classify a free-text topic into an SDG category
///
/// Matching is case-insensitive substring containment, so "Climate Change"
/// and "decarbonization" both land in [`SdgCategory::Climate`]. Unmatched
/// topics fall through to [`SdgCategory::General`].
pub fn classify(topic: &str) -> SdgCategory {
    let topic_lower = topic.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| topic_lower.contains(kw));

    if contains_any(EDUCATION_KEYWORDS) {
        SdgCategory::Education
    } else if contains_any(WATER_KEYWORDS) {
        SdgCategory::Water
    } else if contains_any(CLIMATE_KEYWORDS) {
        SdgCategory::Climate
    } else {
        SdgCategory::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn climate_change_classifies_as_climate() {
        assert_eq!(classify("Climate Change"), SdgCategory::Climate);
    }

    #[test]
    fn water_keywords_classify_as_water() {
        for topic in ["water scarcity", "Ocean plastic", "river health", "pollution"] {
            assert_eq!(classify(topic), SdgCategory::Water, "topic: {topic}");
        }
    }

    #[test]
    fn education_bucket_wins_over_later_buckets() {
        // "learning" (education) and "water" (water) both match; education
        // is checked first.
        assert_eq!(classify("learning about water"), SdgCategory::Education);
    }

    #[test]
    fn water_bucket_wins_over_climate_bucket() {
        // "ocean" (water) and "climate" (climate) both match; water is
        // checked before climate.
        assert_eq!(classify("climate change in oceans"), SdgCategory::Water);
    }

    #[test]
    fn unmatched_topic_is_general() {
        assert_eq!(classify("beekeeping"), SdgCategory::General);
    }

    #[test]
    fn empty_topic_is_general() {
        assert_eq!(classify(""), SdgCategory::General);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("RENEWABLE ENERGY"), classify("renewable energy"));
    }

    #[test]
    fn sdg_numbers_match_categories() {
        assert_eq!(SdgCategory::Education.sdg_number(), Some(4));
        assert_eq!(SdgCategory::Water.sdg_number(), Some(6));
        assert_eq!(SdgCategory::Climate.sdg_number(), Some(13));
        assert_eq!(SdgCategory::General.sdg_number(), None);
    }

    proptest! {
        #[test]
        fn classify_is_total(topic in ".*") {
            // Every string resolves to some category without panicking.
            let _ = classify(&topic);
        }

        #[test]
        fn classify_ignores_case(topic in "[a-zA-Z ]{0,40}") {
            prop_assert_eq!(classify(&topic), classify(&topic.to_uppercase()));
        }
    }
}
