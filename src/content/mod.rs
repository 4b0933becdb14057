//! Educational content selection
//!
//! Content is selected from fixed templates keyed by SDG category and
//! learning mode, with the learner's topic interpolated into the body.
//! Selection is deterministic and total: every (topic, mode) pair yields a
//! non-empty fragment.

pub mod plans;
pub mod templates;
pub mod tips;
pub mod videos;

pub use plans::action_plan;
pub use tips::{daily_tip, tip_of_day};
pub use videos::{VideoLink, video_links};

use serde::{Deserialize, Serialize};

use crate::topic::{SdgCategory, classify};

/// Learning mode controlling template verbosity and focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Simple explanation
    #[default]
    Basic,
    /// In-depth technical content
    Deep,
    /// Practical steps focus
    Action,
}

impl Mode {
    /// Parse a mode string; unknown values fall back to [`Mode::Basic`]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "deep" => Mode::Deep,
            "action" => Mode::Action,
            _ => Mode::Basic,
        }
    }

    /// Emoji marker shown in content headings
    pub fn prefix(&self) -> &'static str {
        match self {
            Mode::Basic => "\u{1F4DA}",
            Mode::Deep => "\u{1F52C}",
            Mode::Action => "\u{1F4AA}",
        }
    }

    /// Human-readable mode name shown in content headings
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Basic => "Basic Learning Mode",
            Mode::Deep => "Deep Dive Mode",
            Mode::Action => "Action Mode",
        }
    }
}

/// Render the educational HTML fragment for a topic in the given mode
///
/// The topic is classified, then an exhaustive category x mode lookup picks
/// one of twelve template bodies. The title-cased topic text always appears
/// verbatim in the output.
pub fn render(topic: &str, mode: Mode) -> String {
    let category = classify(topic);
    templates::body(category, mode, &title_case(topic))
}

/// Render for an already-classified topic
pub fn render_for(category: SdgCategory, topic: &str, mode: Mode) -> String {
    templates::body(category, mode, &title_case(topic))
}

/// Title-case a topic for display
///
/// Each alphabetic run starts uppercase with the rest lowercased, so
/// "climate CHANGE" becomes "Climate Change". Non-alphabetic characters
/// reset the word boundary.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_falls_back_to_basic() {
        assert_eq!(Mode::parse("basic"), Mode::Basic);
        assert_eq!(Mode::parse("DEEP"), Mode::Deep);
        assert_eq!(Mode::parse("action"), Mode::Action);
        assert_eq!(Mode::parse("turbo"), Mode::Basic);
        assert_eq!(Mode::parse(""), Mode::Basic);
    }

    #[test]
    fn title_case_matches_display_convention() {
        assert_eq!(title_case("climate change"), "Climate Change");
        assert_eq!(title_case("OCEAN pollution"), "Ocean Pollution");
        assert_eq!(title_case("e-waste recycling"), "E-Waste Recycling");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn render_contains_title_cased_topic() {
        for topic in ["climate change", "water scarcity", "remote learning", "beekeeping"] {
            for mode in [Mode::Basic, Mode::Deep, Mode::Action] {
                let output = render(topic, mode);
                assert!(!output.is_empty());
                assert!(
                    output.contains(&title_case(topic)),
                    "missing topic in output for {topic:?} / {mode:?}"
                );
            }
        }
    }

    #[test]
    fn climate_basic_content_mentions_sdg_13() {
        let output = render("Climate Change", Mode::Basic);
        assert!(output.contains("SDG 13"));
        assert!(output.contains("Climate Change"));
    }

    #[test]
    fn water_content_mentions_sdg_6() {
        let output = render("ocean pollution", Mode::Deep);
        assert!(output.contains("SDG 6"));
    }

    #[test]
    fn education_content_mentions_sdg_4() {
        let output = render("lifelong learning", Mode::Action);
        assert!(output.contains("SDG 4"));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render("solar power", Mode::Deep), render("solar power", Mode::Deep));
    }

    #[test]
    fn mode_headings_differ_per_mode() {
        let basic = render("recycling habits", Mode::Basic);
        let deep = render("recycling habits", Mode::Deep);
        let action = render("recycling habits", Mode::Action);
        assert!(basic.contains("Basic Learning Mode"));
        assert!(deep.contains("Deep Dive Mode"));
        assert!(action.contains("Action Mode"));
    }
}
