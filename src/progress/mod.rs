//! Gamified progress tracking
//!
//! A [`ProgressRecord`] accumulates learning events per user key: topic
//! counts per SDG, quiz totals, and milestone badges. Transitions are the
//! only mutation points and badge evaluation is idempotent, so records only
//! ever grow.

use serde::{Deserialize, Serialize};

use crate::topic::{SdgCategory, classify};

/// Milestone badge unlocked by topics-learned thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// 3 topics learned
    EcoStarter,
    /// 5 topics learned
    WaterWarrior,
    /// 10 topics learned
    ClimateChampion,
}

impl Badge {
    /// Wire identifier, matching the persisted badge list format
    pub fn id(&self) -> &'static str {
        match self {
            Badge::EcoStarter => "eco_starter",
            Badge::WaterWarrior => "water_warrior",
            Badge::ClimateChampion => "climate_champion",
        }
    }

    /// Topics-learned count required to unlock this badge
    pub fn threshold(&self) -> u32 {
        match self {
            Badge::EcoStarter => 3,
            Badge::WaterWarrior => 5,
            Badge::ClimateChampion => 10,
        }
    }

    /// All badges in unlock order
    pub fn all() -> [Badge; 3] {
        [Badge::EcoStarter, Badge::WaterWarrior, Badge::ClimateChampion]
    }
}

/// Per-user gamification state
///
/// Fields mirror the persisted layout one-to-one. Counters never decrease
/// and badges are never revoked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Total topics the user has learned
    pub topics_learned: u32,
    /// Total quizzes submitted
    pub quizzes_completed: u32,
    /// Topics classified as SDG 4 (education)
    pub sdg4_topics: u32,
    /// Topics classified as SDG 6 (water)
    pub sdg6_topics: u32,
    /// Topics classified as SDG 13 (climate)
    pub sdg13_topics: u32,
    /// Sum of correct-answer counts across all quizzes
    pub total_score: u32,
    /// Unlocked badges in unlock order
    pub badges: Vec<Badge>,
}

impl ProgressRecord {
    /// Apply a "topic learned" event
    ///
    /// Increments the total and exactly one category counter (none for
    /// general topics), then re-evaluates badges.
    pub fn record_topic(&mut self, topic: &str) {
        self.topics_learned += 1;
        match classify(topic) {
            SdgCategory::Education => self.sdg4_topics += 1,
            SdgCategory::Water => self.sdg6_topics += 1,
            SdgCategory::Climate => self.sdg13_topics += 1,
            SdgCategory::General => {}
        }
        self.award_badges();
    }

    /// Apply a "quiz submitted" event with the number of correct answers
    pub fn record_quiz(&mut self, correct: u32) {
        self.quizzes_completed += 1;
        self.total_score += correct;
        self.award_badges();
    }

    /// Append any badge whose threshold is now met and not yet held
    ///
    /// Idempotent: a second pass with unchanged counters changes nothing.
    fn award_badges(&mut self) {
        for badge in Badge::all() {
            if self.topics_learned >= badge.threshold() && !self.badges.contains(&badge) {
                tracing::info!(badge = badge.id(), topics = self.topics_learned, "badge unlocked");
                self.badges.push(badge);
            }
        }
    }

    /// Whether the user holds a badge
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}

/// Immutable record of one quiz submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    /// Session/user key the attempt belongs to
    pub user_key: String,
    /// Topic the quiz was generated for
    pub topic: String,
    /// Correct answers
    pub score: u32,
    /// Questions asked
    pub total_questions: u32,
    /// round(100 * score / total)
    pub percentage: u32,
    /// Unix timestamp of submission
    pub created_at: i64,
}
