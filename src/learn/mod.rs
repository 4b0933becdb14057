//! Learning session service
//!
//! Ties the pure content/quiz functions to per-user progress through an
//! injected [`ProgressRepository`]. Each operation is one read-modify-write
//! of a single record; writers for the same key are last-write-wins.

use serde::Serialize;

use crate::content::{self, Mode, VideoLink};
use crate::progress::{ProgressRecord, QuizAttempt};
use crate::quiz::{self, Grade, Question};
use crate::store::ProgressRepository;
use crate::topic::{SdgCategory, classify};

/// Everything produced by one learning request
#[derive(Debug, Clone, Serialize)]
pub struct LearnOutcome {
    /// The topic as entered
    pub topic: String,
    /// Classified SDG category
    pub category: SdgCategory,
    /// Rendered educational content
    pub content: String,
    /// Recommended videos
    pub videos: &'static [VideoLink; 3],
    /// Today's eco tip
    pub daily_tip: &'static str,
    /// Quiz for the topic
    pub quiz: Vec<Question>,
    /// Practical action plan
    pub action_plan: String,
    /// Progress snapshot after the topic-learned event
    pub progress: ProgressRecord,
}

/// Service coordinating learning events against a progress repository
#[derive(Debug)]
pub struct LearningService<R: ProgressRepository> {
    repo: R,
}

impl<R: ProgressRepository> LearningService<R> {
    /// Wrap a repository
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Recover the repository, e.g. to persist a file-backed store
    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Serve a learning request and apply the topic-learned transition
    pub fn learn(&mut self, user_key: &str, topic: &str, mode: Mode) -> LearnOutcome {
        let category = classify(topic);
        tracing::info!(user = user_key, topic, ?category, ?mode, "learning request");

        let mut record = self.repo.fetch(user_key).unwrap_or_default();
        record.record_topic(topic);
        self.repo.store(user_key, record.clone());

        LearnOutcome {
            topic: topic.to_string(),
            category,
            content: content::render_for(category, topic, mode),
            videos: content::video_links(topic),
            daily_tip: content::daily_tip(),
            quiz: quiz::generate(topic),
            action_plan: content::action_plan(topic),
            progress: record,
        }
    }

    /// Grade a submission, apply the quiz transition, and log the attempt
    pub fn submit_quiz(
        &mut self,
        user_key: &str,
        topic: &str,
        questions: &[Question],
        answers: &[usize],
    ) -> Grade {
        let grade = quiz::grade(questions, answers);
        tracing::info!(user = user_key, topic, score = grade.score, total = grade.total, "quiz submitted");

        let mut record = self.repo.fetch(user_key).unwrap_or_default();
        record.record_quiz(grade.score);
        self.repo.store(user_key, record);

        self.repo.log_attempt(QuizAttempt {
            user_key: user_key.to_string(),
            topic: topic.to_string(),
            score: grade.score,
            total_questions: grade.total,
            percentage: grade.percentage,
            created_at: crate::store::unix_timestamp(),
        });

        grade
    }

    /// Progress snapshot for a user (empty record if none exists yet)
    pub fn dashboard(&self, user_key: &str) -> ProgressRecord {
        self.repo.fetch(user_key).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Badge;
    use crate::store::MemoryRepository;
    use pretty_assertions::assert_eq;

    fn service() -> LearningService<MemoryRepository> {
        LearningService::new(MemoryRepository::new())
    }

    #[test]
    fn learn_produces_content_quiz_and_plan() {
        let mut svc = service();
        let outcome = svc.learn("user", "Climate Change", Mode::Basic);

        assert_eq!(outcome.category, SdgCategory::Climate);
        assert!(outcome.content.contains("SDG 13"));
        assert!(outcome.content.contains("Climate Change"));
        assert_eq!(outcome.quiz.len(), 3);
        assert!(!outcome.action_plan.is_empty());
        assert_eq!(outcome.progress.topics_learned, 1);
        assert_eq!(outcome.progress.sdg13_topics, 1);
    }

    #[test]
    fn learning_persists_through_the_repository() {
        let mut svc = service();
        svc.learn("user", "water", Mode::Basic);
        svc.learn("user", "ocean", Mode::Deep);

        let record = svc.dashboard("user");
        assert_eq!(record.topics_learned, 2);
        assert_eq!(record.sdg6_topics, 2);
    }

    #[test]
    fn users_do_not_share_progress() {
        let mut svc = service();
        svc.learn("alice", "water", Mode::Basic);

        assert_eq!(svc.dashboard("alice").topics_learned, 1);
        assert_eq!(svc.dashboard("bob").topics_learned, 0);
    }

    #[test]
    fn quiz_submission_updates_score_and_logs_attempt() {
        let mut svc = service();
        let outcome = svc.learn("user", "climate change", Mode::Basic);

        let answers: Vec<usize> = outcome.quiz.iter().map(|q| q.correct).collect();
        let grade = svc.submit_quiz("user", "climate change", &outcome.quiz, &answers);
        assert_eq!(grade.percentage, 100);

        let record = svc.dashboard("user");
        assert_eq!(record.quizzes_completed, 1);
        assert_eq!(record.total_score, 3);

        let repo = svc.into_inner();
        assert_eq!(repo.attempts().len(), 1);
        assert_eq!(repo.attempts()[0].topic, "climate change");
        assert_eq!(repo.attempts()[0].percentage, 100);
    }

    #[test]
    fn badges_unlock_through_the_service() {
        let mut svc = service();
        for _ in 0..3 {
            svc.learn("user", "recycling at school", Mode::Basic);
        }
        assert!(svc.dashboard("user").has_badge(Badge::EcoStarter));
    }

    #[test]
    fn dashboard_for_unknown_user_is_empty() {
        let svc = service();
        assert_eq!(svc.dashboard("nobody"), ProgressRecord::default());
    }
}
