//! EduBridge+ - SDG-aligned sustainability learning core
//!
//! EduBridge+ serves rule-based educational content about sustainability
//! topics, tracks per-user gamification state (points, badges, quiz
//! scores), and hosts a community bulletin board. Content selection is
//! deterministic keyword matching against fixed templates aligned with
//! SDG 4, 6, and 13.

pub mod community;
pub mod config;
pub mod content;
pub mod learn;
pub mod progress;
pub mod quiz;
pub mod store;
pub mod topic;

pub use config::Config;
pub use content::Mode;
pub use learn::LearningService;
pub use progress::{Badge, ProgressRecord};
pub use topic::{SdgCategory, classify};
