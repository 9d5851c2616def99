use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Learner classification
// ---------------------------------------------------------------------------

/// Coarse learner tier. Ordered so that `Beginner < Intermediate < Advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner     => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced     => write!(f, "Advanced"),
        }
    }
}

impl Level {
    /// Pace is derived 1:1 from the level.
    pub fn learning_pace(self) -> LearningPace {
        match self {
            Level::Beginner     => LearningPace::Slow,
            Level::Intermediate => LearningPace::Moderate,
            Level::Advanced     => LearningPace::Fast,
        }
    }

    /// Time estimate shown alongside a content bundle.
    pub fn estimated_time(self) -> &'static str {
        match self {
            Level::Beginner     => "4-8 hours",
            Level::Intermediate => "3-6 hours",
            Level::Advanced     => "2-4 hours",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningPace {
    Slow,
    Moderate,
    Fast,
}

impl fmt::Display for LearningPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningPace::Slow     => write!(f, "slow"),
            LearningPace::Moderate => write!(f, "moderate"),
            LearningPace::Fast     => write!(f, "fast"),
        }
    }
}

// ---------------------------------------------------------------------------
// Stored state
// ---------------------------------------------------------------------------

/// Latest assessment result for one student. Last assessment wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub level: Level,
    pub learning_pace: LearningPace,
    pub assessed_at: DateTime<Utc>,
    /// Percentage in 0..=100.
    pub global_score: f64,
    /// Recorded for the dispatcher; never used for branching.
    pub preferred_format: String,
}

// ---------------------------------------------------------------------------
// Operation inputs
// ---------------------------------------------------------------------------

/// One diagnostic quiz response. A missing `correct` flag counts as wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default)]
    pub correct: bool,
}

impl QuizResponse {
    pub fn correct() -> Self {
        QuizResponse { question: None, correct: true }
    }

    pub fn wrong() -> Self {
        QuizResponse { question: None, correct: false }
    }
}

// ---------------------------------------------------------------------------
// Operation results
// ---------------------------------------------------------------------------

/// Format label (video/text/visual/activity) to literal lesson text.
pub type ContentBundle = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub student_id: String,
    pub level: Level,
    pub score: f64,
    pub learning_pace: LearningPace,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDelivery {
    pub module: String,
    pub student_level: Level,
    pub content: ContentBundle,
    pub estimated_time: String,
    pub next_step: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub module: String,
    pub score: f64,
    pub passed: bool,
    pub attempt_number: u32,
    pub feedback: String,
    pub next_action: String,
    /// Absent when the quiz was passed or no further retake is scheduled.
    pub retake_available_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpReply {
    pub student_level: Level,
    pub response: String,
    pub suggested_resources: String,
    pub next_steps: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub student_id: String,
    pub level: Level,
    pub learning_pace: LearningPace,
    pub global_score: f64,
    pub assessed_at: DateTime<Utc>,
    pub preferred_format: String,
    /// Quiz submissions so far, keyed by module.
    pub attempts: BTreeMap<String, u32>,
}
