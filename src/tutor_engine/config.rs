//! Tunable thresholds and policies.
//!
//! Defaults reproduce the fixed cutoffs the tutor has always used; a TOML
//! file may override any subset of keys.

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::tutor_engine::error::{TutorError, TutorResult};

/// One year.
const MAX_COOLDOWN_MINUTES: i64 = 525_600;

/// How a submitted quiz answer is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMatching {
    /// Case-folded submitted text contained in the case-folded expected text.
    /// One-directional, so a short fragment like "learn" is accepted for
    /// "supervised learning" but the reverse is not.
    #[default]
    Containment,
    /// Trimmed, case-folded equality.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub advanced_threshold: f64,
    pub intermediate_threshold: f64,
    pub pass_threshold: f64,
    pub retake_cooldown_minutes: i64,
    /// A retake time is offered while `attempt_number < scheduled_retake_limit`.
    pub scheduled_retake_limit: u32,
    pub default_format: String,
    pub answer_matching: AnswerMatching,
    /// Treat a module without a bundle for the student's level as an error
    /// instead of returning an empty bundle.
    pub strict_level_content: bool,
}

impl Default for TutorConfig {
    fn default() -> Self {
        TutorConfig {
            advanced_threshold: 80.0,
            intermediate_threshold: 50.0,
            pass_threshold: 70.0,
            retake_cooldown_minutes: 120,
            scheduled_retake_limit: 3,
            default_format: "mixed".to_string(),
            answer_matching: AnswerMatching::Containment,
            strict_level_content: false,
        }
    }
}

impl TutorConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> TutorResult<Self> {
        let config: TutorConfig =
            toml::from_str(text).map_err(|e| TutorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> TutorResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            TutorError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> TutorResult<()> {
        for (name, value) in [
            ("advanced_threshold", self.advanced_threshold),
            ("intermediate_threshold", self.intermediate_threshold),
            ("pass_threshold", self.pass_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(TutorError::InvalidConfig(format!(
                    "{name} must be within 0..=100 (got {value})"
                )));
            }
        }
        if self.intermediate_threshold > self.advanced_threshold {
            return Err(TutorError::InvalidConfig(format!(
                "intermediate_threshold ({}) exceeds advanced_threshold ({})",
                self.intermediate_threshold, self.advanced_threshold
            )));
        }
        if !(0..=MAX_COOLDOWN_MINUTES).contains(&self.retake_cooldown_minutes) {
            return Err(TutorError::InvalidConfig(format!(
                "retake_cooldown_minutes must be within 0..={MAX_COOLDOWN_MINUTES} (got {})",
                self.retake_cooldown_minutes
            )));
        }
        if self.scheduled_retake_limit == 0 {
            return Err(TutorError::InvalidConfig(
                "scheduled_retake_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn retake_cooldown(&self) -> Duration {
        Duration::minutes(self.retake_cooldown_minutes)
    }
}
