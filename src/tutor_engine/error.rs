use thiserror::Error;

use crate::tutor_engine::models::Level;

/// Every way a tutor operation can fail.
///
/// The set is closed: the tool boundary maps each variant to an error
/// envelope, so nothing escapes as a panic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TutorError {
    #[error("No responses provided")]
    EmptyInput,

    #[error("Student profile not found. Please complete the initial assessment.")]
    ProfileNotFound(String),

    #[error("Module '{0}' not found")]
    ModuleNotFound(String),

    #[error("Quiz for '{0}' not available")]
    QuizNotFound(String),

    #[error("Module '{module}' has no content for {level} level")]
    ContentNotFoundForLevel { module: String, level: Level },

    #[error("Quiz for '{0}' has no answer key")]
    EmptyAnswerKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TutorError {
    /// Stable tag for the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            TutorError::EmptyInput                     => "empty_input",
            TutorError::ProfileNotFound(_)             => "profile_not_found",
            TutorError::ModuleNotFound(_)              => "module_not_found",
            TutorError::QuizNotFound(_)                => "quiz_not_found",
            TutorError::ContentNotFoundForLevel { .. } => "content_not_found_for_level",
            TutorError::EmptyAnswerKey(_)              => "empty_answer_key",
            TutorError::InvalidConfig(_)               => "invalid_config",
            TutorError::InvalidCatalog(_)              => "invalid_catalog",
            TutorError::InvalidRequest(_)              => "invalid_request",
            TutorError::Internal(_)                    => "internal",
        }
    }
}

pub type TutorResult<T> = Result<T, TutorError>;
