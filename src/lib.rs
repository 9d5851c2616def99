//! # tutor_core
//!
//! Assessment and progress tracking for a scripted AI tutor.
//!
//! A learner takes a diagnostic quiz and is classified as Beginner,
//! Intermediate or Advanced. That level then picks the lesson bundle they
//! see, the tone of help replies, and the time estimate for each module.
//! Module quizzes are graded against an answer key, attempts are counted per
//! (student, module), and failed early attempts get a retake window.
//!
//! ## How it works
//!
//! 1. Build a [`TutorService`]: it owns the in-memory Profile Store and
//!    Attempt Counter, a [`Catalog`] of lessons/quizzes/help topics, a
//!    [`TutorConfig`], and a [`Clock`].
//! 2. Call one of the operations: [`TutorService::assess`],
//!    [`TutorService::get_content`], [`TutorService::take_quiz`],
//!    [`TutorService::get_help`], or [`TutorService::progress`]. Each returns
//!    `Result<_, TutorError>`.
//! 3. A dialogue agent that speaks JSON goes through [`tool_adapter`], which
//!    wraps every result in a `{"status": "success" | "error", ...}` envelope.
//!
//! ## Quick start
//!
//! ```rust
//! use tutor_core::{QuizResponse, TutorService};
//!
//! let tutor = TutorService::new();
//!
//! let diagnostic = vec![
//!     QuizResponse::correct(),
//!     QuizResponse::correct(),
//!     QuizResponse::correct(),
//!     QuizResponse::correct(),
//!     QuizResponse::wrong(),
//! ];
//! let outcome = tutor.assess("ada", &diagnostic).unwrap();
//! println!("{}", outcome.recommendation);
//!
//! let lesson = tutor.get_content("ada", "intro_to_ai", None).unwrap();
//! println!("{} ({})", lesson.content["video"], lesson.estimated_time);
//!
//! let answers: Vec<String> = ["Artificial Intelligence", "Supervised Learning", "Prediction"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let result = tutor.take_quiz("ada", "intro_to_ai", &answers).unwrap();
//! assert!(result.passed);
//! ```

pub mod tool_adapter;
pub mod tutor_engine;

// Convenience re-exports so callers can use `tutor_core::TutorService`
// directly without reaching into `tutor_engine::`.
pub use tool_adapter::{dispatch, dispatch_json, ToolCall, ToolResponse};
pub use tutor_engine::{
    AnswerMatching, AssessmentOutcome, Catalog, Clock, ContentBundle, ContentDelivery,
    FixedClock, HelpReply, LearningPace, Level, ProgressReport, QuizOutcome, QuizResponse,
    StaticCatalog, StudentProfile, SystemClock, TutorConfig, TutorError, TutorResult,
    TutorService,
};
