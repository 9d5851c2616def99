//! Core tutor engine: assessment, content selection, quizzes and help.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: levels, profiles, operation results |
//! | `error`      | Closed `TutorError` enumeration |
//! | `config`     | Thresholds and policies, loadable from TOML |
//! | `clock`      | Injectable time source |
//! | `store`      | Profile Store and Attempt Counter behind mutexes |
//! | `catalog`    | `Catalog` trait and the built-in lesson/quiz/help tables |
//! | `assessment` | Diagnostic scoring and level classification |
//! | `content`    | Level-matched content bundles |
//! | `quiz`       | Module quiz grading, attempts and retake windows |
//! | `help`       | Keyword-selected help replies |
//! | `progress`   | Per-student progress snapshot |
//! | `service`    | `TutorService`, the context object behind every operation |

pub mod assessment;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod help;
pub mod models;
pub mod progress;
pub mod quiz;
pub mod service;
pub mod store;

// Re-export the public API surface so callers can use
// `tutor_engine::TutorService` without reaching into sub-modules.
pub use catalog::{Catalog, HelpTopic, ModuleContent, QuizKey, StaticCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AnswerMatching, TutorConfig};
pub use error::{TutorError, TutorResult};
pub use models::{
    AssessmentOutcome, ContentBundle, ContentDelivery, HelpReply, LearningPace, Level,
    ProgressReport, QuizOutcome, QuizResponse, StudentProfile,
};
pub use service::TutorService;
pub use store::TutorStore;
