//! JSON boundary for the dialogue agent that drives the tutor.
//!
//! The agent calls tools by name with JSON arguments and relays whatever
//! comes back. Every reply is a flat object tagged with `status`:
//!
//! ```json
//! {"status": "success", "level": "Advanced", "score": 80.0, ...}
//! {"status": "error", "kind": "profile_not_found", "message": "..."}
//! ```
//!
//! Nothing here panics: malformed calls become `invalid_request` errors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::tutor_engine::{QuizResponse, TutorError, TutorResult, TutorService};

/// Tagged result relayed to the agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResponse<T> {
    Success(T),
    Error { kind: &'static str, message: String },
}

impl<T> From<TutorResult<T>> for ToolResponse<T> {
    fn from(result: TutorResult<T>) -> Self {
        match result {
            Ok(value) => ToolResponse::Success(value),
            Err(e) => ToolResponse::Error { kind: e.kind(), message: e.to_string() },
        }
    }
}

/// One tool invocation as the agent emits it: `{"tool": ..., "args": {...}}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "tool", content = "args", rename_all = "snake_case")]
pub enum ToolCall {
    AssessStudentLevel {
        student_id: String,
        responses: Vec<QuizResponse>,
    },
    GetModuleContent {
        student_id: String,
        module_name: String,
        #[serde(default)]
        content_format: Option<String>,
    },
    TakeModuleQuiz {
        student_id: String,
        module_name: String,
        answers: Vec<String>,
    },
    GetPersonalizedHelp {
        student_id: String,
        question: String,
    },
    GetProgress {
        student_id: String,
    },
}

impl ToolCall {
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::AssessStudentLevel { .. }  => "assess_student_level",
            ToolCall::GetModuleContent { .. }    => "get_module_content",
            ToolCall::TakeModuleQuiz { .. }      => "take_module_quiz",
            ToolCall::GetPersonalizedHelp { .. } => "get_personalized_help",
            ToolCall::GetProgress { .. }         => "get_progress",
        }
    }
}

/// Names of every tool the adapter understands, in declaration order.
pub const TOOL_NAMES: [&str; 5] = [
    "assess_student_level",
    "get_module_content",
    "take_module_quiz",
    "get_personalized_help",
    "get_progress",
];

/// Convert an operation result into its envelope, logging failures.
fn envelope<T: Serialize>(tool: &str, result: TutorResult<T>) -> Value {
    if let Err(e) = &result {
        warn!(tool, kind = e.kind(), error = %e, "tool call failed");
    }
    match serde_json::to_value(ToolResponse::from(result)) {
        Ok(v) => v,
        Err(e) => {
            let e = TutorError::Internal(format!("cannot encode {tool} result: {e}"));
            warn!(tool, error = %e, "tool call failed");
            json!({ "status": "error", "kind": e.kind(), "message": e.to_string() })
        }
    }
}

/// Run one parsed call against the service.
pub fn dispatch(service: &TutorService, call: ToolCall) -> Value {
    let tool = call.name();
    match call {
        ToolCall::AssessStudentLevel { student_id, responses } => {
            envelope(tool, service.assess(&student_id, &responses))
        }
        ToolCall::GetModuleContent { student_id, module_name, content_format } => envelope(
            tool,
            service.get_content(&student_id, &module_name, content_format.as_deref()),
        ),
        ToolCall::TakeModuleQuiz { student_id, module_name, answers } => {
            envelope(tool, service.take_quiz(&student_id, &module_name, &answers))
        }
        ToolCall::GetPersonalizedHelp { student_id, question } => {
            envelope(tool, service.get_help(&student_id, &question))
        }
        ToolCall::GetProgress { student_id } => envelope(tool, service.progress(&student_id)),
    }
}

/// Parse a raw JSON tool call and run it.
pub fn dispatch_json(service: &TutorService, text: &str) -> Value {
    match serde_json::from_str::<ToolCall>(text) {
        Ok(call) => dispatch(service, call),
        Err(e) => envelope::<()>(
            "<unparsed>",
            Err(TutorError::InvalidRequest(e.to_string())),
        ),
    }
}
