//! Scripted tutoring session through every operation.
//!
//! Run with: `cargo run --example tutor_session`
//! (set `RUST_LOG=tutor_core=debug` to see the engine's tracing output)
//!
//! 1. **Direct API**: a student is assessed, fetches a lesson, fails a quiz
//!    twice, passes it, and asks for help.
//! 2. **Tool calls**: the same flow driven through JSON, the way a dialogue
//!    agent would call the tutor, including an error envelope.

use tutor_core::{dispatch_json, tool_adapter::TOOL_NAMES, QuizResponse, TutorService};
use tracing_subscriber::EnvFilter;

fn rule(title: &str) {
    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let tutor = TutorService::new();
    let config = tutor.config();
    println!(
        "Pass mark {:.0}%, retake window {} min for the first {} attempts",
        config.pass_threshold,
        config.retake_cooldown_minutes,
        config.scheduled_retake_limit.saturating_sub(1)
    );

    // ── Direct API ──────────────────────────────────────────────────────────
    rule("Diagnostic assessment");
    let responses = vec![
        QuizResponse::correct(),
        QuizResponse::correct(),
        QuizResponse::wrong(),
        QuizResponse::correct(),
        QuizResponse::wrong(),
    ];
    match tutor.assess("ada", &responses) {
        Ok(out) => println!("  {}  (pace: {})", out.recommendation, out.learning_pace),
        Err(e) => println!("  error: {e}"),
    }

    rule("Lesson content");
    match tutor.get_content("ada", "intro_to_ai", Some("video")) {
        Ok(lesson) => {
            println!("  {} for {} learners, about {}", lesson.module, lesson.student_level, lesson.estimated_time);
            for (format, text) in &lesson.content {
                println!("    {format:<9} {text}");
            }
            println!("  Next: {}", lesson.next_step);
        }
        Err(e) => println!("  error: {e}"),
    }

    rule("Module quiz");
    if let Ok(questions) = tutor.quiz_questions("intro_to_ai") {
        for (i, q) in questions.iter().enumerate() {
            println!("  Q{}: {q}", i + 1);
        }
    }
    for attempt in [
        strings(&["robots", "clustering", "guessing"]),
        strings(&["artificial intelligence", "reinforcement", "guessing"]),
        strings(&["Artificial Intelligence", "Supervised Learning", "Prediction"]),
    ] {
        match tutor.take_quiz("ada", "intro_to_ai", &attempt) {
            Ok(out) => {
                let mark = if out.passed { "✓" } else { "✗" };
                println!();
                println!("  [{mark}] attempt {}: {}", out.attempt_number, out.feedback);
                println!("      {}", out.next_action);
                if let Some(at) = out.retake_available_at {
                    println!("      retake available at {}", at.to_rfc3339());
                }
            }
            Err(e) => println!("  error: {e}"),
        }
    }

    rule("Help");
    for question in ["I'm stuck on machine learning", "What's a monad?"] {
        match tutor.get_help("ada", question) {
            Ok(reply) => {
                println!("  You:   {question}");
                println!("  Tutor: {}", reply.response);
                println!("         {}", reply.suggested_resources);
            }
            Err(e) => println!("  error: {e}"),
        }
    }

    // ── Tool calls ──────────────────────────────────────────────────────────
    rule("Tool calls (JSON)");
    println!("  tools: {}", TOOL_NAMES.join(", "));
    for call in [
        r#"{"tool": "get_progress", "args": {"student_id": "ada"}}"#,
        r#"{"tool": "get_module_content", "args": {"student_id": "grace", "module_name": "python_basics"}}"#,
        r#"{"tool": "get_personalized_help", "args": {"student_id": "ada"}}"#,
    ] {
        println!("  → {call}");
        let reply = dispatch_json(&tutor, call);
        println!("  ← {}", serde_json::to_string_pretty(&reply).unwrap_or_default());
        println!();
    }
}
