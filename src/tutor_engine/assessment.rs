//! Diagnostic quiz scoring and level classification.

use tracing::info;

use crate::tutor_engine::{
    clock::Clock,
    config::TutorConfig,
    error::{TutorError, TutorResult},
    models::{AssessmentOutcome, Level, QuizResponse, StudentProfile},
    store::TutorStore,
};

/// Percentage of responses flagged correct. Empty input is an error.
pub fn score_responses(responses: &[QuizResponse]) -> TutorResult<f64> {
    if responses.is_empty() {
        return Err(TutorError::EmptyInput);
    }
    let correct = responses.iter().filter(|r| r.correct).count();
    Ok(correct as f64 / responses.len() as f64 * 100.0)
}

/// Map a percentage onto a level. Lower bounds are inclusive.
pub fn classify(percentage: f64, config: &TutorConfig) -> Level {
    if percentage >= config.advanced_threshold {
        Level::Advanced
    } else if percentage >= config.intermediate_threshold {
        Level::Intermediate
    } else {
        Level::Beginner
    }
}

pub fn recommendation(score: f64, level: Level) -> String {
    format!(
        "Based on your {score:.1}% score, you've been classified as {level} level. \
         Your content will be adapted accordingly."
    )
}

/// Score the responses, classify, and overwrite the student's profile.
pub fn assess(
    store: &TutorStore,
    config: &TutorConfig,
    clock: &dyn Clock,
    student_id: &str,
    responses: &[QuizResponse],
) -> TutorResult<AssessmentOutcome> {
    let score = score_responses(responses)?;
    let level = classify(score, config);
    let learning_pace = level.learning_pace();

    let replaced = store.put_profile(StudentProfile {
        student_id: student_id.to_string(),
        level,
        learning_pace,
        assessed_at: clock.now(),
        global_score: score,
        preferred_format: config.default_format.clone(),
    })?;

    info!(
        student_id = %student_id,
        score,
        %level,
        replaced_level = ?replaced.map(|p| p.level),
        "student assessed"
    );

    Ok(AssessmentOutcome {
        student_id: student_id.to_string(),
        level,
        score,
        learning_pace,
        recommendation: recommendation(score, level),
    })
}
