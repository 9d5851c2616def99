use crate::tutor_engine::{error::TutorResult, models::ProgressReport, store::TutorStore};

/// Snapshot of a student's profile and quiz attempts. Read-only.
pub fn report(store: &TutorStore, student_id: &str) -> TutorResult<ProgressReport> {
    let profile = store.require_profile(student_id)?;
    let attempts = store.attempts_for(student_id)?;
    Ok(ProgressReport {
        student_id: profile.student_id,
        level: profile.level,
        learning_pace: profile.learning_pace,
        global_score: profile.global_score,
        assessed_at: profile.assessed_at,
        preferred_format: profile.preferred_format,
        attempts,
    })
}
