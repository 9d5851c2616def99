//! Module quiz scoring, attempt tracking and retake scheduling.
//!
//! ## Feedback policy
//!
//! | Outcome | Feedback | Next action |
//! |---------|----------|-------------|
//! | passed | congratulatory | proceed to the next module |
//! | failed, attempt 1 | review-oriented | review content and retry |
//! | failed, attempt ≥ 2 | sympathetic, cites the attempt | one-on-one tutoring |
//!
//! A failed attempt below `scheduled_retake_limit` also carries a retake time
//! `now + retake_cooldown`.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::tutor_engine::{
    catalog::Catalog,
    clock::Clock,
    config::{AnswerMatching, TutorConfig},
    error::{TutorError, TutorResult},
    models::QuizOutcome,
    store::TutorStore,
};

/// Does `submitted` count as a match for `expected` under `mode`?
pub fn answer_matches(submitted: &str, expected: &str, mode: AnswerMatching) -> bool {
    match mode {
        AnswerMatching::Containment => expected
            .to_lowercase()
            .contains(&submitted.to_lowercase()),
        AnswerMatching::Exact => {
            submitted.trim().to_lowercase() == expected.trim().to_lowercase()
        }
    }
}

/// Percentage of expected answers matched position by position. Extra
/// submissions are ignored; missing ones count as wrong.
pub fn score_answers(answers: &[String], expected: &[String], mode: AnswerMatching) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let matched = answers
        .iter()
        .zip(expected)
        .filter(|(a, e)| answer_matches(a, e, mode))
        .count();
    matched as f64 / expected.len() as f64 * 100.0
}

fn feedback(score: f64, passed: bool, attempt: u32) -> (String, String) {
    if passed {
        (
            format!("Congratulations! You scored {score:.1}% and passed the module."),
            "You can proceed to the next module.".to_string(),
        )
    } else if attempt <= 1 {
        (
            format!("You scored {score:.1}%. Let's review the areas that need improvement."),
            "I recommend reviewing the content and trying the practice activities again."
                .to_string(),
        )
    } else {
        (
            format!(
                "Score: {score:.1}%. This is attempt #{attempt}. Don't worry, learning takes time!"
            ),
            "Let's have a one-on-one tutoring session to address your specific challenges."
                .to_string(),
        )
    }
}

fn retake_at(
    passed: bool,
    attempt: u32,
    config: &TutorConfig,
    now: DateTime<Utc>,
) -> TutorResult<Option<DateTime<Utc>>> {
    if passed || attempt >= config.scheduled_retake_limit {
        return Ok(None);
    }
    now.checked_add_signed(config.retake_cooldown())
        .map(Some)
        .ok_or_else(|| TutorError::Internal(format!("retake time overflows after {now}")))
}

/// Questions for `module` without their answers.
pub fn questions(catalog: &dyn Catalog, module: &str) -> TutorResult<Vec<String>> {
    catalog
        .quiz(module)
        .map(|q| q.questions.clone())
        .ok_or_else(|| TutorError::QuizNotFound(module.to_string()))
}

/// Grade one submission. The attempt is counted only once the student and
/// the quiz key have both been resolved.
pub fn take(
    store: &TutorStore,
    catalog: &dyn Catalog,
    config: &TutorConfig,
    clock: &dyn Clock,
    student_id: &str,
    module: &str,
    answers: &[String],
) -> TutorResult<QuizOutcome> {
    store.require_profile(student_id)?;
    let key = catalog
        .quiz(module)
        .ok_or_else(|| TutorError::QuizNotFound(module.to_string()))?;
    if key.correct_answers.is_empty() {
        return Err(TutorError::EmptyAnswerKey(module.to_string()));
    }

    let attempt = store.record_attempt(student_id, module)?;
    let score = score_answers(answers, &key.correct_answers, config.answer_matching);
    let passed = score >= config.pass_threshold;
    let (feedback, next_action) = feedback(score, passed, attempt);
    let retake_available_at = retake_at(passed, attempt, config, clock.now())?;

    info!(
        student_id = %student_id,
        module = %module,
        attempt,
        score,
        passed,
        "quiz graded"
    );

    Ok(QuizOutcome {
        module: module.to_string(),
        score,
        passed,
        attempt_number: attempt,
        feedback,
        next_action,
        retake_available_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::{
        catalog::StaticCatalog,
        clock::FixedClock,
        models::{Level, StudentProfile},
    };
    use chrono::{Duration, TimeZone};

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn enrolled() -> TutorStore {
        let store = TutorStore::new();
        store
            .put_profile(StudentProfile {
                student_id: "s1".into(),
                level: Level::Intermediate,
                learning_pace: Level::Intermediate.learning_pace(),
                assessed_at: Utc::now(),
                global_score: 60.0,
                preferred_format: "mixed".into(),
            })
            .unwrap();
        store
    }

    fn noon() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap())
    }

    #[test]
    fn containment_is_one_directional() {
        let m = AnswerMatching::Containment;
        assert!(answer_matches("Prediction", "prediction", m));
        assert!(answer_matches("learning", "supervised learning", m));
        assert!(!answer_matches("supervised learning algorithms", "supervised learning", m));
        // Short fragments slip through.
        assert!(answer_matches("e", "def", m));
    }

    #[test]
    fn exact_matching_rejects_fragments() {
        let m = AnswerMatching::Exact;
        assert!(answer_matches("  DEF ", "def", m));
        assert!(!answer_matches("e", "def", m));
    }

    #[test]
    fn score_is_positional_and_ignores_extras() {
        let expected = strings(&["a", "b", "c"]);
        let m = AnswerMatching::Exact;
        assert_eq!(score_answers(&strings(&["a", "b", "c", "d"]), &expected, m), 100.0);
        let third = 100.0 / 3.0;
        assert!((score_answers(&strings(&["b", "a", "c"]), &expected, m) - third).abs() < 1e-9);
        assert!((score_answers(&strings(&["a"]), &expected, m) - third).abs() < 1e-9);
        assert_eq!(score_answers(&[], &expected, m), 0.0);
    }

    #[test]
    fn feedback_branches() {
        let (f, n) = feedback(100.0, true, 4);
        assert!(f.starts_with("Congratulations!"));
        assert_eq!(n, "You can proceed to the next module.");

        let (f, n) = feedback(33.3, false, 1);
        assert!(f.contains("review the areas"));
        assert!(n.contains("reviewing the content"));

        let (f, n) = feedback(0.0, false, 2);
        assert!(f.contains("attempt #2"));
        assert!(n.contains("one-on-one tutoring"));
    }

    #[test]
    fn retake_offered_only_for_early_failures() {
        let cfg = TutorConfig::default();
        let now = noon().now();
        assert_eq!(retake_at(false, 1, &cfg, now), Ok(Some(now + Duration::hours(2))));
        assert_eq!(retake_at(false, 2, &cfg, now), Ok(Some(now + Duration::hours(2))));
        assert_eq!(retake_at(false, 3, &cfg, now), Ok(None));
        assert_eq!(retake_at(true, 1, &cfg, now), Ok(None));
    }

    #[test]
    fn retake_limit_and_cooldown_come_from_config() {
        let catalog = StaticCatalog::builtin();
        let wrong = strings(&["x", "y", "z"]);

        let one = TutorConfig::from_toml_str(
            "scheduled_retake_limit = 1\nretake_cooldown_minutes = 30\n",
        )
        .unwrap();
        let out = take(&enrolled(), &catalog, &one, &noon(), "s1", "intro_to_ai", &wrong).unwrap();
        assert_eq!(out.attempt_number, 1);
        assert!(!out.passed);
        assert!(out.retake_available_at.is_none());

        let two = TutorConfig { scheduled_retake_limit: 2, ..one };
        let store = enrolled();
        let first = take(&store, &catalog, &two, &noon(), "s1", "intro_to_ai", &wrong).unwrap();
        assert_eq!(first.retake_available_at, Some(noon().now() + Duration::minutes(30)));
        let second = take(&store, &catalog, &two, &noon(), "s1", "intro_to_ai", &wrong).unwrap();
        assert!(second.retake_available_at.is_none());
    }

    #[test]
    fn retake_overflow_is_an_error_not_a_panic() {
        let store = enrolled();
        let end_of_time = FixedClock(DateTime::<Utc>::MAX_UTC);
        let err = take(
            &store,
            &StaticCatalog::builtin(),
            &TutorConfig::default(),
            &end_of_time,
            "s1",
            "intro_to_ai",
            &strings(&["x"]),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "internal");

        // A passing submission needs no retake time, so it still succeeds.
        let ok = take(
            &store,
            &StaticCatalog::builtin(),
            &TutorConfig::default(),
            &end_of_time,
            "s1",
            "python_basics",
            &strings(&["def", "[]", "length"]),
        )
        .unwrap();
        assert!(ok.passed);
    }

    #[test]
    fn pass_threshold_is_inclusive() {
        let store = enrolled();
        let catalog = StaticCatalog::from_json_str(
            r#"{ "quizzes": { "m": { "correct_answers": ["a", "b", "c", "d"] } } }"#,
        )
        .unwrap();
        let cfg = TutorConfig { pass_threshold: 75.0, ..TutorConfig::default() };

        let out = take(&store, &catalog, &cfg, &noon(), "s1", "m", &strings(&["a", "b", "c", "x"]))
            .unwrap();
        assert_eq!(out.score, 75.0);
        assert!(out.passed);
        assert!(out.retake_available_at.is_none());

        let out = take(&store, &catalog, &cfg, &noon(), "s1", "m", &strings(&["a", "b", "x", "x"]))
            .unwrap();
        assert!(!out.passed);
        assert_eq!(out.attempt_number, 2);
    }

    #[test]
    fn unknown_quiz_does_not_consume_an_attempt() {
        let store = enrolled();
        let catalog = StaticCatalog::builtin();
        let err = take(&store, &catalog, &TutorConfig::default(), &noon(), "s1", "rust_101", &[])
            .unwrap_err();
        assert_eq!(err, TutorError::QuizNotFound("rust_101".into()));
        assert_eq!(store.attempts("s1", "rust_101").unwrap(), 0);
    }

    #[test]
    fn missing_profile_is_checked_first() {
        let err = take(
            &TutorStore::new(),
            &StaticCatalog::builtin(),
            &TutorConfig::default(),
            &noon(),
            "ghost",
            "rust_101",
            &[],
        )
        .unwrap_err();
        assert_eq!(err.kind(), "profile_not_found");
    }

    #[test]
    fn empty_answer_key_is_reported() {
        let mut catalog = StaticCatalog::builtin();
        catalog.quizzes.get_mut("intro_to_ai").unwrap().correct_answers.clear();
        let err = take(&enrolled(), &catalog, &TutorConfig::default(), &noon(), "s1", "intro_to_ai", &[])
            .unwrap_err();
        assert_eq!(err, TutorError::EmptyAnswerKey("intro_to_ai".into()));
    }

    #[test]
    fn questions_are_exposed_without_answers() {
        let catalog = StaticCatalog::builtin();
        let qs = questions(&catalog, "python_basics").unwrap();
        assert_eq!(qs[0], "What keyword starts a function in Python?");
        assert!(questions(&catalog, "rust_101").is_err());
    }
}
