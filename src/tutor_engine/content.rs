//! Level-matched lesson content.

use tracing::debug;

use crate::tutor_engine::{
    catalog::Catalog,
    config::TutorConfig,
    error::{TutorError, TutorResult},
    models::ContentDelivery,
    store::TutorStore,
};

pub const NEXT_STEP: &str = "Complete the learning activity before taking the module quiz";

/// Return the bundle for the student's level.
///
/// `format` is advisory and does not filter the bundle. A module with no
/// bundle for the level yields an empty bundle unless
/// `strict_level_content` is set.
pub fn select(
    store: &TutorStore,
    catalog: &dyn Catalog,
    config: &TutorConfig,
    student_id: &str,
    module: &str,
    format: Option<&str>,
) -> TutorResult<ContentDelivery> {
    let profile = store.require_profile(student_id)?;
    let module_content = catalog
        .module(module)
        .ok_or_else(|| TutorError::ModuleNotFound(module.to_string()))?;

    let content = match module_content.get(&profile.level) {
        Some(bundle) => bundle.clone(),
        None if config.strict_level_content => {
            return Err(TutorError::ContentNotFoundForLevel {
                module: module.to_string(),
                level: profile.level,
            })
        }
        None => Default::default(),
    };

    debug!(
        student_id = %student_id,
        module = %module,
        level = %profile.level,
        requested_format = format.unwrap_or("mixed"),
        items = content.len(),
        "content selected"
    );

    Ok(ContentDelivery {
        module: module.to_string(),
        student_level: profile.level,
        content,
        estimated_time: profile.level.estimated_time().to_string(),
        next_step: NEXT_STEP.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::{
        catalog::StaticCatalog,
        models::{Level, StudentProfile},
    };
    use chrono::Utc;

    fn store_with(level: Level) -> TutorStore {
        let store = TutorStore::new();
        store
            .put_profile(StudentProfile {
                student_id: "s1".into(),
                level,
                learning_pace: level.learning_pace(),
                assessed_at: Utc::now(),
                global_score: 0.0,
                preferred_format: "mixed".into(),
            })
            .unwrap();
        store
    }

    fn partial_catalog() -> StaticCatalog {
        StaticCatalog::from_json_str(
            r#"{ "modules": { "rust_101": { "Beginner": { "text": "Ownership basics" } } } }"#,
        )
        .unwrap()
    }

    #[test]
    fn bundle_and_time_follow_level() {
        let catalog = StaticCatalog::builtin();
        let cfg = TutorConfig::default();
        for (level, time) in [
            (Level::Beginner, "4-8 hours"),
            (Level::Intermediate, "3-6 hours"),
            (Level::Advanced, "2-4 hours"),
        ] {
            let out = select(&store_with(level), &catalog, &cfg, "s1", "python_basics", None).unwrap();
            assert_eq!(out.student_level, level);
            assert_eq!(out.estimated_time, time);
            assert_eq!(out.next_step, NEXT_STEP);
            assert_eq!(&out.content, catalog.module("python_basics").unwrap().get(&level).unwrap());
        }
    }

    #[test]
    fn requested_format_does_not_filter() {
        let catalog = StaticCatalog::builtin();
        let out = select(
            &store_with(Level::Beginner),
            &catalog,
            &TutorConfig::default(),
            "s1",
            "intro_to_ai",
            Some("video"),
        )
        .unwrap();
        assert_eq!(out.content.len(), 4);
    }

    #[test]
    fn unknown_student_and_module_are_errors() {
        let catalog = StaticCatalog::builtin();
        let cfg = TutorConfig::default();
        let empty = TutorStore::new();
        assert_eq!(
            select(&empty, &catalog, &cfg, "s1", "intro_to_ai", None).unwrap_err(),
            TutorError::ProfileNotFound("s1".into())
        );
        assert_eq!(
            select(&store_with(Level::Beginner), &catalog, &cfg, "s1", "rust_101", None).unwrap_err(),
            TutorError::ModuleNotFound("rust_101".into())
        );
    }

    #[test]
    fn missing_level_is_empty_unless_strict() {
        let catalog = partial_catalog();
        let store = store_with(Level::Advanced);

        let lenient = select(&store, &catalog, &TutorConfig::default(), "s1", "rust_101", None).unwrap();
        assert!(lenient.content.is_empty());
        assert_eq!(lenient.estimated_time, "2-4 hours");

        let strict = TutorConfig { strict_level_content: true, ..TutorConfig::default() };
        assert_eq!(
            select(&store, &catalog, &strict, "s1", "rust_101", None).unwrap_err(),
            TutorError::ContentNotFoundForLevel { module: "rust_101".into(), level: Level::Advanced }
        );
    }
}
