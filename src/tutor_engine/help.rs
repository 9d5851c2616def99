//! Canned, level-toned help replies selected by keyword.

use tracing::debug;

use crate::tutor_engine::{
    catalog::{Catalog, HelpTopic, TONE_PLACEHOLDER},
    error::TutorResult,
    models::{HelpReply, Level},
    store::TutorStore,
};

pub const CLARIFICATION: &str =
    "I'm here to help! Could you be more specific about what you'd like to learn?";

pub const NEXT_STEPS: &str =
    "Feel free to ask follow-up questions or request a specific topic explanation.";

/// Tone prefix and material depth for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpStyle {
    pub tone: &'static str,
    pub detail_level: &'static str,
}

impl HelpStyle {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Beginner => HelpStyle {
                tone: "Let me explain this step by step in simple terms:",
                detail_level: "basic",
            },
            Level::Intermediate => HelpStyle {
                tone: "Here's a clear explanation with some technical details:",
                detail_level: "moderate",
            },
            Level::Advanced => HelpStyle {
                tone: "Here's a comprehensive explanation:",
                detail_level: "advanced",
            },
        }
    }
}

/// First topic, in table order, whose keyword occurs in the question
/// (case-insensitive).
pub fn find_topic<'a>(topics: &'a [HelpTopic], question: &str) -> Option<&'a HelpTopic> {
    let question = question.to_lowercase();
    topics
        .iter()
        .find(|t| question.contains(&t.keyword.to_lowercase()))
}

pub fn respond(
    store: &TutorStore,
    catalog: &dyn Catalog,
    student_id: &str,
    question: &str,
) -> TutorResult<HelpReply> {
    let profile = store.require_profile(student_id)?;
    let style = HelpStyle::for_level(profile.level);

    let topic = find_topic(catalog.help_topics(), question);
    debug!(
        student_id = %student_id,
        keyword = topic.map(|t| t.keyword.as_str()).unwrap_or("<none>"),
        "help topic selected"
    );
    let response = match topic {
        Some(t) => t.template.replace(TONE_PLACEHOLDER, style.tone),
        None => CLARIFICATION.to_string(),
    };

    Ok(HelpReply {
        student_level: profile.level,
        response,
        suggested_resources: format!(
            "Based on your {} level, I recommend checking out the {} materials in your current module.",
            profile.level, style.detail_level
        ),
        next_steps: NEXT_STEPS.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::{catalog::StaticCatalog, models::StudentProfile};
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

    #[test]
    fn first_keyword_in_table_order_wins() {
        let catalog = StaticCatalog::builtin();
        let topics = catalog.help_topics();
        let t = find_topic(topics, "I'm stuck on this Python loop").unwrap();
        assert_eq!(t.keyword, "python");
        let t = find_topic(topics, "stuck before the QUIZ").unwrap();
        assert_eq!(t.keyword, "quiz");
        assert!(find_topic(topics, "what is a tensor?").is_none());
    }

    #[test]
    fn tone_follows_level() {
        let catalog = StaticCatalog::builtin();
        let reply = respond(&store_with(Level::Beginner), &catalog, "s1", "explain machine learning")
            .unwrap();
        assert!(reply.response.starts_with("Let me explain this step by step in simple terms: Machine learning"));
        assert!(reply.suggested_resources.contains("Beginner level"));
        assert!(reply.suggested_resources.contains("basic materials"));

        let reply = respond(&store_with(Level::Advanced), &catalog, "s1", "explain machine learning")
            .unwrap();
        assert!(reply.response.starts_with("Here's a comprehensive explanation:"));
        assert!(reply.suggested_resources.contains("advanced materials"));
    }

    #[test]
    fn unmatched_question_gets_clarification() {
        let reply = respond(&store_with(Level::Intermediate), &StaticCatalog::builtin(), "s1", "hello")
            .unwrap();
        assert_eq!(reply.response, CLARIFICATION);
        assert_eq!(reply.next_steps, NEXT_STEPS);
        assert_eq!(reply.student_level, Level::Intermediate);
    }

    #[test]
    fn help_requires_a_profile() {
        let err = respond(&TutorStore::new(), &StaticCatalog::builtin(), "s1", "python").unwrap_err();
        assert_eq!(err.kind(), "profile_not_found");
    }
}
