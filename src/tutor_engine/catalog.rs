//! Read-only lesson, quiz and help tables.
//!
//! Engine code only sees the [`Catalog`] trait, so the tables can come from
//! the built-in literals ([`StaticCatalog::builtin`]) or from a JSON document
//! ([`StaticCatalog::from_json_str`]) without touching any engine logic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tutor_engine::{
    error::{TutorError, TutorResult},
    models::{ContentBundle, Level},
};

/// Placeholder replaced by the level-specific tone in help templates.
pub const TONE_PLACEHOLDER: &str = "{tone}";

/// Per-level bundles for one module. A level may be missing.
pub type ModuleContent = BTreeMap<Level, ContentBundle>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizKey {
    #[serde(default)]
    pub questions: Vec<String>,
    pub correct_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpTopic {
    pub keyword: String,
    pub template: String,
}

/// Lookup-by-key contract consumed by the engines.
pub trait Catalog: Send + Sync {
    fn module(&self, name: &str) -> Option<&ModuleContent>;
    fn quiz(&self, name: &str) -> Option<&QuizKey>;
    /// Ordered; the first keyword found in a question wins.
    fn help_topics(&self) -> &[HelpTopic];
    fn module_names(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleContent>,
    #[serde(default)]
    pub quizzes: BTreeMap<String, QuizKey>,
    #[serde(default)]
    pub help_topics: Vec<HelpTopic>,
}

impl Catalog for StaticCatalog {
    fn module(&self, name: &str) -> Option<&ModuleContent> {
        self.modules.get(name)
    }

    fn quiz(&self, name: &str) -> Option<&QuizKey> {
        self.quizzes.get(name)
    }

    fn help_topics(&self) -> &[HelpTopic] {
        &self.help_topics
    }

    fn module_names(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }
}

impl StaticCatalog {
    pub fn from_json_str(text: &str) -> TutorResult<Self> {
        let catalog: StaticCatalog =
            serde_json::from_str(text).map_err(|e| TutorError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject tables the engines cannot use: a quiz without expected answers
    /// (score would divide by zero) or an empty help keyword (would match
    /// every question).
    pub fn validate(&self) -> TutorResult<()> {
        for (name, quiz) in &self.quizzes {
            if quiz.correct_answers.is_empty() {
                return Err(TutorError::InvalidCatalog(format!(
                    "quiz '{name}' has no correct answers"
                )));
            }
        }
        if let Some(i) = self.help_topics.iter().position(|t| t.keyword.trim().is_empty()) {
            return Err(TutorError::InvalidCatalog(format!(
                "help topic #{i} has an empty keyword"
            )));
        }
        Ok(())
    }

    /// The lesson tables the tutor ships with.
    pub fn builtin() -> Self {
        let mut modules = BTreeMap::new();
        modules.insert(
            "intro_to_ai".to_string(),
            levels(
                bundle(
                    "Introduction to AI - Basic Concepts (15 min)",
                    "AI is the simulation of human intelligence in machines...",
                    "Interactive AI Timeline and Basic Flowchart",
                    "Identify AI in daily life - Write 5 examples",
                ),
                bundle(
                    "AI Fundamentals and Applications (20 min)",
                    "Artificial Intelligence encompasses machine learning, deep learning...",
                    "AI Taxonomy Diagram and Use Case Examples",
                    "Compare different AI approaches - Analysis task",
                ),
                bundle(
                    "AI Landscape and Emerging Trends (25 min)",
                    "Advanced AI architectures including transformers, GANs...",
                    "State-of-the-art AI Model Comparisons",
                    "Research and present on recent AI breakthrough",
                ),
            ),
        );
        modules.insert(
            "python_basics".to_string(),
            levels(
                bundle(
                    "Python Fundamentals for Complete Beginners (30 min)",
                    "Python syntax, variables, basic data types...",
                    "Python Code Structure Diagrams",
                    "Write your first Python program - Hello World variations",
                ),
                bundle(
                    "Python for Data Science Applications (25 min)",
                    "Libraries like pandas, numpy, matplotlib...",
                    "Python Data Science Ecosystem Map",
                    "Build a simple data analysis script",
                ),
                bundle(
                    "Advanced Python Patterns and Performance (20 min)",
                    "Decorators, context managers, async programming...",
                    "Python Architecture Patterns",
                    "Optimize an existing Python codebase",
                ),
            ),
        );

        let mut quizzes = BTreeMap::new();
        quizzes.insert(
            "intro_to_ai".to_string(),
            quiz(
                &[
                    "What does AI stand for?",
                    "Which is a type of machine learning?",
                    "What is the goal of supervised learning?",
                ],
                &["artificial intelligence", "supervised learning", "prediction"],
            ),
        );
        quizzes.insert(
            "python_basics".to_string(),
            quiz(
                &[
                    "What keyword starts a function in Python?",
                    "How do you create a list in Python?",
                    "What does 'len()' function do?",
                ],
                &["def", "[]", "length"],
            ),
        );

        let help_topics = vec![
            topic(
                "python",
                "{tone} Python is a programming language that's great for AI development \
                 because it's readable and has powerful libraries.",
            ),
            topic(
                "machine learning",
                "{tone} Machine learning is a subset of AI where computers learn patterns \
                 from data without explicit programming.",
            ),
            topic(
                "quiz",
                "{tone} Don't worry about quiz performance. Focus on understanding the \
                 concepts rather than memorizing answers.",
            ),
            topic(
                "stuck",
                "{tone} When you're stuck, try breaking the problem into smaller parts. \
                 Would you like to schedule a practice session?",
            ),
        ];

        StaticCatalog { modules, quizzes, help_topics }
    }
}

// ── literal builders ────────────────────────────────────────────────────────

fn bundle(video: &str, text: &str, visual: &str, activity: &str) -> ContentBundle {
    [("video", video), ("text", text), ("visual", visual), ("activity", activity)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn levels(beginner: ContentBundle, intermediate: ContentBundle, advanced: ContentBundle) -> ModuleContent {
    BTreeMap::from([
        (Level::Beginner, beginner),
        (Level::Intermediate, intermediate),
        (Level::Advanced, advanced),
    ])
}

fn quiz(questions: &[&str], answers: &[&str]) -> QuizKey {
    QuizKey {
        questions: questions.iter().map(|q| q.to_string()).collect(),
        correct_answers: answers.iter().map(|a| a.to_string()).collect(),
    }
}

fn topic(keyword: &str, template: &str) -> HelpTopic {
    HelpTopic { keyword: keyword.to_string(), template: template.to_string() }
}
