//! The service context every operation runs against.
//!
//! [`TutorService`] owns the store, the catalog, the config and the clock and
//! passes them explicitly into each engine. It is `Send + Sync`, so one
//! instance can back a multi-threaded dispatcher.

use std::sync::Arc;

use crate::tutor_engine::{
    assessment,
    catalog::{Catalog, StaticCatalog},
    clock::{Clock, SystemClock},
    config::TutorConfig,
    content,
    error::TutorResult,
    help,
    models::{
        AssessmentOutcome, ContentDelivery, HelpReply, ProgressReport, QuizOutcome, QuizResponse,
    },
    progress, quiz,
    store::TutorStore,
};

pub struct TutorService {
    store: TutorStore,
    catalog: Arc<dyn Catalog>,
    config: TutorConfig,
    clock: Arc<dyn Clock>,
}

impl Default for TutorService {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorService {
    /// Built-in catalog, default config, wall-clock time.
    pub fn new() -> Self {
        TutorService {
            store: TutorStore::new(),
            catalog: Arc::new(StaticCatalog::builtin()),
            config: TutorConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Validates `config` before accepting it.
    pub fn with_config(mut self, config: TutorConfig) -> TutorResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    pub fn store(&self) -> &TutorStore {
        &self.store
    }

    // ── operations ──────────────────────────────────────────────────────────

    pub fn assess(&self, student_id: &str, responses: &[QuizResponse]) -> TutorResult<AssessmentOutcome> {
        assessment::assess(&self.store, &self.config, self.clock.as_ref(), student_id, responses)
    }

    pub fn get_content(
        &self,
        student_id: &str,
        module: &str,
        format: Option<&str>,
    ) -> TutorResult<ContentDelivery> {
        content::select(&self.store, self.catalog.as_ref(), &self.config, student_id, module, format)
    }

    pub fn take_quiz(&self, student_id: &str, module: &str, answers: &[String]) -> TutorResult<QuizOutcome> {
        quiz::take(
            &self.store,
            self.catalog.as_ref(),
            &self.config,
            self.clock.as_ref(),
            student_id,
            module,
            answers,
        )
    }

    pub fn get_help(&self, student_id: &str, question: &str) -> TutorResult<HelpReply> {
        help::respond(&self.store, self.catalog.as_ref(), student_id, question)
    }

    pub fn progress(&self, student_id: &str) -> TutorResult<ProgressReport> {
        progress::report(&self.store, student_id)
    }

    pub fn quiz_questions(&self, module: &str) -> TutorResult<Vec<String>> {
        quiz::questions(self.catalog.as_ref(), module)
    }

    pub fn list_modules(&self) -> Vec<String> {
        self.catalog.module_names()
    }
}
