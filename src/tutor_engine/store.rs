//! In-memory Profile Store and Attempt Counter.
//!
//! Both maps live behind their own mutex so a [`TutorStore`] can be shared
//! between threads. State is volatile and lost when the process exits.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::tutor_engine::{
    error::{TutorError, TutorResult},
    models::StudentProfile,
};

type ProfileMap = HashMap<String, StudentProfile>;
/// (student_id, module) -> quiz submissions.
type AttemptMap = HashMap<(String, String), u32>;

#[derive(Debug, Default)]
pub struct TutorStore {
    profiles: Mutex<ProfileMap>,
    attempts: Mutex<AttemptMap>,
}

fn lock<'a, T>(m: &'a Mutex<T>, what: &str) -> TutorResult<MutexGuard<'a, T>> {
    m.lock()
        .map_err(|_| TutorError::Internal(format!("{what} lock poisoned")))
}

impl TutorStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── profiles ────────────────────────────────────────────────────────────

    /// Insert or overwrite. Returns the profile that was replaced, if any.
    pub fn put_profile(&self, profile: StudentProfile) -> TutorResult<Option<StudentProfile>> {
        let mut map = lock(&self.profiles, "profile store")?;
        Ok(map.insert(profile.student_id.clone(), profile))
    }

    pub fn profile(&self, student_id: &str) -> TutorResult<Option<StudentProfile>> {
        let map = lock(&self.profiles, "profile store")?;
        Ok(map.get(student_id).cloned())
    }

    /// Like [`profile`](Self::profile) but absence is an error.
    pub fn require_profile(&self, student_id: &str) -> TutorResult<StudentProfile> {
        self.profile(student_id)?
            .ok_or_else(|| TutorError::ProfileNotFound(student_id.to_string()))
    }

    pub fn profile_count(&self) -> TutorResult<usize> {
        Ok(lock(&self.profiles, "profile store")?.len())
    }

    // ── attempts ────────────────────────────────────────────────────────────

    /// Increment the counter for the pair and return the new value (first
    /// submission returns 1). The read and write happen under one lock.
    pub fn record_attempt(&self, student_id: &str, module: &str) -> TutorResult<u32> {
        let mut map = lock(&self.attempts, "attempt counter")?;
        let count = map
            .entry((student_id.to_string(), module.to_string()))
            .or_insert(0);
        *count = count.saturating_add(1);
        Ok(*count)
    }

    pub fn attempts(&self, student_id: &str, module: &str) -> TutorResult<u32> {
        let map = lock(&self.attempts, "attempt counter")?;
        Ok(map
            .get(&(student_id.to_string(), module.to_string()))
            .copied()
            .unwrap_or(0))
    }

    /// All modules the student has submitted a quiz for, with their counts.
    pub fn attempts_for(&self, student_id: &str) -> TutorResult<BTreeMap<String, u32>> {
        let map = lock(&self.attempts, "attempt counter")?;
        Ok(map
            .iter()
            .filter(|((sid, _), _)| sid == student_id)
            .map(|((_, module), n)| (module.clone(), *n))
            .collect())
    }
}
