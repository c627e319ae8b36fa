//! Completed and in-flight analysis sessions.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::Plan;
use crate::trace::ThoughtStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Running,
    Completed,
    Error,
}

/// One analysis session: the query, its trace, and the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub id: String,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    pub thoughts: Vec<ThoughtStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub status: AnalysisStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Analysis {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            query: query.into(),
            plan: None,
            thoughts: Vec::new(),
            result: None,
            status: AnalysisStatus::Running,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn complete(&mut self, result: impl Into<String>) {
        self.result = Some(result.into());
        self.status = AnalysisStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    pub fn fail(&mut self, detail: impl Into<String>) {
        self.result = Some(detail.into());
        self.status = AnalysisStatus::Error;
        self.completed_at = Some(Utc::now());
    }
}

/// In-memory store of finished sessions, newest last.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<Vec<Analysis>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, analysis: Analysis) {
        // A poisoned lock means another thread panicked mid-write; the store
        // is append-only so the data is still usable.
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.push(analysis);
    }

    pub fn get(&self, id: &str) -> Option<Analysis> {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.iter().find(|a| a.id == id).cloned()
    }

    pub fn list(&self) -> Vec<Analysis> {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.clone()
    }

    pub fn len(&self) -> usize {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_analysis_starts_running() {
        let analysis = Analysis::new("how does Kenya score?");
        assert_eq!(analysis.status, AnalysisStatus::Running);
        assert!(analysis.result.is_none());
        assert!(analysis.completed_at.is_none());
    }

    #[test]
    fn complete_and_fail_set_terminal_state() {
        let mut a = Analysis::new("q");
        a.complete("the answer");
        assert_eq!(a.status, AnalysisStatus::Completed);
        assert!(a.completed_at.is_some());

        let mut b = Analysis::new("q");
        b.fail("iteration budget exhausted");
        assert_eq!(b.status, AnalysisStatus::Error);
        assert_eq!(b.result.as_deref(), Some("iteration budget exhausted"));
    }

    #[test]
    fn registry_preserves_insertion_order() {
        let registry = SessionRegistry::new();
        let first = Analysis::new("first");
        let second = Analysis::new("second");
        let first_id = first.id.clone();
        registry.insert(first);
        registry.insert(second);

        let listed = registry.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].query, "first");
        assert_eq!(registry.get(&first_id).unwrap().query, "first");
        assert!(registry.get("missing").is_none());

        registry.clear();
        assert!(registry.is_empty());
    }
}
