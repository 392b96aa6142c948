//! In-memory reading session store.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use reading_core::{Assessment, AssessmentSettings, Document};

/// One reader working through one document.
#[derive(Debug, Clone)]
pub struct ReadingSession {
    pub id: Uuid,
    pub document: Document,
    /// Index of the line being practiced; equals the line count once the
    /// reader has stepped past the last line.
    pub current_line: usize,
    pub settings: AssessmentSettings,
    pub last_assessment: Option<Assessment>,
    pub created_at: DateTime<Utc>,
}

impl ReadingSession {
    pub fn new(document: Document, settings: AssessmentSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            document,
            current_line: 0,
            settings,
            last_assessment: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_line >= self.document.len()
    }

    pub fn current_line_text(&self) -> Option<&str> {
        self.document.line(self.current_line).ok()
    }

    /// Step to the next line, at most one past the last (= finished).
    /// Navigation always discards the previous line's assessment.
    pub fn advance(&mut self) {
        if self.current_line < self.document.len() {
            self.current_line += 1;
        }
        self.last_assessment = None;
    }

    pub fn go_back(&mut self) {
        self.current_line = self.current_line.saturating_sub(1);
        self.last_assessment = None;
    }

    pub fn restart(&mut self) {
        self.current_line = 0;
        self.last_assessment = None;
    }
}

/// Thread-safe map of active sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, ReadingSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: ReadingSession) {
        self.sessions
            .write()
            .expect("session store lock")
            .insert(session.id, session);
    }

    /// Snapshot of a session, if it exists.
    pub fn get(&self, id: Uuid) -> Option<ReadingSession> {
        self.sessions
            .read()
            .expect("session store lock")
            .get(&id)
            .cloned()
    }

    /// Run a mutation under the write lock, returning its result.
    pub fn update<T>(
        &self,
        id: Uuid,
        mutate: impl FnOnce(&mut ReadingSession) -> T,
    ) -> Option<T> {
        self.sessions
            .write()
            .expect("session store lock")
            .get_mut(&id)
            .map(mutate)
    }
}
