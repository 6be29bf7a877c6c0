//! In-memory application state
//!
//! Sessions (`user id -> pending text`) exist only while a user is filling in
//! the form. The applicant set only grows and is used for log marking.
//! Nothing here survives a restart.

use dashmap::{DashMap, DashSet};

/// Sessions plus the applicant set, owned by one controller.
#[derive(Debug, Default)]
pub struct ApplicationStore {
    sessions: DashMap<i64, String>,
    applicants: DashSet<i64>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces the session for `user`.
    pub fn put(&self, user: i64, text: impl Into<String>) {
        self.sessions.insert(user, text.into());
    }

    /// Current pending text, `None` when the user is not mid-application.
    pub fn get(&self, user: i64) -> Option<String> {
        self.sessions.get(&user).map(|entry| entry.value().clone())
    }

    /// Removes the session; returns the text it held.
    pub fn delete(&self, user: i64) -> Option<String> {
        self.sessions.remove(&user).map(|(_, text)| text)
    }

    /// Appends `text` to an existing session, newline-separated when the
    /// session already holds something. Returns the updated text, or `None`
    /// (and stores nothing) when there is no session.
    pub fn append(&self, user: i64, text: &str) -> Option<String> {
        let mut entry = self.sessions.get_mut(&user)?;
        let pending = entry.value_mut();
        if !pending.is_empty() {
            pending.push('\n');
        }
        pending.push_str(text);
        Some(pending.clone())
    }

    pub fn has_session(&self, user: i64) -> bool {
        self.sessions.contains_key(&user)
    }

    /// Number of users currently mid-application.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Remembers that `user` pressed "apply" at least once.
    /// Returns `true` the first time.
    pub fn mark_applicant(&self, user: i64) -> bool {
        self.applicants.insert(user)
    }

    pub fn is_applicant(&self, user: i64) -> bool {
        self.applicants.contains(&user)
    }
}
