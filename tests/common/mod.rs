//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

pub mod recorder;
pub mod telegram;

use std::path::PathBuf;
use std::sync::Arc;

use formbot::core::audit::{AuditLogs, MemoryAuditLog};
use formbot::form::{Controller, FormSettings, UserInfo};

#[allow(unused_imports)]
pub use recorder::{RecordingTransport, Sent};

/// Chat that receives completed applications in tests
pub const ADMIN_CHAT: i64 = 999;

/// Contact shown when the admin forward fails
pub const CONTACT: &str = "help@example.com";

/// Controller wired to a recording transport and in-memory audit logs
pub struct TestBot {
    pub controller: Arc<Controller>,
    pub transport: Arc<RecordingTransport>,
    pub general: Arc<MemoryAuditLog>,
    pub applicants: Arc<MemoryAuditLog>,
}

impl TestBot {
    /// Bot whose info document does not exist
    pub fn new() -> Self {
        Self::build(RecordingTransport::new(), PathBuf::from("/nonexistent/terms.docx"))
    }

    pub fn with_transport(transport: RecordingTransport) -> Self {
        Self::build(transport, PathBuf::from("/nonexistent/terms.docx"))
    }

    pub fn build(transport: RecordingTransport, info_document: PathBuf) -> Self {
        let transport = Arc::new(transport);
        let general = Arc::new(MemoryAuditLog::new());
        let applicants = Arc::new(MemoryAuditLog::new());
        let controller = Arc::new(Controller::new(
            transport.clone(),
            AuditLogs::new(general.clone(), applicants.clone()),
            FormSettings {
                admin_chat_id: ADMIN_CHAT,
                info_document,
                fallback_contact: CONTACT.to_string(),
            },
        ));

        Self {
            controller,
            transport,
            general,
            applicants,
        }
    }
}

/// Applicant used across tests
pub fn alice() -> UserInfo {
    UserInfo::new(42, "Alice").with_username("alice").with_last_name("Smith")
}
