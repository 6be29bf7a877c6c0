//! Transport double that records every outbound call

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use formbot::core::error::{AppError, AppResult};
use formbot::form::{Keyboard, Transport};

/// One outbound call, in the order it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Document {
        chat_id: i64,
        path: PathBuf,
    },
}

/// Records calls; selected chats and document uploads can be made to fail.
///
/// Failed calls are not recorded.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Sent>>,
    failing_chats: HashSet<i64>,
    fail_documents: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send to `chat_id` fails
    pub fn failing_chat(mut self, chat_id: i64) -> Self {
        self.failing_chats.insert(chat_id);
        self
    }

    /// Every document upload fails
    pub fn failing_documents(mut self) -> Self {
        self.fail_documents = true;
        self
    }

    pub fn calls(&self) -> Vec<Sent> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts sent to `chat_id`, oldest first
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Sent::Text { chat_id: id, text, .. } if id == chat_id => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_text_to(&self, chat_id: i64) -> Option<String> {
        self.texts_to(chat_id).pop()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) -> AppResult<()> {
        if self.failing_chats.contains(&chat_id) {
            return Err(AppError::Delivery("Bad Request: chat not found".into()));
        }
        self.calls.lock().unwrap().push(Sent::Text {
            chat_id,
            text: text.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn send_document(&self, chat_id: i64, path: &Path) -> AppResult<()> {
        if self.fail_documents || self.failing_chats.contains(&chat_id) {
            return Err(AppError::Delivery("Request Entity Too Large".into()));
        }
        self.calls.lock().unwrap().push(Sent::Document {
            chat_id,
            path: path.to_path_buf(),
        });
        Ok(())
    }
}
