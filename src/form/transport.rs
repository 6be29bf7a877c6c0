//! Outbound side of the messaging platform.
//!
//! The controller only needs "send text" and "send document"; the Telegram
//! implementation lives in [`crate::telegram::transport`].

use async_trait::async_trait;
use std::path::Path;

use crate::core::error::AppResult;
use crate::form::event::ButtonAction;

/// An inline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Markup attached to an outgoing text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Inline buttons, one per row
    Buttons(Vec<Button>),
    /// Hide any custom reply keyboard left in the chat
    Remove,
}

impl Keyboard {
    /// Single "send" button offered while the form is being filled in.
    pub fn send_form() -> Self {
        Keyboard::Buttons(vec![Button::new("Отправить", ButtonAction::SendForm)])
    }

    /// "Apply" / "Not interested" menu shown after `/start`.
    pub fn start_menu() -> Self {
        Keyboard::Buttons(vec![
            Button::new("✅ Подать заявку", ButtonAction::Apply),
            Button::new("Не подходит", ButtonAction::NotInterested),
        ])
    }
}

/// Outbound capability of the messaging platform.
///
/// Chat ids are plain integers; the administrator is just another chat.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a text message, optionally with a keyboard.
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) -> AppResult<()>;

    /// Uploads the file at `path` as a document.
    async fn send_document(&self, chat_id: i64, path: &Path) -> AppResult<()>;
}
