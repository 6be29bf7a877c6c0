//! Inbound events as the conversation controller sees them.
//!
//! The Telegram layer converts updates into [`Incoming`]; nothing here depends
//! on teloxide.

use strum::{AsRefStr, Display, EnumString};

use crate::core::sanitize::sanitize_or;

/// Callback payloads carried by the inline buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ButtonAction {
    Apply,
    SendForm,
    NotInterested,
}

/// What the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `/start`
    Start,
    /// `/id`
    WhoAmI,
    /// "apply" button
    Apply,
    /// "send" button
    Submit,
    /// "not interested" button
    NotInterested,
    /// Any other text message
    Text(String),
}

impl From<ButtonAction> for Action {
    fn from(button: ButtonAction) -> Self {
        match button {
            ButtonAction::Apply => Action::Apply,
            ButtonAction::SendForm => Action::Submit,
            ButtonAction::NotInterested => Action::NotInterested,
        }
    }
}

impl Action {
    /// Short label for diagnostics; never contains user text.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Start => "/start",
            Action::WhoAmI => "/id",
            Action::Apply => "button apply",
            Action::Submit => "button send_form",
            Action::NotInterested => "button not_interested",
            Action::Text(_) => "text message",
        }
    }
}

/// Identity fields of the user behind an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl UserInfo {
    pub fn new(id: i64, first_name: impl Into<String>) -> Self {
        Self {
            id,
            username: None,
            first_name: first_name.into(),
            last_name: None,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// "First Last", without a trailing space when there is no last name.
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }

    /// `@username`, or `@<placeholder>` when the user has none.
    pub fn handle_or(&self, placeholder: &str) -> String {
        format!("@{}", self.username.as_deref().unwrap_or(placeholder))
    }

    /// `id (@username)` safe for log sinks.
    pub fn log_tag(&self) -> String {
        format!("{} (@{})", self.id, sanitize_or(self.username.as_deref(), "None"))
    }

    /// `id (@username) First Last` safe for log sinks.
    pub fn log_tag_full(&self) -> String {
        format!(
            "{} {}",
            self.log_tag(),
            sanitize_or(Some(self.display_name().as_str()), "")
        )
    }
}

/// One inbound event.
#[derive(Debug, Clone)]
pub struct Incoming {
    pub user: UserInfo,
    /// Chat the replies go to
    pub chat_id: i64,
    pub action: Action,
}

impl Incoming {
    pub fn new(user: UserInfo, chat_id: i64, action: Action) -> Self {
        Self { user, chat_id, action }
    }

    /// Event in the user's private chat (chat id equals user id).
    pub fn private(user: UserInfo, action: Action) -> Self {
        let chat_id = user.id;
        Self::new(user, chat_id, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_button_payloads() {
        assert_eq!(ButtonAction::Apply.as_ref(), "apply");
        assert_eq!(ButtonAction::SendForm.as_ref(), "send_form");
        assert_eq!(ButtonAction::NotInterested.to_string(), "not_interested");
        assert_eq!(ButtonAction::from_str("send_form").unwrap(), ButtonAction::SendForm);
        assert!(ButtonAction::from_str("menu:settings").is_err());
    }

    #[test]
    fn test_button_to_action() {
        assert_eq!(Action::from(ButtonAction::SendForm), Action::Submit);
        assert_eq!(Action::from(ButtonAction::NotInterested), Action::NotInterested);
    }

    #[test]
    fn test_display_name() {
        let user = UserInfo::new(1, "Anna");
        assert_eq!(user.display_name(), "Anna");
        assert_eq!(user.with_last_name("Karenina").display_name(), "Anna Karenina");
    }

    #[test]
    fn test_log_tags_are_sanitized() {
        let user = UserInfo::new(5, "Evil\nName").with_username("x\r\ny");
        assert_eq!(user.log_tag(), "5 (@x  y)");
        assert_eq!(user.log_tag_full(), "5 (@x  y) Evil Name");

        let anon = UserInfo::new(6, "Bob");
        assert_eq!(anon.log_tag(), "6 (@None)");
        assert_eq!(anon.handle_or("not set"), "@not set");
    }
}
