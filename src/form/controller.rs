//! Conversation controller: the per-user application state machine.
//!
//! ```text
//!            apply                    send (non-empty, delivered or not)
//!   Idle ──────────────▶ Collecting ─────────────────────────────────▶ Idle
//!                         │    ▲
//!                         └────┘ text (append) / send (empty: rejected)
//! ```
//!
//! `/start`, `/id` and "not interested" never touch the session.
//! Every event writes one `REQUEST:` line to the general audit log and, except
//! for text without an active application, one `RESPONSE:` line.

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::audit::AuditLogs;
use crate::core::best_effort::{best_effort, supervise};
use crate::core::config::BotConfig;
use crate::core::error::AppResult;
use crate::core::sanitize::{sanitize, sanitize_or};
use crate::form::event::{Action, Incoming, UserInfo};
use crate::form::messages;
use crate::form::store::ApplicationStore;
use crate::form::transport::{Keyboard, Transport};

/// Fixed parameters of the form flow.
#[derive(Debug, Clone)]
pub struct FormSettings {
    /// Chat that receives completed applications
    pub admin_chat_id: i64,
    /// Document sent after the welcome text, skipped when missing
    pub info_document: PathBuf,
    /// Shown to the applicant when the admin forward fails
    pub fallback_contact: String,
}

impl FormSettings {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            admin_chat_id: config.admin_chat_id,
            info_document: config.info_document.clone(),
            fallback_contact: config.fallback_contact.clone(),
        }
    }
}

/// What a handled event produced besides the messages it sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Outcome {
    /// Short popup text for a button press
    toast: Option<&'static str>,
    /// `RESPONSE:` audit line; `None` only for ignored text
    response: Option<String>,
}

impl Outcome {
    fn respond(response: String) -> Self {
        Self {
            toast: None,
            response: Some(response),
        }
    }

    fn with_toast(mut self, toast: &'static str) -> Self {
        self.toast = Some(toast);
        self
    }
}

/// Drives the application flow for every user.
///
/// Owns its [`ApplicationStore`]; independent controllers never share state.
pub struct Controller {
    transport: Arc<dyn Transport>,
    store: ApplicationStore,
    audit: AuditLogs,
    settings: FormSettings,
}

impl Controller {
    pub fn new(transport: Arc<dyn Transport>, audit: AuditLogs, settings: FormSettings) -> Self {
        Self {
            transport,
            store: ApplicationStore::new(),
            audit,
            settings,
        }
    }

    pub fn store(&self) -> &ApplicationStore {
        &self.store
    }

    /// Handles one inbound event behind the supervisor boundary.
    ///
    /// Never fails: handler errors are logged and turned into an error
    /// `RESPONSE:` line. Returns the popup text for button presses.
    pub async fn dispatch(&self, event: &Incoming) -> Option<&'static str> {
        self.audit.general.record(&request_line(event));

        let label = format!("{} from {}", event.action.label(), event.user.id);
        match supervise(&label, self.handle(event)).await {
            Some(outcome) => {
                if let Some(response) = outcome.response {
                    self.audit.general.record(&format!("RESPONSE: {}", response));
                }
                outcome.toast
            }
            None => {
                self.audit
                    .general
                    .record(&format!("RESPONSE: failed to handle {}", label));
                None
            }
        }
    }

    async fn handle(&self, event: &Incoming) -> AppResult<Outcome> {
        let user = &event.user;
        let chat_id = event.chat_id;
        match &event.action {
            Action::Start => self.on_start(user, chat_id).await,
            Action::WhoAmI => self.on_who_am_i(user, chat_id).await,
            Action::Apply => self.on_apply(user, chat_id).await,
            Action::Text(text) => self.on_free_text(user, chat_id, text).await,
            Action::Submit => self.on_submit(user, chat_id).await,
            Action::NotInterested => self.on_not_interested(user, chat_id).await,
        }
    }

    async fn on_start(&self, user: &UserInfo, chat_id: i64) -> AppResult<Outcome> {
        log::info!("User {} started the bot", user.log_tag());

        self.transport
            .send_text(chat_id, messages::WELCOME, Some(Keyboard::Remove))
            .await?;

        let document = &self.settings.info_document;
        if tokio::fs::try_exists(document).await.unwrap_or(false) {
            let _ = best_effort("send info document", self.transport.send_document(chat_id, document)).await;
        } else {
            log::debug!("Info document {} not found, skipping", document.display());
        }

        self.transport
            .send_text(chat_id, messages::CHOOSE, Some(Keyboard::start_menu()))
            .await?;

        Ok(Outcome::respond(format!("welcome text, document and menu sent to {}", user.id)))
    }

    async fn on_who_am_i(&self, user: &UserInfo, chat_id: i64) -> AppResult<Outcome> {
        let info = messages::who_am_i(user);
        self.transport.send_text(chat_id, &info, None).await?;
        log::info!("Chat ID request: {}", sanitize(&info));

        Ok(Outcome::respond(format!("chat id info sent to {}", user.id)))
    }

    async fn on_apply(&self, user: &UserInfo, chat_id: i64) -> AppResult<Outcome> {
        self.store.put(user.id, "");
        if self.store.mark_applicant(user.id) {
            log::info!("New applicant {}", user.id);
        }
        self.audit.applicants.record(&format!(
            "APPLICATION STARTED: ID={}, Username=@{}, Name={}",
            user.id,
            sanitize_or(user.username.as_deref(), "None"),
            sanitize(&user.display_name())
        ));

        self.transport
            .send_text(chat_id, messages::APPLY_INSTRUCTIONS, Some(Keyboard::send_form()))
            .await?;

        Ok(Outcome::respond(format!("application form sent to {}", user.id)).with_toast(messages::APPLY_TOAST))
    }

    async fn on_free_text(&self, user: &UserInfo, chat_id: i64, text: &str) -> AppResult<Outcome> {
        if self.store.append(user.id, text).is_none() {
            self.audit
                .general
                .record(&format!("NO APPLICATION: text from {} ignored, no active application", user.id));
            return Ok(Outcome::default());
        }

        log::info!("Received application data from user {}", user.id);
        self.audit.applicants.record(&format!(
            "APPLICATION DATA: ID={}, Username=@{}, Message: {}",
            user.id,
            sanitize_or(user.username.as_deref(), "None"),
            sanitize(text)
        ));

        self.transport
            .send_text(chat_id, messages::DATA_RECEIVED, Some(Keyboard::send_form()))
            .await?;

        Ok(Outcome::respond(format!("data receipt confirmed to {}", user.id)))
    }

    async fn on_submit(&self, user: &UserInfo, chat_id: i64) -> AppResult<Outcome> {
        let pending = self.store.get(user.id).unwrap_or_default();
        let data = pending.trim();

        if data.is_empty() {
            self.transport
                .send_text(chat_id, messages::EMPTY_FORM, Some(Keyboard::send_form()))
                .await?;
            return Ok(
                Outcome::respond(format!("empty application rejected for {}", user.id))
                    .with_toast(messages::EMPTY_FORM_TOAST),
            );
        }

        let record = messages::application_record(user, data);
        let username = sanitize_or(user.username.as_deref(), "None");

        // Submission is terminal whatever the delivery outcome: no retry, no requeue.
        match self.transport.send_text(self.settings.admin_chat_id, &record, None).await {
            Ok(()) => {
                self.store.delete(user.id);
                log::info!(
                    "Application from user {} forwarded to admin {}",
                    user.id,
                    self.settings.admin_chat_id
                );
                self.audit
                    .applicants
                    .record(&format!("APPLICATION SENT: ID={}, Username=@{}", user.id, username));

                self.transport
                    .send_text(chat_id, messages::SUBMIT_SUCCESS, None)
                    .await?;

                Ok(Outcome::respond(format!("application from {} delivered", user.id)))
            }
            Err(e) => {
                self.store.delete(user.id);
                let saved = sanitize(&record);
                log::error!(
                    "Failed to forward application from user {}: {}",
                    user.id,
                    sanitize(&e.to_string())
                );
                log::info!("Saved application: {}", saved);
                self.audit.applicants.record(&format!(
                    "SEND ERROR: ID={}, Username=@{}, Application: {}",
                    user.id, username, saved
                ));

                self.transport
                    .send_text(chat_id, &messages::submit_accepted(&self.settings.fallback_contact), None)
                    .await?;

                Ok(Outcome::respond(format!(
                    "ERROR: application from {} not delivered to admin, saved to logs",
                    user.id
                )))
            }
        }
    }

    async fn on_not_interested(&self, user: &UserInfo, chat_id: i64) -> AppResult<Outcome> {
        // A session started earlier is deliberately left in place.
        self.transport
            .send_text(chat_id, &messages::not_interested(&self.settings.fallback_contact), None)
            .await?;

        let history = if self.store.is_applicant(user.id) { ", applied earlier" } else { "" };
        Ok(Outcome::respond(format!("closing message sent to {}{}", user.id, history))
            .with_toast(messages::NOT_INTERESTED_TOAST))
    }
}

fn request_line(event: &Incoming) -> String {
    let user = &event.user;
    match &event.action {
        Action::Start => format!("REQUEST: /start from {}", user.log_tag_full()),
        Action::WhoAmI => format!("REQUEST: /id from {}", user.log_tag()),
        Action::Apply => format!("REQUEST: button 'apply' from {}", user.log_tag()),
        Action::Submit => format!("REQUEST: button 'send_form' from {}", user.log_tag()),
        Action::NotInterested => format!("REQUEST: button 'not_interested' from {}", user.log_tag()),
        Action::Text(text) => format!("REQUEST: text from {}: {}", user.log_tag(), sanitize(text)),
    }
}
