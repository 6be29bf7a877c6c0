use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Bot API token
pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the administrator chat id
pub const ADMIN_CHAT_VAR: &str = "ADMIN_CHAT_ID";

/// Informational document sent after the welcome text
/// Read from INFO_DOCUMENT_PATH environment variable
pub const DEFAULT_INFO_DOCUMENT: &str = "Условия_участия_психологов_в_фокус_группе.docx";

/// Contact address shown to the applicant when the admin forward fails
/// Read from FALLBACK_CONTACT environment variable
pub const DEFAULT_FALLBACK_CONTACT: &str = "divanonline1@gmail.com";

/// General traffic audit log
/// Read from GENERAL_LOG_PATH environment variable
pub const DEFAULT_GENERAL_LOG: &str = "bot_general.log";

/// Applicant events audit log
/// Read from APPLICANTS_LOG_PATH environment variable
pub const DEFAULT_APPLICANTS_LOG: &str = "bot_applicants.log";

/// Application (diagnostic) log file
/// Read from LOG_FILE_PATH environment variable
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Errors raised while reading startup configuration.
///
/// Any of these stops the process before the bot connects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} must be an integer, got {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime configuration of the bot, read once at startup.
#[derive(Debug)]
pub struct BotConfig {
    pub token: SecretString,
    pub admin_chat_id: i64,
    pub info_document: PathBuf,
    pub fallback_contact: String,
    pub general_log: PathBuf,
    pub applicants_log: PathBuf,
    /// Custom Bot API server (local telegram-bot-api), if any
    pub bot_api_url: Option<String>,
}

impl BotConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if the token or the admin chat id is missing,
    /// or the admin chat id is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_blank(lookup(key));

        let token = get(TOKEN_VAR).ok_or(ConfigError::Missing(TOKEN_VAR))?;
        let raw_admin = get(ADMIN_CHAT_VAR).ok_or(ConfigError::Missing(ADMIN_CHAT_VAR))?;
        let admin_chat_id = raw_admin.parse::<i64>().map_err(|_| ConfigError::Invalid {
            var: ADMIN_CHAT_VAR,
            value: raw_admin.clone(),
        })?;

        Ok(Self {
            token: SecretString::from(token),
            admin_chat_id,
            info_document: get("INFO_DOCUMENT_PATH")
                .unwrap_or_else(|| DEFAULT_INFO_DOCUMENT.to_string())
                .into(),
            fallback_contact: get("FALLBACK_CONTACT").unwrap_or_else(|| DEFAULT_FALLBACK_CONTACT.to_string()),
            general_log: get("GENERAL_LOG_PATH")
                .unwrap_or_else(|| DEFAULT_GENERAL_LOG.to_string())
                .into(),
            applicants_log: get("APPLICANTS_LOG_PATH")
                .unwrap_or_else(|| DEFAULT_APPLICANTS_LOG.to_string())
                .into(),
            bot_api_url: get("BOT_API_URL"),
        })
    }

    /// Returns the Bot API token.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// One-line summary safe to print or log (token redacted).
    pub fn summary(&self) -> String {
        format!(
            "admin_chat_id={}, info_document={}, fallback_contact={}, general_log={}, applicants_log={}, bot_api_url={}",
            self.admin_chat_id,
            self.info_document.display(),
            self.fallback_contact,
            self.general_log.display(),
            self.applicants_log.display(),
            self.bot_api_url.as_deref().unwrap_or("<default>")
        )
    }
}

/// Trimmed value, `None` when unset or blank
fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Application log file path
/// Read from LOG_FILE_PATH environment variable
pub fn log_file_path() -> String {
    log_file_path_from(|key| env::var(key).ok())
}

fn log_file_path_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup("LOG_FILE_PATH")).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Documents are small, so a minute is plenty
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
