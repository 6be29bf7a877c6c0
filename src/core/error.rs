use thiserror::Error;

use crate::core::config::ConfigError;

/// Centralized error types for the application
///
/// Everything the conversation flow can fail with is converted to this enum so
/// the dispatcher boundary has a single type to log.
///
/// # Example
///
/// ```no_run
/// use formbot::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// IO errors (audit log files, documents)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Startup configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A message could not be delivered for a reason other than a Bot API error
    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
