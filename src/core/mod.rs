//! Core utilities: configuration, errors, logging and log hygiene

pub mod audit;
pub mod best_effort;
pub mod config;
pub mod error;
pub mod logging;
pub mod sanitize;

// Re-exports for convenience
pub use audit::{AuditLogs, AuditSink};
pub use config::{BotConfig, ConfigError};
pub use error::{AppError, AppResult};
pub use logging::init_logger;
pub use sanitize::sanitize;
