//! Formbot - Telegram bot that collects focus-group applications
//!
//! The bot greets the user, sends the participation terms, collects free-text
//! application data over several messages and forwards the result to a fixed
//! administrator chat.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, audit logs and log sanitizing
//! - `form`: the application flow (controller, session store, texts)
//! - `telegram`: teloxide wiring (bot creation, dispatcher schema, transport)

pub mod cli;
pub mod core;
pub mod form;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use form::{Controller, FormSettings};
pub use telegram::{schema, HandlerDeps};
