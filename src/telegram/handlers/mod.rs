//! Telegram bot handler tree configuration
//!
//! The handlers only translate updates into [`crate::form::Incoming`] events;
//! all flow logic lives in the conversation controller.

mod schema;
mod types;

pub use schema::schema;
pub use types::{user_info, HandlerDeps, HandlerError};
