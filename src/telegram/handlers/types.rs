//! Handler types, dependencies, and update-to-event helpers

use std::sync::Arc;

use teloxide::types::User;

use crate::form::{Controller, UserInfo};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub controller: Arc<Controller>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(controller: Arc<Controller>) -> Self {
        Self { controller }
    }
}

/// Extract the identity fields of a Telegram user
pub fn user_info(user: &User) -> UserInfo {
    UserInfo {
        id: i64::try_from(user.id.0).unwrap_or(0),
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}
