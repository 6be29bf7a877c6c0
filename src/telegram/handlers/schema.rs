//! Dispatcher schema and handler chain builders

use std::str::FromStr;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{user_info, HandlerDeps, HandlerError};
use crate::core::sanitize::sanitize_or;
use crate::form::{Action, ButtonAction, Incoming};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and in integration tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (the conversation controller)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_text = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Command handler (/start, /id)
        .branch(command_handler(deps_commands))
        // Any other text feeds the application form
        .branch(text_handler(deps_text))
        // Inline keyboard buttons
        .branch(callback_handler(deps_callback))
}

/// Handler for bot commands
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                let Some(from) = msg.from.as_ref() else {
                    return Ok(());
                };
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                let action = match cmd {
                    Command::Start => Action::Start,
                    Command::Id => Action::WhoAmI,
                };
                deps.controller
                    .dispatch(&Incoming::new(user_info(from), msg.chat.id.0, action))
                    .await;
                Ok(())
            }
        },
    ))
}

/// Handler for plain text messages
fn text_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some() && msg.from.is_some())
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                if let (Some(from), Some(text)) = (msg.from.as_ref(), msg.text()) {
                    let event = Incoming::new(user_info(from), msg.chat.id.0, Action::Text(text.to_string()));
                    deps.controller.dispatch(&event).await;
                }
                Ok(())
            }
        })
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            let user = user_info(&q.from);
            let button = q.data.as_deref().and_then(|data| ButtonAction::from_str(data).ok());

            let toast = match button {
                Some(button) => {
                    let chat_id = q.message.as_ref().map(|m| m.chat().id.0).unwrap_or(user.id);
                    deps.controller
                        .dispatch(&Incoming::new(user, chat_id, button.into()))
                        .await
                }
                None => {
                    log::warn!(
                        "Unknown callback data {} from {}",
                        sanitize_or(q.data.as_deref(), "<none>"),
                        user.id
                    );
                    None
                }
            };

            // Always answer so the client stops showing the loading spinner
            let mut answer = bot.answer_callback_query(q.id.clone());
            if let Some(text) = toast {
                answer = answer.text(text);
            }
            if let Err(e) = answer.await {
                log::warn!("Failed to answer callback query: {}", e);
            }
            Ok(())
        }
    })
}
