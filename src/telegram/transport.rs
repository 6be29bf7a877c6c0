//! Telegram implementation of the outbound [`Transport`].

use async_trait::async_trait;
use std::path::Path;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, KeyboardRemove, ReplyMarkup};

use crate::core::error::AppResult;
use crate::form::transport::{Keyboard, Transport};

/// Sends messages through the Bot API.
#[derive(Clone)]
pub struct TeloxideTransport {
    bot: Bot,
}

impl TeloxideTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Converts the platform-neutral keyboard into Bot API markup.
pub fn reply_markup(keyboard: Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Buttons(buttons) => {
            let rows: Vec<Vec<InlineKeyboardButton>> = buttons
                .into_iter()
                .map(|b| vec![InlineKeyboardButton::callback(b.label, b.action.as_ref())])
                .collect();
            InlineKeyboardMarkup::new(rows).into()
        }
        Keyboard::Remove => KeyboardRemove::new().into(),
    }
}

#[async_trait]
impl Transport for TeloxideTransport {
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) -> AppResult<()> {
        let mut request = self.bot.send_message(ChatId(chat_id), text);
        if let Some(kb) = keyboard {
            request = request.reply_markup(reply_markup(kb));
        }
        request.await?;
        Ok(())
    }

    async fn send_document(&self, chat_id: i64, path: &Path) -> AppResult<()> {
        self.bot
            .send_document(ChatId(chat_id), InputFile::file(path.to_path_buf()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::event::ButtonAction;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_buttons_become_one_per_row() {
        let markup = reply_markup(Keyboard::start_menu());
        let ReplyMarkup::InlineKeyboard(inline) = markup else {
            panic!("expected inline keyboard");
        };

        assert_eq!(inline.inline_keyboard.len(), 2);
        assert_eq!(inline.inline_keyboard[0].len(), 1);
        assert_eq!(inline.inline_keyboard[0][0].text, "✅ Подать заявку");
        assert!(matches!(
            &inline.inline_keyboard[1][0].kind,
            InlineKeyboardButtonKind::CallbackData(data) if data == ButtonAction::NotInterested.as_ref()
        ));
    }

    #[test]
    fn test_remove_keyboard() {
        assert!(matches!(reply_markup(Keyboard::Remove), ReplyMarkup::KeyboardRemove(_)));
    }
}
