//! Bot API mock server and update fixtures

use serde_json::{json, Value};
use teloxide::prelude::*;
use teloxide::types::{Me, Update};
use wiremock::matchers::{method, path_regex, PathRegexMatcher};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BOT_ID: u64 = 987654321;

/// Bot pointed at a wiremock server
pub fn mock_bot(server: &MockServer) -> Bot {
    Bot::new("test_token_12345:ABCDEF").set_api_url(server.uri().parse().unwrap())
}

fn user_json(id: i64, first_name: &str, username: Option<&str>) -> Value {
    let mut user = json!({
        "id": id,
        "is_bot": false,
        "first_name": first_name,
    });
    if let Some(username) = username {
        user["username"] = json!(username);
    }
    user
}

/// Message in a private chat with `user_id`
pub fn message_json(message_id: i32, user_id: i64, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "from": user_json(user_id, "Alice", Some("alice")),
        "chat": {
            "id": user_id,
            "first_name": "Alice",
            "username": "alice",
            "type": "private"
        },
        "date": 1735992000,
        "text": text
    })
}

/// Message sent by the bot, used as a `result` payload
pub fn bot_message_json(chat_id: i64, text: &str) -> Value {
    json!({
        "message_id": 42,
        "from": {
            "id": BOT_ID,
            "is_bot": true,
            "first_name": "FormBot",
            "username": "form_bot"
        },
        "chat": {
            "id": chat_id,
            "first_name": "Alice",
            "type": "private"
        },
        "date": 1735992000,
        "text": text
    })
}

/// Deserializes through a JSON string, the way updates arrive from the Bot API.
///
/// `Update` does not deserialize from an in-memory `Value`: it ends up as `UpdateKind::Error`.
fn parse_update(value: Value) -> Update {
    serde_json::from_str(&value.to_string()).expect("Failed to deserialize update")
}

pub fn text_update(update_id: i32, user_id: i64, text: &str) -> Update {
    parse_update(json!({
        "update_id": update_id,
        "message": message_json(update_id, user_id, text)
    }))
}

pub fn callback_update(update_id: i32, user_id: i64, data: &str) -> Update {
    parse_update(json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("cb{}", update_id),
            "from": user_json(user_id, "Alice", Some("alice")),
            "chat_instance": "instance",
            "data": data,
            "message": message_json(update_id, user_id, "Выберите:")
        }
    }))
}

pub fn me() -> Me {
    let me = json!({
        "id": BOT_ID,
        "is_bot": true,
        "first_name": "FormBot",
        "username": "form_bot",
        "can_join_groups": false,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "can_connect_to_business": false,
        "has_main_web_app": false
    });
    serde_json::from_str(&me.to_string()).expect("Failed to deserialize bot identity")
}

/// Path matcher for a Bot API method.
///
/// teloxide capitalises method names (`/SendMessage`), so matching ignores case.
pub fn api_method(name: &str) -> PathRegexMatcher {
    path_regex(format!("(?i)/bot[^/]+/{}$", name))
}

/// Mock a sendMessage API call answering with `text` in `chat_id`
pub async fn mock_send_message(server: &MockServer, chat_id: i64, text: &str) {
    Mock::given(method("POST"))
        .and(api_method("sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": bot_message_json(chat_id, text)
        })))
        .mount(server)
        .await;
}

/// Mock an answerCallbackQuery API call
pub async fn mock_answer_callback(server: &MockServer) {
    Mock::given(method("POST"))
        .and(api_method("answerCallbackQuery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": true
        })))
        .mount(server)
        .await;
}

/// Bodies of every request made to the Bot API method `name`, parsed as JSON
pub async fn request_bodies(server: &MockServer, name: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| {
            r.url
                .path()
                .rsplit('/')
                .next()
                .is_some_and(|last| last.eq_ignore_ascii_case(name))
        })
        .filter_map(|r| serde_json::from_slice(&r.body).ok())
        .collect()
}
