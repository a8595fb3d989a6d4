use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Debug;

#[derive(Serialize, Debug, Clone)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub url: String,
}

impl InlineKeyboardButton {
    pub fn url(text: &str, url: &str) -> Self {
        Self {
            text: text.to_owned(),
            url: url.to_owned(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// One button per row, top to bottom.
    pub fn rows(buttons: Vec<InlineKeyboardButton>) -> Self {
        Self {
            inline_keyboard: buttons.into_iter().map(|button| vec![button]).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

#[derive(Serialize, Debug)]
struct SendPhoto<'a> {
    chat_id: i64,
    photo: &'a str,
    caption: &'a str,
    reply_markup: &'a InlineKeyboardMarkup,
}

/// Bot API client. Payloads go as JSON to `{base}/bot{token}/{method}`.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // base_url embeds the bot token, keep it out of logs
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(token: &str) -> Self {
        Self::with_base_url("https://api.telegram.org", token)
    }

    /// `base_url` without the `/bot{token}` part, e.g. `https://api.telegram.org`.
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/bot{}", base_url.trim_end_matches('/'), token),
        }
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.call("sendMessage", &SendMessage { chat_id, text }).await
    }

    pub async fn send_photo(
        &self,
        chat_id: i64,
        photo: &str,
        caption: &str,
        reply_markup: &InlineKeyboardMarkup,
    ) -> Result<()> {
        self.call(
            "sendPhoto",
            &SendPhoto {
                chat_id,
                photo,
                caption,
                reply_markup,
            },
        )
        .await
    }

    async fn call<T: Serialize>(&self, method: &str, payload: &T) -> Result<()> {
        let url = format!("{}/{}", self.base_url, method);
        self.http
            .post(&url)
            .json(payload)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .with_context(|| format!("{method} request failed"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_message_payload_shape() {
        let payload = serde_json::to_value(SendMessage {
            chat_id: 42,
            text: "hello",
        })
        .unwrap();
        assert_eq!(payload, json!({ "chat_id": 42, "text": "hello" }));
    }

    #[test]
    fn send_photo_payload_shape() {
        let markup = InlineKeyboardMarkup::rows(vec![
            InlineKeyboardButton::url("Channel", "https://t.me/a"),
            InlineKeyboardButton::url("Developer", "https://t.me/b"),
        ]);
        let payload = serde_json::to_value(SendPhoto {
            chat_id: 42,
            photo: "https://example.org/p.jpg",
            caption: "hi",
            reply_markup: &markup,
        })
        .unwrap();

        assert_eq!(
            payload,
            json!({
                "chat_id": 42,
                "photo": "https://example.org/p.jpg",
                "caption": "hi",
                "reply_markup": {
                    "inline_keyboard": [
                        [{ "text": "Channel", "url": "https://t.me/a" }],
                        [{ "text": "Developer", "url": "https://t.me/b" }]
                    ]
                }
            })
        );
    }

    #[test]
    fn base_url_normalization() {
        let client = Client::with_base_url("http://127.0.0.1:9/", "TOKEN");
        assert_eq!(client.base_url, "http://127.0.0.1:9/botTOKEN");
    }
}
