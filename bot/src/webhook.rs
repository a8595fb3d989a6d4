use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use telegram_client::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::relay::RelayClient;
use crate::{Action, Update};

pub const WELCOME_PHOTO: &str = "https://iili.io/2kYJYnn.jpg";
pub const WELCOME_CAPTION: &str = "Welcome! Send me a message, and I'll process it for you.";
pub const CHANNEL_URL: &str = "https://t.me/PAYOUTNEXU";
pub const DEVELOPER_URL: &str = "https://t.me/PAYOUTNEXU";

#[derive(Clone)]
pub struct AppState {
    pub telegram: telegram_client::Client,
    pub relay: RelayClient,
}

pub fn app(state: AppState) -> Router {
    Router::new().route(
        "/webhook",
        post(move |body: Bytes| handle_update(body, state.clone())),
    )
}

/// Telegram retries deliveries that don't come back 2xx, so this answers
/// `200 OK` no matter which branch runs or how the downstream calls fare.
async fn handle_update(body: Bytes, state: AppState) -> StatusCode {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::debug!("Discarding unparseable update: {e}");
            return StatusCode::OK;
        }
    };

    match update.classify() {
        Action::Welcome { chat_id } => send_welcome(&state, chat_id).await,
        Action::Relay { chat_id, text } => relay_message(&state, chat_id, &text).await,
        Action::Ignore => tracing::debug!("Update carries no text, ignoring"),
    }

    StatusCode::OK
}

async fn send_welcome(state: &AppState, chat_id: i64) {
    tracing::info!("Sending welcome message to chat {chat_id}");

    let markup = InlineKeyboardMarkup::rows(vec![
        InlineKeyboardButton::url("Channel", CHANNEL_URL),
        InlineKeyboardButton::url("Developer", DEVELOPER_URL),
    ]);

    if let Err(e) = state
        .telegram
        .send_photo(chat_id, WELCOME_PHOTO, WELCOME_CAPTION, &markup)
        .await
    {
        tracing::error!("Failed to send sendPhoto to Telegram: {e:#}");
    }
}

async fn relay_message(state: &AppState, chat_id: i64, text: &str) {
    tracing::info!("Relaying message from chat {chat_id}");

    let reply = state.relay.reply_text(text).await;

    if let Err(e) = state.telegram.send_message(chat_id, &reply).await {
        tracing::error!("Failed to send sendMessage to Telegram: {e:#}");
    }
}
