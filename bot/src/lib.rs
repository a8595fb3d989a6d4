pub mod relay;
pub mod webhook;

/// The slice of the Bot API update schema this service looks at. Everything
/// else in the update is ignored by serde.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Update {
    pub message: Option<Message>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Welcome { chat_id: i64 },
    Relay { chat_id: i64, text: String },
    Ignore,
}

impl Update {
    /// Decides which of the two outbound paths an update takes, if any.
    pub fn classify(self) -> Action {
        match self.message {
            Some(Message {
                chat,
                text: Some(text),
            }) if text == "/start" => Action::Welcome { chat_id: chat.id },
            Some(Message {
                chat,
                text: Some(text),
            }) => Action::Relay { chat_id: chat.id, text },
            _ => Action::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(value: serde_json::Value) -> Update {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn start_command_is_welcomed() {
        let update = update(json!({
            "update_id": 10,
            "message": {
                "message_id": 1,
                "chat": { "id": 42, "type": "private" },
                "text": "/start"
            }
        }));
        assert_eq!(update.classify(), Action::Welcome { chat_id: 42 });
    }

    #[test]
    fn other_text_is_relayed() {
        let update = update(json!({
            "message": {
                "chat": { "id": -100123 },
                "text": "how are you?"
            }
        }));
        assert_eq!(
            update.classify(),
            Action::Relay {
                chat_id: -100123,
                text: "how are you?".to_owned()
            }
        );
    }

    #[test]
    fn textless_message_is_ignored() {
        let update = update(json!({
            "message": {
                "chat": { "id": 42 },
                "photo": [{ "file_id": "abc" }]
            }
        }));
        assert_eq!(update.classify(), Action::Ignore);
    }

    #[test]
    fn messageless_update_is_ignored() {
        let update = update(json!({ "update_id": 11, "edited_message": {} }));
        assert_eq!(update.classify(), Action::Ignore);
    }
}
