//! Bot API のうち使用する部分だけのモデル

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// すべての Bot API 応答の外側
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

impl Update {
    /// テキスト付きメッセージなら (chat_id, text)
    pub fn text(&self) -> Option<(i64, &str)> {
        let msg = self.message.as_ref()?;
        msg.text.as_deref().map(|t| (msg.chat.id, t))
    }
}

/// getUpdates 1回分。解釈できない更新は捨てるが、その ID は
/// `last_update_id` に反映して次回の offset で読み飛ばす
#[derive(Debug, Clone, Default)]
pub struct UpdateBatch {
    pub updates: Vec<Update>,
    pub last_update_id: Option<i64>,
}

impl UpdateBatch {
    pub fn from_raw(raw: Vec<Value>) -> Self {
        let mut batch = Self::default();
        for value in raw {
            let id = value.get("update_id").and_then(Value::as_i64);
            batch.last_update_id = batch.last_update_id.max(id);
            match serde_json::from_value::<Update>(value) {
                Ok(update) => batch.updates.push(update),
                Err(e) => {
                    warn!(
                        target: "telegram",
                        update_id = ?id,
                        error = %e,
                        "skipping undecodable update"
                    );
                }
            }
        }
        batch
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}
