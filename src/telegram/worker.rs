//! ロングポーリングのワーカー
//!
//! 受信テキストを `GameService` に渡し、返ってきたメッセージを
//! 1件ずつ個別に送信する。送信失敗はログに残して捨てる。

use std::time::Duration;

use color_eyre::Result;
use tracing::{error, info, instrument, warn};

use crate::config::BotConfig;
use crate::services::GameService;

use super::client::TelegramClient;
use super::types::{Update, UpdateBatch};

/// 送信待ちのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub chat_id: i64,
    pub messages: Vec<String>,
}

/// 1件の更新を処理する。返信先は `reply_to` が優先、なければ受信チャット
pub fn route_update(
    service: &mut GameService,
    update: &Update,
    reply_to: Option<i64>,
) -> Option<Outgoing> {
    let (chat_id, text) = update.text()?;
    let messages = service.handle_text(text);
    if messages.is_empty() {
        return None;
    }
    Some(Outgoing {
        chat_id: reply_to.unwrap_or(chat_id),
        messages,
    })
}

/// 次回 getUpdates の offset（受信済みの最大 update_id + 1）。
/// 解釈できずに捨てた更新の ID も含めて進める
pub fn next_offset(current: Option<i64>, batch: &UpdateBatch) -> Option<i64> {
    batch.last_update_id.map(|id| id + 1).max(current)
}

/// getUpdates を1回行い、届いた更新をすべて処理する。
/// 失敗時は `offset` を動かさずにエラーを返す。戻り値は送信できた件数
pub async fn poll_once(
    client: &TelegramClient,
    service: &mut GameService,
    offset: &mut Option<i64>,
    config: &BotConfig,
) -> Result<usize> {
    let batch = client.get_updates(*offset, config.poll_timeout_secs).await?;
    *offset = next_offset(*offset, &batch);

    let mut sent = 0;
    for update in &batch.updates {
        if let Some(out) = route_update(service, update, config.chat_id) {
            sent += deliver(client, &out).await;
        }
    }
    Ok(sent)
}

/// ポーリングループを開始する。戻らない
pub async fn run(config: &BotConfig, mut service: GameService) -> Result<()> {
    let token = config.require_token()?;
    let client = TelegramClient::new(&config.api_base, token, config.poll_timeout_secs)?;
    let retry = Duration::from_millis(config.retry_delay_ms);
    let mut offset = None;

    info!(target: "telegram", bot = %config.bot_name, chat_id = ?config.chat_id, "polling started");

    loop {
        if let Err(e) = poll_once(&client, &mut service, &mut offset, config).await {
            warn!(target: "telegram", error = %e, "get_updates failed, retrying");
            tokio::time::sleep(retry).await;
        }
    }
}

/// メッセージを順番に送る。失敗したものはログに残して捨て、残りは送り続ける。
/// 戻り値は送信できた件数
#[instrument(
    name = "deliver",
    skip(client, out),
    fields(chat_id = out.chat_id, count = out.messages.len())
)]
pub async fn deliver(client: &TelegramClient, out: &Outgoing) -> usize {
    let mut sent = 0;
    for text in &out.messages {
        match client.send_message(out.chat_id, text).await {
            Ok(()) => sent += 1,
            Err(e) => {
                error!(target: "telegram", error = %e, "send_message failed, dropping message");
            }
        }
    }
    sent
}
