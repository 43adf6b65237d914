//! ボット設定
//!
//! 既定値を `Default` で持ち、環境変数（`.env` 可）で上書きする。

use std::str::FromStr;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use tracing::debug;

pub const ENV_TOKEN: &str = "BOT_TOKEN";
pub const ENV_NAME: &str = "BOT_NAME";
pub const ENV_CHAT_ID: &str = "BOT_CHAT_ID";
pub const ENV_API_BASE: &str = "BOT_API_BASE";
pub const ENV_POLL_TIMEOUT: &str = "BOT_POLL_TIMEOUT_SECS";
pub const ENV_RETRY_DELAY: &str = "BOT_RETRY_DELAY_MS";
pub const ENV_SEED: &str = "GAME_SEED";

/// ボット設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Bot API トークン（Telegram 接続時のみ必須）
    pub token: Option<String>,
    pub bot_name: String,
    /// 返信先チャット。未設定なら受信したチャットへ返す
    pub chat_id: Option<i64>,
    pub api_base: String,
    /// getUpdates のロングポーリング秒数
    pub poll_timeout_secs: u64,
    /// ポーリング失敗後の待機時間（ミリ秒）
    pub retry_delay_ms: u64,
    /// ダメージ乱数のシード
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            bot_name: "bot_game".to_string(),
            chat_id: None,
            api_base: "https://api.telegram.org".to_string(),
            poll_timeout_secs: 30,
            retry_delay_ms: 3000,
            seed: None,
        }
    }
}

impl BotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// プロセス環境変数から読み込む
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// キー→値の関数から読み込む。空文字は未設定扱い
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut c = Self::default();

        c.token = get(ENV_TOKEN);
        if let Some(name) = get(ENV_NAME) {
            c.bot_name = name;
        }
        if let Some(base) = get(ENV_API_BASE) {
            c.api_base = base.trim_end_matches('/').to_string();
        }
        c.chat_id = parse_opt(ENV_CHAT_ID, get(ENV_CHAT_ID))?;
        if let Some(v) = parse_opt(ENV_POLL_TIMEOUT, get(ENV_POLL_TIMEOUT))? {
            c.poll_timeout_secs = v;
        }
        if let Some(v) = parse_opt(ENV_RETRY_DELAY, get(ENV_RETRY_DELAY))? {
            c.retry_delay_ms = v;
        }
        c.seed = parse_opt(ENV_SEED, get(ENV_SEED))?;

        debug!(
            target: "config",
            bot_name = %c.bot_name,
            chat_id = ?c.chat_id,
            api_base = %c.api_base,
            has_token = c.token.is_some(),
            "config loaded"
        );
        Ok(c)
    }

    /// トークンを要求する（Telegram 接続前に呼ぶ）
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| eyre!("{ENV_TOKEN} not set"))
    }
}

fn parse_opt<T>(key: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(|v| {
        v.trim()
            .parse::<T>()
            .wrap_err_with(|| format!("invalid value for {key}: {v:?}"))
    })
    .transpose()
}
