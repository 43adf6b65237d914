//! Bot API クライアント（reqwest）

use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{ApiResponse, GetUpdatesRequest, SendMessageRequest, UpdateBatch};

/// HTTP タイムアウトはロングポーリング時間にこの余裕を足す
const HTTP_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    /// `api_base` は `https://api.telegram.org` のようなホスト部分
    pub fn new(api_base: &str, token: &str, poll_timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .user_agent("bot_game/0.1")
            .timeout(Duration::from_secs(poll_timeout_secs) + HTTP_TIMEOUT_MARGIN)
            .build()
            .wrap_err("building reqwest client for bot api")?;
        Ok(Self {
            http,
            base_url: method_base(api_base, token),
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .post(self.url(method))
            .json(body)
            .send()
            .await
            .wrap_err_with(|| format!("sending {method} request"))?;

        let status = resp.status();
        let parsed: ApiResponse<T> = resp
            .json()
            .await
            .wrap_err_with(|| {
                format!("decoding {method} response (status {})", status.as_u16())
            })?;
        debug!(target: "telegram", method, status = %status, ok = parsed.ok, "api_response");

        if !parsed.ok {
            return Err(eyre!(
                "{method} failed: {} {}",
                parsed.error_code.unwrap_or_else(|| status.as_u16().into()),
                parsed.description.unwrap_or_default()
            ));
        }
        parsed
            .result
            .ok_or_else(|| eyre!("{method} returned ok without result"))
    }

    /// `offset` 以降の更新をロングポーリングで取得。
    /// 1件ずつ解釈するので、壊れた更新があっても残りは受け取れる
    pub async fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> Result<UpdateBatch> {
        let req = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["message"],
        };
        let raw: Vec<serde_json::Value> = self.call("getUpdates", &req).await?;
        Ok(UpdateBatch::from_raw(raw))
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let req = SendMessageRequest { chat_id, text };
        let _: serde_json::Value = self.call("sendMessage", &req).await?;
        Ok(())
    }
}

/// `{api_base}/bot{token}`
fn method_base(api_base: &str, token: &str) -> String {
    format!("{}/bot{}", api_base.trim_end_matches('/'), token)
}
