//! Telegram Bot API トランスポート

pub mod client;
pub mod types;
pub mod worker;

pub use client::TelegramClient;
pub use types::{ApiResponse, Chat, Message, Update, UpdateBatch};
pub use worker::{Outgoing, deliver, next_offset, poll_once, route_update, run};
