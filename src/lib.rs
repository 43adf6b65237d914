// 同階層のファイルをモジュールとしてインポート
pub mod config;
pub mod console;
pub mod game; // 体力とターン解決のコア
pub mod services;
pub mod telegram;

pub use config::BotConfig;
pub use services::GameService;

use color_eyre::Result;
use color_eyre::eyre::eyre;

// Ensure .env is loaded for tests before anything else runs in the test process.
#[cfg(test)]
#[ctor::ctor]
fn load_dotenv_for_tests() {
    let _ = dotenvy::dotenv();
}

/// 使用するトランスポート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Telegram,
    Console,
}

impl Transport {
    /// 引数なしは Telegram
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("telegram") => Ok(Transport::Telegram),
            Some("console") => Ok(Transport::Console),
            Some(other) => Err(eyre!("unknown transport {other:?} (expected telegram|console)")),
        }
    }
}

/// 選択したトランスポートでゲームを実行
pub async fn run(transport: Transport, config: BotConfig) -> Result<()> {
    let service = GameService::from_seed(config.seed);
    tracing::info!(target: "game", ?transport, seeded = config.seed.is_some(), "starting");
    match transport {
        Transport::Telegram => telegram::run(&config, service).await,
        Transport::Console => console::run(service).await,
    }
}
