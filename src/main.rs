use bot_game::{BotConfig, Transport};
use color_eyre::Result;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load .env (optional). BOT_TOKEN などをローカルの .env から読めるようにする
    let _ = dotenvy::dotenv();

    let arg = std::env::args().nth(1);
    let transport = Transport::from_arg(arg.as_deref())?;

    // ログ: ファイルは常に出力。コンソールモードは標準出力をゲームが使うので stderr には出さない
    let file_appender = rolling::daily("logs", "bot.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // ファイルにANSIカラー不要
        .with_target(true);

    let stderr_layer = (transport == Transport::Telegram).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    let config = BotConfig::from_env()?;
    bot_game::run(transport, config).await
}
