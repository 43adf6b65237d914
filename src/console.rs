//! 標準入出力のトランスポート（トークンなしでローカルに遊ぶ用）

use color_eyre::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use crate::services::GameService;

/// 入力の終わりまで1行ずつ処理する。メッセージは空行で区切って出力
pub async fn play<R, W>(service: &mut GameService, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        for msg in service.handle_text(&line) {
            output.write_all(msg.as_bytes()).await?;
            output.write_all(b"\n\n").await?;
        }
        output.flush().await?;
    }
    Ok(())
}

pub async fn run(mut service: GameService) -> Result<()> {
    info!(target: "console", "console session started");
    let mut stdout = tokio::io::stdout();
    play(&mut service, BufReader::new(tokio::io::stdin()), &mut stdout).await?;
    info!(target: "console", "console session finished");
    Ok(())
}
