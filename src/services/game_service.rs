//! GameService
//!
//! ゲームのビジネスロジック層。
//! トランスポート（Telegram/コンソール）から独立した形で
//! 「テキストを受け取り、送信すべきメッセージを返す」機能を提供。

use crate::game::{Command, DamageRoll, GameRules, GameState, SeededRoll, ThreadRoll, messages};
use tracing::debug;

/// ゲームサービス。1つのゲーム状態と乱数源を所有する
pub struct GameService {
    state: GameState,
    roller: Box<dyn DamageRoll>,
}

impl GameService {
    /// スレッドローカル乱数で新しいサービスを作成
    pub fn new() -> Self {
        Self::with_roller(GameRules::default(), Box::new(ThreadRoll))
    }

    /// シードがあれば再現可能な乱数源を使う
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_roller(GameRules::default(), Box::new(SeededRoll::new(seed))),
            None => Self::new(),
        }
    }

    pub fn with_roller(rules: GameRules, roller: Box<dyn DamageRoll>) -> Self {
        Self {
            state: GameState::with_rules(rules),
            roller,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// テスト用のシナリオ準備などに使う
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// 受信テキストを処理して、送信するメッセージを順番に返す。
    /// 認識できない入力は空の Vec
    pub fn handle_text(&mut self, text: &str) -> Vec<String> {
        match Command::parse(text) {
            Some(cmd) => {
                debug!(target: "game", ?cmd, "command received");
                self.execute(cmd)
            }
            None => Vec::new(),
        }
    }

    /// コマンドを実行
    pub fn execute(&mut self, cmd: Command) -> Vec<String> {
        match cmd {
            Command::Start => {
                self.state.reset();
                vec![messages::start_banner(), self.state.render_status_line()]
            }
            Command::Rename(name) => {
                if self.state.set_player_name(&name) {
                    vec![self.state.render_status_line()]
                } else {
                    Vec::new()
                }
            }
            Command::Attack => self.state.resolve_turn(self.roller.as_mut()).messages,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
