//! チャット入力のコマンド解釈

use serde::{Deserialize, Serialize};

const START: [&str; 2] = ["시작", "start"];
const RENAME: [&str; 2] = ["이름", "name"];
const ATTACK: [&str; 2] = ["공격", "attack"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Rename(String),
    Attack,
}

impl Command {
    /// 認識できない入力や引数が不正な名前変更は `None`
    pub fn parse(text: &str) -> Option<Command> {
        if START.contains(&text) {
            return Some(Command::Start);
        }
        if ATTACK.contains(&text) {
            return Some(Command::Attack);
        }
        if RENAME.iter().any(|p| text.starts_with(p)) {
            let parts: Vec<&str> = text.split(' ').collect();
            return match parts.as_slice() {
                [_, name] if !name.trim().is_empty() => Some(Command::Rename((*name).to_string())),
                _ => None,
            };
        }
        None
    }
}
