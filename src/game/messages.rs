//! 送信メッセージの文面

use super::models::Combatant;

pub const EMOJI_WIN: &str = "\u{1F606}";
pub const EMOJI_LOSE: &str = "\u{1F61E}";
pub const EMOJI_USER: &str = "\u{1F9D1}";
pub const EMOJI_ENEMY: &str = "\u{1F407}";
pub const EMOJI_DAMAGE: &str = "\u{1F3F9}";
pub const EMOJI_GAMEPAD: &str = "\u{1F3AE}";

pub const ALREADY_ENDED: &str = "이미 게임이 종료 되었습니다. 다시 시작해 주세요";

pub fn start_banner() -> String {
    format!("{EMOJI_GAMEPAD} 게임시작 {EMOJI_GAMEPAD}")
}

/// `[player] hp` / `[enemy] hp` の2行
pub fn status(player: &Combatant, enemy: &Combatant) -> String {
    format!("[{}] {}\n[{}] {}", player.name, player.hp, enemy.name, enemy.hp)
}

pub fn player_attack_label(player: &Combatant) -> String {
    format!("{EMOJI_USER} {} 공격", player.name)
}

pub fn enemy_attack_label(enemy: &Combatant) -> String {
    format!("{EMOJI_ENEMY} {} 공격", enemy.name)
}

pub fn damage(label: &str, damage: i64, player: &Combatant, enemy: &Combatant) -> String {
    format!("{EMOJI_DAMAGE} {label}={damage}\n{}", status(player, enemy))
}

pub fn win(player: &Combatant, enemy: &Combatant) -> String {
    format!("{}\nYou Win. {EMOJI_WIN}", status(player, enemy))
}

pub fn lose(player: &Combatant, enemy: &Combatant) -> String {
    format!("{}\nYou Lose. {EMOJI_LOSE}", status(player, enemy))
}
