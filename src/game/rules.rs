use std::ops::Range;

use serde::{Deserialize, Serialize};

/// 体力の初期値
pub const INITIAL_HP: i64 = 1000;
/// ダメージの下限（含む）
pub const DAMAGE_MIN: i64 = 10;
/// ダメージの上限（含まない）
pub const DAMAGE_MAX: i64 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub initial_hp: i64,
    pub damage_min: i64,
    pub damage_max: i64,
    pub default_player_name: String,
    pub enemy_name: String,
}

impl GameRules {
    /// ダメージ範囲 `[damage_min, damage_max)`
    pub fn damage_range(&self) -> Range<i64> {
        self.damage_min..self.damage_max
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            initial_hp: INITIAL_HP,
            damage_min: DAMAGE_MIN,
            damage_max: DAMAGE_MAX,
            default_player_name: "유저".to_string(),
            enemy_name: "Boss 똔코치".to_string(),
        }
    }
}
