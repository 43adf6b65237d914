use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    /// 0以下になったら戦闘不能。とどめの一撃で負の値になることもある
    pub hp: i64,
}

impl Combatant {
    pub fn new(name: impl Into<String>, hp: i64) -> Self {
        Self { name: name.into(), hp }
    }

    pub fn is_down(&self) -> bool {
        self.hp <= 0
    }
}

/// 攻撃する側
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// 1ターン解決後の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// 両者生存、戦闘継続
    Continue,
    PlayerWon,
    PlayerLost,
    /// すでに終了済みだったので何もしていない
    AlreadyEnded,
}

/// 1回の攻撃の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    pub attacker: Side,
    pub damage: i64,
}
