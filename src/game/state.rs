use tracing::{debug, info};

use super::dice::DamageRoll;
use super::messages;
use super::models::{Attack, Combatant, Side, TurnOutcome};
use super::rules::GameRules;

/// `resolve_turn` の結果。送信順に並んだメッセージを持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    /// このターンに実際に行われた攻撃（0〜2件、攻撃順）
    pub attacks: Vec<Attack>,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    rules: GameRules,
    player: Combatant,
    enemy: Combatant,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rules(GameRules::default())
    }

    pub fn with_rules(rules: GameRules) -> Self {
        Self {
            player: Combatant::new(rules.default_player_name.clone(), rules.initial_hp),
            enemy: Combatant::new(rules.enemy_name.clone(), rules.initial_hp),
            rules,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// 体力を直接設定する（シナリオの準備用）
    pub fn set_hp(&mut self, side: Side, hp: i64) {
        match side {
            Side::Player => self.player.hp = hp,
            Side::Enemy => self.enemy.hp = hp,
        }
    }

    /// 両者の体力を初期値に戻す。名前はそのまま
    pub fn reset(&mut self) {
        self.player.hp = self.rules.initial_hp;
        self.enemy.hp = self.rules.initial_hp;
        info!(target: "game", player = %self.player.name, "game reset");
    }

    /// 空白のみの名前は無視する。変更したら true
    pub fn set_player_name(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        info!(target: "game", from = %self.player.name, to = %name, "player renamed");
        self.player.name = name.to_string();
        true
    }

    pub fn roll_damage(&self, roller: &mut dyn DamageRoll) -> i64 {
        roller.roll(self.rules.damage_range())
    }

    /// `attacker` の攻撃を相手に適用し、ダメージ行を返す。
    /// 体力は0で止めない
    pub fn apply_attack(
        &mut self,
        attacker: Side,
        roller: &mut dyn DamageRoll,
    ) -> (Attack, String) {
        let damage = self.roll_damage(roller);
        let label = match attacker {
            Side::Player => messages::player_attack_label(&self.player),
            Side::Enemy => messages::enemy_attack_label(&self.enemy),
        };
        match attacker.opponent() {
            Side::Player => self.player.hp -= damage,
            Side::Enemy => self.enemy.hp -= damage,
        }
        debug!(
            target: "game",
            ?attacker,
            damage,
            player_hp = self.player.hp,
            enemy_hp = self.enemy.hp,
            "attack applied"
        );
        let line = messages::damage(&label, damage, &self.player, &self.enemy);
        (Attack { attacker, damage }, line)
    }

    pub fn is_ended(&self) -> bool {
        self.player.is_down() || self.enemy.is_down()
    }

    pub fn render_status_line(&self) -> String {
        messages::status(&self.player, &self.enemy)
    }

    /// 「攻撃」コマンド1回分を解決する。
    ///
    /// プレイヤーが必ず先に攻撃し、敵が倒れた場合は反撃しない。
    /// 終了後に呼ばれた場合は通知だけ返して体力は変えない。
    pub fn resolve_turn(&mut self, roller: &mut dyn DamageRoll) -> TurnReport {
        if self.is_ended() {
            return TurnReport {
                outcome: TurnOutcome::AlreadyEnded,
                attacks: Vec::new(),
                messages: vec![messages::ALREADY_ENDED.to_string()],
            };
        }

        let mut attacks = Vec::with_capacity(2);
        let mut out = Vec::with_capacity(3);
        let (attack, line) = self.apply_attack(Side::Player, roller);
        attacks.push(attack);
        out.push(line);

        if !self.is_ended() {
            let (attack, line) = self.apply_attack(Side::Enemy, roller);
            attacks.push(attack);
            out.push(line);
        }

        let outcome = if self.player.is_down() {
            out.push(messages::lose(&self.player, &self.enemy));
            TurnOutcome::PlayerLost
        } else if self.enemy.is_down() {
            out.push(messages::win(&self.player, &self.enemy));
            TurnOutcome::PlayerWon
        } else {
            TurnOutcome::Continue
        };

        if outcome != TurnOutcome::Continue {
            info!(
                target: "game",
                ?outcome,
                player_hp = self.player.hp,
                enemy_hp = self.enemy.hp,
                "game ended"
            );
        }

        TurnReport {
            outcome,
            attacks,
            messages: out,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
