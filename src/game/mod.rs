pub mod command;
pub mod dice;
pub mod messages;
pub mod models;
pub mod rules;
pub mod state;

pub use command::Command;
pub use dice::{DamageRoll, FixedRolls, SeededRoll, ThreadRoll};
pub use models::{Attack, Combatant, Side, TurnOutcome};
pub use rules::GameRules;
pub use state::{GameState, TurnReport};
