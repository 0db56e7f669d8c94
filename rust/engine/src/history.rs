use serde::{Deserialize, Serialize};

use crate::game::Stage;
use crate::player::PlayerAction;

/// One applied action of the current hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index of the acting player
    pub seat: usize,
    pub player: String,
    /// Stage during which the action was taken
    pub stage: Stage,
    pub action: PlayerAction,
    /// Chips moved into the pot by this action
    pub committed: u32,
}
