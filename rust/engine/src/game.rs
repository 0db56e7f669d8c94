use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Player;

/// Betting stage of a hand. Showdown is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Hole cards dealt, no board
    Preflop,
    /// 3 community cards
    Flop,
    /// 4th community card
    Turn,
    /// 5th community card
    River,
    Showdown,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Preflop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => Some(Stage::Showdown),
            Stage::Showdown => None,
        }
    }

    /// Community cards revealed when entering this stage.
    pub fn cards_revealed(self) -> usize {
        match self {
            Stage::Preflop | Stage::Showdown => 0,
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
        }
    }

    /// Total community cards on the board during this stage.
    pub fn board_size(self) -> usize {
        match self {
            Stage::Preflop => 0,
            Stage::Flop => 3,
            Stage::Turn => 4,
            Stage::River | Stage::Showdown => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Showdown => "showdown",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned copy of a player's visible state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub name: String,
    pub chips: u32,
    pub hand: Vec<Card>,
    pub folded: bool,
    pub current_bet: u32,
    pub is_bot: bool,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name().to_string(),
            chips: p.chips(),
            hand: p.hand().to_vec(),
            folded: p.is_folded(),
            current_bet: p.current_bet(),
            is_bot: p.is_bot(),
        }
    }
}

/// Point-in-time snapshot of a table.
///
/// Every field is an owned copy, so later changes to the table never show up
/// in a snapshot that was already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Wider than a stack: several full `u32` stacks can be committed at once.
    pub pot: u64,
    pub current_bet: u32,
    pub stage: Stage,
    pub turn_index: usize,
    /// True only at showdown
    pub round_complete: bool,
    pub shown_cards: Vec<Card>,
    pub players: Vec<PlayerView>,
}
