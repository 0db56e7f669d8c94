use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// A player action during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "action", content = "amount")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the current table bet
    Call,
    /// Raise **to** the given absolute bet level. This is the new
    /// `current_bet` for the table, not an increment over it.
    Raise(u32),
}

impl PlayerAction {
    /// Builds an action from its wire name. `amount` is only read for
    /// `"raise"`, where it is the absolute target bet level.
    ///
    /// ```
    /// use holdem_engine::player::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_name("raise", 60), Ok(PlayerAction::Raise(60)));
    /// assert!(PlayerAction::from_name("allin", 0).is_err());
    /// ```
    pub fn from_name(name: &str, amount: u32) -> Result<Self, GameError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(PlayerAction::Fold),
            "check" => Ok(PlayerAction::Check),
            "call" => Ok(PlayerAction::Call),
            "raise" => Ok(PlayerAction::Raise(amount)),
            _ => Err(GameError::UnsupportedAction(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Raise(_) => "raise",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Raise(to) => write!(f, "raise to {}", to),
            other => f.write_str(other.name()),
        }
    }
}

/// Per-hand state of one seat. Players persist across hands; only the
/// owning table mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: u32,
    hand: Vec<Card>,
    folded: bool,
    current_bet: u32,
    is_bot: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            hand: Vec::with_capacity(2),
            folded: false,
            current_bet: 0,
            is_bot: false,
        }
    }

    pub fn bot(name: impl Into<String>, chips: u32) -> Self {
        Self {
            is_bot: true,
            ..Self::new(name, chips)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    /// Not folded and still holding chips.
    pub fn is_active(&self) -> bool {
        !self.folded && self.chips > 0
    }

    pub(crate) fn clear_for_new_hand(&mut self) {
        self.hand.clear();
        self.folded = false;
        self.current_bet = 0;
    }

    pub(crate) fn give_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn clear_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Moves `amount` from the stack into this round's bet.
    pub(crate) fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.chips,
            });
        }
        self.chips -= amount;
        self.current_bet += amount;
        Ok(())
    }
}
