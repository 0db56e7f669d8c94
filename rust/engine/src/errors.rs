use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid table configuration: {0}")]
    InvalidConfiguration(String),
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Hand already complete")]
    HandAlreadyComplete,
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidAction {
            reason: reason.into(),
        }
    }
}
