use crate::errors::GameError;
use crate::player::{Player, PlayerAction as A};

/// An action that has passed validation, carrying the chip movement it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips owed to match the table bet
    Call(u32),
    /// New absolute bet level and the chips it costs the raiser
    Raise { to: u32, delta: u32 },
}

impl ValidatedAction {
    /// Chips moved from the player's stack into the pot.
    pub fn committed(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(owed) => owed,
            ValidatedAction::Raise { delta, .. } => delta,
        }
    }
}

/// Validates `action` for `player` against the table's current bet level.
///
/// Pure: nothing is mutated, so a rejected action leaves the table untouched.
/// There is no all-in shortcut; a call or raise the stack cannot fully cover
/// is rejected.
///
/// # Errors
///
/// - [`GameError::InvalidAction`] - check while a bet is owed, or a raise that
///   does not exceed `table_bet`
/// - [`GameError::InsufficientChips`] - call or raise costing more than the stack
///
/// # Examples
///
/// ```
/// use holdem_engine::player::{Player, PlayerAction};
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let p = Player::new("P1", 1000);
/// assert_eq!(validate_action(&p, 20, PlayerAction::Call), Ok(ValidatedAction::Call(20)));
/// assert_eq!(
///     validate_action(&p, 20, PlayerAction::Raise(60)),
///     Ok(ValidatedAction::Raise { to: 60, delta: 60 })
/// );
/// assert!(validate_action(&p, 20, PlayerAction::Check).is_err());
/// ```
pub fn validate_action(
    player: &Player,
    table_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let owed = table_bet.saturating_sub(player.current_bet());
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if player.current_bet() == table_bet {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::invalid(format!(
                    "cannot check while {} is owed",
                    owed
                )))
            }
        }
        A::Call => {
            if owed > player.chips() {
                Err(GameError::InsufficientChips {
                    needed: owed,
                    available: player.chips(),
                })
            } else {
                Ok(ValidatedAction::Call(owed))
            }
        }
        A::Raise(to) => {
            if to <= table_bet {
                return Err(GameError::invalid(format!(
                    "raise to {} must exceed the current bet of {}",
                    to, table_bet
                )));
            }
            let delta = to - player.current_bet();
            if delta > player.chips() {
                Err(GameError::InsufficientChips {
                    needed: delta,
                    available: player.chips(),
                })
            } else {
                Ok(ValidatedAction::Raise { to, delta })
            }
        }
    }
}
