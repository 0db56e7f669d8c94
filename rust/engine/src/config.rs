use serde::{Deserialize, Serialize};

use crate::errors::GameError;

pub const DEFAULT_SMALL_BLIND: u32 = 10;
pub const DEFAULT_BIG_BLIND: u32 = 20;

/// 2 hole cards per seat plus 3 burns and 5 board cards must fit in 52.
pub const MAX_PLAYERS: usize = 22;
pub const MIN_PLAYERS: usize = 2;

/// Blind structure for a table. Missing fields fall back to 10/20.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: DEFAULT_SMALL_BLIND,
            big_blind: DEFAULT_BIG_BLIND,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfiguration(
                "small blind must be positive".into(),
            ));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidConfiguration(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        Ok(())
    }
}
