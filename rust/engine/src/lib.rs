//! # holdem-engine: single-table Texas Hold'em betting engine
//!
//! Owns the deck, the seats' per-hand state, the pot and the betting level,
//! and walks a hand through preflop, flop, turn, river and showdown. Hand
//! ranking and chip distribution at showdown are left to the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck construction
//! - [`deck`] - Shuffled 52-card deck over an injectable RNG
//! - [`player`] - Seat state and player actions
//! - [`rules`] - Action validation against the current bet
//! - [`table`] - The betting state machine
//! - [`game`] - Stages and immutable [`game::GameState`] snapshots
//! - [`config`] - Blind structure
//! - [`history`] - Per-hand action records
//! - [`logging`] - tracing subscriber setup for embedding binaries
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::game::Stage;
//! use holdem_engine::player::{Player, PlayerAction};
//! use holdem_engine::table::Table;
//!
//! let players = vec![
//!     Player::new("P1", 1000),
//!     Player::new("P2", 1000),
//!     Player::new("P3", 1000),
//! ];
//! let mut table = Table::with_seed(players, 42).expect("valid table");
//!
//! let state = table.state();
//! assert_eq!(state.pot, 30);
//! assert_eq!(state.turn_index, 2);
//!
//! // Raise is raise-TO: the table bet becomes 60.
//! let state = table.handle_player_action(PlayerAction::Raise(60)).unwrap();
//! assert_eq!(state.current_bet, 60);
//! assert_eq!(state.stage, Stage::Preflop);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(7);
//! let mut b = Deck::new_with_seed(7);
//! assert_eq!(a.draw().unwrap(), b.draw().unwrap());
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game;
pub mod history;
pub mod logging;
pub mod player;
pub mod rules;
pub mod table;
