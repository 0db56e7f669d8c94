use std::collections::HashSet;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::config::{TableConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameState, PlayerView, Stage};
use crate::history::ActionRecord;
use crate::player::{Player, PlayerAction};
use crate::rules::{validate_action, ValidatedAction};

/// Betting state machine for a single Hold'em table.
///
/// Owns the deck and the ordered seats (turn order is seat order and never
/// changes). Every public operation either applies fully and returns a fresh
/// [`GameState`], or fails with a [`GameError`] and leaves the table exactly
/// as it was.
///
/// Not synchronized: callers sharing a table between clients must hold one
/// exclusive owner or lock per table.
///
/// # Examples
///
/// ```
/// use holdem_engine::player::{Player, PlayerAction};
/// use holdem_engine::table::Table;
///
/// let players = vec![Player::new("P1", 1000), Player::new("P2", 1000)];
/// let mut table = Table::with_seed(players, 7).expect("two players");
///
/// // Seat 0 posted the small blind and acts first heads-up.
/// let state = table.handle_player_action(PlayerAction::Call).unwrap();
/// assert_eq!(state.pot, 40);
/// assert_eq!(state.shown_cards.len(), 3);
/// ```
#[derive(Debug)]
pub struct Table<R = ChaCha20Rng> {
    players: Vec<Player>,
    deck: Deck<R>,
    config: TableConfig,
    pot: u64,
    current_bet: u32,
    stage: Stage,
    turn_index: usize,
    shown_cards: Vec<Card>,
    history: Vec<ActionRecord>,
}

impl Table<ChaCha20Rng> {
    /// Seats `players` with default 10/20 blinds, shuffling from OS entropy.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        Self::with_rng(players, ChaCha20Rng::from_rng(&mut rand::rng()))
    }

    pub fn with_seed(players: Vec<Player>, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(players, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Table<R> {
    pub fn with_rng(players: Vec<Player>, rng: R) -> Result<Self, GameError> {
        Self::with_config(players, TableConfig::default(), rng)
    }

    /// Validates seating and blinds, then deals the first hand.
    pub fn with_config(
        players: Vec<Player>,
        config: TableConfig,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        validate_seating(&players)?;
        let mut table = Self {
            players,
            deck: Deck::with_rng(rng),
            config,
            pot: 0,
            current_bet: 0,
            stage: Stage::Preflop,
            turn_index: 0,
            shown_cards: Vec::with_capacity(5),
            history: Vec::new(),
        };
        table.reset()?;
        Ok(table)
    }

    /// Starts a new hand: reshuffles, deals two cards per seat in seat order,
    /// posts the blinds from seats 0 and 1, and hands the action to the seat
    /// after the big blind. Chip stacks carry over from the previous hand.
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let (sb, bb) = (self.config.small_blind, self.config.big_blind);
        let (Some(sb_player), Some(bb_player)) = (self.players.first(), self.players.get(1))
        else {
            return Err(GameError::InvalidConfiguration(format!(
                "at least {} players are required to post blinds",
                MIN_PLAYERS
            )));
        };
        for (player, blind) in [(sb_player, sb), (bb_player, bb)] {
            if player.chips() < blind {
                warn!(player = player.name(), blind, chips = player.chips(), "cannot post blind");
                return Err(GameError::InsufficientChips {
                    needed: blind,
                    available: player.chips(),
                });
            }
        }

        self.deck.reset();
        self.deck.shuffle();
        self.pot = 0;
        self.current_bet = 0;
        self.stage = Stage::Preflop;
        self.shown_cards.clear();
        self.history.clear();
        for p in self.players.iter_mut() {
            p.clear_for_new_hand();
        }
        for p in self.players.iter_mut() {
            for _ in 0..2 {
                p.give_card(self.deck.draw()?);
            }
            debug!(player = p.name(), hand = %format_cards(p.hand()), "dealt hole cards");
        }

        self.post_blind(0, sb)?;
        self.post_blind(1, bb)?;
        self.current_bet = bb;

        let n = self.players.len();
        match self.first_active_from(2 % n) {
            Some(seat) => self.turn_index = seat,
            None => {
                self.turn_index = 2 % n;
                self.run_out_board()?;
            }
        }
        info!(
            players = n,
            pot = self.pot,
            turn_index = self.turn_index,
            "new hand started"
        );
        Ok(self.state())
    }

    /// Applies `action` for whoever holds the turn.
    ///
    /// `PlayerAction::Raise(to)` sets the absolute bet level to `to`; the
    /// raiser pays `to` minus what they already have in this round. When the
    /// betting round is over afterwards the stage advances automatically.
    pub fn handle_player_action(&mut self, action: PlayerAction) -> Result<GameState, GameError> {
        if self.stage == Stage::Showdown {
            warn!(%action, "action after showdown");
            return Err(GameError::HandAlreadyComplete);
        }
        let seat = self.turn_index;
        let validated = match validate_action(&self.players[seat], self.current_bet, action) {
            Ok(v) => v,
            Err(e) => {
                warn!(seat, %action, error = %e, "action rejected");
                return Err(e);
            }
        };
        self.apply(seat, action, validated)?;

        if let Some(next) = self.next_active_after(seat) {
            self.turn_index = next;
        }
        if self.is_betting_round_over() {
            self.advance()?;
        }
        Ok(self.state())
    }

    /// Like [`Table::handle_player_action`], but fails with
    /// [`GameError::NotPlayersTurn`] unless `seat` holds the turn.
    pub fn handle_action_for(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<GameState, GameError> {
        if seat != self.turn_index {
            warn!(seat, expected = self.turn_index, %action, "out of turn");
            return Err(GameError::NotPlayersTurn {
                expected: self.turn_index,
                actual: seat,
            });
        }
        self.handle_player_action(action)
    }

    /// String surface: `"fold" | "check" | "call" | "raise"`, with `amount`
    /// read as the raise-to level.
    pub fn handle_named_action(&mut self, name: &str, amount: u32) -> Result<GameState, GameError> {
        let action = PlayerAction::from_name(name, amount).inspect_err(|e| {
            warn!(name, error = %e, "unrecognized action");
        })?;
        self.handle_player_action(action)
    }

    /// True when at most one active seat remains or every active seat has
    /// matched the table bet.
    pub fn is_betting_round_over(&self) -> bool {
        let active: Vec<&Player> = self.players.iter().filter(|p| p.is_active()).collect();
        active.len() <= 1 || active.iter().all(|p| p.current_bet() == self.current_bet)
    }

    pub fn advance_stage(&mut self) -> Result<GameState, GameError> {
        if self.stage == Stage::Showdown {
            return Err(GameError::HandAlreadyComplete);
        }
        self.advance()?;
        Ok(self.state())
    }

    /// Placeholder bot: check when nothing is owed, call otherwise. Does
    /// nothing for a human seat or once the hand reached showdown.
    pub fn make_bot_move(&mut self) -> Result<GameState, GameError> {
        if self.stage == Stage::Showdown {
            return Ok(self.state());
        }
        let player = &self.players[self.turn_index];
        if !player.is_bot() {
            return Ok(self.state());
        }
        let action = if player.current_bet() == self.current_bet {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };
        debug!(player = player.name(), %action, "bot move");
        self.handle_player_action(action)
    }

    pub fn state(&self) -> GameState {
        GameState {
            pot: self.pot,
            current_bet: self.current_bet,
            stage: self.stage,
            turn_index: self.turn_index,
            round_complete: self.stage == Stage::Showdown,
            shown_cards: self.shown_cards.clone(),
            players: self.players.iter().map(PlayerView::from).collect(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn pot(&self) -> u64 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }
    pub fn shown_cards(&self) -> &[Card] {
        &self.shown_cards
    }
    /// Actions applied so far in the current hand.
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn post_blind(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        self.players[seat].commit(amount)?;
        self.pot += u64::from(amount);
        Ok(())
    }

    fn apply(
        &mut self,
        seat: usize,
        action: PlayerAction,
        validated: ValidatedAction,
    ) -> Result<(), GameError> {
        let player = &mut self.players[seat];
        match validated {
            ValidatedAction::Fold => player.fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call(owed) => player.commit(owed)?,
            ValidatedAction::Raise { to, delta } => {
                player.commit(delta)?;
                self.current_bet = to;
            }
        }
        let committed = validated.committed();
        self.pot += u64::from(committed);
        debug!(
            seat,
            player = player.name(),
            %action,
            committed,
            pot = self.pot,
            "action applied"
        );
        self.history.push(ActionRecord {
            seat,
            player: player.name().to_string(),
            stage: self.stage,
            action,
            committed,
        });
        Ok(())
    }

    /// Moves to the next stage and seats the first active player. With no
    /// active player left the board is run out to showdown.
    fn advance(&mut self) -> Result<(), GameError> {
        self.step_stage()?;
        match self.first_active_from(0) {
            Some(seat) => self.turn_index = seat,
            None => self.run_out_board()?,
        }
        Ok(())
    }

    fn step_stage(&mut self) -> Result<(), GameError> {
        let next = self.stage.next().ok_or(GameError::HandAlreadyComplete)?;
        let reveal = next.cards_revealed();
        if reveal > 0 && self.deck.remaining() < reveal + 1 {
            return Err(GameError::EmptyDeck);
        }

        for p in self.players.iter_mut() {
            p.clear_bet();
        }
        self.current_bet = 0;
        if reveal > 0 {
            self.deck.burn()?;
            for _ in 0..reveal {
                let card = self.deck.draw()?;
                self.shown_cards.push(card);
            }
        }
        debug_assert_eq!(self.shown_cards.len(), next.board_size());
        self.stage = next;
        info!(
            stage = %next,
            board = %format_cards(&self.shown_cards),
            pot = self.pot,
            "stage advanced"
        );
        Ok(())
    }

    fn run_out_board(&mut self) -> Result<(), GameError> {
        while self.stage != Stage::Showdown {
            self.step_stage()?;
        }
        Ok(())
    }

    /// Circular scan starting after `seat`, at most one full pass.
    fn next_active_after(&self, seat: usize) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|offset| (seat + offset) % n)
            .find(|&i| self.players[i].is_active())
    }

    /// Circular scan starting at `seat` itself, at most one full pass.
    fn first_active_from(&self, seat: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|offset| (seat + offset) % n)
            .find(|&i| self.players[i].is_active())
    }
}

fn validate_seating(players: &[Player]) -> Result<(), GameError> {
    if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
        return Err(GameError::InvalidConfiguration(format!(
            "table needs {}..={} players, got {}",
            MIN_PLAYERS,
            MAX_PLAYERS,
            players.len()
        )));
    }
    let mut names = HashSet::with_capacity(players.len());
    for p in players {
        if !names.insert(p.name()) {
            return Err(GameError::InvalidConfiguration(format!(
                "duplicate player name: {}",
                p.name()
            )));
        }
    }
    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
