mod common;

use holdem_engine::errors::GameError;
use holdem_engine::game::Stage;
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::table::Table;

fn bot_table() -> Table {
    let players = vec![
        Player::new("human", 1000),
        Player::new("mid", 1000),
        Player::bot("robo", 1000),
    ];
    Table::with_seed(players, 11).unwrap()
}

#[test]
fn bot_calls_when_a_bet_is_owed() {
    let mut table = bot_table();
    assert_eq!(table.turn_index(), 2);

    let state = table.make_bot_move().unwrap();

    assert_eq!(state.players[2].current_bet, 20);
    assert_eq!(state.players[2].chips, 980);
    assert_eq!(state.pot, 50);
    assert_eq!(table.history()[0].action, PlayerAction::Call);
}

#[test]
fn bot_checks_when_nothing_is_owed() {
    let players = vec![
        Player::bot("robo", 1000),
        Player::new("human", 1000),
        Player::new("mid", 1000),
    ];
    let mut table = Table::with_seed(players, 11).unwrap();
    table.advance_stage().unwrap();
    assert_eq!(table.turn_index(), 0);

    let state = table.make_bot_move().unwrap();

    let last = table.history().last().unwrap();
    assert_eq!(last.player, "robo");
    assert_eq!(last.action, PlayerAction::Check);
    assert_eq!(last.committed, 0);
    assert_eq!(state.players[0].chips, 990);
    // every active bet is level at zero, so the check closes the flop
    assert_eq!(state.stage, Stage::Turn);
}

#[test]
fn human_seat_is_left_alone() {
    let mut table = bot_table();
    // robo's seat acts manually, handing the turn to a human
    table.handle_player_action(PlayerAction::Fold).unwrap();
    let before = table.state();
    let after = table.make_bot_move().unwrap();
    assert_eq!(before, after);
    assert_eq!(table.history().len(), 1);
}

#[test]
fn bot_cannot_cover_the_call() {
    let players = vec![
        Player::new("human", 1000),
        Player::new("mid", 1000),
        Player::bot("robo", 15),
    ];
    let mut table = Table::with_seed(players, 11).unwrap();
    let before = table.state();
    assert!(matches!(
        table.make_bot_move(),
        Err(GameError::InsufficientChips { .. })
    ));
    assert_eq!(table.state(), before);
}

#[test]
fn bot_move_at_showdown_is_a_no_op() {
    let mut table = bot_table();
    for _ in 0..4 {
        table.advance_stage().unwrap();
    }
    let before = table.state();
    assert_eq!(table.make_bot_move().unwrap(), before);
}
