mod common;

use holdem_engine::config::TableConfig;
use holdem_engine::errors::GameError;
use holdem_engine::table::Table;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn default_blinds_are_ten_and_twenty() {
    let config = TableConfig::default();
    assert_eq!(config.small_blind, 10);
    assert_eq!(config.big_blind, 20);
    assert_eq!(common::table(2).config(), &config);
}

#[test]
fn custom_blinds_are_posted() {
    let config = TableConfig {
        small_blind: 25,
        big_blind: 50,
    };
    let table = Table::with_config(
        common::players(3, 1000),
        config,
        ChaCha20Rng::seed_from_u64(1),
    )
    .unwrap();
    let state = table.state();
    assert_eq!(state.players[0].current_bet, 25);
    assert_eq!(state.players[1].current_bet, 50);
    assert_eq!(state.current_bet, 50);
    assert_eq!(state.pot, 75);
}

#[test]
fn invalid_blinds_are_rejected() {
    for (small_blind, big_blind) in [(0, 20), (30, 20)] {
        let config = TableConfig {
            small_blind,
            big_blind,
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(Table::with_config(
            common::players(2, 1000),
            config,
            ChaCha20Rng::seed_from_u64(1)
        )
        .is_err());
    }
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: TableConfig = serde_json::from_str(r#"{"big_blind": 40}"#).unwrap();
    assert_eq!(config.small_blind, 10);
    assert_eq!(config.big_blind, 40);
}
