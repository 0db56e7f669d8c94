use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn fresh_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn accepts_any_injected_rng() {
    let mut deck = Deck::with_rng(ChaCha8Rng::seed_from_u64(3));
    assert_eq!(deck.remaining(), 52);
    deck.burn().unwrap();
    deck.draw().unwrap();
    assert_eq!(deck.remaining(), 50);
}

#[test]
fn shuffle_permutes_only_remaining_cards() {
    let mut deck = Deck::new_with_seed(5);
    let drawn: Vec<Card> = (0..10).map(|_| deck.draw().unwrap()).collect();
    deck.shuffle();
    assert_eq!(deck.remaining(), 42);
    let rest: HashSet<Card> = (0..42).map(|_| deck.draw().unwrap()).collect();
    assert!(drawn.iter().all(|c| !rest.contains(c)));
}
