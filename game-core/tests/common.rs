#![allow(dead_code)]

use game_core::{GameStore, GuessResult, MemoryStore, RoundOutcome, RoundRules, resolve_round};
use game_types::Game;
use uuid::Uuid;

/// Creates a game with the given progress and a word already fetched
pub fn create_game(points: i32, total_tries: i32) -> Game {
    Game {
        id: Uuid::new_v4(),
        current_word_id: 1,
        points,
        total_tries,
    }
}

/// Creates a store that already holds a game with the given progress
pub fn create_store_with(points: i32, total_tries: i32) -> MemoryStore {
    MemoryStore::with_game(create_game(points, total_tries))
}

/// Plays one round against the stored game and persists the result,
/// the way a client does after every guess
pub fn play_round(store: &MemoryStore, guess: &str, expected: &str) -> RoundOutcome {
    let game = store.load().unwrap().expect("store should hold a game");
    let result = GuessResult::evaluate(guess, expected);
    let (next, outcome) = resolve_round(&game, result, &RoundRules::default());
    store.save(&next).unwrap();
    outcome
}

/// Plays `count` rounds with the same guess result
pub fn play_rounds(store: &MemoryStore, count: usize, correct: bool) -> Vec<RoundOutcome> {
    (0..count)
        .map(|_| {
            if correct {
                play_round(store, "to eat", "to eat")
            } else {
                play_round(store, "to drink", "to eat")
            }
        })
        .collect()
}

/// Asserts that a stored game is back at its starting values
pub fn assert_reset(store: &MemoryStore) {
    let game = store.load().unwrap().unwrap();
    assert_eq!(game.points, RoundRules::default().starting_points);
    assert_eq!(game.total_tries, 0);
    assert!(game.needs_word());
}
