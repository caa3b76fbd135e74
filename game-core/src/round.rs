use game_types::{Game, NO_WORD};

/// Point thresholds for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub win_points: i32,
    pub loss_points: i32,
    pub starting_points: i32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            win_points: 20,
            loss_points: 0,
            starting_points: 10,
        }
    }
}

impl RoundRules {
    pub fn new_game(&self) -> Game {
        Game::new(self.starting_points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Incorrect,
}

impl GuessResult {
    /// Exact, case-sensitive comparison.
    pub fn evaluate(guess: &str, expected: &str) -> Self {
        if guess == expected {
            GuessResult::Correct
        } else {
            GuessResult::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, GuessResult::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The game goes on with a fresh word.
    Continuing { points: i32 },
    /// The win threshold was reached. `total_tries` includes the winning guess
    /// and is the score a player may submit to the leaderboard.
    Won { total_tries: i32 },
    /// The loss threshold was reached.
    Lost { total_tries: i32 },
}

impl RoundOutcome {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, RoundOutcome::Continuing { .. })
    }
}

/// Apply one guess to the game state.
///
/// Every guess counts as a try. When either threshold is reached the game
/// is reset to its starting values but keeps its id; otherwise the current
/// word is cleared so the next round fetches a new one.
pub fn resolve_round(game: &Game, result: GuessResult, rules: &RoundRules) -> (Game, RoundOutcome) {
    let points = if result.is_correct() {
        game.points + 1
    } else {
        game.points - 1
    };
    let total_tries = game.total_tries + 1;

    let outcome = if points >= rules.win_points {
        RoundOutcome::Won { total_tries }
    } else if points <= rules.loss_points {
        RoundOutcome::Lost { total_tries }
    } else {
        RoundOutcome::Continuing { points }
    };

    let next = if outcome.is_game_over() {
        tracing::debug!(game_id = %game.id, ?outcome, "Game finished, resetting");
        Game {
            id: game.id,
            current_word_id: NO_WORD,
            points: rules.starting_points,
            total_tries: 0,
        }
    } else {
        Game {
            id: game.id,
            current_word_id: NO_WORD,
            points,
            total_tries,
        }
    };

    (next, outcome)
}
