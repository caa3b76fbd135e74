use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type GameId = Uuid;
pub type WordId = i32;

/// Marks "no word fetched yet" in `Game::current_word_id`.
pub const NO_WORD: WordId = 0;

/// Client-side progress, persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Game {
    pub id: GameId,
    pub current_word_id: WordId,
    pub points: i32,
    pub total_tries: i32,
}

impl Game {
    pub fn new(starting_points: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            current_word_id: NO_WORD,
            points: starting_points,
            total_tries: 0,
        }
    }

    pub fn needs_word(&self) -> bool {
        self.current_word_id == NO_WORD
    }
}
