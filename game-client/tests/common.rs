#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use game_client::api::GameApi;
use game_types::{LeaderboardEntry, NewLeaderboardEntry, Word, WordId};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process stand-in for the REST API. Random words are handed out in
/// order so tests stay deterministic.
pub struct FakeApi {
    words: Vec<Word>,
    next_random: AtomicUsize,
    leaderboard: Mutex<Vec<LeaderboardEntry>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::with_words(&[
            (1, "manger", "to eat"),
            (2, "boire", "to drink"),
            (3, "aller", "to go"),
        ])
    }

    pub fn with_words(words: &[(WordId, &str, &str)]) -> Self {
        Self {
            words: words
                .iter()
                .map(|(id, french, english)| Word::new(*id, french.to_string(), english.to_string()))
                .collect(),
            next_random: AtomicUsize::new(0),
            leaderboard: Mutex::new(Vec::new()),
        }
    }

    pub fn submissions(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameApi for FakeApi {
    async fn get_word(&self) -> Result<Word> {
        let index = self.next_random.fetch_add(1, Ordering::SeqCst);
        self.words
            .get(index % self.words.len().max(1))
            .cloned()
            .ok_or_else(|| anyhow!("Server error (404): Word not found"))
    }

    async fn get_word_by_id(&self, id: WordId) -> Result<Word> {
        self.words
            .iter()
            .find(|word| word.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("Server error (404): Word not found"))
    }

    async fn submit_leaderboard(&self, entry: &NewLeaderboardEntry) -> Result<Vec<LeaderboardEntry>> {
        let mut leaderboard = self.leaderboard.lock().unwrap();
        let id = leaderboard.len() as i32 + 1;
        leaderboard.push(LeaderboardEntry {
            id,
            player: entry.name.clone(),
            score: entry.score,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        });
        leaderboard.sort_by_key(|e| e.score);
        Ok(leaderboard.iter().take(10).cloned().collect())
    }

    async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        Ok(self.leaderboard.lock().unwrap().iter().take(10).cloned().collect())
    }
}
