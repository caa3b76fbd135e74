use anyhow::{Context, Result, bail};

use crate::api::GameApi;
use game_core::{GameStore, GuessResult, RoundOutcome, RoundRules, resolve_round};
use game_types::{Game, LeaderboardEntry, NewLeaderboardEntry, Word};

/// What happened after a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub result: GuessResult,
    pub outcome: RoundOutcome,
    /// The translation the guess was compared against
    pub expected: String,
}

/// One player's game: the persisted state plus the word currently on screen.
pub struct GameSession<A, S> {
    api: A,
    store: S,
    rules: RoundRules,
    game: Game,
    word: Option<Word>,
}

impl<A: GameApi, S: GameStore> GameSession<A, S> {
    /// Resume the stored game, or start a new one.
    pub fn start(api: A, store: S, rules: RoundRules) -> Result<Self> {
        let game = match store.load()? {
            Some(game) => {
                tracing::debug!(game_id = %game.id, "Resuming stored game");
                game
            }
            None => {
                let game = rules.new_game();
                store.save(&game)?;
                tracing::debug!(game_id = %game.id, "Started new game");
                game
            }
        };

        Ok(Self {
            api,
            store,
            rules,
            game,
            word: None,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The word for the current round. Fetches a random word when the game
    /// has none, otherwise reloads the stored one.
    pub async fn current_word(&mut self) -> Result<&Word> {
        let cached = matches!(
            &self.word,
            Some(word) if !self.game.needs_word() && word.id == self.game.current_word_id
        );

        if !cached {
            let word = self.fetch_word().await?;
            self.game.current_word_id = word.id;
            self.store.save(&self.game)?;
            self.word = Some(word);
        }

        self.word.as_ref().context("No word loaded")
    }

    async fn fetch_word(&self) -> Result<Word> {
        if self.game.needs_word() {
            return self.api.get_word().await;
        }

        match self.api.get_word_by_id(self.game.current_word_id).await {
            Ok(word) => Ok(word),
            Err(e) => {
                // A stored id can go stale if the verb list changes
                tracing::warn!(
                    "Could not reload word {}: {:#}; fetching a new one",
                    self.game.current_word_id,
                    e
                );
                self.api.get_word().await
            }
        }
    }

    /// Resolve a guess against the word last returned by `current_word` and
    /// persist the new state.
    pub fn guess(&mut self, guess: &str) -> Result<GuessReport> {
        let expected = match &self.word {
            Some(word) if word.id == self.game.current_word_id => word.english.clone(),
            _ => bail!("No word has been shown for this round"),
        };
        let result = GuessResult::evaluate(guess, &expected);

        let (next, outcome) = resolve_round(&self.game, result, &self.rules);
        self.store.save(&next)?;
        self.game = next;
        self.word = None;

        Ok(GuessReport {
            result,
            outcome,
            expected,
        })
    }

    /// Record a won game on the leaderboard and return the updated board.
    pub async fn submit_score(&self, name: &str, score: i32) -> Result<Vec<LeaderboardEntry>> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Name must not be empty");
        }

        self.api
            .submit_leaderboard(&NewLeaderboardEntry {
                name: name.to_string(),
                score,
            })
            .await
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.api.get_leaderboard().await
    }

    /// Throw away all progress and start over.
    pub fn restart(&mut self) -> Result<()> {
        self.store.clear()?;
        self.game = self.rules.new_game();
        self.store.save(&self.game)?;
        self.word = None;
        Ok(())
    }
}
