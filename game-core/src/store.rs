use anyhow::{Context, Result};
use game_types::Game;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistence for the single client-side game.
pub trait GameStore {
    fn load(&self) -> Result<Option<Game>>;
    fn save(&self, game: &Game) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Keeps the game in memory only. Used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    game: Mutex<Option<Game>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(game: Game) -> Self {
        Self {
            game: Mutex::new(Some(game)),
        }
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> Result<Option<Game>> {
        let game = self
            .game
            .lock()
            .map_err(|_| anyhow::anyhow!("Game store lock poisoned"))?;
        Ok(game.clone())
    }

    fn save(&self, game: &Game) -> Result<()> {
        let mut slot = self
            .game
            .lock()
            .map_err(|_| anyhow::anyhow!("Game store lock poisoned"))?;
        *slot = Some(game.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .game
            .lock()
            .map_err(|_| anyhow::anyhow!("Game store lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// Stores the game as one JSON document on disk.
///
/// A missing file means there is no game yet. A file that no longer parses
/// is treated the same way so a corrupt save never locks the player out.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStore for FileStore {
    fn load(&self) -> Result<Option<Game>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read game state from {}", self.path.display())
                });
            }
        };

        match serde_json::from_str(&contents) {
            Ok(game) => Ok(Some(game)),
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable game state at {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, game: &Game) -> Result<()> {
        let json = serde_json::to_string(game)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write game state to {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove game state at {}", self.path.display())),
        }
    }
}
