use anyhow::{Context, Result};
use std::path::Path;

use game_core::parse_verb_list;
use game_persistence::repositories::VerbRepository;

/// Fill an empty verb table from a word list file. A missing file is not an
/// error; the server then serves whatever the table already holds.
pub async fn seed_verbs_from_file(repository: &VerbRepository, path: &Path) -> Result<u64> {
    if !path.exists() {
        tracing::warn!("Verb list {} not found, skipping seed", path.display());
        return Ok(0);
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read verb list {}", path.display()))?;

    repository.seed_if_empty(parse_verb_list(&contents)).await
}
