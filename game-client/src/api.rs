use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use game_types::{ApiMessage, LeaderboardEntry, NewLeaderboardEntry, Word, WordId};

/// The REST surface the game talks to
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn get_word(&self) -> Result<Word>;
    async fn get_word_by_id(&self, id: WordId) -> Result<Word>;
    async fn submit_leaderboard(&self, entry: &NewLeaderboardEntry) -> Result<Vec<LeaderboardEntry>>;
    async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiMessage>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::warn!("Server answered {}: {}", status, message);
            bail!("Server error ({}): {}", status.as_u16(), message);
        }

        response.json().await.context("Unexpected response body")
    }
}

#[async_trait]
impl GameApi for ApiClient {
    async fn get_word(&self) -> Result<Word> {
        self.get_json("/word").await
    }

    async fn get_word_by_id(&self, id: WordId) -> Result<Word> {
        self.get_json(&format!("/word/{}", id)).await
    }

    async fn submit_leaderboard(&self, entry: &NewLeaderboardEntry) -> Result<Vec<LeaderboardEntry>> {
        let url = self.url("/leaderboard");
        let response = self
            .client
            .post(&url)
            .json(entry)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        Self::decode(response).await
    }

    async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.get_json("/leaderboard").await
    }
}
