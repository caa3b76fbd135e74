use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub deepl_api_key: String,
    pub deepl_api_url: Option<String>,
    pub verbs_file: PathBuf,
    pub leaderboard_size: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let deepl_api_key = env::var("DEEPL_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("DEEPL_API_KEY must be set")?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_value("PORT", env::var("PORT").ok(), 3333)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://translatle.db?mode=rwc".to_string()),
            deepl_api_key,
            deepl_api_url: env::var("DEEPL_API_URL").ok(),
            verbs_file: env::var("VERBS_FILE")
                .unwrap_or_else(|_| "./data/verbs.txt".to_string())
                .into(),
            leaderboard_size: parse_value("LEADERBOARD_SIZE", env::var("LEADERBOARD_SIZE").ok(), 10)?,
        })
    }
}

fn parse_value<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", name, value)),
        None => Ok(default),
    }
}
