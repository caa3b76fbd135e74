use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:3333/api";
const DEFAULT_STATE_FILE: &str = "./translatle-game.json";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub state_file: PathBuf,
}

impl ClientConfig {
    /// Defaults overridden by `TRANSLATLE_API_URL` and `TRANSLATLE_STATE_FILE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("TRANSLATLE_API_URL").unwrap_or(defaults.api_url),
            state_file: env::var("TRANSLATLE_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_file),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}
