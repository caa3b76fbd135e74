use game_types::ApiMessage;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use crate::translation::TranslateError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid id")]
    InvalidId,
    #[error("Invalid name")]
    InvalidName,
    #[error("Invalid body")]
    InvalidBody,
    #[error("Word not found")]
    WordNotFound,
    #[error("Translation failed: {0}")]
    Translation(#[from] TranslateError),
    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidName | ApiError::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            ApiError::WordNotFound => StatusCode::NOT_FOUND,
            ApiError::Translation(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidId => "Invalid id",
            ApiError::InvalidName => "Invalid name",
            ApiError::InvalidBody => "Invalid body",
            ApiError::WordNotFound => "Word not found",
            ApiError::Translation(_) => "Translation failed",
            ApiError::Database(_) => "Internal server error",
        }
    }

    pub fn into_reply(self) -> WithStatus<Json> {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        warp::reply::with_status(
            warp::reply::json(&ApiMessage::new(self.public_message())),
            status,
        )
    }
}
