use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LeaderboardEntry {
    pub id: i32,
    pub player: String,
    /// Number of tries it took to win; lower is better.
    pub score: i32,
    pub created_at: String, // ISO 8601 string
}

/// Body of `POST /api/leaderboard`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewLeaderboardEntry {
    pub name: String,
    pub score: i32,
}
