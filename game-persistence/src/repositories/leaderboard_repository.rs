use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

use crate::entities::{leaderboard_entries, prelude::*};
use game_types::LeaderboardEntry;

pub struct LeaderboardRepository {
    db: DatabaseConnection,
}

impl LeaderboardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_entry(model: leaderboard_entries::Model) -> LeaderboardEntry {
        LeaderboardEntry {
            id: model.id,
            player: model.player,
            score: model.score,
            // Same shape as JavaScript's `Date.toISOString()`
            created_at: model
                .created_at
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Record a finished game. Entries are never updated afterwards.
    pub async fn create_entry(&self, player: &str, score: i32) -> Result<LeaderboardEntry> {
        let entry_model = leaderboard_entries::ActiveModel {
            id: ActiveValue::NotSet,
            player: ActiveValue::Set(player.to_string()),
            score: ActiveValue::Set(score),
            created_at: ActiveValue::Set(Utc::now().into()),
        };

        let saved_model = LeaderboardEntries::insert(entry_model)
            .exec(&self.db)
            .await?;

        // Fetch the created entry
        let created_entry = LeaderboardEntries::find_by_id(saved_model.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created leaderboard entry"))?;

        Ok(Self::model_to_entry(created_entry))
    }

    /// Best entries first: fewest tries, then oldest.
    pub async fn top_entries(&self, limit: u64) -> Result<Vec<LeaderboardEntry>> {
        let entries = LeaderboardEntries::find()
            .order_by_asc(leaderboard_entries::Column::Score)
            .order_by_asc(leaderboard_entries::Column::CreatedAt)
            .order_by_asc(leaderboard_entries::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(entries.into_iter().map(Self::model_to_entry).collect())
    }
}
