pub use super::leaderboard_entries::Entity as LeaderboardEntries;
pub use super::verbs::Entity as Verbs;
