pub mod prelude;

pub mod leaderboard_entries;
pub mod verbs;
