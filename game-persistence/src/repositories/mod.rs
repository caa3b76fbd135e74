pub mod leaderboard_repository;
pub mod verb_repository;

pub use leaderboard_repository::LeaderboardRepository;
pub use verb_repository::VerbRepository;
