pub mod args;
pub mod config;
pub mod error;
pub mod handicap;
pub mod model;
pub mod payout;
pub mod report;
pub mod score;
pub mod storage;

pub use config::{CarryRule, ScoringRules, SkinsCarry};
pub use error::ScoringError;
pub use handicap::{net_score, strokes_allocated};
pub use model::{
    Course, GameFormat, Hole, Player, ScoreEntry, ScoreSheet, Team, Tournament,
    TournamentSnapshot,
};
pub use payout::{PayoutLine, PayoutReport, PayoutRequest, compute_payouts};
pub use score::{LeaderboardRow, compute_leaderboard};
pub use storage::{InMemoryScoreStore, ScoreStore, SharedScoreStore, Submission};
