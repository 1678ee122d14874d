pub mod best_ball;
pub mod context;
pub mod high_low;
pub mod leaderboard;
pub mod match_play;
pub mod skins;
pub mod sort_utils;
pub mod stroke_play;

pub use best_ball::*;
pub use context::*;
pub use high_low::*;
pub use leaderboard::*;
pub use match_play::*;
pub use skins::*;
pub use sort_utils::*;
pub use stroke_play::*;
