pub mod course;
pub mod score;
pub mod team;
pub mod tournament;

pub use course::*;
pub use score::*;
pub use team::*;
pub use tournament::*;
