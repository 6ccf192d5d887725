pub mod auto;
pub mod human;

pub use auto::{AutoConfig, AutoMode, GameSummary, Policy};
pub use human::HumanMode;
