mod twist;

pub use twist::{MoveAnimationState, MovePhase};
