use serde::{Deserialize, Serialize};

/// What to do with a move requested while another is still animating.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InputPolicy {
    /// Append the move to the animation queue.
    #[default]
    Queue,
    /// Drop the move.
    Reject,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InteractionPreferences {
    pub input_policy: InputPolicy,
    /// Maximum number of moves waiting behind the animating one. Requests
    /// beyond this are rejected regardless of `input_policy`.
    pub max_queued_moves: usize,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            input_policy: InputPolicy::Queue,
            max_queued_moves: 32,
        }
    }
}
