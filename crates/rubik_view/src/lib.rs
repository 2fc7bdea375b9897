//! Cube user interface state, shared by every front end so that moves look
//! and feel the same everywhere.
//!
//! A [`CubeSimulation`] owns the logical [`rubik_core::MoveEngine`]. Requested
//! moves are animated one at a time, and each is committed to the engine only
//! when its animation finishes.

mod animations;
mod render;
mod simulation;

#[cfg(test)]
mod tests;

pub use animations::{MoveAnimationState, MovePhase};
pub use render::{CUBIE_SPACING, CubeRenderData, STICKER_OFFSET, StickerRenderData};
pub use simulation::{CubeSimulation, MoveRejected};
