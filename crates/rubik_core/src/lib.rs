//! 3x3x3 Rubik's Cube simulator backend.
//!
//! The logical model is a grid of 54 sticker colors ([`CubeState`]) plus a
//! [`MoveEngine`] that applies quarter turns of named layers as pure
//! permutations of those stickers. Every face-to-face coordinate relationship
//! lives in a single [`adjacency`] table.
//!
//! Animation is not modeled here. A renderer interpolates the visual rotation
//! and then commits the move with a single call to
//! [`MoveEngine::apply_move()`], so the logical cube is never partially
//! rotated.

#[macro_use]
extern crate lazy_static;

pub mod adjacency;
mod color;
mod engine;
mod error;
mod face;
pub mod geometry;
mod history;
mod layer;
mod perm;
mod state;

#[cfg(test)]
mod tests;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::adjacency::{AdjacencyTable, LayerAdjacency};
    pub use crate::color::Color;
    pub use crate::engine::MoveEngine;
    pub use crate::error::{InvalidLayer, ParseMoveError};
    pub use crate::face::{Face, PerFace};
    pub use crate::history::MoveHistory;
    pub use crate::layer::{Direction, LayerId, Move};
    pub use crate::perm::{StickerPerm, StickerPos};
    pub use crate::state::{CubeState, FaceStickers};
}

/// Number of stickers along each edge of a face.
pub const GRID_SIZE: usize = 3;
/// Number of stickers on each face.
pub const STICKERS_PER_FACE: usize = GRID_SIZE * GRID_SIZE;
/// Total number of stickers on the cube.
pub const STICKER_COUNT: usize = 6 * STICKERS_PER_FACE;
/// Index of the center sticker on each face.
pub const CENTER_INDEX: usize = 4;

/// Version string such as `rubik_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
