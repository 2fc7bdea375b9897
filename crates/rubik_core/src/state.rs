use std::fmt;

use itertools::Itertools;

use crate::perm::grid_rotation_source;
use crate::{
    CENTER_INDEX, Color, Direction, Face, GRID_SIZE, PerFace, STICKERS_PER_FACE, StickerPos,
};

/// Colors of the 9 stickers on one face, in row-major order.
pub type FaceStickers = [Color; STICKERS_PER_FACE];

/// Sticker colors of the whole cube.
///
/// Every operation on `CubeState` permutes the 54 stickers. Nothing is ever
/// copied over or lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeState {
    faces: PerFace<FaceStickers>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new_solved()
    }
}

impl CubeState {
    /// Constructs a cube in the solved state.
    pub fn new_solved() -> Self {
        Self {
            faces: PerFace::from_fn(|face| [face.solved_color(); STICKERS_PER_FACE]),
        }
    }
    /// Constructs a cube with arbitrary sticker colors.
    pub fn from_faces(faces: PerFace<FaceStickers>) -> Self {
        Self { faces }
    }
    /// Constructs a cube where every sticker has a different color, equal to
    /// its position's ordinal.
    ///
    /// This makes it possible to see exactly where each sticker goes.
    pub fn new_marked() -> Self {
        Self {
            faces: PerFace::from_fn(|face| {
                std::array::from_fn(|i| Color((face.ordinal() * STICKERS_PER_FACE + i) as u8))
            }),
        }
    }

    /// Replaces the state with a fresh solved state.
    pub fn reset(&mut self) {
        *self = Self::new_solved();
    }

    /// Returns a snapshot of the stickers on `face`.
    pub fn face(&self, face: Face) -> FaceStickers {
        self.faces[face]
    }
    /// Returns the stickers on every face.
    pub fn faces(&self) -> &PerFace<FaceStickers> {
        &self.faces
    }

    /// Returns the color of the sticker at `pos`.
    pub fn sticker(&self, pos: StickerPos) -> Color {
        self.faces[pos.face][pos.index as usize]
    }
    /// Returns a mutable reference to the color of the sticker at `pos`.
    pub(crate) fn sticker_mut(&mut self, pos: StickerPos) -> &mut Color {
        &mut self.faces[pos.face][pos.index as usize]
    }

    /// Returns an iterator over every sticker position and its color.
    pub fn stickers(&self) -> impl '_ + Iterator<Item = (StickerPos, Color)> {
        StickerPos::iter_all().map(|pos| (pos, self.sticker(pos)))
    }

    /// Rotates the 8 outer stickers of `face` a quarter turn. The center stays
    /// put, and the rest of the cube is untouched.
    pub fn rotate_own_face(&mut self, face: Face, direction: Direction) {
        let old = self.faces[face];
        self.faces[face] =
            std::array::from_fn(|dst| old[grid_rotation_source(dst, direction)]);
    }

    /// Returns whether every face has a single uniform color.
    ///
    /// This checks only uniformity within each face, not that the six faces
    /// have six distinct colors. Reachable states always use six distinct
    /// colors when every face is uniform.
    pub fn is_solved(&self) -> bool {
        self.faces.values().all(|stickers| stickers.iter().all_equal())
    }

    /// Returns the center color of each face.
    pub fn centers(&self) -> PerFace<Color> {
        self.faces.map(|_, stickers| stickers[CENTER_INDEX])
    }
}

/// Prints the cube as an unfolded net:
///
/// ```text
///       U U U
///       U U U
///       U U U
/// L L L F F F R R R B B B
/// L L L F F F R R R B B B
/// L L L F F F R R R B B B
///       D D D
///       D D D
///       D D D
/// ```
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |face: Face, r: usize| {
            (0..GRID_SIZE)
                .map(|c| self.faces[face][r * GRID_SIZE + c].abbr())
                .join(" ")
        };
        let indent = " ".repeat(GRID_SIZE * 2);

        for r in 0..GRID_SIZE {
            writeln!(f, "{indent}{}", row(Face::Up, r))?;
        }
        for r in 0..GRID_SIZE {
            let middle = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| row(face, r))
                .join(" ");
            writeln!(f, "{middle}")?;
        }
        for r in 0..GRID_SIZE {
            writeln!(f, "{indent}{}", row(Face::Down, r))?;
        }
        Ok(())
    }
}
