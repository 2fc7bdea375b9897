use std::fmt;

use itertools::Itertools;

use crate::adjacency::ADJACENCY;
use crate::{
    CENTER_INDEX, CubeState, Direction, Face, GRID_SIZE, Move, STICKER_COUNT, STICKERS_PER_FACE,
};

lazy_static! {
    /// Sticker permutation for every move, indexed by [`move_ordinal()`].
    static ref MOVE_PERMS: Vec<StickerPerm> = Move::iter_all()
        .map(StickerPerm::build_for_move)
        .collect();
}

fn move_ordinal(mv: Move) -> usize {
    mv.layer.ordinal() * 2
        + match mv.direction {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        }
}

/// Location of a sticker slot on the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickerPos {
    /// Face containing the sticker.
    pub face: Face,
    /// Row-major index of the sticker on the face, from 0 to 8.
    pub index: u8,
}

impl fmt::Display for StickerPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.face, self.index)
    }
}

impl StickerPos {
    /// Constructs a sticker position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than 9.
    pub fn new(face: Face, index: u8) -> Self {
        assert!(
            (index as usize) < STICKERS_PER_FACE,
            "sticker index {index} out of range",
        );
        Self { face, index }
    }

    /// Returns the sticker at `ordinal`, which ranges from 0 to 53.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        let face = Face::from_repr((ordinal / STICKERS_PER_FACE) as u8)?;
        Some(Self {
            face,
            index: (ordinal % STICKERS_PER_FACE) as u8,
        })
    }
    /// Returns a dense index from 0 to 53.
    pub fn ordinal(self) -> usize {
        self.face.ordinal() * STICKERS_PER_FACE + self.index as usize
    }

    /// Returns an iterator over all 54 sticker positions, face by face.
    pub fn iter_all() -> impl Clone + Iterator<Item = StickerPos> {
        Face::iter().flat_map(|face| {
            (0..STICKERS_PER_FACE as u8).map(move |index| Self { face, index })
        })
    }

    /// Returns the row of the sticker within its face.
    pub fn row(self) -> usize {
        self.index as usize / GRID_SIZE
    }
    /// Returns the column of the sticker within its face.
    pub fn col(self) -> usize {
        self.index as usize % GRID_SIZE
    }
    /// Returns whether this is the center sticker of its face.
    pub fn is_center(self) -> bool {
        self.index as usize == CENTER_INDEX
    }
}

/// Returns the index of the sticker that lands on `index` when a face's own
/// 3x3 grid turns a quarter turn in `direction`.
///
/// This is a rigid rotation of the grid, so corners stay corners, edges stay
/// edges, and the center stays put.
pub(crate) fn grid_rotation_source(index: usize, direction: Direction) -> usize {
    let n = GRID_SIZE - 1;
    let (row, col) = (index / GRID_SIZE, index % GRID_SIZE);
    let (src_row, src_col) = match direction {
        Direction::Clockwise => (n - col, row),
        Direction::CounterClockwise => (col, n - row),
    };
    src_row * GRID_SIZE + src_col
}

/// Permutation of the 54 sticker slots.
///
/// Stored as "destination ← source": after applying the permutation, the slot
/// `pos` holds the sticker that used to be at `self.source_of(pos)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StickerPerm {
    sources: [StickerPos; STICKER_COUNT],
}

impl fmt::Debug for StickerPerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StickerPerm(")?;
        let moved = self.moved().map(|(dst, src)| format!("{dst}<-{src}"));
        write!(f, "{})", moved.format(", "))
    }
}

impl Default for StickerPerm {
    fn default() -> Self {
        Self::identity()
    }
}

impl StickerPerm {
    /// Returns the identity permutation.
    pub fn identity() -> Self {
        let mut sources = [StickerPos {
            face: Face::Up,
            index: 0,
        }; STICKER_COUNT];
        for pos in StickerPos::iter_all() {
            sources[pos.ordinal()] = pos;
        }
        Self { sources }
    }

    /// Returns the permutation for a single move.
    pub fn for_move(mv: Move) -> &'static StickerPerm {
        &MOVE_PERMS[move_ordinal(mv)]
    }

    /// Builds the permutation for a move from the adjacency table.
    fn build_for_move(mv: Move) -> Self {
        let mut ret = Self::identity();
        let adj = ADJACENCY.get(mv.layer);

        if let Some(face) = adj.own_face {
            for dst in 0..STICKERS_PER_FACE {
                let src = grid_rotation_source(dst, mv.direction);
                ret.sources[StickerPos::new(face, dst as u8).ordinal()] =
                    StickerPos::new(face, src as u8);
            }
        }

        for i in 0..4 {
            let (face_a, strip_a) = adj.ring[i];
            let (face_b, strip_b) = adj.ring[(i + 1) % 4];
            for (&a, &b) in strip_a.iter().zip(&strip_b) {
                let a = StickerPos::new(face_a, a);
                let b = StickerPos::new(face_b, b);
                // Clockwise carries each strip forward around the ring.
                let (src, dst) = match mv.direction {
                    Direction::Clockwise => (a, b),
                    Direction::CounterClockwise => (b, a),
                };
                ret.sources[dst.ordinal()] = src;
            }
        }

        ret
    }

    /// Returns the slot whose sticker moves into `dst`.
    pub fn source_of(&self, dst: StickerPos) -> StickerPos {
        self.sources[dst.ordinal()]
    }
    /// Returns the slot that the sticker in `src` moves to.
    pub fn dest_of(&self, src: StickerPos) -> StickerPos {
        StickerPos::iter_all()
            .find(|&dst| self.source_of(dst) == src)
            .unwrap_or(src)
    }

    /// Returns an iterator over `(destination, source)` pairs for every
    /// sticker that moves.
    pub fn moved(&self) -> impl '_ + Iterator<Item = (StickerPos, StickerPos)> {
        StickerPos::iter_all()
            .map(|dst| (dst, self.source_of(dst)))
            .filter(|(dst, src)| dst != src)
    }

    /// Returns whether this is the identity permutation.
    pub fn is_identity(&self) -> bool {
        self.moved().next().is_none()
    }

    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut ret = Self::identity();
        for dst in StickerPos::iter_all() {
            ret.sources[self.source_of(dst).ordinal()] = dst;
        }
        ret
    }

    /// Returns the permutation equivalent to applying `self` and then
    /// `other`.
    #[must_use]
    pub fn then(&self, other: &StickerPerm) -> Self {
        let mut ret = Self::identity();
        for dst in StickerPos::iter_all() {
            ret.sources[dst.ordinal()] = self.source_of(other.source_of(dst));
        }
        ret
    }

    /// Applies the permutation to a cube state.
    ///
    /// Every sticker is read from `state` before anything is written, so no
    /// slot is ever read after it has been overwritten.
    pub fn apply(&self, state: &CubeState) -> CubeState {
        let mut ret = state.clone();
        for dst in StickerPos::iter_all() {
            *ret.sticker_mut(dst) = state.sticker(self.source_of(dst));
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::LayerId;

    #[test]
    fn test_grid_rotation_tables() {
        let cw: Vec<usize> = (0..9)
            .map(|i| grid_rotation_source(i, Direction::Clockwise))
            .collect();
        assert_eq!(cw, [6, 3, 0, 7, 4, 1, 8, 5, 2]);
        let ccw: Vec<usize> = (0..9)
            .map(|i| grid_rotation_source(i, Direction::CounterClockwise))
            .collect();
        assert_eq!(ccw, [2, 5, 8, 1, 4, 7, 0, 3, 6]);
    }

    #[test]
    fn test_sticker_pos_ordinals() {
        for (i, pos) in StickerPos::iter_all().enumerate() {
            assert_eq!(pos.ordinal(), i);
            assert_eq!(StickerPos::from_ordinal(i), Some(pos));
        }
        assert_eq!(StickerPos::from_ordinal(STICKER_COUNT), None);
        assert!(StickerPos::new(Face::Left, 4).is_center());
    }

    #[test]
    fn test_moved_sticker_counts() {
        for mv in Move::iter_all() {
            let perm = StickerPerm::for_move(mv);
            // 8 stickers on the turning face plus 12 around it, or 12 for a
            // slice (whose centers each move).
            let expected = if mv.layer.is_slice() { 12 } else { 20 };
            assert_eq!(perm.moved().count(), expected, "{mv}");
        }
    }

    #[test]
    fn test_inverse_and_composition() {
        for mv in Move::iter_all() {
            let perm = StickerPerm::for_move(mv);
            assert_eq!(&perm.inverse(), StickerPerm::for_move(mv.rev()));
            assert!(perm.then(&perm.inverse()).is_identity());
            let quarter_four = perm.then(perm).then(perm).then(perm);
            assert!(quarter_four.is_identity(), "{mv}");
        }
    }

    #[test]
    fn test_dest_of() {
        let perm = StickerPerm::for_move(Move::cw(LayerId::Up));
        let src = StickerPos::new(Face::Front, 0);
        let dst = perm.dest_of(src);
        assert_eq!(dst, StickerPos::new(Face::Left, 0));
        assert_eq!(perm.source_of(dst), src);
    }
}
