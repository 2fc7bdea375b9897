use crate::{Move, StickerPerm, StickerPos};

/// Append-only record of the moves applied since the last reset.
///
/// [`crate::CubeState`] never needs this; it is kept for consumers that want
/// to replay moves, such as a renderer that tracks where a particular sticker
/// came from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    /// Constructs an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }
    /// Forgets every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Returns the number of moves recorded.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    /// Returns whether no moves have been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Returns the recorded moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    /// Returns the most recent move.
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Returns the sequence of moves that undoes the whole history.
    pub fn inverse(&self) -> Vec<Move> {
        self.moves.iter().rev().map(|mv| mv.rev()).collect()
    }

    /// Returns the slot that the sticker now at `pos` occupied before the
    /// first recorded move.
    ///
    /// This replays the inverse of each move, newest first.
    pub fn trace_origin(&self, pos: StickerPos) -> StickerPos {
        self.moves
            .iter()
            .rev()
            .fold(pos, |p, &mv| StickerPerm::for_move(mv).source_of(p))
    }

    /// Returns the slot that the sticker which started at `pos` occupies now.
    pub fn trace_destination(&self, pos: StickerPos) -> StickerPos {
        self.moves
            .iter()
            .fold(pos, |p, &mv| StickerPerm::for_move(mv).dest_of(p))
    }

    /// Returns the combined permutation of every recorded move.
    pub fn net_permutation(&self) -> StickerPerm {
        self.moves
            .iter()
            .fold(StickerPerm::identity(), |acc, &mv| {
                acc.then(StickerPerm::for_move(mv))
            })
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
