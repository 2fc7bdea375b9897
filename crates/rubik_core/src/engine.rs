use crate::{
    CubeState, Direction, Face, FaceStickers, InvalidLayer, LayerId, Move, MoveHistory,
    StickerPerm,
};

/// Applies quarter turns to a [`CubeState`] and records them in a
/// [`MoveHistory`].
///
/// Every method here runs to completion without suspending, and the engine
/// needs `&mut self` to change anything, so at most one move can be in flight
/// at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveEngine {
    state: CubeState,
    history: MoveHistory,
}

impl MoveEngine {
    /// Constructs an engine with a solved cube and an empty history.
    pub fn new() -> Self {
        Self::default()
    }
    /// Constructs an engine starting from an arbitrary state, with an empty
    /// history.
    pub fn with_state(state: CubeState) -> Self {
        Self {
            state,
            history: MoveHistory::new(),
        }
    }

    /// Turns `layer` a quarter turn in `direction`.
    ///
    /// The rotating face (if any) turns its own stickers, and the four strips
    /// around the layer each shift one step around the ring. The whole move is
    /// computed from the state before the move.
    pub fn apply_move(&mut self, layer: LayerId, direction: Direction) {
        let mv = Move::new(layer, direction);
        self.state = StickerPerm::for_move(mv).apply(&self.state);
        self.history.push(mv);
        log::trace!("applied {mv}");
    }

    /// Looks up a layer by name and turns it. If the name is invalid, nothing
    /// changes.
    pub fn apply_named_move(
        &mut self,
        layer: &str,
        direction: Direction,
    ) -> Result<(), InvalidLayer> {
        let layer: LayerId = layer.parse()?;
        self.apply_move(layer, direction);
        Ok(())
    }

    /// Applies a sequence of moves in order.
    pub fn apply_moves(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply_move(mv.layer, mv.direction);
        }
    }

    /// Replaces the cube with a fresh solved cube and clears the history.
    pub fn reset(&mut self) {
        self.state.reset();
        self.history.clear();
        log::debug!("cube reset");
    }

    /// Returns a snapshot of the stickers on `face`.
    pub fn face(&self, face: Face) -> FaceStickers {
        self.state.face(face)
    }
    /// Returns whether every face has a single uniform color.
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Returns the current cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the moves applied since the last reset.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
}
