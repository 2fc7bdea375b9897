use proptest::prelude::*;

use crate::*;


fn arbitrary_move() -> impl Strategy<Value = Move> {
    let all: Vec<Move> = Move::iter_all().collect();
    prop::sample::select(all)
}

fn arbitrary_face_move() -> impl Strategy<Value = Move> {
    let all: Vec<Move> = Move::iter_all().filter(|mv| !mv.layer.is_slice()).collect();
    prop::sample::select(all)
}

/// Returns an engine in an arbitrary reachable state, with an empty history.
fn arbitrary_engine() -> impl Strategy<Value = MoveEngine> {
    prop::collection::vec(arbitrary_move(), 0..40).prop_map(|moves| {
        let mut engine = MoveEngine::new();
        engine.apply_moves(moves);
        MoveEngine::with_state(engine.state().clone())
    })
}

/// Returns an engine whose stickers all have distinct colors, scrambled by
/// arbitrary moves.
fn arbitrary_marked_engine() -> impl Strategy<Value = MoveEngine> {
    prop::collection::vec(arbitrary_move(), 0..40).prop_map(|moves| {
        let mut engine = MoveEngine::with_state(CubeState::new_marked());
        engine.apply_moves(moves);
        MoveEngine::with_state(engine.state().clone())
    })
}

/// Returns the sorted multiset of sticker colors.
fn color_multiset(state: &CubeState) -> Vec<Color> {
    let mut colors: Vec<Color> = state.stickers().map(|(_, color)| color).collect();
    colors.sort();
    colors
}
