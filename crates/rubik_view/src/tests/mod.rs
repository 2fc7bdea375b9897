use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rubik_core::{Color, Face, LayerId, Move, MoveEngine, StickerPos};
use rubik_prefs::{AnimationPreferences, InputPolicy, InteractionPreferences, InterpolateFn};
use web_time::Duration;

use crate::*;


const FRAME: Duration = Duration::from_millis(125);

fn animation_prefs() -> AnimationPreferences {
    AnimationPreferences {
        dynamic_twist_speed: false,
        twist_duration: 0.5,
        twist_interpolation: InterpolateFn::Lerp,
    }
}

fn interaction_prefs(input_policy: InputPolicy) -> InteractionPreferences {
    InteractionPreferences {
        input_policy,
        max_queued_moves: 2,
    }
}

/// Steps the simulation until it is idle. Returns the number of frames.
fn run_to_idle(sim: &mut CubeSimulation, prefs: &AnimationPreferences) -> usize {
    let mut frames = 0;
    while sim.step(FRAME, prefs) {
        frames += 1;
        assert!(frames < 10_000, "animation never finished");
    }
    frames
}

#[test]
fn test_move_commits_only_when_animation_finishes() {
    let prefs = animation_prefs();
    let mut sim = CubeSimulation::new();
    sim.request_move(Move::cw(LayerId::Up), &interaction_prefs(InputPolicy::Queue))
        .expect("idle simulation should accept moves");

    // 0.5 seconds per move at 0.125 seconds per frame.
    for _ in 0..3 {
        assert!(sim.step(FRAME, &prefs));
        assert!(sim.is_solved());
        assert!(sim.history().is_empty());
        assert!(matches!(sim.phase(), MovePhase::Animating { .. }));
    }
    assert!(sim.step(FRAME, &prefs));
    assert_eq!(sim.phase(), MovePhase::Idle);
    assert_eq!(sim.history().moves(), [Move::cw(LayerId::Up)]);
    assert_eq!(sim.state().face(Face::Front)[0], Color::RED);

    assert!(!sim.step(FRAME, &prefs));
}

#[test]
fn test_queue_policy() {
    let interaction = interaction_prefs(InputPolicy::Queue);
    let mut sim = CubeSimulation::new();
    let moves = [
        Move::cw(LayerId::Right),
        Move::cw(LayerId::Up),
        Move::ccw(LayerId::Right),
    ];
    for mv in moves {
        sim.request_move(mv, &interaction).expect("queue has room");
    }
    assert_eq!(sim.pending_moves(), 2);
    assert_eq!(
        sim.request_move(Move::ccw(LayerId::Up), &interaction),
        Err(MoveRejected::QueueFull {
            requested: Move::ccw(LayerId::Up),
            limit: 2,
        }),
    );

    assert_eq!(run_to_idle(&mut sim, &animation_prefs()), 12);
    assert_eq!(sim.history().moves(), moves);
}

#[test]
fn test_reject_policy() {
    let interaction = interaction_prefs(InputPolicy::Reject);
    let mut sim = CubeSimulation::new();
    sim.request_move(Move::cw(LayerId::Front), &interaction)
        .expect("idle simulation should accept moves");
    assert_eq!(
        sim.request_move(Move::cw(LayerId::Back), &interaction),
        Err(MoveRejected::Busy {
            requested: Move::cw(LayerId::Back),
            animating: Move::cw(LayerId::Front),
        }),
    );

    run_to_idle(&mut sim, &animation_prefs());
    sim.request_move(Move::cw(LayerId::Back), &interaction)
        .expect("idle simulation should accept moves");
    run_to_idle(&mut sim, &animation_prefs());
    assert_eq!(
        sim.history().moves(),
        [Move::cw(LayerId::Front), Move::cw(LayerId::Back)],
    );
}

#[test]
fn test_reset_drops_pending_moves() {
    let interaction = interaction_prefs(InputPolicy::Queue);
    let mut sim = CubeSimulation::new();
    sim.request_move(Move::cw(LayerId::Left), &interaction).ok();
    sim.step(FRAME, &animation_prefs());
    sim.request_move(Move::cw(LayerId::Down), &interaction).ok();
    sim.step(FRAME, &animation_prefs());

    sim.reset();
    assert_eq!(sim.phase(), MovePhase::Idle);
    assert!(sim.is_solved());
    assert!(sim.history().is_empty());
    assert!(!sim.step(FRAME, &animation_prefs()));
}

#[test]
fn test_skip_animations_commits_in_order() {
    let interaction = interaction_prefs(InputPolicy::Queue);
    let mut sim = CubeSimulation::new();
    let moves = [Move::cw(LayerId::Middle), Move::cw(LayerId::Standing)];
    for mv in moves {
        sim.request_move(mv, &interaction).expect("queue has room");
    }
    sim.step(FRAME, &animation_prefs());
    sim.skip_animations();

    let mut expected = MoveEngine::new();
    expected.apply_moves(moves);
    assert_eq!(sim.engine(), &expected);
    assert!(sim.is_idle());
}

#[test]
fn test_burst_does_not_speed_up_later_moves() {
    let prefs = AnimationPreferences {
        dynamic_twist_speed: true,
        twist_duration: 10.0,
        ..animation_prefs()
    };
    let interaction = interaction_prefs(InputPolicy::Queue);
    let single_move_progress = |sim: &mut CubeSimulation| {
        sim.request_move(Move::cw(LayerId::Up), &interaction)
            .expect("idle simulation should accept moves");
        sim.step(Duration::from_millis(100), &prefs);
        match sim.phase() {
            MovePhase::Animating { progress, .. } => progress,
            MovePhase::Idle => panic!("animation should still be running"),
        }
    };

    let fresh = single_move_progress(&mut CubeSimulation::new());

    let mut sim = CubeSimulation::new();
    for mv in [Move::cw(LayerId::Right), Move::cw(LayerId::Left), Move::cw(LayerId::Back)] {
        sim.request_move(mv, &interaction).expect("queue has room");
    }
    run_to_idle(&mut sim, &prefs);
    assert_eq!(sim.history().len(), 3);

    assert_eq!(single_move_progress(&mut sim), fresh);
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::iter_all().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn proptest_animated_moves_match_instant_moves(
        moves in prop::collection::vec(arbitrary_move(), 0..20),
        dynamic_twist_speed in any::<bool>(),
        frame_millis in 1_u64..200,
    ) {
        let interaction = InteractionPreferences {
            input_policy: InputPolicy::Queue,
            max_queued_moves: usize::MAX,
        };
        let prefs = AnimationPreferences {
            dynamic_twist_speed,
            ..animation_prefs()
        };

        let mut sim = CubeSimulation::new();
        for &mv in &moves {
            sim.request_move(mv, &interaction).expect("queue is unbounded");
        }
        let mut committed = 0;
        while sim.step(Duration::from_millis(frame_millis), &prefs) {
            // At most one move is committed per frame.
            let len = sim.history().len();
            prop_assert!(len - committed <= 1);
            committed = len;
        }

        let mut expected = MoveEngine::new();
        expected.apply_moves(moves);
        prop_assert_eq!(sim.engine(), &expected);
    }
}

#[test]
fn test_render_data_follows_committed_state() {
    let mut sim = CubeSimulation::new();
    sim.request_move(Move::cw(LayerId::Up), &interaction_prefs(InputPolicy::Queue))
        .ok();
    sim.skip_animations();

    let data = sim.render_data(&animation_prefs());
    let pos = StickerPos::new(Face::Front, 0);
    assert_eq!(data.get(pos).color, Color::RED);
    assert_eq!(data.get(pos).pos, pos);
}
