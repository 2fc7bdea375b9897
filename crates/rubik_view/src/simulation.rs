use rubik_core::{CubeState, Move, MoveEngine, MoveHistory};
use rubik_prefs::{AnimationPreferences, InputPolicy, InteractionPreferences};
use web_time::{Duration, Instant};

use crate::animations::{MoveAnimationState, MovePhase};
use crate::render::CubeRenderData;

const ASSUMED_FPS: f32 = 120.0;

/// Reason a requested move was dropped.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    /// Input is rejected while animating.
    #[error("cannot start {requested} while {animating} is animating")]
    Busy {
        /// Move that was requested.
        requested: Move,
        /// Move that was animating at the time.
        animating: Move,
    },
    /// Too many moves are already waiting.
    #[error("cannot queue {requested}: {limit} moves are already waiting")]
    QueueFull {
        /// Move that was requested.
        requested: Move,
        /// Maximum number of waiting moves.
        limit: usize,
    },
}

/// Cube simulation, which manages the logical cube and its move animations.
///
/// Moves are animated one at a time. The logical cube is only changed when a
/// move's animation completes, so it never observes a partial move.
#[derive(Debug, Default, Clone)]
pub struct CubeSimulation {
    /// Cube state with every completed move applied.
    engine: MoveEngine,
    /// Move animation state.
    twist_anim: MoveAnimationState,
    /// Time of last frame, or `None` if we are not in the middle of an animation.
    last_frame_time: Option<Instant>,
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new() -> Self {
        Self::default()
    }
    /// Constructs a new simulation around an existing engine.
    pub fn with_engine(engine: MoveEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Returns the engine holding the committed cube state.
    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }
    /// Returns the committed cube state, not including any animating move.
    pub fn state(&self) -> &CubeState {
        self.engine.state()
    }
    /// Returns the committed moves since the last reset.
    pub fn history(&self) -> &MoveHistory {
        self.engine.history()
    }
    /// Returns whether the committed cube state is solved.
    pub fn is_solved(&self) -> bool {
        self.engine.is_solved()
    }

    /// Returns the current animation phase.
    pub fn phase(&self) -> MovePhase {
        self.twist_anim.phase()
    }
    /// Returns whether there's a move animating or queued.
    pub fn is_idle(&self) -> bool {
        self.twist_anim.is_idle()
    }
    /// Returns the number of moves waiting behind the animating one.
    pub fn pending_moves(&self) -> usize {
        self.twist_anim.pending_len()
    }

    /// Requests a move. If nothing is animating, the move starts animating
    /// immediately. Otherwise `prefs` decides whether it is queued.
    pub fn request_move(
        &mut self,
        mv: Move,
        prefs: &InteractionPreferences,
    ) -> Result<(), MoveRejected> {
        if let MovePhase::Animating { mv: animating, .. } = self.phase() {
            let rejection = match prefs.input_policy {
                InputPolicy::Reject => Some(MoveRejected::Busy {
                    requested: mv,
                    animating,
                }),
                InputPolicy::Queue if self.pending_moves() >= prefs.max_queued_moves => {
                    Some(MoveRejected::QueueFull {
                        requested: mv,
                        limit: prefs.max_queued_moves,
                    })
                }
                InputPolicy::Queue => None,
            };
            if let Some(e) = rejection {
                log::warn!("{e}");
                return Err(e);
            }
        }
        self.twist_anim.push(mv);
        Ok(())
    }

    /// Advances the animation by `delta`. Commits a move to the engine when
    /// its animation finishes. Returns whether the cube must be redrawn.
    pub fn step(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        if self.twist_anim.is_idle() {
            return false;
        }
        if let Some(mv) = self.twist_anim.proceed(delta, prefs) {
            self.engine.apply_move(mv.layer, mv.direction);
            log::debug!("committed {mv}");
        }
        log::trace!("animation phase {:?}", self.phase());
        true
    }
    /// Advances the animation by the time elapsed since the previous call.
    /// Returns whether the cube must be redrawn.
    pub fn step_realtime(&mut self, prefs: &AnimationPreferences) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let needs_redraw = self.step(delta, prefs);
        self.last_frame_time = needs_redraw.then_some(now);
        needs_redraw
    }

    /// Drops every animating and queued move and resets the cube to solved.
    pub fn reset(&mut self) {
        let dropped = self.twist_anim.take_all();
        if !dropped.is_empty() {
            log::debug!("dropped {} pending moves", dropped.len());
        }
        self.last_frame_time = None;
        self.engine.reset();
    }
    /// Commits every animating and queued move immediately, in order.
    pub fn skip_animations(&mut self) {
        for mv in self.twist_anim.take_all() {
            self.engine.apply_move(mv.layer, mv.direction);
            log::debug!("committed {mv} without animation");
        }
        self.last_frame_time = None;
    }

    /// Returns the sticker transforms to display this frame.
    pub fn render_data(&self, prefs: &AnimationPreferences) -> CubeRenderData {
        CubeRenderData::new(
            self.engine.state(),
            self.twist_anim.current(prefs.twist_interpolation),
        )
    }
}
