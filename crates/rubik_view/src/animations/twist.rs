use std::collections::VecDeque;

use rubik_core::Move;
use rubik_prefs::{AnimationPreferences, InterpolateFn};
use web_time::Duration;

/// If at least this much of a move is animated in one frame, just skip the
/// animation to reduce unnecessary flashing.
const MIN_TWIST_DELTA: f32 = 1.0 / 3.0;

/// Higher number means faster exponential increase in move speed.
const EXP_TWIST_FACTOR: f32 = 0.5;

/// Whether a move is currently being shown.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MovePhase {
    /// No move is animating. The displayed cube matches the logical cube.
    Idle,
    /// `mv` is partway through its animation. It has not been applied to the
    /// logical cube yet.
    Animating {
        /// Move being animated.
        mv: Move,
        /// Linear progress of the animation, from 0.0 to 1.0.
        progress: f32,
    },
}

/// Queue of moves waiting to be animated, and progress through the first one.
#[derive(Debug, Default, Clone)]
pub struct MoveAnimationState {
    /// Queue of moves to be displayed. The front one is animating.
    queue: VecDeque<Move>,
    /// Maximum number of moves in the queue (reset when queue is empty).
    queue_max: usize,
    /// Progress of the animation in the current move, from 0.0 to 1.0.
    progress: f32,
}
impl MoveAnimationState {
    /// Steps the animation forward. Returns the move whose animation finished
    /// this frame, if any.
    pub fn proceed(&mut self, delta: Duration, prefs: &AnimationPreferences) -> Option<Move> {
        if self.queue.is_empty() {
            self.queue_max = 0;
            return None;
        }

        // `twist_duration` is in seconds (per one move); `base_speed` is
        // fraction of a move per frame.
        let base_speed = delta.as_secs_f32() / prefs.twist_duration;

        // Animate exponentially faster if there are/were more moves in the
        // queue.
        let speed_mod = if prefs.dynamic_twist_speed {
            ((self.queue_max - 1) as f32 * EXP_TWIST_FACTOR).exp()
        } else {
            1.0
        };
        let mut twist_delta = base_speed * speed_mod;
        // Also catches NaN and infinity from a zero duration.
        if !(0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
            twist_delta = 1.0;
        }

        self.progress += twist_delta;
        if self.progress < 1.0 {
            return None;
        }
        self.progress = 0.0;
        let finished = self.queue.pop_front();
        if self.queue.is_empty() {
            self.queue_max = 0;
        }
        finished
    }

    /// Adds a move to the back of the queue.
    pub fn push(&mut self, mv: Move) {
        self.queue.push_back(mv);
        self.queue_max = std::cmp::max(self.queue_max, self.queue.len());
    }

    /// Returns the animating move and its linear progress.
    pub fn phase(&self) -> MovePhase {
        match self.queue.front() {
            Some(&mv) => MovePhase::Animating {
                mv,
                progress: self.progress,
            },
            None => MovePhase::Idle,
        }
    }
    /// Returns the animating move and its eased progress.
    pub fn current(&self, interpolation: InterpolateFn) -> Option<(Move, f32)> {
        Some((*self.queue.front()?, interpolation.interpolate(self.progress)))
    }

    /// Returns whether no move is animating.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
    /// Returns the number of moves waiting behind the animating one.
    pub fn pending_len(&self) -> usize {
        self.queue.len().saturating_sub(1)
    }

    /// Removes every move from the queue, returning them in order.
    pub fn take_all(&mut self) -> Vec<Move> {
        let moves = self.queue.drain(..).collect();
        *self = Self::default();
        moves
    }
}
