//! One-dimensional slide transitions
//!
//! Ready-made [`TransitionHooks`] where every slot carries a 1D Bezier
//! animation along a single axis:
//!
//! ```text
//!  hidden_before (-1) ──enter──> shown (0) ──exit──> hidden_after (1)
//! ```
//!
//! Exit and restore animations start from the slot's current sample and use
//! `point + velocity` as the first control point, so momentum carries over
//! when a transition is interrupted.

use serde::Deserialize;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::animation::Animation;
use crate::transition::{SlotId, TransitionHooks};
use crate::vectors::{Vector1D, VectorApi};

/// Default transition duration in host clock milliseconds
pub const DEFAULT_DURATION: f64 = 500.0;

/// Timing and positions of a slide transition
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideTransitionConfig {
    /// Length of every enter / exit animation
    pub duration: f64,
    /// Where entering slots start
    pub hidden_before: f64,
    /// Resting position of present slots
    pub shown: f64,
    /// Where exiting slots end; reaching it destroys the slot
    pub hidden_after: f64,
}

impl Default for SlideTransitionConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            hidden_before: -1.0,
            shown: 0.0,
            hidden_after: 1.0,
        }
    }
}

impl SlideTransitionConfig {
    /// Whether `x` has reached or passed the exit position
    pub fn is_hidden(&self, x: f64) -> bool {
        if self.hidden_after >= self.shown {
            x >= self.hidden_after
        } else {
            x <= self.hidden_after
        }
    }
}

/// A tracked item and its animation
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionSlot<K, T> {
    pub id: SlotId,
    pub key: K,
    /// Current item, or the last known item while exiting
    pub value: T,
    pub animation: Animation<Vector1D>,
}

/// Slide transition hooks keyed by `key_fn`
pub struct SlideTransition<T, K, F> {
    key_fn: F,
    config: SlideTransitionConfig,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K, F> SlideTransition<T, K, F>
where
    F: Fn(&T) -> K,
{
    pub fn new(key_fn: F) -> Self {
        Self {
            key_fn,
            config: SlideTransitionConfig::default(),
            _marker: PhantomData,
        }
    }

    pub fn with_config(mut self, config: SlideTransitionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SlideTransitionConfig {
        &self.config
    }

    fn retarget(&self, from: &Animation<Vector1D>, target: f64, now: f64) -> Animation<Vector1D> {
        let sample = from.sample_at(now);
        let target = Vector1D::new(target);
        Animation::starting_at(
            [
                sample.point,
                sample.point.add(sample.velocity),
                target,
                target,
            ],
            now,
            self.config.duration,
        )
    }
}

impl<T, K, F> TransitionHooks for SlideTransition<T, K, F>
where
    K: Clone + Eq + Hash,
    F: Fn(&T) -> K,
{
    type Value = T;
    type Key = K;
    type State = TransitionSlot<K, T>;

    fn key(&self, value: &T) -> K {
        (self.key_fn)(value)
    }

    fn create(&self, id: SlotId, value: T, _index: usize, now: f64) -> Self::State {
        let hidden = Vector1D::new(self.config.hidden_before);
        let shown = Vector1D::new(self.config.shown);
        TransitionSlot {
            id,
            key: self.key(&value),
            value,
            animation: Animation::starting_at(
                [hidden, hidden, shown, shown],
                now,
                self.config.duration,
            ),
        }
    }

    fn update(&self, prev: Self::State, value: T, _index: usize, _now: f64) -> Self::State {
        TransitionSlot { value, ..prev }
    }

    fn remove(&self, prev: Self::State, now: f64) -> Self::State {
        let animation = self.retarget(&prev.animation, self.config.hidden_after, now);
        TransitionSlot { animation, ..prev }
    }

    fn restore(&self, prev: Self::State, value: T, _index: usize, now: f64) -> Self::State {
        let animation = self.retarget(&prev.animation, self.config.shown, now);
        TransitionSlot {
            value,
            animation,
            ..prev
        }
    }

    fn is_visible(&self, state: &Self::State, now: f64) -> bool {
        !self
            .config
            .is_hidden(state.animation.sample_at(now).point.x())
    }
}
